//! Sound playback through an external player process.
//!
//! The player is spawned with the file path as its last argument and reaped
//! on a background thread, so callers never wait for playback.

use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

use anyhow::{ensure, Context, Result};
use tracing::{debug, warn};

use crate::core::AudioSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandAudio {
    program: String,
    args: Vec<String>,
}

impl Default for CommandAudio {
    fn default() -> Self {
        Self::system()
    }
}

impl CommandAudio {
    /// Player for the current OS: `afplay` on macOS, `aplay -q` elsewhere.
    pub fn system() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("afplay", Vec::<String>::new())
        } else {
            Self::new("aplay", ["-q"])
        }
    }

    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

impl AudioSink for CommandAudio {
    fn play_async(&self, path: &Path) -> Result<()> {
        ensure!(path.is_file(), "sound file {} not found", path.display());
        let mut child = self
            .command(path)
            .spawn()
            .with_context(|| format!("failed to start {}", self.program))?;
        debug!(program = %self.program, path = %path.display(), "sound started");

        let program = self.program.clone();
        thread::spawn(move || match child.wait() {
            Ok(status) if !status.success() => {
                warn!(program = %program, %status, "sound player exited with an error");
            }
            Ok(_) => {}
            Err(err) => warn!(program = %program, error = %err, "failed to wait for sound player"),
        });
        Ok(())
    }
}
