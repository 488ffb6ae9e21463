//! Flappy demo runner (default binary).
//!
//! Runs the demo game in the terminal: half-block pixels for output and
//! crossterm for input. Space flaps, P pauses, R restarts and Esc (or Ctrl+C)
//! quits.
//!
//! Environment: see `ArcadeConfig::from_env`, plus `ARCADE_SOUND_PATH` (sound
//! played on a crash) and `ARCADE_LOG_PATH` (log file, filtered by `RUST_LOG`).

mod flappy;

use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pixel_arcade::core::{Arcade, ArcadeConfig, Platform};
use pixel_arcade::term::TerminalPlatform;

use flappy::Flappy;

fn main() -> Result<()> {
    init_logging()?;

    let config = ArcadeConfig::from_env();
    let sound = env::var_os("ARCADE_SOUND_PATH").map(PathBuf::from);
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);

    let platform = TerminalPlatform::new(&config)?;
    let mut arcade = Arcade::init(config, platform)?;
    let result = Flappy::new(arcade.width(), arcade.height(), seed)
        .map(|game| game.with_crash_sound(sound))
        .and_then(|mut game| run(&mut arcade, &mut game));

    // Always try to restore terminal state.
    let quit = arcade.quit().map(drop);
    result.and(quit)
}

fn run<P: Platform>(arcade: &mut Arcade<P>, game: &mut Flappy) -> Result<()> {
    let frame = Duration::from_millis(u64::from(arcade.config().frame_ms));
    while arcade.update()? {
        let start = Instant::now();
        game.step(arcade)?;
        if let Some(rest) = frame.checked_sub(start.elapsed()) {
            arcade.sleep(rest.as_millis() as u64);
        }
    }
    info!(score = game.score(), best = game.best(), "demo finished");
    Ok(())
}

/// Log to `ARCADE_LOG_PATH` when set; the terminal itself stays clean.
fn init_logging() -> Result<()> {
    let Some(path) = env::var_os("ARCADE_LOG_PATH") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", PathBuf::from(&path).display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
