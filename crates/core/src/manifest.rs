//! Animation manifests
//!
//! A manifest is a small JSON document describing an animated sprite:
//!
//! ```json
//! { "x": 10, "y": 20, "width": 16, "height": 16, "interval": 6,
//!   "frames": ["bird0.png", "bird1.png", "bird2.png"] }
//! ```
//!
//! Relative frame paths are resolved against the manifest's directory when it
//! is read with [`AnimationManifest::load`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::animation::AnimatedSprite;
use crate::platform::ImageCodec;

fn default_interval() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimationManifest {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default = "default_interval")]
    pub interval: u32,
    pub frames: Vec<PathBuf>,
}

impl AnimationManifest {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid animation manifest")
    }

    /// Read a manifest file, resolving frame paths relative to it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read manifest {}", path.display()))?;
        let mut manifest = Self::from_json_str(&text)
            .with_context(|| format!("Cannot parse manifest {}", path.display()))?;
        if let Some(dir) = path.parent() {
            for frame in &mut manifest.frames {
                if frame.is_relative() {
                    *frame = dir.join(&*frame);
                }
            }
        }
        Ok(manifest)
    }

    /// Decode every frame and assemble the animation.
    pub fn build(&self, codec: &dyn ImageCodec) -> Result<AnimatedSprite> {
        AnimatedSprite::load(
            self.x,
            self.y,
            self.width,
            self.height,
            self.frames.as_slice(),
            self.interval,
            codec,
        )
    }
}
