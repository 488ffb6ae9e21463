//! Runtime configuration
//!
//! # Environment Variables
//!
//! - `ARCADE_WIDTH` / `ARCADE_HEIGHT`: surface size in pixels (default 160x96)
//! - `ARCADE_TITLE`: window/terminal title (default "Arcade")
//! - `ARCADE_BG`: background color as hex `RRGGBB` (default black)
//! - `ARCADE_FRAME_MS`: frame pacing in milliseconds (default 16)
//! - `ARCADE_KEY_RELEASE_MS`: synthetic key release timeout (default 150)
//!
//! Missing or unparsable values fall back to the defaults.

use crate::types::{Rgb, DEFAULT_HEIGHT, DEFAULT_WIDTH, FRAME_MS, KEY_RELEASE_TIMEOUT_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcadeConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub background: Rgb,
    pub frame_ms: u32,
    pub key_release_timeout_ms: u32,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: "Arcade".to_string(),
            background: Rgb::BLACK,
            frame_ms: FRAME_MS,
            key_release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
        }
    }
}

impl ArcadeConfig {
    pub fn new(width: u32, height: u32, title: impl Into<String>, background: Rgb) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            background,
            ..Self::default()
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let number = |name: &str, fallback: u32| {
            lookup(name)
                .and_then(|s| s.trim().parse::<u32>().ok())
                .filter(|&v| v > 0)
                .unwrap_or(fallback)
        };

        let title = lookup("ARCADE_TITLE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.title);

        let background = lookup("ARCADE_BG")
            .and_then(|s| Rgb::parse_hex(&s))
            .unwrap_or(defaults.background);

        Self {
            width: number("ARCADE_WIDTH", defaults.width),
            height: number("ARCADE_HEIGHT", defaults.height),
            title,
            background,
            frame_ms: number("ARCADE_FRAME_MS", defaults.frame_ms),
            key_release_timeout_ms: number("ARCADE_KEY_RELEASE_MS", defaults.key_release_timeout_ms),
        }
    }
}
