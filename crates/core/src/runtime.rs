//! Runtime context - one running game
//!
//! [`Arcade`] owns everything a game loop touches: the platform adapter, the
//! render surface, the key tables and the frame counter. A typical loop:
//!
//! ```
//! use pixel_arcade_core::{Arcade, ArcadeConfig, ColorSprite, HeadlessPlatform, SpriteGroup};
//! use pixel_arcade_core::types::Rgb;
//!
//! let mut platform = HeadlessPlatform::new();
//! platform.request_close();
//! let mut arcade = Arcade::init(ArcadeConfig::default(), platform).unwrap();
//!
//! let mut player = ColorSprite::new(10.0, 10.0, 4.0, 4.0, Rgb::WHITE);
//! while arcade.update().unwrap() {
//!     player.advance(0.5, arcade.height() as f32);
//!     let mut group = SpriteGroup::new(8);
//!     group.add(player);
//!     arcade.render_group(&group).unwrap();
//!     arcade.sleep(16);
//! }
//! let platform = arcade.quit().unwrap();
//! assert!(platform.is_shut_down());
//! ```

use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use tracing::{debug, info, warn};

use crate::config::ArcadeConfig;
use crate::group::SpriteGroup;
use crate::keyboard::KeyboardState;
use crate::platform::Platform;
use crate::sprite::AnySprite;
use crate::surface::PixelSurface;
use crate::types::{Key, Rgb};
use crate::{compositor, text};

pub struct Arcade<P: Platform> {
    platform: P,
    surface: PixelSurface,
    keys: KeyboardState,
    frame_counter: u32,
    running: bool,
    config: ArcadeConfig,
}

impl<P: Platform> Arcade<P> {
    /// Create the surface (cleared to the background color) and start running.
    pub fn init(config: ArcadeConfig, platform: P) -> Result<Self> {
        ensure!(
            config.width > 0 && config.height > 0,
            "surface size must be non-zero, got {}x{}",
            config.width,
            config.height
        );
        let surface = PixelSurface::new(config.width, config.height, config.background);
        info!(
            width = config.width,
            height = config.height,
            title = %config.title,
            "arcade initialized"
        );
        Ok(Self {
            platform,
            surface,
            keys: KeyboardState::new(),
            frame_counter: 0,
            running: true,
            config,
        })
    }

    pub fn config(&self) -> &ArcadeConfig {
        &self.config
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut PixelSurface {
        &mut self.surface
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn keys(&self) -> &KeyboardState {
        &self.keys
    }

    /// Number of completed [`update`](Self::update) calls, wrapping.
    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    /// Drain platform events and advance the frame counter.
    ///
    /// Returns `false` (and stops running) once the platform reports a close
    /// request. The counter only advances on frames that will be played.
    pub fn update(&mut self) -> Result<bool> {
        let open = self
            .platform
            .pump_events(&mut self.keys)
            .context("failed to read platform events")?;
        if !open {
            debug!(frame = self.frame_counter, "close requested");
            self.running = false;
            return Ok(false);
        }
        if !self.running {
            return Ok(false);
        }
        self.frame_counter = self.frame_counter.wrapping_add(1);
        Ok(true)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Block the calling thread for `ms` milliseconds.
    pub fn sleep(&self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }

    /// Sleep for the configured frame time.
    pub fn sleep_frame(&self) {
        self.sleep(u64::from(self.config.frame_ms));
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys.is_down(key)
    }

    /// Edge-triggered press. See [`KeyboardState::is_pressed_once`].
    pub fn key_pressed_once(&mut self, key: Key) -> bool {
        self.keys.is_pressed_once(key)
    }

    pub fn clear_keys(&mut self) {
        self.keys.clear_all();
    }

    /// Clear the surface and draw the group, without presenting.
    pub fn compose(&mut self, group: &SpriteGroup) {
        group.compose_onto(&mut self.surface);
    }

    pub fn present(&mut self) -> Result<()> {
        self.platform
            .present(&self.surface)
            .context("failed to present frame")
    }

    pub fn render_group(&mut self, group: &SpriteGroup) -> Result<()> {
        self.compose(group);
        self.present()
    }

    /// Compose a borrowed list of sprites and present it.
    pub fn render_scene(&mut self, sprites: &[AnySprite]) -> Result<()> {
        compositor::compose(&mut self.surface, sprites);
        self.present()
    }

    pub fn render_text(&mut self, text: &str, x: f32, y: f32, color: Rgb) {
        text::draw_text(&mut self.surface, self.platform.font(), text, x, y, color);
    }

    pub fn render_text_centered(&mut self, text: &str, y: f32, color: Rgb) {
        text::draw_text_centered(&mut self.surface, self.platform.font(), text, y, color);
    }

    /// Centered text that is visible for `interval` frames, hidden for the
    /// next `interval`.
    pub fn render_text_centered_blink(&mut self, text: &str, y: f32, color: Rgb, interval: u32) {
        text::draw_text_centered_blink(
            &mut self.surface,
            self.platform.font(),
            text,
            y,
            color,
            interval,
            self.frame_counter,
        );
    }

    /// Start a sound. Failures are logged and otherwise ignored.
    pub fn play_sound(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Err(err) = self.platform.play_sound(path) {
            warn!(path = %path.display(), error = %format!("{err:#}"), "sound playback failed");
        }
    }

    /// Shut the platform down and hand it back.
    pub fn quit(mut self) -> Result<P> {
        self.running = false;
        self.platform
            .shutdown()
            .context("failed to shut down platform")?;
        info!(frames = self.frame_counter, "arcade shut down");
        Ok(self.platform)
    }
}
