//! Platform seams - everything the core needs from the outside world
//!
//! The core never touches a window system, terminal, audio device or file
//! format directly. Adapters implement these traits:
//!
//! - [`Platform`]: present the surface, drain input events, provide a font,
//!   play sounds
//! - [`FontRasterizer`]: draw and measure text on a [`PixelSurface`]
//! - [`ImageCodec`]: decode files into [`Bitmap`]s and encode them back
//! - [`AudioSink`]: fire-and-forget sound playback

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::bitmap::Bitmap;
use crate::keyboard::KeyboardState;
use crate::surface::PixelSurface;
use crate::types::Rgb;

/// Display + event source for one running game.
pub trait Platform {
    /// Show the surface on the visible display.
    fn present(&mut self, surface: &PixelSurface) -> Result<()>;

    /// Drain pending events into `keys`.
    ///
    /// Returns `false` once the user asked to close the game.
    fn pump_events(&mut self, keys: &mut KeyboardState) -> Result<bool>;

    fn font(&self) -> &dyn FontRasterizer;

    /// Start playing a sound file without waiting for it to finish.
    fn play_sound(&mut self, path: &Path) -> Result<()>;

    /// Restore the display. Called once by [`Arcade::quit`](crate::Arcade::quit).
    fn shutdown(&mut self) -> Result<()>;
}

/// Fixed-width text drawing.
pub trait FontRasterizer {
    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw_text(&self, surface: &mut PixelSurface, text: &str, x: i32, y: i32, color: Rgb);

    /// Width in pixels that `text` occupies when drawn.
    fn measure_width(&self, text: &str) -> u32;

    /// Height in pixels of one line.
    fn line_height(&self) -> u32;
}

/// Image file decode/encode service.
pub trait ImageCodec {
    /// Decode `path` at its natural size.
    fn decode(&self, path: &Path) -> Result<Bitmap>;

    /// Decode `path` and resize it to exactly `width x height`.
    fn decode_and_resize(&self, path: &Path, width: u32, height: u32) -> Result<Bitmap>;

    /// Write `image` to a new file and return its path.
    fn encode(&self, image: &Bitmap) -> Result<PathBuf>;
}

/// Fire-and-forget sound playback.
pub trait AudioSink {
    fn play_async(&self, path: &Path) -> Result<()>;
}
