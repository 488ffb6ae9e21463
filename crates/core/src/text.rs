//! Text overlay - positioned, centered and blinking text on a surface
//!
//! Glyph drawing is delegated to a [`FontRasterizer`]. These helpers only
//! decide where (and whether) to draw.

use crate::platform::FontRasterizer;
use crate::surface::PixelSurface;
use crate::types::Rgb;

/// Draw `text` with its top-left corner at `(x, y)`.
pub fn draw_text(
    surface: &mut PixelSurface,
    font: &dyn FontRasterizer,
    text: &str,
    x: f32,
    y: f32,
    color: Rgb,
) {
    font.draw_text(surface, text, x as i32, y as i32, color);
}

/// Horizontal position that centers `text` on the surface.
pub fn centered_x(surface: &PixelSurface, font: &dyn FontRasterizer, text: &str) -> f32 {
    (surface.width() as f32 - font.measure_width(text) as f32) / 2.0
}

/// Draw `text` horizontally centered at row `y`.
pub fn draw_text_centered(
    surface: &mut PixelSurface,
    font: &dyn FontRasterizer,
    text: &str,
    y: f32,
    color: Rgb,
) {
    let x = centered_x(surface, font, text);
    draw_text(surface, font, text, x, y, color);
}

/// Blink phase: visible for `interval` frames, hidden for the next `interval`.
///
/// An interval of 0 never blinks.
pub fn blink_visible(frame_counter: u32, interval: u32) -> bool {
    if interval == 0 {
        return true;
    }
    frame_counter % interval.saturating_mul(2) < interval
}

/// Centered text that blinks with the frame counter.
pub fn draw_text_centered_blink(
    surface: &mut PixelSurface,
    font: &dyn FontRasterizer,
    text: &str,
    y: f32,
    color: Rgb,
    interval: u32,
    frame_counter: u32,
) {
    if blink_visible(frame_counter, interval) {
        draw_text_centered(surface, font, text, y, color);
    }
}
