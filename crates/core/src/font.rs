//! Built-in 3x5 block font
//!
//! Small enough to stay legible on low-resolution surfaces (and on terminal
//! half-block output). Lower-case letters fold to upper case; characters
//! without a glyph draw as a solid block.

use crate::platform::FontRasterizer;
use crate::surface::PixelSurface;
use crate::types::Rgb;

const GLYPH_W: u32 = 3;
const GLYPH_H: u32 = 5;
/// Horizontal advance in unscaled pixels (glyph + 1px gap).
const ADVANCE: u32 = GLYPH_W + 1;

/// Fixed-width 3x5 bitmap font drawn at an integer scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockFont {
    scale: u32,
}

impl Default for BlockFont {
    fn default() -> Self {
        Self { scale: 1 }
    }
}

impl BlockFont {
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.max(1),
        }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }
}

impl FontRasterizer for BlockFont {
    fn draw_text(&self, surface: &mut PixelSurface, text: &str, x: i32, y: i32, color: Rgb) {
        let s = self.scale as i32;
        let pixel = color.to_pixel();
        let mut cx = x;
        for ch in text.chars() {
            let rows = glyph(ch);
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_W as i32 {
                    if bits & (0b100 >> col) != 0 {
                        let px = cx + col * s;
                        let py = y + row as i32 * s;
                        surface.fill_rect(px, py, px + s, py + s, pixel);
                    }
                }
            }
            cx += (ADVANCE * self.scale) as i32;
        }
    }

    fn measure_width(&self, text: &str) -> u32 {
        let n = text.chars().count() as u32;
        if n == 0 {
            return 0;
        }
        (n * ADVANCE - 1) * self.scale
    }

    fn line_height(&self) -> u32 {
        GLYPH_H * self.scale
    }
}

#[rustfmt::skip]
fn glyph(ch: char) -> [u8; GLYPH_H as usize] {
    match ch.to_ascii_uppercase() {
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '?' => [0b110, 0b001, 0b010, 0b000, 0b010],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '(' => [0b001, 0b010, 0b010, 0b010, 0b001],
        ')' => [0b100, 0b010, 0b010, 0b010, 0b100],
        '\'' => [0b010, 0b010, 0b000, 0b000, 0b000],
        '_' => [0b000, 0b000, 0b000, 0b000, 0b111],
        _ => [0b111, 0b111, 0b111, 0b111, 0b111],
    }
}
