//! Core types module - shared data structures and constants
//!
//! This module defines the plain data types used throughout the runtime.
//! All types are pure data with no external dependencies, so they can be used
//! from the core, the platform adapters and games alike.
//!
//! # Pixel Format
//!
//! Every pixel is a packed `u32`:
//!
//! | Bits | Channel |
//! |------|---------|
//! | 24..32 | alpha |
//! | 16..24 | red |
//! | 8..16 | green |
//! | 0..8 | blue |
//!
//! Compositing uses binary transparency: alpha `0` is transparent, anything
//! else is fully opaque.
//!
//! # Key Codes
//!
//! Keys are X11-style keysyms. The key tables hold [`KEY_SLOTS`] entries and
//! a key lives in slot `code & 0xFF`.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Default frame pacing (~60 FPS) |
//! | `KEY_RELEASE_TIMEOUT_MS` | 150 | Synthetic key release for terminals |
//!
//! # Examples
//!
//! ```
//! use pixel_arcade_types::{pack_argb, pixel_alpha, Key, Rgb, SpriteKind};
//!
//! let red = Rgb::from_u32(0xFF0000);
//! assert_eq!(red.to_pixel(), 0xFFFF0000);
//! assert_eq!(pixel_alpha(pack_argb(0, 1, 2, 3)), 0);
//!
//! assert_eq!(Key::UP.slot(), 0x52);
//! assert_eq!(Key::from_char('W'), Some(Key::W));
//! assert_eq!(SpriteKind::Image as u8, 1);
//! ```

/// Number of slots in the current/previous key tables.
pub const KEY_SLOTS: usize = 256;

/// Default frame pacing in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Default surface width in pixels
pub const DEFAULT_WIDTH: u32 = 160;

/// Default surface height in pixels
pub const DEFAULT_HEIGHT: u32 = 96;

/// Hold time after which a key with no release event is considered up.
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// A packed `alpha<<24 | red<<16 | green<<8 | blue` pixel.
pub type Pixel = u32;

/// Pack four channels into a [`Pixel`].
#[inline(always)]
pub const fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> Pixel {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Alpha channel of a packed pixel.
#[inline(always)]
pub const fn pixel_alpha(pixel: Pixel) -> u8 {
    (pixel >> 24) as u8
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` value. The top byte is ignored.
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }

    /// Split a packed pixel into its color channels, dropping alpha.
    pub const fn from_pixel(pixel: Pixel) -> Self {
        Self::from_u32(pixel)
    }

    /// Opaque packed pixel for this color.
    pub const fn to_pixel(self) -> Pixel {
        pack_argb(0xFF, self.r, self.g, self.b)
    }

    /// Parse `RRGGBB`, optionally prefixed with `#` or `0x`.
    ///
    /// ```
    /// use pixel_arcade_types::Rgb;
    ///
    /// assert_eq!(Rgb::parse_hex("#102030"), Some(Rgb::new(0x10, 0x20, 0x30)));
    /// assert_eq!(Rgb::parse_hex("0xffffff"), Some(Rgb::WHITE));
    /// assert_eq!(Rgb::parse_hex("nope"), None);
    /// ```
    pub fn parse_hex(s: &str) -> Option<Self> {
        let s = s.trim();
        let digits = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_u32)
    }
}

/// Logical key code (X11-style keysym).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key(pub u32);

impl Key {
    pub const UP: Key = Key(0xff52);
    pub const DOWN: Key = Key(0xff54);
    pub const LEFT: Key = Key(0xff51);
    pub const RIGHT: Key = Key(0xff53);
    pub const W: Key = Key(0x0077);
    pub const A: Key = Key(0x0061);
    pub const S: Key = Key(0x0073);
    pub const D: Key = Key(0x0064);
    pub const R: Key = Key(0x0072);
    pub const P: Key = Key(0x0070);
    pub const SPACE: Key = Key(0x0020);
    pub const ESCAPE: Key = Key(0xff1b);
    pub const ENTER: Key = Key(0xff0d);

    /// Slot of this key in the key tables.
    #[inline(always)]
    pub const fn slot(self) -> usize {
        (self.0 & 0xFF) as usize
    }

    /// Keysym for a printable ASCII character (letters fold to lower case).
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_graphic() || c == ' ' {
            Some(Key(c.to_ascii_lowercase() as u32))
        } else {
            None
        }
    }
}

/// Discriminant of the two sprite kinds.
///
/// The numeric values are stable: `Color = 0`, `Image = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SpriteKind {
    Color = 0,
    Image = 1,
}

impl SpriteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpriteKind::Color => "color",
            SpriteKind::Image => "image",
        }
    }
}

/// Axis-aligned rectangle in surface pixel units (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap.
    ///
    /// ```
    /// use pixel_arcade_types::Rect;
    ///
    /// let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
    /// assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    /// ```
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}
