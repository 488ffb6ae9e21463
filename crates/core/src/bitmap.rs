//! Bitmap module - owned RGBA pixel buffers and the pixel transforms applied to them
//!
//! Image sprites own exactly one [`Bitmap`]. Decoding and encoding files is the
//! job of an [`ImageCodec`](crate::platform::ImageCodec); this module only deals
//! with raw pixels.

use anyhow::{ensure, Result};

use crate::types::{pack_argb, pixel_alpha, Pixel};

/// Mirror axis for [`Bitmap::flipped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipAxis {
    /// Mirror left/right.
    Horizontal,
    /// Mirror top/bottom.
    Vertical,
}

impl FlipAxis {
    /// Map the legacy integer flag: `1` is vertical, anything else horizontal.
    pub fn from_flag(flag: i32) -> Self {
        if flag == 1 {
            FlipAxis::Vertical
        } else {
            FlipAxis::Horizontal
        }
    }
}

/// Row-major buffer of packed ARGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Bitmap {
    /// Fully transparent bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize)],
        }
    }

    /// Build from packed pixels. Fails if the length does not match.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        ensure!(
            pixels.len() == (width as usize) * (height as usize),
            "bitmap {}x{} needs {} pixels, got {}",
            width,
            height,
            (width as usize) * (height as usize),
            pixels.len()
        );
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from RGBA8 bytes (`r, g, b, a` per pixel).
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        ensure!(
            bytes.len() == expected,
            "rgba buffer {}x{} needs {} bytes, got {}",
            width,
            height,
            expected,
            bytes.len()
        );
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| pack_argb(px[3], px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Pixel) -> Self {
        let mut pixels = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Inverse of [`from_rgba8`](Self::from_rgba8).
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for &p in &self.pixels {
            out.extend_from_slice(&[(p >> 16) as u8, (p >> 8) as u8, p as u8, pixel_alpha(p)]);
        }
        out
    }

    /// Mirrored copy.
    pub fn flipped(&self, axis: FlipAxis) -> Self {
        let (w, h) = (self.width, self.height);
        Self::from_fn(w, h, |x, y| {
            let (sx, sy) = match axis {
                FlipAxis::Horizontal => (w - 1 - x, y),
                FlipAxis::Vertical => (x, h - 1 - y),
            };
            self.pixels[(sy as usize) * (w as usize) + (sx as usize)]
        })
    }

    /// Copy rotated clockwise by `degrees`.
    ///
    /// Only 90, 180 and 270 rotate; any other angle returns an unchanged copy.
    /// Quarter turns swap width and height.
    pub fn rotated(&self, degrees: i32) -> Self {
        let (w, h) = (self.width, self.height);
        let (new_w, new_h) = match degrees {
            90 | 270 => (h, w),
            _ => (w, h),
        };
        Self::from_fn(new_w, new_h, |x, y| {
            let (sx, sy) = match degrees {
                90 => (y, new_w - 1 - x),
                180 => (w - 1 - x, h - 1 - y),
                270 => (new_h - 1 - y, x),
                _ => (x, y),
            };
            self.pixels[(sy as usize) * (w as usize) + (sx as usize)]
        })
    }
}
