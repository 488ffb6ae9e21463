//! Surface module - the fixed-size pixel buffer every frame is composed into
//!
//! Pixels are stored row-major in a flat `Vec<Pixel>` (`y * width + x`).
//! All writes are bounds-checked; coordinates outside the surface are ignored,
//! which lets sprites hang off any edge without special casing by the caller.

use crate::types::{Pixel, Rgb};

/// Fixed-size RGBA framebuffer with a background color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    background: Rgb,
    pixels: Vec<Pixel>,
}

impl PixelSurface {
    /// Create a surface already cleared to `background`.
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            background,
            pixels: vec![background.to_pixel(); len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Change the clear color. Takes effect on the next [`clear`](Self::clear).
    pub fn set_background(&mut self, background: Rgb) {
        self.background = background;
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Row `y` as a slice, or `None` when out of bounds.
    pub fn row(&self, y: u32) -> Option<&[Pixel]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.pixels[start..start + self.width as usize])
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Pixel> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    /// Write one pixel. Returns false if `(x, y)` is outside the surface.
    pub fn set(&mut self, x: i32, y: i32, pixel: Pixel) -> bool {
        match self.idx(x, y) {
            Some(i) => {
                self.pixels[i] = pixel;
                true
            }
            None => false,
        }
    }

    /// Fill the whole surface with the background color.
    pub fn clear(&mut self) {
        self.pixels.fill(self.background.to_pixel());
    }

    /// Fill `[x0, x1) x [y0, y1)` clipped to the surface.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, pixel: Pixel) {
        let x_start = x0.max(0);
        let y_start = y0.max(0);
        let x_end = x1.min(self.width as i32);
        let y_end = y1.min(self.height as i32);
        if x_start >= x_end || y_start >= y_end {
            return;
        }

        let w = self.width as usize;
        for y in y_start..y_end {
            let row = (y as usize) * w;
            self.pixels[row + x_start as usize..row + x_end as usize].fill(pixel);
        }
    }
}
