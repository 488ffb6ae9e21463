//! SurfaceView: maps a `PixelSurface` into a terminal cell grid.
//!
//! Each cell shows two vertically stacked pixels with the upper-half-block
//! glyph: the foreground paints the top pixel and the background the bottom
//! one. A surface `W x H` therefore needs `W x ceil(H / 2)` cells.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::cells::{CellGrid, PixelPair};
use crate::core::PixelSurface;
use crate::types::Rgb;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceView {
    /// Color of cells outside the surface.
    border: Rgb,
}

impl Default for SurfaceView {
    fn default() -> Self {
        Self { border: Rgb::BLACK }
    }
}

impl SurfaceView {
    pub fn new(border: Rgb) -> Self {
        Self { border }
    }

    /// Cell size needed to show `surface` without clipping.
    pub fn cells_needed(surface: &PixelSurface) -> (u32, u32) {
        (surface.width(), surface.height().div_ceil(2))
    }

    /// Render into a caller-provided grid (resizing it to the viewport). The
    /// surface is centered and clipped to the viewport.
    pub fn render_into(&self, surface: &PixelSurface, viewport: Viewport, grid: &mut CellGrid) {
        grid.resize(viewport.width, viewport.height);
        grid.fill(PixelPair::solid(self.border));

        let (cols, rows) = Self::cells_needed(surface);
        let off_x = (i64::from(viewport.width) - i64::from(cols)) / 2;
        let off_y = (i64::from(viewport.height) - i64::from(rows)) / 2;

        for row in 0..rows {
            let cy = off_y + i64::from(row);
            if cy < 0 || cy >= i64::from(viewport.height) {
                continue;
            }
            let top = (row * 2) as i32;
            for col in 0..cols {
                let cx = off_x + i64::from(col);
                if cx < 0 || cx >= i64::from(viewport.width) {
                    continue;
                }
                let x = col as i32;
                let fg = surface.get(x, top).map(Rgb::from_pixel).unwrap_or(self.border);
                let bg = surface
                    .get(x, top + 1)
                    .map(Rgb::from_pixel)
                    .unwrap_or(self.border);
                grid.set(cx as u16, cy as u16, PixelPair::new(fg, bg));
            }
        }
    }

    pub fn render(&self, surface: &PixelSurface, viewport: Viewport) -> CellGrid {
        let mut grid = CellGrid::new(viewport.width, viewport.height);
        self.render_into(surface, viewport, &mut grid);
        grid
    }
}
