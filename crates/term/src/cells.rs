//! Half-block cell grid.
//!
//! Every visible cell is the upper-half-block glyph, so a cell is fully
//! described by the two pixel colors it shows. The grid stores those pairs;
//! the renderer adds the glyph when it writes them out.

use crate::types::Rgb;

pub const UPPER_HALF_BLOCK: char = '\u{2580}';

/// Colors of one terminal cell: `top` is the glyph foreground, `bottom` the
/// cell background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelPair {
    pub top: Rgb,
    pub bottom: Rgb,
}

impl PixelPair {
    pub const fn new(top: Rgb, bottom: Rgb) -> Self {
        Self { top, bottom }
    }

    /// Both halves the same color.
    pub const fn solid(color: Rgb) -> Self {
        Self::new(color, color)
    }
}

/// Row-major grid of [`PixelPair`] cells, sized in terminal columns and rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    cols: u16,
    rows: u16,
    cells: Vec<PixelPair>,
}

impl CellGrid {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![PixelPair::default(); usize::from(cols) * usize::from(rows)],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn same_size(&self, other: &CellGrid) -> bool {
        self.cols == other.cols && self.rows == other.rows
    }

    /// Change the grid size. The allocation is reused when it is big enough.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if self.cols == cols && self.rows == rows {
            return;
        }
        self.cols = cols;
        self.rows = rows;
        self.cells
            .resize(usize::from(cols) * usize::from(rows), PixelPair::default());
    }

    pub fn cells(&self) -> &[PixelPair] {
        &self.cells
    }

    /// One row of cells, or an empty slice past the bottom.
    pub fn row(&self, y: u16) -> &[PixelPair] {
        if y >= self.rows {
            return &[];
        }
        let start = usize::from(y) * usize::from(self.cols);
        &self.cells[start..start + usize::from(self.cols)]
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        Some(usize::from(y) * usize::from(self.cols) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<PixelPair> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, pair: PixelPair) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = pair;
        }
    }

    pub fn fill(&mut self, pair: PixelPair) {
        self.cells.fill(pair);
    }
}
