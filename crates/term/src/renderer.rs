//! TerminalRenderer: writes a [`CellGrid`] to the terminal.
//!
//! The first frame (and the first frame after [`TerminalRenderer::invalidate`]
//! or a size change) is a full redraw. Later frames only rewrite runs of cells
//! whose colors changed. Every cell is printed as [`UPPER_HALF_BLOCK`]; the
//! foreground and background escapes are only sent when they differ from the
//! previous cell.

use std::io::{self, Write};
use std::mem;

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::cells::{CellGrid, PixelPair, UPPER_HALF_BLOCK};
use crate::types::Rgb;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: Option<CellGrid>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode, alternate screen, window title, hidden cursor.
    pub fn enter(&mut self, title: &str) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::SetTitle(title))?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush()?;
        self.prev = None;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode().context("failed to disable raw mode")?;
        Ok(())
    }

    /// Make the next [`present`](Self::present) a full redraw.
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Write `grid` to the terminal.
    ///
    /// After the call `grid` holds the previously shown frame (or a blank
    /// grid of the same size); the caller overwrites it for the next frame,
    /// so no grid is ever cloned.
    pub fn present(&mut self, grid: &mut CellGrid) -> Result<()> {
        self.buf.clear();
        let mut shown = match self.prev.take() {
            Some(prev) if prev.same_size(grid) => {
                encode_diff_into(&prev, grid, &mut self.buf)?;
                prev
            }
            Some(mut prev) => {
                encode_full_into(grid, &mut self.buf)?;
                prev.resize(grid.cols(), grid.rows());
                prev
            }
            None => {
                encode_full_into(grid, &mut self.buf)?;
                CellGrid::new(grid.cols(), grid.rows())
            }
        };
        self.flush()?;

        mem::swap(&mut shown, grid);
        self.prev = Some(shown);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout
            .write_all(&self.buf)
            .context("failed to write frame")?;
        self.stdout.flush().context("failed to flush frame")?;
        Ok(())
    }
}

/// Colors currently set on the terminal while encoding.
#[derive(Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
}

impl Pen {
    fn paint(&mut self, out: &mut Vec<u8>, pair: PixelPair) -> Result<()> {
        if self.fg != Some(pair.top) {
            out.queue(SetForegroundColor(to_color(pair.top)))?;
            self.fg = Some(pair.top);
        }
        if self.bg != Some(pair.bottom) {
            out.queue(SetBackgroundColor(to_color(pair.bottom)))?;
            self.bg = Some(pair.bottom);
        }
        out.queue(Print(UPPER_HALF_BLOCK))?;
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Encode a full redraw of `grid` into `out` without touching stdout.
pub fn encode_full_into(grid: &CellGrid, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..grid.rows() {
        out.queue(cursor::MoveTo(0, y))?;
        for &pair in grid.row(y) {
            pen.paint(out, pair)?;
        }
    }
    out.queue(ResetColor)?;
    Ok(())
}

/// Encode only the changed runs between two same-sized grids into `out`.
/// Grids of different sizes are encoded as a full redraw of `next`.
pub fn encode_diff_into(prev: &CellGrid, next: &CellGrid, out: &mut Vec<u8>) -> Result<()> {
    if !prev.same_size(next) {
        return encode_full_into(next, out);
    }

    let mut pen = Pen::default();
    let mut any = false;
    for y in 0..next.rows() {
        let (old, new) = (prev.row(y), next.row(y));
        for (start, len) in changed_runs(old, new) {
            any = true;
            out.queue(cursor::MoveTo(start as u16, y))?;
            for &pair in &new[start..start + len] {
                pen.paint(out, pair)?;
            }
        }
    }

    if any {
        out.queue(ResetColor)?;
    }
    Ok(())
}

/// `(start, len)` of each maximal run where `old` and `new` differ.
fn changed_runs<'a>(
    old: &'a [PixelPair],
    new: &'a [PixelPair],
) -> impl Iterator<Item = (usize, usize)> + 'a {
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < new.len() && old[x] == new[x] {
            x += 1;
        }
        if x >= new.len() {
            return None;
        }
        let start = x;
        while x < new.len() && old[x] != new[x] {
            x += 1;
        }
        Some((start, x - start))
    })
}
