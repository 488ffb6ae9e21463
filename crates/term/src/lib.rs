//! Terminal platform module.
//!
//! Shows a `PixelSurface` in a terminal using half-block characters (two
//! pixels per cell) and reads keyboard input with crossterm. It avoids
//! ratatui widgets/layout: the surface is mapped into a grid of pixel pairs
//! that is flushed with diff encoding.

pub mod cells;
pub mod platform;
pub mod renderer;
pub mod surface_view;

pub use pixel_arcade_core as core;
pub use pixel_arcade_input as input;
pub use pixel_arcade_media as media;
pub use pixel_arcade_types as types;

pub use cells::{CellGrid, PixelPair, UPPER_HALF_BLOCK};
pub use platform::TerminalPlatform;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface_view::{SurfaceView, Viewport};
