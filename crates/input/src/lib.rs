//! Terminal input module (platform-facing).
//!
//! Maps `crossterm` key events onto logical [`Key`](crate::types::Key) codes
//! and keeps held-key state for terminals that never emit key release events.

pub mod handler;
pub mod map;

pub use pixel_arcade_types as types;

pub use handler::KeyHoldTracker;
pub use map::{is_close_request, map_key_code, map_key_event};
