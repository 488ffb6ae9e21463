//! Pixel Arcade (workspace facade crate).
//!
//! Re-exports the member crates under one `pixel_arcade::{core,input,media,term,types}`
//! namespace. The implementation lives in dedicated crates under `crates/`.

pub use pixel_arcade_core as core;
pub use pixel_arcade_input as input;
pub use pixel_arcade_media as media;
pub use pixel_arcade_term as term;
pub use pixel_arcade_types as types;
