//! Media adapters - image files and sound playback.
//!
//! - [`FileImageCodec`]: decodes image files with the `image` crate, resizes
//!   them and writes bitmaps back out as temporary PNG files
//! - [`flip_image_file`] / [`rotate_image_file`]: transform an image file into
//!   a new temporary file
//! - [`CommandAudio`]: fire-and-forget playback through the system player

pub mod audio;
pub mod codec;

pub use pixel_arcade_core as core;
pub use pixel_arcade_types as types;

pub use audio::CommandAudio;
pub use codec::{flip_image_file, rotate_image_file, FileImageCodec};
