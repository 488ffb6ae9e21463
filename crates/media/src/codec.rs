//! Image codec on top of the `image` crate.

use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{ensure, Context, Result};
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use tracing::debug;

use crate::core::{Bitmap, FlipAxis, ImageCodec};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Decodes image files from disk and encodes bitmaps as PNG files.
#[derive(Debug, Clone)]
pub struct FileImageCodec {
    out_dir: PathBuf,
    filter: FilterType,
}

impl Default for FileImageCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl FileImageCodec {
    /// Encoded files go to the system temp directory.
    pub fn new() -> Self {
        Self::with_output_dir(env::temp_dir())
    }

    pub fn with_output_dir(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            filter: FilterType::Triangle,
        }
    }

    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.out_dir
    }

    fn next_temp_path(&self) -> PathBuf {
        let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        self.out_dir
            .join(format!("pixel-arcade-{}-{n}.png", process::id()))
    }

    fn open_rgba(path: &Path) -> Result<RgbaImage> {
        let img = image::open(path).with_context(|| format!("failed to decode {}", path.display()))?;
        Ok(img.to_rgba8())
    }
}

impl ImageCodec for FileImageCodec {
    fn decode(&self, path: &Path) -> Result<Bitmap> {
        let rgba = Self::open_rgba(path)?;
        Bitmap::from_rgba8(rgba.width(), rgba.height(), rgba.as_raw())
    }

    fn decode_and_resize(&self, path: &Path, width: u32, height: u32) -> Result<Bitmap> {
        ensure!(
            width > 0 && height > 0,
            "target size must be non-zero, got {width}x{height}"
        );
        let rgba = Self::open_rgba(path)?;
        let rgba = if rgba.dimensions() == (width, height) {
            rgba
        } else {
            imageops::resize(&rgba, width, height, self.filter)
        };
        debug!(path = %path.display(), width, height, "image decoded");
        Bitmap::from_rgba8(width, height, rgba.as_raw())
    }

    fn encode(&self, image: &Bitmap) -> Result<PathBuf> {
        let buffer = RgbaImage::from_raw(image.width(), image.height(), image.to_rgba8())
            .context("bitmap size does not match its pixel data")?;
        let path = self.next_temp_path();
        buffer
            .save_with_format(&path, ImageFormat::Png)
            .with_context(|| format!("failed to write {}", path.display()))?;
        debug!(path = %path.display(), "image encoded");
        Ok(path)
    }
}

/// Mirror the image at `path` and write the result to a new file.
pub fn flip_image_file(codec: &dyn ImageCodec, path: &Path, axis: FlipAxis) -> Result<PathBuf> {
    let image = codec
        .decode(path)
        .with_context(|| format!("Failed to load image {} for flipping", path.display()))?;
    codec.encode(&image.flipped(axis))
}

/// Rotate the image at `path` clockwise by 90, 180 or 270 degrees and write
/// the result to a new file. Other angles produce an unchanged copy.
pub fn rotate_image_file(codec: &dyn ImageCodec, path: &Path, degrees: i32) -> Result<PathBuf> {
    let image = codec
        .decode(path)
        .with_context(|| format!("Failed to load image {} for rotation", path.display()))?;
    codec.encode(&image.rotated(degrees))
}
