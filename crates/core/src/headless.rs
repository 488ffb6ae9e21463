//! In-memory platform and codec
//!
//! [`HeadlessPlatform`] runs the full game loop without a display: key events
//! are scripted, presented frames are captured and sounds are recorded. Useful
//! for tests, benchmarks and CI.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use crate::bitmap::Bitmap;
use crate::font::BlockFont;
use crate::keyboard::KeyboardState;
use crate::platform::{FontRasterizer, ImageCodec, Platform};
use crate::surface::PixelSurface;
use crate::types::Key;

/// Scripted input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessEvent {
    Key { key: Key, down: bool },
    Close,
}

#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    font: BlockFont,
    pending: VecDeque<HeadlessEvent>,
    last_frame: Option<PixelSurface>,
    presented: u64,
    sounds: Vec<PathBuf>,
    shut_down: bool,
}

impl HeadlessPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a key transition for the next [`Platform::pump_events`].
    pub fn push_key(&mut self, key: Key, down: bool) {
        self.pending.push_back(HeadlessEvent::Key { key, down });
    }

    /// Queue a close request for the next [`Platform::pump_events`].
    pub fn request_close(&mut self) {
        self.pending.push_back(HeadlessEvent::Close);
    }

    pub fn presented_frames(&self) -> u64 {
        self.presented
    }

    /// Copy of the most recently presented surface.
    pub fn last_frame(&self) -> Option<&PixelSurface> {
        self.last_frame.as_ref()
    }

    pub fn sounds(&self) -> &[PathBuf] {
        &self.sounds
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }
}

impl Platform for HeadlessPlatform {
    fn present(&mut self, surface: &PixelSurface) -> Result<()> {
        if let Some(frame) = self.last_frame.as_mut() {
            frame.clone_from(surface);
        } else {
            self.last_frame = Some(surface.clone());
        }
        self.presented += 1;
        Ok(())
    }

    fn pump_events(&mut self, keys: &mut KeyboardState) -> Result<bool> {
        while let Some(event) = self.pending.pop_front() {
            match event {
                HeadlessEvent::Key { key, down } => keys.set_key(key, down),
                HeadlessEvent::Close => return Ok(false),
            }
        }
        Ok(true)
    }

    fn font(&self) -> &dyn FontRasterizer {
        &self.font
    }

    fn play_sound(&mut self, path: &Path) -> Result<()> {
        self.sounds.push(path.to_path_buf());
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        self.shut_down = true;
        Ok(())
    }
}

/// Codec serving bitmaps registered in memory, resized nearest-neighbor.
#[derive(Debug, Default)]
pub struct MemoryCodec {
    images: HashMap<PathBuf, Bitmap>,
    encoded: RefCell<Vec<Bitmap>>,
    decode_calls: Cell<usize>,
}

impl MemoryCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, path: impl Into<PathBuf>, image: Bitmap) -> Self {
        self.images.insert(path.into(), image);
        self
    }

    /// Number of decode attempts, successful or not.
    pub fn decode_calls(&self) -> usize {
        self.decode_calls.get()
    }

    /// Bitmap previously returned by [`ImageCodec::encode`] for `path`.
    pub fn encoded(&self, path: &Path) -> Option<Bitmap> {
        let index: usize = path.file_stem()?.to_str()?.parse().ok()?;
        self.encoded.borrow().get(index).cloned()
    }
}

impl ImageCodec for MemoryCodec {
    fn decode(&self, path: &Path) -> Result<Bitmap> {
        self.decode_calls.set(self.decode_calls.get() + 1);
        self.images
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("no image registered for {}", path.display()))
    }

    fn decode_and_resize(&self, path: &Path, width: u32, height: u32) -> Result<Bitmap> {
        self.decode_calls.set(self.decode_calls.get() + 1);
        let src = self
            .images
            .get(path)
            .ok_or_else(|| anyhow!("no image registered for {}", path.display()))?;
        if src.width() == 0 || src.height() == 0 {
            return Ok(Bitmap::new(width, height));
        }
        Ok(Bitmap::from_fn(width, height, |x, y| {
            let sx = (x as u64 * src.width() as u64 / width as u64) as u32;
            let sy = (y as u64 * src.height() as u64 / height as u64) as u32;
            src.get(sx, sy).unwrap_or(0)
        }))
    }

    fn encode(&self, image: &Bitmap) -> Result<PathBuf> {
        let mut encoded = self.encoded.borrow_mut();
        encoded.push(image.clone());
        Ok(PathBuf::from(format!("memory/{}.png", encoded.len() - 1)))
    }
}
