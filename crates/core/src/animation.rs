//! Animation module - frame-cycling image sprites
//!
//! An [`AnimatedSprite`] owns a fixed list of [`ImageSprite`] frames of the same
//! display size. Only the current frame is simulated; after each step its
//! transform is copied to every other frame so whichever frame becomes current
//! next starts from the same place.
//!
//! # Liveness
//!
//! Frame 0's `active` flag doubles as the "animation alive" flag. While alive,
//! frame 0 and the current frame are active and every other frame is inert.
//! [`AnimatedSprite::deactivate`] turns the whole animation off.
//!
//! # Timing
//!
//! `interval` counts game-loop frames between animation ticks. An interval of
//! 0 behaves like 1 (advance on every call).

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::collision;
use crate::kinematics;
use crate::platform::ImageCodec;
use crate::sprite::ImageSprite;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimatedSprite {
    frames: Vec<ImageSprite>,
    current: usize,
    interval: u32,
    ticks: u32,
}

impl AnimatedSprite {
    /// Load one frame per path, all resized to `width x height` at `(x, y)`.
    ///
    /// If any frame fails, every frame loaded so far is dropped and the
    /// error names the failing frame. No partial animation is returned.
    pub fn load<P: AsRef<Path>>(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        paths: &[P],
        interval: u32,
        codec: &dyn ImageCodec,
    ) -> Result<Self> {
        let mut frames = Vec::with_capacity(paths.len());
        for (i, path) in paths.iter().enumerate() {
            let frame = ImageSprite::load(x, y, width, height, path, codec)
                .with_context(|| format!("animation frame {i} failed"))?;
            frames.push(frame);
        }
        Self::from_frames(frames, interval)
    }

    /// Build from frames that are already constructed.
    ///
    /// Frame 0 is activated, the rest start inactive.
    pub fn from_frames(mut frames: Vec<ImageSprite>, interval: u32) -> Result<Self> {
        if frames.is_empty() {
            bail!("animated sprite needs at least one frame");
        }
        if let Some(frame) = frames.iter().position(|f| !f.is_loaded()) {
            bail!("animation frame {frame} has no pixel data");
        }
        for (i, frame) in frames.iter_mut().enumerate() {
            frame.body.active = i == 0;
        }
        Ok(Self {
            frames,
            current: 0,
            interval,
            ticks: 0,
        })
    }

    pub fn frames(&self) -> &[ImageSprite] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Frame currently on display, `None` once released.
    pub fn current_frame(&self) -> Option<&ImageSprite> {
        self.frames.get(self.current)
    }

    pub fn is_alive(&self) -> bool {
        self.frames.first().map(|f| f.body.active).unwrap_or(false)
    }

    /// Set velocity on every frame.
    pub fn set_velocity(&mut self, vx: f32, vy: f32) {
        for frame in &mut self.frames {
            frame.body.vx = vx;
            frame.body.vy = vy;
        }
    }

    /// Move every frame to `(x, y)`.
    pub fn set_position(&mut self, x: f32, y: f32) {
        for frame in &mut self.frames {
            frame.body.x = x;
            frame.body.y = y;
        }
    }

    /// Turn the animation off. It stops moving, colliding and rendering.
    pub fn deactivate(&mut self) {
        for frame in &mut self.frames {
            frame.body.active = false;
        }
    }

    /// One game-loop frame: physics on the current frame, broadcast the
    /// transform, then tick the frame counter.
    pub fn advance(&mut self, gravity: f32, surface_height: f32) {
        if !self.is_alive() {
            return;
        }

        let current = &mut self.frames[self.current];
        kinematics::advance(&mut current.body, gravity, surface_height);
        let (x, y, vx, vy) = (current.body.x, current.body.y, current.body.vx, current.body.vy);
        for frame in &mut self.frames {
            frame.body.x = x;
            frame.body.y = y;
            frame.body.vx = vx;
            frame.body.vy = vy;
        }

        self.ticks += 1;
        if self.ticks >= self.interval {
            self.current = (self.current + 1) % self.frames.len();
            self.ticks = 0;
            self.sync_active();
        }
    }

    /// AABB test of the current frame against `other`.
    pub fn collides_with(&self, other: &ImageSprite) -> bool {
        if !self.is_alive() {
            return false;
        }
        match self.current_frame() {
            Some(frame) => collision::overlaps(&frame.body, &other.body),
            None => false,
        }
    }

    /// Release every frame's bitmap and the frame list. Idempotent.
    pub fn release(&mut self) {
        for frame in &mut self.frames {
            frame.release();
        }
        self.frames.clear();
        self.current = 0;
        self.ticks = 0;
    }

    fn sync_active(&mut self) {
        let current = self.current;
        for (i, frame) in self.frames.iter_mut().enumerate() {
            frame.body.active = i == 0 || i == current;
        }
    }
}
