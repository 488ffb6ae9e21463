//! Sprite module - the two sprite kinds and the tagged wrapper used for storage
//!
//! Both kinds share a [`Body`]: position, size, velocity and the active flag.
//! Physics ([`kinematics`](crate::kinematics)) and collision
//! ([`collision`](crate::collision)) only ever look at the body, so the same
//! rules apply to flat-color rectangles and bitmaps alike.
//!
//! An [`ImageSprite`] exclusively owns its [`Bitmap`]. Releasing it drops the
//! buffer and deactivates the sprite; releasing again does nothing.

use std::path::Path;

use anyhow::{Context, Result};

use crate::bitmap::Bitmap;
use crate::collision;
use crate::kinematics;
use crate::platform::ImageCodec;
use crate::types::{Rect, Rgb, SpriteKind};

/// Transform and liveness shared by every sprite kind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    /// Top-left corner, surface pixels.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Velocity in pixels per frame.
    pub vx: f32,
    pub vy: f32,
    /// Inactive bodies do not move, collide or render.
    pub active: bool,
}

impl Body {
    /// Active body at rest.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            vx: 0.0,
            vy: 0.0,
            active: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }
}

/// Solid-color rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSprite {
    pub body: Body,
    pub color: Rgb,
}

impl ColorSprite {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: Rgb) -> Self {
        Self {
            body: Body::new(x, y, width, height),
            color,
        }
    }

    /// One physics step. See [`kinematics::advance`].
    pub fn advance(&mut self, gravity: f32, surface_height: f32) {
        kinematics::advance(&mut self.body, gravity, surface_height);
    }

    pub fn collides_with(&self, other: &ColorSprite) -> bool {
        collision::overlaps(&self.body, &other.body)
    }
}

/// Bitmap sprite. The bitmap is drawn 1:1 at the body position.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSprite {
    pub body: Body,
    image: Option<Bitmap>,
}

impl ImageSprite {
    /// Wrap an already decoded bitmap. Display size follows the bitmap size.
    pub fn new(x: f32, y: f32, image: Bitmap) -> Self {
        let body = Body::new(x, y, image.width() as f32, image.height() as f32);
        Self {
            body,
            image: Some(image),
        }
    }

    /// Decode `path` resized to `width x height` and place it at `(x, y)`.
    ///
    /// The display size is truncated to whole pixels; the bitmap and the body
    /// (and so collisions) both use the truncated size.
    pub fn load(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        path: impl AsRef<Path>,
        codec: &dyn ImageCodec,
    ) -> Result<Self> {
        let path = path.as_ref();
        let (width, height) = (width as u32, height as u32);
        let image = codec
            .decode_and_resize(path, width, height)
            .with_context(|| format!("Cannot load {}", path.display()))?;
        Ok(Self {
            body: Body::new(x, y, width as f32, height as f32),
            image: Some(image),
        })
    }

    pub fn image(&self) -> Option<&Bitmap> {
        self.image.as_ref()
    }

    /// Pixel dimensions of the owned bitmap, `(0, 0)` once released.
    pub fn image_size(&self) -> (u32, u32) {
        self.image
            .as_ref()
            .map(|img| (img.width(), img.height()))
            .unwrap_or((0, 0))
    }

    pub fn is_loaded(&self) -> bool {
        self.image.is_some()
    }

    /// Drop the bitmap and deactivate the sprite. Idempotent.
    pub fn release(&mut self) {
        if self.image.take().is_some() {
            self.body.active = false;
        }
    }

    pub fn advance(&mut self, gravity: f32, surface_height: f32) {
        kinematics::advance(&mut self.body, gravity, surface_height);
    }

    pub fn collides_with(&self, other: &ImageSprite) -> bool {
        collision::overlaps(&self.body, &other.body)
    }
}

/// Either sprite kind, with the kind carried as the enum discriminant.
#[derive(Debug, Clone, PartialEq)]
pub enum AnySprite {
    Color(ColorSprite),
    Image(ImageSprite),
}

impl AnySprite {
    pub fn kind(&self) -> SpriteKind {
        match self {
            AnySprite::Color(_) => SpriteKind::Color,
            AnySprite::Image(_) => SpriteKind::Image,
        }
    }

    pub fn body(&self) -> &Body {
        match self {
            AnySprite::Color(s) => &s.body,
            AnySprite::Image(s) => &s.body,
        }
    }

    pub fn body_mut(&mut self) -> &mut Body {
        match self {
            AnySprite::Color(s) => &mut s.body,
            AnySprite::Image(s) => &mut s.body,
        }
    }

    pub fn is_active(&self) -> bool {
        self.body().active
    }
}

impl From<ColorSprite> for AnySprite {
    fn from(sprite: ColorSprite) -> Self {
        AnySprite::Color(sprite)
    }
}

impl From<ImageSprite> for AnySprite {
    fn from(sprite: ImageSprite) -> Self {
        AnySprite::Image(sprite)
    }
}
