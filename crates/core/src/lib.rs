//! Core runtime - surface, sprites, physics, animation and composition
//!
//! Everything in this crate is pure and deterministic. The display, input
//! devices, image files and audio are reached only through the traits in
//! [`platform`], so the same game code runs in a terminal, in a test or in a
//! benchmark.
//!
//! # Module Structure
//!
//! - [`surface`]: the ARGB pixel buffer games draw into
//! - [`bitmap`]: owned RGBA images with flip/rotate transforms
//! - [`sprite`]: color and image sprites plus the [`AnySprite`] wrapper
//! - [`kinematics`] / [`collision`]: per-frame motion and AABB overlap
//! - [`animation`]: frame-cycling image sprites
//! - [`group`] / [`compositor`]: bounded draw lists and painter's-order blits
//! - [`keyboard`]: key tables with single-press detection
//! - [`font`] / [`text`]: built-in block font and text placement
//! - [`runtime`]: the [`Arcade`] context that drives a game loop
//! - [`headless`]: in-memory platform and codec
//!
//! # Frame Model
//!
//! One call to [`Arcade::update`] is one frame. Velocities are in pixels per
//! frame and gravity is added to vertical velocity once per frame, so game
//! speed follows the frame rate.

pub mod animation;
pub mod bitmap;
pub mod collision;
pub mod compositor;
pub mod config;
pub mod font;
pub mod group;
pub mod headless;
pub mod keyboard;
pub mod kinematics;
pub mod manifest;
pub mod platform;
pub mod runtime;
pub mod sprite;
pub mod surface;
pub mod text;

pub use pixel_arcade_types as types;

pub use animation::AnimatedSprite;
pub use bitmap::{Bitmap, FlipAxis};
pub use config::ArcadeConfig;
pub use font::BlockFont;
pub use group::SpriteGroup;
pub use headless::{HeadlessEvent, HeadlessPlatform, MemoryCodec};
pub use keyboard::KeyboardState;
pub use manifest::AnimationManifest;
pub use platform::{AudioSink, FontRasterizer, ImageCodec, Platform};
pub use runtime::Arcade;
pub use sprite::{AnySprite, Body, ColorSprite, ImageSprite};
pub use surface::PixelSurface;
