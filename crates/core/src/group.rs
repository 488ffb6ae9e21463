//! Sprite groups - bounded, ordered collections of sprite copies
//!
//! A group stores sprites by value. Mutating a sprite after adding it does not
//! affect the stored copy, so animated sprites must be re-added every frame
//! (see [`SpriteGroup::add_animated`]).
//!
//! Capacity is fixed at construction. Adds past capacity are dropped without
//! error; the ceiling is deliberate, not a recoverable condition.

use tracing::trace;

use crate::animation::AnimatedSprite;
use crate::compositor;
use crate::sprite::AnySprite;
use crate::surface::PixelSurface;
use crate::types::SpriteKind;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpriteGroup {
    sprites: Vec<AnySprite>,
    capacity: usize,
}

impl SpriteGroup {
    /// Allocate storage for `capacity` sprites.
    pub fn new(capacity: usize) -> Self {
        Self {
            sprites: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.sprites.len() >= self.capacity
    }

    /// Append a copy of `sprite`. Dropped silently when the group is full.
    pub fn add(&mut self, sprite: impl Into<AnySprite>) {
        if self.is_full() {
            trace!(capacity = self.capacity, "sprite group full, dropping sprite");
            return;
        }
        self.sprites.push(sprite.into());
    }

    /// Append a copy of the animation's current frame, if it is alive.
    pub fn add_animated(&mut self, anim: &AnimatedSprite) {
        if !anim.is_alive() {
            return;
        }
        if let Some(frame) = anim.current_frame() {
            self.add(frame.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnySprite> {
        self.sprites.iter()
    }

    /// Stored sprites paired with their kind tag.
    pub fn entries(&self) -> impl Iterator<Item = (&AnySprite, SpriteKind)> {
        self.sprites.iter().map(|s| (s, s.kind()))
    }

    pub fn get(&self, index: usize) -> Option<&AnySprite> {
        self.sprites.get(index)
    }

    /// Remove all sprites, keeping the capacity.
    pub fn clear(&mut self) {
        self.sprites.clear();
    }

    /// Free the backing storage and drop the capacity to zero.
    ///
    /// Only the group's own copies are dropped; sprites held elsewhere by the
    /// application are unaffected.
    pub fn release(&mut self) {
        self.sprites = Vec::new();
        self.capacity = 0;
    }

    /// Clear `surface` and draw every sprite in insertion order.
    pub fn compose_onto(&self, surface: &mut PixelSurface) {
        compositor::compose(surface, &self.sprites);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Bitmap;
    use crate::sprite::{ColorSprite, ImageSprite};
    use crate::types::Rgb;

    fn square(x: f32) -> ColorSprite {
        ColorSprite::new(x, 0.0, 1.0, 1.0, Rgb::WHITE)
    }

    #[test]
    fn adds_beyond_capacity_are_dropped() {
        let mut group = SpriteGroup::new(2);
        group.add(square(0.0));
        group.add(square(1.0));
        group.add(square(2.0));
        assert_eq!(group.len(), 2);
        assert!(group.is_full());
        assert_eq!(group.get(1).unwrap().body().x, 1.0);
    }

    #[test]
    fn stored_sprites_are_copies() {
        let mut group = SpriteGroup::new(1);
        let mut sprite = square(0.0);
        group.add(sprite);
        sprite.body.x = 42.0;
        assert_eq!(group.get(0).unwrap().body().x, 0.0);
    }

    #[test]
    fn entries_carry_kind_tags() {
        let mut group = SpriteGroup::new(4);
        group.add(square(0.0));
        group.add(ImageSprite::new(0.0, 0.0, Bitmap::new(1, 1)));
        let kinds: Vec<SpriteKind> = group.entries().map(|(_, kind)| kind).collect();
        assert_eq!(kinds, vec![SpriteKind::Color, SpriteKind::Image]);
    }

    #[test]
    fn add_animated_copies_current_frame() {
        let frames = vec![
            ImageSprite::new(0.0, 0.0, Bitmap::from_fn(1, 1, |_, _| 0xFF000001)),
            ImageSprite::new(0.0, 0.0, Bitmap::from_fn(1, 1, |_, _| 0xFF000002)),
        ];
        let mut anim = AnimatedSprite::from_frames(frames, 1).unwrap();
        anim.advance(0.0, 10.0);

        let mut group = SpriteGroup::new(4);
        group.add_animated(&anim);
        match group.get(0) {
            Some(AnySprite::Image(frame)) => {
                assert_eq!(frame.image().unwrap().pixels(), &[0xFF000002]);
                assert!(frame.body.active);
            }
            other => panic!("expected image sprite, got {other:?}"),
        }

        anim.deactivate();
        group.add_animated(&anim);
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn release_drops_capacity() {
        let mut group = SpriteGroup::new(3);
        group.add(square(0.0));
        group.release();
        assert_eq!(group.len(), 0);
        assert_eq!(group.capacity(), 0);
        group.add(square(0.0));
        assert!(group.is_empty());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut group = SpriteGroup::new(3);
        group.add(square(0.0));
        group.clear();
        assert!(group.is_empty());
        assert_eq!(group.capacity(), 3);
    }
}
