//! Collision module - axis-aligned bounding box overlap
//!
//! Rectangles overlap only when their interiors intersect; sharing an edge is
//! not a collision. There is no pixel or alpha-aware test.

use crate::sprite::Body;

/// True when both bodies are active and their rectangles overlap.
pub fn overlaps(a: &Body, b: &Body) -> bool {
    if !a.active || !b.active {
        return false;
    }
    a.rect().intersects(&b.rect())
}
