//! Kinematics module - per-frame gravity and velocity integration
//!
//! One step is:
//!
//! 1. `vy += gravity`
//! 2. `y += vy`, `x += vx`
//! 3. clamp to the top edge (`y < 0`), then to the bottom edge
//!    (`y > surface_height - height`), zeroing `vy` on each clamp
//!
//! The two clamps are independent and run in that order, so a body taller
//! than the surface always ends on the bottom clamp. Horizontal position is
//! never clamped.

use crate::sprite::Body;

/// Advance `body` by one frame. Inactive bodies are left untouched.
pub fn advance(body: &mut Body, gravity: f32, surface_height: f32) {
    if !body.active {
        return;
    }

    body.vy += gravity;
    body.y += body.vy;
    body.x += body.vx;

    if body.y < 0.0 {
        body.y = 0.0;
        body.vy = 0.0;
    }
    let floor = surface_height - body.height;
    if body.y > floor {
        body.y = floor;
        body.vy = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn integrates_gravity_then_position() {
        let mut body = Body::new(10.0, 10.0, 4.0, 4.0).with_velocity(2.0, 1.0);
        advance(&mut body, 0.5, 100.0);
        assert_relative_eq!(body.vy, 1.5);
        assert_relative_eq!(body.y, 11.5);
        assert_relative_eq!(body.x, 12.0);
    }

    #[test]
    fn clamps_to_floor() {
        let height = 10.0;
        let surface_height = 100.0;
        let mut body = Body::new(0.0, surface_height - height + 5.0, 10.0, height)
            .with_velocity(0.0, 1.0);
        advance(&mut body, 1.0, surface_height);
        assert_relative_eq!(body.y, surface_height - height);
        assert_relative_eq!(body.vy, 0.0);
    }

    #[test]
    fn clamps_to_ceiling() {
        let mut body = Body::new(0.0, 2.0, 4.0, 4.0).with_velocity(0.0, -10.0);
        advance(&mut body, 0.0, 50.0);
        assert_relative_eq!(body.y, 0.0);
        assert_relative_eq!(body.vy, 0.0);
    }

    #[test]
    fn taller_than_surface_ends_on_floor_clamp() {
        let mut body = Body::new(0.0, -5.0, 4.0, 30.0);
        advance(&mut body, 0.0, 20.0);
        assert_relative_eq!(body.y, -10.0);
        assert_relative_eq!(body.vy, 0.0);
    }

    #[test]
    fn horizontal_motion_is_unbounded() {
        let mut body = Body::new(-3.0, 0.0, 4.0, 4.0).with_velocity(-5.0, 0.0);
        advance(&mut body, 0.0, 50.0);
        assert_relative_eq!(body.x, -8.0);
    }

    #[test]
    fn inactive_body_does_not_move() {
        let mut body = Body::new(1.0, 2.0, 3.0, 4.0).with_velocity(5.0, 6.0);
        body.active = false;
        let before = body;
        advance(&mut body, 9.8, 10.0);
        assert_eq!(body, before);
    }
}
