//! Circle intersection tests
//!
//! Contact is strict: circles that exactly touch do not collide.

use glam::Vec2;

/// Whether two circles overlap (`distance < r1 + r2`)
#[inline]
pub fn circles_collide(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> bool {
    center_a.distance(center_b) < radius_a + radius_b
}

/// Whether a point lies strictly inside a circle
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    circles_collide(point, 0.0, center, radius)
}
