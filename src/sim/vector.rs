//! Screen-space vector helpers
//!
//! `glam::Vec2` already covers the arithmetic (add, sub, scalar mul/div in
//! both orders, compound assignment, `length`, `normalize`). What it lacks is
//! the y-down convention of the playfield: angles are measured as if y grew
//! upward, so both extraction and rotation negate the y sense.
//!
//! `normalize` of a zero vector yields NaN components; callers never pass one.

use glam::Vec2;

/// The simulation's 2D point/vector type
pub type Vector2D = Vec2;

/// Angle and rotation in the y-down screen convention
pub trait ScreenVec {
    /// Heading of the vector, `atan2(-y, x)`
    fn screen_angle(self) -> f32;

    /// Copy rotated by `angle` (counter-clockwise as seen on screen)
    fn screen_rotated(self, angle: f32) -> Self;

    /// Rotate in place by `angle`
    fn screen_rotate(&mut self, angle: f32);
}

impl ScreenVec for Vec2 {
    #[inline]
    fn screen_angle(self) -> f32 {
        (-self.y).atan2(self.x)
    }

    #[inline]
    fn screen_rotated(self, angle: f32) -> Self {
        // y is flipped on screen
        let (sin_a, cos_a) = (-angle).sin_cos();
        Vec2::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    #[inline]
    fn screen_rotate(&mut self, angle: f32) {
        *self = self.screen_rotated(angle);
    }
}
