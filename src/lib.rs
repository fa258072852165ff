//! Vector Rocks - a toroidal asteroid field drawn as vector outlines
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (ship, asteroids, bullets, collisions)
//! - `renderer`: Wireframe transform pipeline and draw targets
//! - `platform`: Keyboard bindings and control sampling
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default playfield, in character cells
    pub const DEFAULT_FIELD_WIDTH: u32 = 160;
    pub const DEFAULT_FIELD_HEIGHT: u32 = 100;

    /// Vertex count of the procedural asteroid outline
    pub const ASTEROID_VERTS: usize = 20;

    /// Where hit bullets are parked until the off-field prune removes them
    pub const BULLET_PARK_X: f32 = -100.0;
}

/// Convert a screen-space heading (y grows downward, angle grows
/// counter-clockwise as seen on screen) into a vector of length `mult`
#[inline]
pub fn angle_to_vector(angle: f32, mult: f32) -> Vec2 {
    Vec2::new(angle.cos() * mult, -angle.sin() * mult)
}
