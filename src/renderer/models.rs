//! Model-space outlines shared by every body of a kind

use std::sync::LazyLock;

use glam::Vec2;

use crate::angle_to_vector;
use crate::consts::ASTEROID_VERTS;
use crate::sim::projectiles::MUZZLE;

/// Ship triangle, nose up (-y)
pub const PLAYER_MODEL: [Vec2; 3] = [MUZZLE, Vec2::new(-2.5, 2.5), Vec2::new(2.5, 2.5)];

/// Exhaust zig-zag below the ship
pub const FLAME_MODEL: [Vec2; 7] = [
    Vec2::new(-3.0, 4.0),
    Vec2::new(-2.0, 6.5),
    Vec2::new(-1.0, 5.0),
    Vec2::new(0.0, 6.5),
    Vec2::new(1.0, 5.0),
    Vec2::new(2.0, 6.5),
    Vec2::new(3.0, 4.0),
];

/// Unit-circle polygon, scaled by each asteroid's size when drawn
pub static ASTEROID_MODEL: LazyLock<Vec<Vec2>> = LazyLock::new(|| {
    (0..ASTEROID_VERTS)
        .map(|i| {
            let a = i as f32 / ASTEROID_VERTS as f32 * std::f32::consts::TAU;
            angle_to_vector(a, 1.0)
        })
        .collect()
});
