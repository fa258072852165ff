//! Bullets: spawn, integrate, prune
//!
//! Bullets are never wrapped. Leaving the field is how they die, including
//! bullets that hit something (those are parked off-field first).

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use super::state::Transform;
use super::vector::ScreenVec;
use super::wrap::Playfield;
use crate::angle_to_vector;

/// Model-space muzzle point (the ship's nose)
pub const MUZZLE: Vec2 = Vec2::new(0.0, -5.5);

/// A bullet leaving `ship`'s nose along its heading, carrying the ship's
/// velocity on top of the muzzle speed
pub fn fire(ship: &Transform, bullet_speed: f32) -> Transform {
    let pos = MUZZLE.screen_rotated(ship.rotation) + ship.pos;
    let vel = angle_to_vector(ship.rotation + FRAC_PI_2, bullet_speed) + ship.vel;
    Transform::bullet(pos, vel)
}

pub fn advance(bullets: &mut [Transform], dt: f32) {
    for b in bullets.iter_mut() {
        b.integrate(dt);
    }
}

/// Drop every bullet outside the field, returning how many went
pub fn prune(bullets: &mut Vec<Transform>, field: Playfield) -> usize {
    let before = bullets.len();
    bullets.retain(|b| field.contains(b.pos));
    before - bullets.len()
}
