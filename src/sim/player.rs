//! Ship control and integration
//!
//! Frictionless: velocity only changes while thrusting, nothing damps it.

use std::f32::consts::FRAC_PI_2;

use super::state::Player;
use super::tick::FrameInput;
use super::wrap::Playfield;
use crate::angle_to_vector;
use crate::tuning::Tuning;

/// Apply one frame of steering and thrust, then move and wrap the ship
pub fn update(player: &mut Player, input: &FrameInput, field: Playfield, tuning: &Tuning, dt: f32) {
    let body = &mut player.body;

    if input.rotate_left {
        body.rotation += tuning.player_turn_rate * dt;
    }
    if input.rotate_right {
        body.rotation -= tuning.player_turn_rate * dt;
    }

    player.is_igniting = input.thrust;
    if input.thrust {
        // model nose is -y, a quarter turn past the heading
        let acc = angle_to_vector(body.rotation + FRAC_PI_2, tuning.player_thrust);
        body.vel += acc * dt;
    }

    body.integrate(dt);
    body.pos = field.wrap(body.pos);
}
