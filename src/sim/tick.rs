//! Per-frame simulation step
//!
//! One call per rendered frame, with the measured frame time.

use super::asteroids;
use super::collision::point_in_circle;
use super::player;
use super::projectiles;
use super::state::GameState;
use super::wrap::Playfield;

/// Control intent for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    /// Edge-triggered: true only on the frame fire went down
    pub fire: bool,
}

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub fired: bool,
    pub merged: u32,
    pub split: u32,
    pub destroyed: u32,
    pub bullets_pruned: usize,
    pub ship_died: bool,
    /// The frame was spent starting a new game
    pub reset: bool,
}

/// Advance the game by `dt` seconds on a field of the given extent
pub fn tick(state: &mut GameState, input: &FrameInput, field: Playfield, dt: f32) -> FrameReport {
    let mut report = FrameReport::default();

    if state.player.is_dead {
        state.reset(field);
        report.reset = true;
        return report;
    }

    state.frames += 1;

    player::update(&mut state.player, input, field, &state.tuning, dt);

    if input.fire {
        let bullet = projectiles::fire(&state.player.body, state.tuning.bullet_speed);
        state.bullets.push(bullet);
        report.fired = true;
    }

    asteroids::advance(&mut state.asteroids, field, dt);
    report.merged = asteroids::merge_collisions(&mut state.asteroids);

    projectiles::advance(&mut state.bullets, dt);
    state.bullet_marks.clear();
    state.bullet_marks.extend(state.bullets.iter().map(|b| b.pos));

    let hits = asteroids::resolve_bullet_hits(&mut state.asteroids, &mut state.bullets, &state.tuning);
    report.split = hits.split;
    report.destroyed = hits.destroyed;
    state.score += u64::from(hits.hits()) * u64::from(state.tuning.score_per_hit);
    report.bullets_pruned = projectiles::prune(&mut state.bullets, field);

    let ship = state.player.body.pos;
    if state.asteroids.iter().any(|a| point_in_circle(ship, a.pos, a.radius())) {
        state.player.is_dead = true;
        report.ship_died = true;
        log::info!("Ship destroyed after {} frames, score {}", state.frames, state.score);
    }

    report
}
