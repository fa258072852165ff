//! Game state and core simulation types
//!
//! One `GameState` owns every population for the lifetime of a game; it is
//! rebuilt in place by `reset`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::wrap::Playfield;
use crate::angle_to_vector;
use crate::tuning::Tuning;

/// Physical state of one body (ship, asteroid or bullet)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Collision radius for asteroids, 0 for bullets, unused for the ship
    pub size: u32,
    /// Radians, y-down screen convention
    pub rotation: f32,
}

impl Transform {
    pub fn new(pos: Vec2, vel: Vec2, size: u32) -> Self {
        Self {
            pos,
            vel,
            size,
            rotation: 0.0,
        }
    }

    /// A point body with the given position and velocity
    pub fn bullet(pos: Vec2, vel: Vec2) -> Self {
        Self::new(pos, vel, 0)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size as f32
    }

    /// Advance position by `vel * dt` (no wrapping)
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Transform,
    pub is_dead: bool,
    /// Thrust held this frame (drives the flame outline)
    pub is_igniting: bool,
}

impl Player {
    /// Parked at `pos`, at rest, nose up
    pub fn at(pos: Vec2) -> Self {
        Self {
            body: Transform::new(pos, Vec2::ZERO, 0),
            is_dead: false,
            is_igniting: false,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub tuning: Tuning,
    pub player: Player,
    /// Unordered; order only matters for tie-breaking within a frame
    pub asteroids: Vec<Transform>,
    pub bullets: Vec<Transform>,
    /// Where each bullet stood once this frame's integration ran, before
    /// hits parked it or the prune dropped it. The renderer draws these.
    pub bullet_marks: Vec<Vec2>,
    pub score: u64,
    /// Frames simulated since the last reset
    pub frames: u64,
    #[serde(skip)]
    rng: Pcg32,
}

impl GameState {
    /// Create a fresh game on `field`, seeding asteroids from `seed`
    pub fn new(seed: u64, tuning: Tuning, field: Playfield) -> Self {
        let mut state = Self::empty(seed, tuning, field);
        state.reset(field);
        state
    }

    /// A game with a ship at the field centre and no asteroids or bullets
    pub fn empty(seed: u64, tuning: Tuning, field: Playfield) -> Self {
        Self {
            seed,
            tuning,
            player: Player::at(field.center()),
            asteroids: Vec::new(),
            bullets: Vec::new(),
            bullet_marks: Vec::new(),
            score: 0,
            frames: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start a new game: clear populations, recentre the ship and seed
    /// a fresh asteroid field. The RNG keeps running across resets.
    pub fn reset(&mut self, field: Playfield) {
        self.asteroids.clear();
        self.bullets.clear();
        self.bullet_marks.clear();
        self.score = 0;
        self.frames = 0;
        self.player = Player::at(field.center());

        for _ in 0..self.tuning.initial_asteroids {
            let asteroid = self.random_asteroid(field);
            self.asteroids.push(asteroid);
        }

        log::info!(
            "New game: {} asteroids on {}x{} field",
            self.asteroids.len(),
            field.width,
            field.height
        );
    }

    fn random_asteroid(&mut self, field: Playfield) -> Transform {
        let t = &self.tuning;

        let heading = self.rng.random_range(0.0..std::f32::consts::TAU);
        let speed = self.rng.random::<f32>() * t.asteroid_speed_mult;
        let mut vel = angle_to_vector(heading, speed);
        vel.y -= t.asteroid_drift;

        let span = (t.asteroid_size_max - t.asteroid_size_min) as f32;
        let size = (self.rng.random::<f32>() * span) as u32 + t.asteroid_size_min;

        let pos = Vec2::new(
            field.width * self.rng.random::<f32>(),
            field.height * self.rng.random::<f32>(),
        );

        Transform::new(pos, vel, size)
    }
}
