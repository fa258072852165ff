//! Game balance constants
//!
//! Loaded from JSON when the driver provides one, otherwise defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a tuning document is rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("could not read tuning file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("tuning json is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("asteroid_size_min must be at least {floor}, got {min}")]
    MinimumSizeTooSmall { min: u32, floor: u32 },
    #[error("asteroid_size_max ({max}) must exceed asteroid_size_min ({min})")]
    InvertedSizeRange { min: u32, max: u32 },
    #[error("{name} must be finite and non-negative, got {value}")]
    BadSpeed { name: &'static str, value: f32 },
}

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Muzzle speed added on top of the ship's own velocity
    pub bullet_speed: f32,
    /// Upper bound of the random seeding speed
    pub asteroid_speed_mult: f32,
    /// Upward bias subtracted from every seeded asteroid's y velocity
    pub asteroid_drift: f32,
    /// Ship acceleration while thrusting (units/s²)
    pub player_thrust: f32,
    /// Ship turn rate (radians/s)
    pub player_turn_rate: f32,
    /// Smallest asteroid that splits when hit; anything smaller is destroyed
    pub asteroid_size_min: u32,
    /// Seeded sizes are drawn from [min, max)
    pub asteroid_size_max: u32,
    /// Launch speed of fission children relative to the parent
    pub asteroid_split_speed: f32,
    /// Asteroids seeded on every reset
    pub initial_asteroids: u32,
    pub score_per_hit: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            bullet_speed: 50.0,
            asteroid_speed_mult: 5.0,
            asteroid_drift: 2.0,
            player_thrust: 20.0,
            player_turn_rate: 5.0,
            asteroid_size_min: 8,
            asteroid_size_max: 30,
            asteroid_split_speed: 10.0,
            initial_asteroids: 5,
            score_per_hit: 100,
        }
    }
}

impl Tuning {
    /// Lowest usable `asteroid_size_min`: `size / 2 + 1` only shrinks above 2
    pub const SPLIT_FLOOR: u32 = 3;

    /// Parse a (possibly partial) JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read and parse a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if self.asteroid_size_min < Self::SPLIT_FLOOR {
            return Err(TuningError::MinimumSizeTooSmall {
                min: self.asteroid_size_min,
                floor: Self::SPLIT_FLOOR,
            });
        }
        if self.asteroid_size_max <= self.asteroid_size_min {
            return Err(TuningError::InvertedSizeRange {
                min: self.asteroid_size_min,
                max: self.asteroid_size_max,
            });
        }
        let speeds = [
            ("bullet_speed", self.bullet_speed),
            ("asteroid_speed_mult", self.asteroid_speed_mult),
            ("asteroid_drift", self.asteroid_drift),
            ("player_thrust", self.player_thrust),
            ("player_turn_rate", self.player_turn_rate),
            ("asteroid_split_speed", self.asteroid_split_speed),
        ];
        for (name, value) in speeds {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::BadSpeed { name, value });
            }
        }
        Ok(())
    }

    /// Whether an asteroid of `size` splits when hit
    #[inline]
    pub fn splits(&self, size: u32) -> bool {
        size >= self.asteroid_size_min
    }

    /// Size of each fission child of a parent of `size`
    #[inline]
    pub fn child_size(size: u32) -> u32 {
        size / 2 + 1
    }
}
