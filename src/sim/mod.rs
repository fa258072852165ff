//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Elapsed time is supplied by the caller every frame
//! - Seeded RNG only
//! - Collision passes defer removals and compact once per pass

pub mod asteroids;
pub mod collision;
pub mod player;
pub mod projectiles;
pub mod state;
pub mod tick;
pub mod vector;
pub mod wrap;

pub use asteroids::HitSummary;
pub use collision::{circles_collide, point_in_circle};
pub use state::{GameState, Player, Transform};
pub use tick::{FrameInput, FrameReport, tick};
pub use vector::{ScreenVec, Vector2D};
pub use wrap::Playfield;
