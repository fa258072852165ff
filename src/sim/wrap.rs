//! Toroidal playfield
//!
//! Wrapping is a single correction per axis, not a modulo: a body that moves
//! more than one field extent in a frame stays out of bounds until the next
//! wrap. Per-frame displacement is expected to stay below one extent.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Playfield extent, re-queried from the draw target every frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Wrap a position back onto the field (one extent at most per axis)
    #[inline]
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        Vec2::new(wrap_axis(pos.x, self.width), wrap_axis(pos.y, self.height))
    }

    /// Wrap integer pixel coordinates
    #[inline]
    pub fn wrap_pixel(&self, x: i32, y: i32) -> (i32, i32) {
        let wrapped = self.wrap(Vec2::new(x as f32, y as f32));
        (wrapped.x as i32, wrapped.y as i32)
    }

    /// Whether `pos` lies inside `[0, width) x [0, height)`
    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x < self.width && pos.y >= 0.0 && pos.y < self.height
    }
}

#[inline]
fn wrap_axis(v: f32, extent: f32) -> f32 {
    let mut v = v;
    if v < 0.0 {
        v += extent;
    }
    if v >= extent {
        v -= extent;
    }
    v
}
