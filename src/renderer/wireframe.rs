//! Wireframe transform pipeline
//!
//! Model-space polygons go through rotate, scale, translate, then every
//! consecutive pair of vertices (including last back to first) becomes a line.

use glam::Vec2;

use super::canvas::{Canvas, Color, SOLID, colors};
use super::models::{ASTEROID_MODEL, FLAME_MODEL, PLAYER_MODEL};
use crate::sim::{GameState, ScreenVec};

/// Map a model into screen space
pub fn transform_model(model: &[Vec2], offset: Vec2, angle: f32, scale: f32) -> Vec<Vec2> {
    model
        .iter()
        .map(|&v| {
            let mut p = v;
            p.screen_rotate(angle);
            p * scale + offset
        })
        .collect()
}

/// Closed outline edges: 0-1, 1-2, ..., (n-1)-0
pub fn edges(points: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

/// Draw `model` as a closed outline
pub fn draw_wireframe<C: Canvas + ?Sized>(
    canvas: &mut C,
    model: &[Vec2],
    offset: Vec2,
    angle: f32,
    scale: f32,
    color: Color,
) {
    let points = transform_model(model, offset, angle, scale);
    for (a, b) in edges(&points) {
        canvas.draw_line(a.x as i32, a.y as i32, b.x as i32, b.y as i32, SOLID, color);
    }
}

/// Draw one frame of `state`: asteroids, bullets, ship and (while thrusting)
/// its flame. Wrapping is the canvas's concern; pass a `WrapCanvas` for a
/// toroidal display.
///
/// Bullets are drawn from `bullet_marks`, so a bullet that hit or left the
/// field this frame still shows where it got to.
pub fn draw_frame<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    canvas.clear();

    for a in &state.asteroids {
        draw_wireframe(canvas, &ASTEROID_MODEL, a.pos, a.rotation, a.radius(), colors::ASTEROID);
    }

    for p in &state.bullet_marks {
        canvas.draw_pixel(p.x as i32, p.y as i32, SOLID, colors::BULLET);
    }

    let ship = &state.player.body;
    draw_wireframe(canvas, &PLAYER_MODEL, ship.pos, ship.rotation, 1.0, colors::SHIP);
    if state.player.is_igniting {
        draw_wireframe(canvas, &FLAME_MODEL, ship.pos, ship.rotation, 1.0, colors::FLAME);
    }
}
