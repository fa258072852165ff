//! Asteroid population: integration, merging and fission
//!
//! Both collision passes mark removals in a side mask and compact once at the
//! end, so no index shifts while a scan is in flight. New children are
//! appended (which never moves existing indices) and are visible to later
//! bullets in the same pass.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use super::collision::{circles_collide, point_in_circle};
use super::state::Transform;
use super::vector::ScreenVec;
use super::wrap::Playfield;
use crate::angle_to_vector;
use crate::consts::BULLET_PARK_X;
use crate::tuning::Tuning;

/// Outcome of one bullet-vs-asteroid pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitSummary {
    /// Asteroids split into two children
    pub split: u32,
    /// Asteroids removed without children
    pub destroyed: u32,
}

impl HitSummary {
    pub fn hits(&self) -> u32 {
        self.split + self.destroyed
    }
}

/// Move every asteroid by `vel * dt`, then wrap it onto the field
pub fn advance(asteroids: &mut [Transform], field: Playfield, dt: f32) {
    for a in asteroids.iter_mut() {
        a.integrate(dt);
        a.pos = field.wrap(a.pos);
    }
}

/// Resolve asteroid-asteroid contacts, returning how many were absorbed
///
/// Every unordered live pair is tested once. The smaller body is absorbed
/// (ties absorb the later index) and the survivor's velocity is pulled
/// toward the absorbed one's, weighted by their size ratio. An absorbed body
/// takes no part in any later test this frame.
pub fn merge_collisions(asteroids: &mut Vec<Transform>) -> u32 {
    let n = asteroids.len();
    let mut removed = vec![false; n];
    let mut merged = 0;

    for i in 0..n {
        if removed[i] {
            continue;
        }
        for j in (i + 1)..n {
            if removed[j] {
                continue;
            }
            let (a, b) = (asteroids[i], asteroids[j]);
            if !circles_collide(a.pos, a.radius(), b.pos, b.radius()) {
                continue;
            }

            let (small, large) = if a.size < b.size { (i, j) } else { (j, i) };
            let absorbed = asteroids[small];
            let survivor = &mut asteroids[large];
            debug_assert!(survivor.size > 0, "zero-size asteroid reached merge blending");

            let ratio = absorbed.size as f32 / survivor.size as f32;
            survivor.vel += ratio * (absorbed.vel - survivor.vel);
            removed[small] = true;
            merged += 1;

            log::debug!(
                "Asteroid (size {}) absorbed by asteroid (size {})",
                absorbed.size,
                survivor.size
            );

            if small == i {
                break;
            }
        }
    }

    compact(asteroids, &removed);
    merged
}

/// Resolve every bullet against the asteroid field
///
/// Each bullet tests asteroids in population order and stops at its first
/// hit: the bullet is parked off-field (the later prune removes it) and the
/// struck asteroid is removed, splitting first if it is at least
/// `asteroid_size_min`. Children may be smaller than that minimum; they are
/// destroyed by their next hit.
pub fn resolve_bullet_hits(
    asteroids: &mut Vec<Transform>,
    bullets: &mut [Transform],
    tuning: &Tuning,
) -> HitSummary {
    let mut removed = vec![false; asteroids.len()];
    let mut summary = HitSummary::default();

    for bullet in bullets.iter_mut() {
        let Some(idx) = (0..asteroids.len()).find(|&i| {
            !removed[i] && point_in_circle(bullet.pos, asteroids[i].pos, asteroids[i].radius())
        }) else {
            continue;
        };

        let parent = asteroids[idx];
        removed[idx] = true;

        if tuning.splits(parent.size) {
            let children = split(&parent, bullet.vel, tuning.asteroid_split_speed);
            asteroids.extend_from_slice(&children);
            removed.extend_from_slice(&[false, false]);
            summary.split += 1;
            log::debug!(
                "Asteroid (size {}) split into two of size {}",
                parent.size,
                children[0].size
            );
        } else {
            summary.destroyed += 1;
            log::debug!("Asteroid (size {}) destroyed", parent.size);
        }

        bullet.pos.x = BULLET_PARK_X;
    }

    compact(asteroids, &removed);
    summary
}

/// Fission children of `parent`, launched perpendicular to the bullet's path
///
/// Each child is pushed out from the parent's centre along its launch
/// direction by `size / 2 + 1` so the pair does not start overlapping.
pub fn split(parent: &Transform, bullet_vel: Vec2, split_speed: f32) -> [Transform; 2] {
    let heading = bullet_vel.screen_angle();
    let offset = parent.size as f32 / 2.0 + 1.0;
    let child_size = Tuning::child_size(parent.size);

    [heading + FRAC_PI_2, heading - FRAC_PI_2].map(|angle| {
        Transform::new(
            parent.pos + angle_to_vector(angle, offset),
            angle_to_vector(angle, split_speed) + parent.vel,
            child_size,
        )
    })
}

fn compact(asteroids: &mut Vec<Transform>, removed: &[bool]) {
    let mut idx = 0;
    asteroids.retain(|_| {
        let keep = !removed[idx];
        idx += 1;
        keep
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rock(x: f32, y: f32, size: u32) -> Transform {
        Transform::new(Vec2::new(x, y), Vec2::ZERO, size)
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_advance_wraps() {
        let field = Playfield::new(160, 100);
        let mut rocks = vec![Transform::new(Vec2::new(159.0, 1.0), Vec2::new(2.0, -2.0), 10)];
        advance(&mut rocks, field, 1.0);
        assert!(close(rocks[0].pos, Vec2::new(1.0, 99.0)));
    }

    #[test]
    fn test_merge_keeps_larger_and_blends_velocity() {
        let mut rocks = vec![
            Transform::new(Vec2::new(10.0, 10.0), Vec2::new(0.0, 0.0), 20),
            Transform::new(Vec2::new(20.0, 10.0), Vec2::new(4.0, 0.0), 10),
        ];
        assert_eq!(merge_collisions(&mut rocks), 1);
        assert_eq!(rocks.len(), 1);
        assert_eq!(rocks[0].size, 20);
        // 0 + (10 / 20) * (4 - 0)
        assert!(close(rocks[0].vel, Vec2::new(2.0, 0.0)));
    }

    #[test]
    fn test_merge_tie_absorbs_later() {
        let mut rocks = vec![
            Transform::new(Vec2::new(10.0, 10.0), Vec2::ZERO, 10),
            Transform::new(Vec2::new(15.0, 10.0), Vec2::new(0.0, 2.0), 10),
        ];
        merge_collisions(&mut rocks);
        assert_eq!(rocks.len(), 1);
        assert_eq!(rocks[0].pos, Vec2::new(10.0, 10.0));
        assert!(close(rocks[0].vel, Vec2::new(0.0, 2.0)));
    }

    #[test]
    fn test_merge_does_not_skip_neighbour_after_removal() {
        // 0 absorbs 1, and must still meet 2 which sits right after it
        let mut rocks = vec![rock(50.0, 50.0, 20), rock(55.0, 50.0, 9), rock(45.0, 50.0, 9)];
        assert_eq!(merge_collisions(&mut rocks), 2);
        assert_eq!(rocks.len(), 1);
        assert_eq!(rocks[0].size, 20);
    }

    #[test]
    fn test_absorbed_body_is_not_retested() {
        // 0 is absorbed by 1; 0 also overlaps 2 but must not touch it
        let mut rocks = vec![
            Transform::new(Vec2::new(50.0, 50.0), Vec2::new(5.0, 0.0), 9),
            Transform::new(Vec2::new(30.0, 50.0), Vec2::ZERO, 20),
            Transform::new(Vec2::new(62.0, 50.0), Vec2::ZERO, 9),
        ];
        assert_eq!(merge_collisions(&mut rocks), 1);
        assert_eq!(rocks.len(), 2);
        // 0 + (9 / 20) * (5 - 0)
        assert!(close(rocks[0].vel, Vec2::new(2.25, 0.0)));
        assert_eq!(rocks[1].vel, Vec2::ZERO);
    }

    #[test]
    fn test_merge_ignores_apart_bodies() {
        let mut rocks = vec![rock(10.0, 10.0, 8), rock(60.0, 60.0, 8)];
        assert_eq!(merge_collisions(&mut rocks), 0);
        assert_eq!(rocks.len(), 2);
    }

    #[test]
    fn test_split_scenario_bullet_moving_up() {
        let parent = Transform::new(Vec2::new(10.0, 10.0), Vec2::new(3.0, 0.0), 20);
        let [left, right] = split(&parent, Vec2::new(0.0, -50.0), 10.0);

        assert_eq!(left.size, 11);
        assert_eq!(right.size, 11);
        assert!(close(left.vel - parent.vel, Vec2::new(-10.0, 0.0)));
        assert!(close(right.vel - parent.vel, Vec2::new(10.0, 0.0)));
        assert!(close(left.pos, Vec2::new(-1.0, 10.0)));
        assert!(close(right.pos, Vec2::new(21.0, 10.0)));
    }

    #[test]
    fn test_fission_adds_exactly_one() {
        let tuning = Tuning::default();
        let mut rocks = vec![rock(10.0, 10.0, 20), rock(100.0, 80.0, 12)];
        let mut bullets = vec![Transform::bullet(Vec2::new(10.0, 12.0), Vec2::new(0.0, -50.0))];

        let summary = resolve_bullet_hits(&mut rocks, &mut bullets, &tuning);
        assert_eq!(summary, HitSummary { split: 1, destroyed: 0 });
        assert_eq!(rocks.len(), 3);
        assert_eq!(rocks[0].size, 12);
        assert!(rocks[1..].iter().all(|c| c.size < 20));
        assert_eq!(bullets[0].pos.x, BULLET_PARK_X);
    }

    #[test]
    fn test_minimum_size_splits_below_minimum() {
        let tuning = Tuning::default();
        let mut rocks = vec![rock(10.0, 10.0, tuning.asteroid_size_min)];
        let mut bullets = vec![Transform::bullet(Vec2::new(10.0, 10.0), Vec2::new(0.0, -50.0))];

        let summary = resolve_bullet_hits(&mut rocks, &mut bullets, &tuning);
        assert_eq!(summary, HitSummary { split: 1, destroyed: 0 });
        assert_eq!(rocks.len(), 2);
        assert!(rocks.iter().all(|c| c.size == 5));
    }

    #[test]
    fn test_below_minimum_is_destroyed_without_children() {
        let tuning = Tuning::default();
        let mut rocks = vec![rock(10.0, 10.0, tuning.asteroid_size_min - 1)];
        let mut bullets = vec![Transform::bullet(Vec2::new(10.0, 10.0), Vec2::new(0.0, -50.0))];

        let summary = resolve_bullet_hits(&mut rocks, &mut bullets, &tuning);
        assert_eq!(summary, HitSummary { split: 0, destroyed: 1 });
        assert!(rocks.is_empty());
    }

    #[test]
    fn test_split_boundary() {
        let tuning = Tuning::default();
        let min = tuning.asteroid_size_min;
        for (size, expected) in [(min - 1, 0), (min, 2), (10, 2), (11, 2), (13, 2)] {
            let mut rocks = vec![rock(50.0, 50.0, size)];
            let mut bullets = vec![Transform::bullet(Vec2::new(50.0, 50.0), Vec2::new(0.0, -50.0))];
            resolve_bullet_hits(&mut rocks, &mut bullets, &tuning);
            assert_eq!(rocks.len(), expected, "size {size}");
            assert!(rocks.iter().all(|c| c.size == Tuning::child_size(size)));
        }
    }

    #[test]
    fn test_one_hit_per_bullet() {
        let tuning = Tuning::default();
        let mut rocks = vec![rock(50.0, 50.0, 7), rock(52.0, 50.0, 7)];
        let mut bullets = vec![Transform::bullet(Vec2::new(51.0, 50.0), Vec2::new(0.0, -50.0))];

        let summary = resolve_bullet_hits(&mut rocks, &mut bullets, &tuning);
        assert_eq!(summary.hits(), 1);
        assert_eq!(rocks.len(), 1);
        assert_eq!(rocks[0].pos, Vec2::new(52.0, 50.0));
    }

    #[test]
    fn test_second_bullet_skips_removed_asteroid() {
        let tuning = Tuning::default();
        let mut rocks = vec![rock(50.0, 50.0, 7), rock(52.0, 50.0, 7)];
        let mut bullets = vec![
            Transform::bullet(Vec2::new(51.0, 50.0), Vec2::new(0.0, -50.0)),
            Transform::bullet(Vec2::new(51.0, 50.0), Vec2::new(0.0, -50.0)),
        ];

        let summary = resolve_bullet_hits(&mut rocks, &mut bullets, &tuning);
        assert_eq!(summary.destroyed, 2);
        assert!(rocks.is_empty());
    }

    #[test]
    fn test_later_bullet_can_hit_fresh_child() {
        let tuning = Tuning::default();
        let mut rocks = vec![rock(50.0, 50.0, 20)];
        let mut bullets = vec![
            Transform::bullet(Vec2::new(50.0, 50.0), Vec2::new(0.0, -50.0)),
            // right-hand child (size 11) lands centred at (61, 50)
            Transform::bullet(Vec2::new(61.0, 50.0), Vec2::new(0.0, -50.0)),
        ];

        let summary = resolve_bullet_hits(&mut rocks, &mut bullets, &tuning);
        assert_eq!(summary, HitSummary { split: 2, destroyed: 0 });
        assert_eq!(rocks.len(), 3);
        assert!(close(rocks[0].pos, Vec2::new(39.0, 50.0)));
        assert_eq!(rocks[0].size, 11);
        assert!(rocks[1..].iter().all(|c| c.size == 6));
    }

    #[test]
    fn test_fission_chain_runs_down_to_destruction() {
        // 20 -> 11 -> 6, and 6 is below the minimum so it just breaks up
        let tuning = Tuning::default();
        let mut rocks = vec![rock(50.0, 50.0, 20)];
        let mut bullets = vec![
            Transform::bullet(Vec2::new(50.0, 50.0), Vec2::new(0.0, -50.0)),
            Transform::bullet(Vec2::new(61.0, 50.0), Vec2::new(0.0, -50.0)),
            // right-hand grandchild: 61 + 11 / 2 + 1
            Transform::bullet(Vec2::new(67.5, 50.0), Vec2::new(0.0, -50.0)),
        ];

        let summary = resolve_bullet_hits(&mut rocks, &mut bullets, &tuning);
        assert_eq!(summary, HitSummary { split: 2, destroyed: 1 });
        assert!(bullets.iter().all(|b| b.pos.x == BULLET_PARK_X));

        let sizes: Vec<u32> = rocks.iter().map(|r| r.size).collect();
        assert_eq!(sizes, vec![11, 6]);
        assert!(close(rocks[1].pos, Vec2::new(54.5, 50.0)));
    }

    #[test]
    fn test_miss_leaves_bullet_alone() {
        let tuning = Tuning::default();
        let mut rocks = vec![rock(10.0, 10.0, 10)];
        let mut bullets = vec![Transform::bullet(Vec2::new(100.0, 90.0), Vec2::X)];
        let summary = resolve_bullet_hits(&mut rocks, &mut bullets, &tuning);
        assert_eq!(summary.hits(), 0);
        assert_eq!(rocks.len(), 1);
        assert_eq!(bullets[0].pos, Vec2::new(100.0, 90.0));
    }
}
