//! Shared simulation state

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::ball::BallPool;
use crate::consts::*;
use crate::polar_to_cartesian;

/// Drawable area the simulation lives in
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Global physics tunables
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PhysicsParams {
    /// Downward acceleration per reference frame
    pub gravity: f32,
    /// Per-tick velocity retention
    pub friction: f32,
    /// Multiplier on wall-clock delta
    pub time_scale: f32,
    /// Energy retention on ring bounces
    pub restitution: f32,
    /// Radius given to newly spawned balls
    pub ball_radius: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            friction: DEFAULT_FRICTION,
            time_scale: DEFAULT_TIME_SCALE,
            restitution: DEFAULT_RESTITUTION,
            ball_radius: DEFAULT_BALL_RADIUS,
        }
    }
}

/// Everything the per-tick pipeline reads and writes
#[derive(Debug)]
pub struct World {
    pub viewport: Viewport,
    pub params: PhysicsParams,
    pub pool: BallPool,
    pub rng: Pcg32,
    /// Clock reading at the start of the current frame
    pub now_ms: f64,
}

impl World {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self {
            viewport: Viewport { width, height },
            params: PhysicsParams::default(),
            pool: BallPool::new(DEFAULT_MAX_BALLS),
            rng: Pcg32::seed_from_u64(seed),
            now_ms: 0.0,
        }
    }

    /// Spawn position inside the ring's free interior: angle uniform in
    /// [0, 2π), distance uniform in [0, inner_radius * 0.8). A non-positive
    /// annulus collapses to the center.
    pub fn random_spawn_pos(&mut self, center: Vec2, inner_radius: f32) -> Vec2 {
        let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
        let max_distance = inner_radius * SPAWN_RADIUS_FACTOR;
        let distance = if max_distance > 0.0 {
            self.rng.random_range(0.0..max_distance)
        } else {
            0.0
        };
        center + polar_to_cartesian(distance, angle)
    }

    /// Velocity for a freshly split ball, components uniform in ±SPLIT_SPEED
    pub fn random_split_velocity(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.random_range(-SPLIT_SPEED..SPLIT_SPEED),
            self.rng.random_range(-SPLIT_SPEED..SPLIT_SPEED),
        )
    }

    /// Spawn a resting ball somewhere inside the given free disc
    pub fn spawn_in_ring(&mut self, center: Vec2, inner_radius: f32) -> Option<u32> {
        let pos = self.random_spawn_pos(center, inner_radius);
        self.spawn_at(pos, Vec2::ZERO)
    }

    /// Spawn with explicit kinematics
    pub fn spawn_at(&mut self, pos: Vec2, vel: Vec2) -> Option<u32> {
        self.pool
            .spawn(pos, vel, self.params.ball_radius, self.now_ms, &mut self.rng)
    }
}
