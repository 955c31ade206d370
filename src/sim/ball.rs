//! Ball entities and the bounded pool that owns them

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::render::{BALL_PALETTE, Color};

/// A single ball
#[derive(Debug, Clone)]
pub struct Ball {
    /// Stable identifier, assigned in creation order
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Fixed at creation; later changes to the global ball radius leave
    /// existing balls untouched
    pub radius: f32,
    pub color: Color,
    /// Clock reading when the ball was created
    pub spawned_at_ms: f64,
}

/// Bounded, creation-ordered pool of balls.
///
/// The pool owns every live ball. Whenever an insert would push it over
/// capacity the oldest balls are evicted first, and removal always preserves
/// the creation order of the survivors.
#[derive(Debug)]
pub struct BallPool {
    balls: Vec<Ball>,
    capacity: usize,
    next_id: u32,
}

impl BallPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            balls: Vec::new(),
            capacity,
            next_id: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Ball> {
        self.balls.iter_mut()
    }

    pub fn clear(&mut self) {
        self.balls.clear();
    }

    /// Change the cap, evicting the oldest balls if the pool is over it.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        if self.balls.len() > capacity {
            let excess = self.balls.len() - capacity;
            self.balls.drain(..excess);
            log::debug!("capacity {capacity}: evicted {excess} oldest");
        }
    }

    /// Insert a ball, evicting the oldest first when the pool is full.
    /// At capacity 0 the pool stays empty and nothing is inserted.
    pub fn spawn(
        &mut self,
        pos: Vec2,
        vel: Vec2,
        radius: f32,
        now_ms: f64,
        rng: &mut Pcg32,
    ) -> Option<u32> {
        if self.capacity == 0 {
            return None;
        }
        if self.balls.len() >= self.capacity {
            let excess = self.balls.len() + 1 - self.capacity;
            self.balls.drain(..excess);
        }
        let id = self.next_id;
        self.next_id += 1;
        let color = BALL_PALETTE[rng.random_range(0..BALL_PALETTE.len())];
        self.balls.push(Ball {
            id,
            pos,
            vel,
            radius,
            color,
            spawned_at_ms: now_ms,
        });
        Some(id)
    }

    /// One integration step over every ball: gravity, friction, movement,
    /// and the bounce off the canvas sides. Deltas are in seconds and scaled
    /// to the reference frame rate. A non-positive delta skips integration
    /// but still resolves the canvas sides.
    pub fn integrate(&mut self, dt: f32, gravity: f32, friction: f32, bounds_width: f32) {
        for ball in &mut self.balls {
            if dt > 0.0 {
                ball.vel.y += gravity * dt * REFERENCE_FPS;
                ball.vel *= friction;
                ball.pos += ball.vel * dt * REFERENCE_FPS;
            }
            if ball.pos.x - ball.radius < 0.0 {
                ball.pos.x = ball.radius;
                ball.vel.x *= -WALL_DAMPING;
            } else if ball.pos.x + ball.radius > bounds_width {
                ball.pos.x = bounds_width - ball.radius;
                ball.vel.x *= -WALL_DAMPING;
            }
        }
    }

    /// Remove every ball whose id is listed, preserving order.
    /// Duplicate ids are harmless.
    pub fn remove_marked(&mut self, ids: &[u32]) {
        if ids.is_empty() {
            return;
        }
        self.balls.retain(|ball| !ids.contains(&ball.id));
    }
}
