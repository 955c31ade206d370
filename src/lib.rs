//! Ringfall - gravity-driven balls inside a rotating segmented ring
//!
//! Core modules:
//! - `sim`: Simulation state (ball pool, ring geometry, collisions, preset)
//! - `runner`: Frame orchestration (lifecycle, timing, parameter surface)
//! - `render`: Drawing-sink abstraction the runner hands primitives to
//! - `settings`: Clamped, labeled tunables exposed to control surfaces
//! - `time`: Clock abstraction and FPS sampling

pub mod render;
pub mod runner;
pub mod settings;
pub mod sim;
pub mod time;

pub use render::{Canvas, Color, NullCanvas};
pub use runner::{Simulator, Snapshot};
pub use sim::Preset;

use glam::Vec2;

/// Simulation tuning constants
pub mod consts {
    /// Default downward acceleration, applied per reference frame
    pub const DEFAULT_GRAVITY: f32 = 0.2;
    /// Default per-tick velocity retention factor
    pub const DEFAULT_FRICTION: f32 = 0.99;
    /// Default multiplier on wall-clock delta
    pub const DEFAULT_TIME_SCALE: f32 = 1.0;
    /// Default energy retention on ring bounces
    pub const DEFAULT_RESTITUTION: f32 = 0.7;
    /// Default radius for newly spawned balls
    pub const DEFAULT_BALL_RADIUS: f32 = 15.0;
    /// Default ball pool capacity
    pub const DEFAULT_MAX_BALLS: usize = 100;

    /// Integration is tuned against this frame rate; deltas are scaled by it
    pub const REFERENCE_FPS: f32 = 60.0;
    /// Horizontal speed retention when bouncing off the canvas sides
    pub const WALL_DAMPING: f32 = 0.8;
    /// Balls further off-canvas than this are culled
    pub const OFFSCREEN_MARGIN: f32 = 100.0;

    /// Replacement balls per platform hit
    pub const SPLIT_CHILD_COUNT: usize = 2;
    /// Split children get velocity components drawn from plus/minus this
    pub const SPLIT_SPEED: f32 = 1.5;
    /// Spawn distance is drawn from this fraction of the free inner radius
    pub const SPAWN_RADIUS_FACTOR: f32 = 0.8;
    /// Gap kept between a spawned ball and the inner ring face
    pub const SPAWN_CLEARANCE: f32 = 5.0;

    /// Rendered platform thickness
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    /// Ring center sits at viewport height divided by this
    pub const RING_CENTER_Y_FACTOR: f32 = 2.4;
    /// Extra outward shove per unit of restitution above 1
    pub const OVERBOUNCE_KICK: f32 = 2.0;

    /// FPS counter sampling window
    pub const FPS_WINDOW_MS: f64 = 500.0;
}

/// Normalize an angle to [0, 2π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::TAU;
    while angle < 0.0 {
        angle += TAU;
    }
    while angle >= TAU {
        angle -= TAU;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Whether a point is inside the viewport extended by the cull margin
#[inline]
pub fn is_on_screen(pos: Vec2, width: f32, height: f32) -> bool {
    pos.x > -consts::OFFSCREEN_MARGIN
        && pos.x < width + consts::OFFSCREEN_MARGIN
        && pos.y > -consts::OFFSCREEN_MARGIN
        && pos.y < height + consts::OFFSCREEN_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::TAU;

    #[test]
    fn test_normalize_angle_wraps_positive() {
        assert!((normalize_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert!((normalize_angle(3.0 * TAU + 1.0) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_normalize_angle_wraps_negative() {
        assert!((normalize_angle(-0.5) - (TAU - 0.5)).abs() < 1e-5);
    }

    #[test]
    fn test_normalize_angle_identity_in_range() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!((normalize_angle(3.0) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_on_screen_margin() {
        assert!(is_on_screen(Vec2::new(-99.0, 300.0), 800.0, 600.0));
        assert!(!is_on_screen(Vec2::new(-101.0, 300.0), 800.0, 600.0));
        assert!(is_on_screen(Vec2::new(400.0, 699.0), 800.0, 600.0));
        assert!(!is_on_screen(Vec2::new(400.0, 701.0), 800.0, 600.0));
        assert!(is_on_screen(Vec2::new(899.0, 300.0), 800.0, 600.0));
        assert!(!is_on_screen(Vec2::new(901.0, 300.0), 800.0, 600.0));
    }

    proptest! {
        #[test]
        fn normalize_angle_lands_in_range(angle in -100.0f32..100.0) {
            let n = normalize_angle(angle);
            prop_assert!((0.0..TAU).contains(&n));
        }
    }
}
