//! Simulation core
//!
//! Pure state and math: the ball pool, ring geometry, collision handling,
//! and the preset that ties them together. Nothing here reads the clock or
//! draws on its own; the `runner` module drives it all.

pub mod ball;
pub mod collision;
pub mod preset;
pub mod ring;
pub mod world;

pub use ball::{Ball, BallPool};
pub use collision::{SegmentHit, bounce_off_walls, circle_segment_overlap, crosses_platform};
pub use preset::{BallFate, Platform, Preset, RingSplit};
pub use ring::{RingState, WallKind, WallSegment, generate_wall_segments};
pub use world::{PhysicsParams, Viewport, World};
