//! Boundary presets
//!
//! A preset owns the environment the balls live in: its geometry, its
//! tunables, its reaction to every ball each tick, and its own drawing.
//! Presets are a closed set dispatched statically.

use glam::Vec2;

use super::ball::Ball;
use super::collision::{bounce_off_walls, crosses_platform};
use super::ring::RingState;
use super::world::{Viewport, World};
use crate::consts::*;
use crate::render::{Canvas, Color};
use crate::settings::RingSettings;

/// Ring stroke color
const RING_COLOR: Color = Color::rgb(0x48, 0x34, 0xd4);
/// Platform fill color
const PLATFORM_COLOR: Color = Color::rgb(0xe7, 0x4c, 0x3c);
/// Stroke width for ring walls
const RING_LINE_WIDTH: f32 = 2.0;

/// What should happen to a ball after its collision pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallFate {
    Keep,
    /// Remove the ball and spawn replacements inside the ring
    Split,
}

/// Fixed platform the balls split on
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    /// Top edge, the trigger line
    pub y: f32,
}

/// The available boundary presets
#[derive(Debug)]
pub enum Preset {
    RingSplit(RingSplit),
}

impl Preset {
    pub fn ring_split() -> Self {
        Preset::RingSplit(RingSplit::new())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::RingSplit(_) => "Segmented Ring Split",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preset::RingSplit(_) => {
                "A rotating segmented ring where balls split when hitting the bottom platform"
            }
        }
    }

    /// Build the environment inside the world and seed it
    pub fn init(&mut self, world: &mut World) {
        match self {
            Preset::RingSplit(p) => p.init(world),
        }
    }

    /// Advance boundary state; called once per tick before collision
    /// resolution
    pub fn update(&mut self, viewport: Viewport, time_scale: f32) {
        match self {
            Preset::RingSplit(p) => p.update(viewport, time_scale),
        }
    }

    /// Resolve one ball against the environment
    pub fn handle_collisions(&self, ball: &mut Ball, restitution: f32) -> BallFate {
        match self {
            Preset::RingSplit(p) => p.handle_collisions(ball, restitution),
        }
    }

    /// Store a preset setting by name. Returns false for unknown names.
    pub fn set_setting(&mut self, name: &str, value: f32) -> bool {
        match self {
            Preset::RingSplit(p) => p.set_setting(name, value),
        }
    }

    pub fn settings(&self) -> &RingSettings {
        match self {
            Preset::RingSplit(p) => &p.settings,
        }
    }

    /// Center and free inner radius balls can spawn in
    pub fn spawn_zone(&self, ball_radius: f32) -> Option<(Vec2, f32)> {
        match self {
            Preset::RingSplit(p) => p.spawn_zone(ball_radius),
        }
    }

    /// Draw the environment (below the balls)
    pub fn render(&self, canvas: &mut impl Canvas) {
        match self {
            Preset::RingSplit(p) => p.render(canvas),
        }
    }
}

/// Rotating segmented ring over a fixed platform
#[derive(Debug)]
pub struct RingSplit {
    pub settings: RingSettings,
    ring: Option<RingState>,
    platform: Option<Platform>,
}

impl RingSplit {
    pub fn new() -> Self {
        Self {
            settings: RingSettings::default(),
            ring: None,
            platform: None,
        }
    }

    fn init(&mut self, world: &mut World) {
        let viewport = world.viewport;
        let center = Vec2::new(
            viewport.width / 2.0,
            viewport.height / RING_CENTER_Y_FACTOR,
        );
        self.ring = Some(RingState::new(center));
        self.platform = Some(Platform {
            y: viewport.height - PLATFORM_HEIGHT,
        });
        self.regenerate_geometry();

        if let Some((center, inner_radius)) = self.spawn_zone(world.params.ball_radius) {
            world.spawn_in_ring(center, inner_radius);
        }

        // This preset tunes the globals it was designed around
        world.params.gravity = 0.2;
        world.params.friction = 0.99;

        log::debug!(
            "ring preset: {} segments, hole {}",
            self.settings.segment_count(),
            self.settings.hole_count()
        );
    }

    fn regenerate_geometry(&mut self) {
        let Some(ring) = self.ring.as_mut() else {
            return;
        };
        ring.regenerate(
            self.settings.radius.value,
            self.settings.thickness.value,
            self.settings.segment_count(),
            self.settings.hole_count(),
        );
    }

    fn update(&mut self, viewport: Viewport, time_scale: f32) {
        let Some(ring) = self.ring.as_mut() else {
            return;
        };
        // Track horizontal resizes; the vertical anchor stays where init
        // put it
        ring.center.x = viewport.width / 2.0;
        ring.rotate(self.settings.rotation_speed.value * time_scale);
        self.regenerate_geometry();
    }

    fn handle_collisions(&self, ball: &mut Ball, restitution: f32) -> BallFate {
        if let Some(platform) = self.platform {
            if crosses_platform(ball, platform.y) {
                return BallFate::Split;
            }
        }
        if let Some(ring) = &self.ring {
            bounce_off_walls(ball, &ring.segments, restitution);
        }
        BallFate::Keep
    }

    fn set_setting(&mut self, name: &str, value: f32) -> bool {
        if !self.settings.set(name, value) {
            return false;
        }
        // Shrinking the ring below the hole size caps the hole so one
        // segment stays solid
        if name == "segments" && self.settings.hole_segments.value >= self.settings.segments.value {
            let capped = self.settings.segments.value - 1.0;
            self.settings.hole_segments.set(capped);
        }
        if matches!(name, "segments" | "hole_segments" | "radius" | "thickness") {
            self.regenerate_geometry();
            if let Some(ring) = &self.ring {
                log::debug!("rebuilt ring: {} walls", ring.segments.len());
            }
        }
        true
    }

    fn spawn_zone(&self, ball_radius: f32) -> Option<(Vec2, f32)> {
        let ring = self.ring.as_ref()?;
        let inner_radius = self.settings.radius.value
            - self.settings.thickness.value
            - ball_radius
            - SPAWN_CLEARANCE;
        Some((ring.center, inner_radius))
    }

    /// Current ring geometry, if the preset has been initialized
    pub fn ring(&self) -> Option<&RingState> {
        self.ring.as_ref()
    }

    fn render(&self, canvas: &mut impl Canvas) {
        let width = canvas.width();
        if let Some(platform) = self.platform {
            canvas.fill_rect(
                Vec2::new(0.0, platform.y),
                Vec2::new(width, PLATFORM_HEIGHT),
                PLATFORM_COLOR,
            );
        }
        if let Some(ring) = &self.ring {
            for wall in &ring.segments {
                canvas.stroke_line(wall.p1, wall.p2, RING_LINE_WIDTH, RING_COLOR);
            }
        }
    }
}

impl Default for RingSplit {
    fn default() -> Self {
        Self::new()
    }
}
