//! Drawing-sink abstraction
//!
//! The simulation never rasterizes anything itself. Each frame the runner
//! hands primitives to a [`Canvas`] implementation; the bundled
//! [`NullCanvas`] swallows them for headless runs.

use glam::Vec2;
use serde::Serialize;

/// RGB fill/stroke color handed to the drawing sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Fill colors drawn at random for new balls
pub const BALL_PALETTE: [Color; 6] = [
    Color::rgb(0xf3, 0x9c, 0x12),
    Color::rgb(0x2e, 0xcc, 0x71),
    Color::rgb(0x34, 0x98, 0xdb),
    Color::rgb(0x9b, 0x59, 0xb6),
    Color::rgb(0x1a, 0xbc, 0x9c),
    Color::rgb(0xf1, 0xc4, 0x0f),
];

/// Where each frame is drawn.
///
/// Implementations report the drawable size, which the runner re-reads every
/// frame so resizes take effect at the next tick.
pub trait Canvas {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    /// Wipe the frame before drawing
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
    /// Axis-aligned filled rectangle
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
}

/// Sink that discards every primitive
#[derive(Debug, Clone, Copy)]
pub struct NullCanvas {
    pub width: f32,
    pub height: f32,
}

impl NullCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Canvas for NullCanvas {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {}

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {}

    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _color: Color) {}

    fn fill_rect(&mut self, _origin: Vec2, _size: Vec2, _color: Color) {}
}
