//! Segmented ring boundary
//!
//! The ring is two concentric regular polygons (outer face and inner face)
//! with a contiguous run of segments left out as the hole. Geometry is
//! rebuilt from scratch every tick from the current parameters; segments are
//! never mutated in place.

use glam::Vec2;

use crate::{normalize_angle, polar_to_cartesian};

/// Which face of the ring a wall belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallKind {
    /// Outward-facing polygon edge
    Outer,
    /// Inward-facing polygon edge, wound opposite to the outer face
    Inner,
    /// Radial wall capping the ring at a hole boundary
    Side,
}

/// One straight collidable wall
#[derive(Debug, Clone, Copy)]
pub struct WallSegment {
    pub p1: Vec2,
    pub p2: Vec2,
    pub kind: WallKind,
}

/// Mutable ring state owned by the preset
#[derive(Debug, Clone)]
pub struct RingState {
    pub center: Vec2,
    /// Current rotation, kept in [0, 2π)
    pub rotation: f32,
    /// Index of the first hole segment. The hole itself never moves; the
    /// gap travels because the vertices rotate.
    pub hole_start: usize,
    /// Derived walls, always the regeneration of the current parameters
    pub segments: Vec<WallSegment>,
}

impl RingState {
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            rotation: 0.0,
            hole_start: 0,
            segments: Vec::new(),
        }
    }

    /// Advance the rotation and renormalize it
    pub fn rotate(&mut self, delta: f32) {
        self.rotation = normalize_angle(self.rotation + delta);
    }

    /// Rebuild the walls from the current parameters
    pub fn regenerate(
        &mut self,
        radius: f32,
        thickness: f32,
        segment_count: usize,
        hole_count: usize,
    ) {
        self.segments = generate_wall_segments(
            self.center,
            radius,
            thickness,
            segment_count,
            self.rotation,
            self.hole_start,
            hole_count,
        );
    }
}

/// Build the collidable walls of a segmented ring.
///
/// Both faces are regular polygons with `segment_count` vertices spaced
/// 2π/segment_count apart starting from angle 0, rotated rigidly by
/// `rotation` about `center`. Segments whose hole-relative index falls in
/// the hole run emit nothing; each solid segment emits its outer edge and
/// its reversed inner edge, and a radial side wall is added wherever solid
/// meets hole. A hole spanning everything is clamped so at least one
/// segment stays solid; a zero segment count yields no walls.
pub fn generate_wall_segments(
    center: Vec2,
    radius: f32,
    thickness: f32,
    segment_count: usize,
    rotation: f32,
    hole_start: usize,
    hole_count: usize,
) -> Vec<WallSegment> {
    if segment_count == 0 {
        return Vec::new();
    }
    let hole_start = hole_start % segment_count;
    let hole_count = hole_count.min(segment_count - 1);

    let inner_radius = radius - thickness;
    let step = std::f32::consts::TAU / segment_count as f32;
    let vertex = |r: f32, i: usize| center + polar_to_cartesian(r, rotation + step * i as f32);

    let outer: Vec<Vec2> = (0..segment_count).map(|i| vertex(radius, i)).collect();
    let inner: Vec<Vec2> = (0..segment_count).map(|i| vertex(inner_radius, i)).collect();

    let in_hole = |i: usize| (i + segment_count - hole_start) % segment_count < hole_count;

    let mut walls = Vec::with_capacity(segment_count * 2 + 2);
    for i in 0..segment_count {
        if in_hole(i) {
            continue;
        }
        let next = (i + 1) % segment_count;
        let prev = (i + segment_count - 1) % segment_count;

        walls.push(WallSegment {
            p1: outer[i],
            p2: outer[next],
            kind: WallKind::Outer,
        });
        walls.push(WallSegment {
            p1: inner[next],
            p2: inner[i],
            kind: WallKind::Inner,
        });
        if in_hole(next) {
            walls.push(WallSegment {
                p1: outer[next],
                p2: inner[next],
                kind: WallKind::Side,
            });
        }
        if in_hole(prev) {
            walls.push(WallSegment {
                p1: inner[i],
                p2: outer[i],
                kind: WallKind::Side,
            });
        }
    }
    walls
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CENTER: Vec2 = Vec2::new(400.0, 250.0);

    fn count_kind(walls: &[WallSegment], kind: WallKind) -> usize {
        walls.iter().filter(|w| w.kind == kind).count()
    }

    #[test]
    fn test_full_ring_has_no_sides() {
        let walls = generate_wall_segments(CENTER, 150.0, 15.0, 12, 0.0, 0, 0);
        assert_eq!(walls.len(), 24);
        assert_eq!(count_kind(&walls, WallKind::Outer), 12);
        assert_eq!(count_kind(&walls, WallKind::Inner), 12);
        assert_eq!(count_kind(&walls, WallKind::Side), 0);
    }

    #[test]
    fn test_hole_drops_edges_and_adds_sides() {
        let walls = generate_wall_segments(CENTER, 150.0, 15.0, 12, 0.0, 0, 2);
        assert_eq!(walls.len(), 22);
        assert_eq!(count_kind(&walls, WallKind::Outer), 10);
        assert_eq!(count_kind(&walls, WallKind::Inner), 10);
        assert_eq!(count_kind(&walls, WallKind::Side), 2);
    }

    #[test]
    fn test_oversized_hole_keeps_one_solid_segment() {
        let walls = generate_wall_segments(CENTER, 150.0, 15.0, 6, 0.0, 0, 40);
        // One solid segment: outer edge, inner edge, both caps
        assert_eq!(walls.len(), 4);
        assert_eq!(count_kind(&walls, WallKind::Side), 2);
    }

    #[test]
    fn test_zero_segments_is_empty() {
        let walls = generate_wall_segments(CENTER, 150.0, 15.0, 0, 0.0, 0, 0);
        assert!(walls.is_empty());
    }

    #[test]
    fn test_vertices_sit_on_both_faces() {
        let walls = generate_wall_segments(CENTER, 150.0, 15.0, 8, 0.3, 0, 0);
        for wall in &walls {
            let expected = match wall.kind {
                WallKind::Outer => 150.0,
                WallKind::Inner => 135.0,
                WallKind::Side => continue,
            };
            assert!(((wall.p1 - CENTER).length() - expected).abs() < 1e-3);
            assert!(((wall.p2 - CENTER).length() - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn test_rotation_is_rigid() {
        let theta = 0.7f32;
        let base = generate_wall_segments(CENTER, 150.0, 15.0, 12, 0.0, 0, 2);
        let turned = generate_wall_segments(CENTER, 150.0, 15.0, 12, theta, 0, 2);

        let rotate = |p: Vec2| {
            let rel = p - CENTER;
            CENTER + Vec2::new(
                rel.x * theta.cos() - rel.y * theta.sin(),
                rel.x * theta.sin() + rel.y * theta.cos(),
            )
        };

        assert_eq!(base.len(), turned.len());
        for (a, b) in base.iter().zip(turned.iter()) {
            assert_eq!(a.kind, b.kind);
            assert!((rotate(a.p1) - b.p1).length() < 1e-3);
            assert!((rotate(a.p2) - b.p2).length() < 1e-3);
        }
    }

    #[test]
    fn test_hole_start_offsets_the_gap() {
        let walls = generate_wall_segments(CENTER, 150.0, 15.0, 12, 0.0, 3, 2);
        assert_eq!(walls.len(), 22);
        // Segments 3 and 4 are the hole: segment 0 keeps its edges
        let first = &walls[0];
        assert!((first.p1 - (CENTER + Vec2::new(150.0, 0.0))).length() < 1e-3);
    }

    #[test]
    fn test_ring_state_regenerates_with_rotation() {
        let mut ring = RingState::new(CENTER);
        ring.regenerate(150.0, 15.0, 12, 2);
        assert_eq!(ring.segments.len(), 22);

        ring.rotate(std::f32::consts::TAU + 0.25);
        assert!((ring.rotation - 0.25).abs() < 1e-5);
        ring.regenerate(150.0, 15.0, 12, 2);
        let expected = CENTER + polar_to_cartesian(150.0, 0.25 + std::f32::consts::TAU / 12.0 * 2.0);
        assert!((ring.segments[0].p1 - expected).length() < 1e-3);
    }

    proptest! {
        #[test]
        fn wall_count_matches_formula(
            segment_count in 3usize..50,
            hole_count in 0usize..10,
            rotation in 0.0f32..std::f32::consts::TAU,
        ) {
            let walls = generate_wall_segments(
                CENTER, 150.0, 15.0, segment_count, rotation, 0, hole_count,
            );
            let solid = segment_count - hole_count.min(segment_count - 1);
            let sides = if hole_count == 0 { 0 } else { 2 };
            prop_assert_eq!(walls.len(), solid * 2 + sides);
        }
    }
}
