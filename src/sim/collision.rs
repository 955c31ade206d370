//! Collision detection and response against straight walls
//!
//! Detection is a clamped projection of the ball center onto each wall
//! segment; response is a positional push-out plus a damped reflection.

use glam::Vec2;

use super::ball::Ball;
use super::ring::WallSegment;
use crate::consts::OVERBOUNCE_KICK;

/// Result of a successful overlap test
#[derive(Debug, Clone, Copy)]
pub struct SegmentHit {
    /// Penetration depth (for position correction)
    pub overlap: f32,
    /// Unit normal from the wall toward the ball center; zero when the
    /// center sits on the wall itself
    pub normal: Vec2,
}

/// Check a ball outline against one wall segment.
pub fn circle_segment_overlap(center: Vec2, radius: f32, wall: &WallSegment) -> Option<SegmentHit> {
    let line = wall.p2 - wall.p1;
    let len_sq = line.length_squared();
    if len_sq < 1e-4 {
        return None; // Degenerate wall
    }

    let t = ((center - wall.p1).dot(line) / len_sq).clamp(0.0, 1.0);
    let closest = wall.p1 + line * t;
    let delta = center - closest;
    let dist_sq = delta.length_squared();
    if dist_sq >= radius * radius {
        return None;
    }

    let dist = dist_sq.sqrt();
    let normal = if dist > 1e-6 { delta / dist } else { Vec2::ZERO };
    Some(SegmentHit {
        overlap: radius - dist,
        normal,
    })
}

/// Push the ball out of the wall and reflect its velocity.
///
/// The reflection scales the normal component by `restitution`; a
/// restitution above 1 also shoves the ball outward along the normal.
pub fn resolve_hit(ball: &mut Ball, hit: &SegmentHit, restitution: f32) {
    ball.pos += hit.normal * hit.overlap;
    let vn = ball.vel.dot(hit.normal);
    ball.vel -= 2.0 * vn * hit.normal * restitution;
    if restitution > 1.0 {
        ball.vel += hit.normal * (restitution - 1.0) * OVERBOUNCE_KICK;
    }
}

/// Bounce the ball off the first wall it overlaps, in wall order.
/// Remaining overlaps are left for the following ticks.
pub fn bounce_off_walls(ball: &mut Ball, walls: &[WallSegment], restitution: f32) -> bool {
    for wall in walls {
        if let Some(hit) = circle_segment_overlap(ball.pos, ball.radius, wall) {
            resolve_hit(ball, &hit, restitution);
            return true;
        }
    }
    false
}

/// Platform trigger: the ball's lowest point has crossed the platform top.
pub fn crosses_platform(ball: &Ball, platform_y: f32) -> bool {
    ball.pos.y + ball.radius > platform_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::BALL_PALETTE;
    use crate::sim::ring::WallKind;

    fn wall(p1: Vec2, p2: Vec2) -> WallSegment {
        WallSegment {
            p1,
            p2,
            kind: WallKind::Outer,
        }
    }

    fn ball(pos: Vec2, vel: Vec2, radius: f32) -> Ball {
        Ball {
            id: 0,
            pos,
            vel,
            radius,
            color: BALL_PALETTE[0],
            spawned_at_ms: 0.0,
        }
    }

    #[test]
    fn test_overlap_reports_depth_and_unit_normal() {
        let wall = wall(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let hit = circle_segment_overlap(Vec2::new(5.0, -14.99), 15.0, &wall)
            .expect("ball touches the wall");
        assert!((hit.overlap - 0.01).abs() < 1e-3);
        assert!((hit.normal - Vec2::new(0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_separated_ball_misses() {
        let wall = wall(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert!(circle_segment_overlap(Vec2::new(5.0, -16.0), 15.0, &wall).is_none());
        // Past the endpoint the distance is measured to the corner
        assert!(circle_segment_overlap(Vec2::new(25.0, -5.0), 14.0, &wall).is_none());
    }

    #[test]
    fn test_projection_clamps_to_endpoint() {
        let wall = wall(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let hit = circle_segment_overlap(Vec2::new(12.0, -3.0), 5.0, &wall)
            .expect("corner contact");
        let dist = (4.0f32 + 9.0).sqrt();
        assert!((hit.overlap - (5.0 - dist)).abs() < 1e-4);
        let expected = Vec2::new(2.0, -3.0) / dist;
        assert!((hit.normal - expected).length() < 1e-5);
    }

    #[test]
    fn test_center_on_wall_yields_zero_normal() {
        let wall = wall(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let hit = circle_segment_overlap(Vec2::new(5.0, 0.0), 15.0, &wall)
            .expect("fully overlapping");
        assert_eq!(hit.normal, Vec2::ZERO);
        assert_eq!(hit.overlap, 15.0);
    }

    #[test]
    fn test_degenerate_wall_is_ignored() {
        let wall = wall(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0));
        assert!(circle_segment_overlap(Vec2::new(5.0, 5.0), 15.0, &wall).is_none());
    }

    #[test]
    fn test_resolve_pushes_out_and_reflects() {
        let mut ball = ball(Vec2::new(5.0, -14.0), Vec2::new(3.0, 4.0), 15.0);
        let hit = SegmentHit {
            overlap: 1.0,
            normal: Vec2::new(0.0, -1.0),
        };
        resolve_hit(&mut ball, &hit, 1.0);
        assert_eq!(ball.pos, Vec2::new(5.0, -15.0));
        assert!((ball.vel - Vec2::new(3.0, -4.0)).length() < 1e-4);
    }

    #[test]
    fn test_restitution_scales_normal_component_only() {
        let mut ball = ball(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0), 15.0);
        let hit = SegmentHit {
            overlap: 0.0,
            normal: Vec2::new(0.0, -1.0),
        };
        resolve_hit(&mut ball, &hit, 0.5);
        // Tangential component untouched, normal reversal halved
        assert!((ball.vel - Vec2::new(3.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_overbounce_adds_kick() {
        let mut ball = ball(Vec2::new(0.0, 0.0), Vec2::new(0.0, 4.0), 15.0);
        let hit = SegmentHit {
            overlap: 0.0,
            normal: Vec2::new(0.0, -1.0),
        };
        resolve_hit(&mut ball, &hit, 1.5);
        // Reflection takes vy from 4 to -8, the kick adds another -1
        assert!((ball.vel.y - (-9.0)).abs() < 1e-4);
    }

    #[test]
    fn test_first_overlapping_wall_wins() {
        let far = wall(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let near = wall(Vec2::new(0.0, -1.0), Vec2::new(10.0, -1.0));
        let walls = [far, near];

        let mut ball = ball(Vec2::new(5.0, -14.0), Vec2::ZERO, 15.0);
        assert!(bounce_off_walls(&mut ball, &walls, 0.7));
        // Resolved against the first wall in scan order, not the deepest
        assert_eq!(ball.pos, Vec2::new(5.0, -15.0));
        assert!(circle_segment_overlap(ball.pos, ball.radius, &near).is_some());
    }

    #[test]
    fn test_platform_trigger_uses_lowest_point() {
        let b = ball(Vec2::new(100.0, 570.0), Vec2::ZERO, 15.0);
        assert!(crosses_platform(&b, 580.0));
        let b = ball(Vec2::new(100.0, 560.0), Vec2::ZERO, 15.0);
        assert!(!crosses_platform(&b, 580.0));
    }
}
