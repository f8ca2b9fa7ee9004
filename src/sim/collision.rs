//! Geometric intersection tests
//!
//! Predicates the stepper queries every frame: point-in-circle for pointer
//! pickup, and circle-vs-segment penetration for the interactive edge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A line segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub p1: Vec2,
    pub p2: Vec2,
}

/// True iff `point` lies strictly inside the circle
#[inline]
pub fn point_intersects_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance(center) < radius
}

/// Angle in degrees of the vector from `p1` to `p2`, range (-180, 180]
#[inline]
pub fn angle_between_points(p1: Vec2, p2: Vec2) -> f32 {
    (p2.y - p1.y).atan2(p2.x - p1.x).to_degrees()
}

/// Signed penetration of a circle against a segment.
///
/// Projects the center onto the segment's line, clamps the closest point to
/// the endpoints when the projection falls outside `[0, len]`, and returns
/// `radius - distance(center, closest)`. Positive means the circle overlaps
/// the segment by that amount; callers pick their own trigger threshold, so
/// near misses can respond too.
///
/// The segment must have nonzero length (a zero-length direction has no
/// unit vector).
pub fn circle_segment_penetration(center: Vec2, radius: f32, segment: &Segment) -> f32 {
    let seg = segment.p2 - segment.p1;
    let seg_len = seg.length();
    assert!(seg_len > 0.0, "degenerate segment");
    let dir = seg / seg_len;

    let proj = (center - segment.p1).dot(dir);
    let closest = if proj <= 0.0 {
        segment.p1
    } else if proj >= seg_len {
        segment.p2
    } else {
        segment.p1 + dir * proj
    };

    radius - center.distance(closest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point_in_circle_strict() {
        let center = Vec2::new(10.0, 10.0);

        assert!(point_intersects_circle(Vec2::new(12.0, 10.0), center, 5.0));
        // exactly on the rim is outside (strict less-than)
        assert!(!point_intersects_circle(Vec2::new(15.0, 10.0), center, 5.0));
        assert!(!point_intersects_circle(Vec2::new(20.0, 10.0), center, 5.0));
    }

    #[test]
    fn test_angle_between_points() {
        let origin = Vec2::ZERO;

        assert_eq!(angle_between_points(origin, Vec2::new(1.0, 0.0)), 0.0);
        assert_eq!(angle_between_points(origin, Vec2::new(0.0, 1.0)), 90.0);
        assert_eq!(angle_between_points(origin, Vec2::new(0.0, -1.0)), -90.0);
        assert_eq!(angle_between_points(origin, Vec2::new(-1.0, 0.0)), 180.0);
        assert!((angle_between_points(origin, Vec2::new(1.0, 1.0)) - 45.0).abs() < 1e-4);
    }

    #[test]
    fn test_penetration_interior() {
        // Horizontal segment at y=100; circle center 4 above it
        let segment = Segment {
            p1: Vec2::new(0.0, 100.0),
            p2: Vec2::new(200.0, 100.0),
        };
        let pen = circle_segment_penetration(Vec2::new(50.0, 96.0), 10.0, &segment);
        assert!((pen - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_penetration_negative_when_clear() {
        let segment = Segment {
            p1: Vec2::new(0.0, 100.0),
            p2: Vec2::new(200.0, 100.0),
        };
        let pen = circle_segment_penetration(Vec2::new(50.0, 50.0), 10.0, &segment);
        assert!((pen - (-40.0)).abs() < 1e-4);
    }

    #[test]
    #[should_panic(expected = "degenerate segment")]
    fn test_penetration_zero_length_segment_panics() {
        let segment = Segment {
            p1: Vec2::new(50.0, 50.0),
            p2: Vec2::new(50.0, 50.0),
        };
        circle_segment_penetration(Vec2::new(0.0, 0.0), 10.0, &segment);
    }

    #[test]
    fn test_penetration_clamps_to_endpoints() {
        let segment = Segment {
            p1: Vec2::new(0.0, 0.0),
            p2: Vec2::new(100.0, 0.0),
        };
        // Center beyond p2: closest point is p2 itself
        let pen = circle_segment_penetration(Vec2::new(103.0, 4.0), 10.0, &segment);
        assert!((pen - 5.0).abs() < 1e-4);
        // Center before p1: closest point is p1
        let pen = circle_segment_penetration(Vec2::new(-3.0, 4.0), 10.0, &segment);
        assert!((pen - 5.0).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_vector_add_componentwise(
            ax in -1e3f32..1e3, ay in -1e3f32..1e3,
            bx in -1e3f32..1e3, by in -1e3f32..1e3,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!((a + b).x, ax + bx);
            prop_assert_eq!((a + b).y, ay + by);
        }

        #[test]
        fn prop_vector_scalar_broadcast(
            ax in -1e3f32..1e3, ay in -1e3f32..1e3, s in -1e3f32..1e3,
        ) {
            let a = Vec2::new(ax, ay);
            prop_assert_eq!((a + s).x, ax + s);
            prop_assert_eq!((a + s).y, ay + s);
            prop_assert_eq!((a * s).x, ax * s);
        }

        #[test]
        fn prop_unit_vector_has_length_one(
            ax in -1e3f32..1e3, ay in -1e3f32..1e3,
        ) {
            let a = Vec2::new(ax, ay);
            prop_assume!(a.length() > 1e-3);
            prop_assert!((a.normalize().length() - 1.0).abs() < 1e-4);
        }

        #[test]
        fn prop_penetration_positive_iff_overlap(
            cx in -500.0f32..500.0, cy in -500.0f32..500.0,
            radius in 1.0f32..100.0,
        ) {
            let segment = Segment {
                p1: Vec2::new(-100.0, 0.0),
                p2: Vec2::new(100.0, 0.0),
            };
            let center = Vec2::new(cx, cy);
            let pen = circle_segment_penetration(center, radius, &segment);

            // reference: brute-force closest distance to the segment
            let clamped_x = cx.clamp(-100.0, 100.0);
            let dist = center.distance(Vec2::new(clamped_x, 0.0));
            prop_assert!((pen - (radius - dist)).abs() < 1e-3);
        }
    }
}
