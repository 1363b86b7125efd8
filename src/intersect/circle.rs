//! Segment–circle and segment–arc intersection.

use crate::primitives::{Edge2, Point2};
use crate::sector::{classify, PointInSector, Sector};
use num_traits::Float;

/// Tests whether a segment passes strictly inside a circle.
///
/// Compares the squared distance from `centre` to the closest point of the
/// segment against `radius_squared`. Tangent segments do not count: an edge
/// that only grazes the sight circle cannot hide anything inside it.
#[inline]
pub fn segment_intersects_circle<F: Float>(
    segment: &Edge2<F>,
    centre: Point2<F>,
    radius_squared: F,
) -> bool {
    segment.distance_squared_to_point(centre) < radius_squared
}

/// Outcome of intersecting a segment with a sector's arc.
#[derive(Debug, Clone, PartialEq)]
pub enum ArcIntersection<F> {
    /// The segment crosses the arc; the crossing points (one or two) that
    /// lie within the cone.
    Within(Vec<Point2<F>>),
    /// Both circle crossings lie behind the observer, so the segment cannot
    /// cut the sector at all.
    Behind,
}

/// Intersects a segment with the arc of `sector`.
///
/// Substitutes the segment's parametric form into the circle equation and
/// solves the quadratic with the cancellation-free root formula, branching
/// on the sign of the linear coefficient. Only roots in `[0, 1]` are kept,
/// and of those only points classified [`PointInSector::Within`] are
/// returned.
///
/// Returns `None` when the segment's line misses or touches the circle, when
/// both roots fall off the segment, and when the crossings found are neither
/// within the cone nor both behind the observer.
pub fn segment_arc_intersection<F: Float>(
    segment: &Edge2<F>,
    sector: &Sector<F>,
    eps: F,
) -> Option<ArcIntersection<F>> {
    let delta = segment.start() - sector.centre();
    let b = segment.direction().dot(delta);
    let a = segment.length_squared();
    let c = delta.magnitude_squared() - sector.radius_squared();
    let discriminant = b * b - a * c;

    // Only secants give angle points
    if discriminant <= F::zero() {
        return None;
    }

    let root = discriminant.sqrt();
    let (t1, t2) = if b >= F::zero() {
        let q = b + root;
        (-q / a, -c / q)
    } else {
        let q = root - b;
        (c / q, q / a)
    };

    let unit = F::zero()..=F::one();
    let mut crossings: [Option<PointInSector>; 2] = [None, None];
    let mut points = Vec::with_capacity(2);
    for (slot, t) in crossings.iter_mut().zip([t1, t2]) {
        if unit.contains(&t) {
            let p = segment.point_at(t);
            let class = classify(p, sector, eps);
            if class == PointInSector::Within {
                points.push(p);
            }
            *slot = Some(class);
        }
    }

    match crossings {
        // Contained in the circle: may still cut the cone, but not the arc
        [None, None] => None,
        [Some(PointInSector::Behind), Some(PointInSector::Behind)] => {
            Some(ArcIntersection::Behind)
        }
        _ if !points.is_empty() => Some(ArcIntersection::Within(points)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Vec2;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    const EPS: f64 = 0.075;

    fn east_sector() -> Sector<f64> {
        Sector::new(Point2::new(0.0, 0.0), Vec2::unit_x(), 10.0, FRAC_PI_4)
    }

    #[test]
    fn test_circle_hit_and_miss() {
        let centre = Point2::new(0.0, 0.0);
        let through = Edge2::segment(Point2::new(-20.0, 5.0), Point2::new(20.0, 5.0));
        assert!(segment_intersects_circle(&through, centre, 100.0));
        let far = Edge2::segment(Point2::new(-20.0, 15.0), Point2::new(20.0, 15.0));
        assert!(!segment_intersects_circle(&far, centre, 100.0));
    }

    #[test]
    fn test_circle_tangent_does_not_count() {
        let tangent = Edge2::segment(Point2::new(-20.0, 10.0), Point2::new(20.0, 10.0));
        assert!(!segment_intersects_circle(&tangent, Point2::new(0.0, 0.0), 100.0));
    }

    #[test]
    fn test_circle_short_segment_clamps() {
        // Carrier line passes through the centre, but the segment stops short
        let short = Edge2::segment(Point2::new(11.0, 0.0), Point2::new(30.0, 0.0));
        assert!(!segment_intersects_circle(&short, Point2::new(0.0, 0.0), 100.0));
    }

    #[test]
    fn test_arc_single_crossing() {
        let s = east_sector();
        let seg = Edge2::segment(Point2::new(5.0, 0.0), Point2::new(15.0, 0.0));
        match segment_arc_intersection(&seg, &s, EPS) {
            Some(ArcIntersection::Within(points)) => {
                assert_eq!(points.len(), 1);
                assert_relative_eq!(points[0].x, 10.0, epsilon = 1e-9);
                assert_relative_eq!(points[0].y, 0.0, epsilon = 1e-9);
            }
            other => panic!("expected a crossing, got {:?}", other),
        }
    }

    #[test]
    fn test_arc_double_crossing() {
        // Vertical chord x = 8 cuts the circle at y = ±6, both inside the cone
        let s = east_sector();
        let seg = Edge2::segment(Point2::new(8.0, -20.0), Point2::new(8.0, 20.0));
        match segment_arc_intersection(&seg, &s, EPS) {
            Some(ArcIntersection::Within(points)) => {
                assert_eq!(points.len(), 2);
                let mut ys: Vec<f64> = points.iter().map(|p| p.y).collect();
                ys.sort_by(|a, b| a.partial_cmp(b).unwrap());
                assert_relative_eq!(ys[0], -6.0, epsilon = 1e-9);
                assert_relative_eq!(ys[1], 6.0, epsilon = 1e-9);
            }
            other => panic!("expected two crossings, got {:?}", other),
        }
    }

    #[test]
    fn test_arc_behind() {
        let s = east_sector();
        let seg = Edge2::segment(Point2::new(-5.0, -20.0), Point2::new(-5.0, 20.0));
        assert_eq!(segment_arc_intersection(&seg, &s, EPS), Some(ArcIntersection::Behind));
    }

    #[test]
    fn test_arc_crossing_outside_cone() {
        // Crosses the circle at (6, ±8): in front, but wider than 45 degrees
        let s = east_sector();
        let seg = Edge2::segment(Point2::new(6.0, -20.0), Point2::new(6.0, 20.0));
        assert_eq!(segment_arc_intersection(&seg, &s, EPS), None);
    }

    #[test]
    fn test_arc_contained_segment() {
        let s = east_sector();
        let seg = Edge2::segment(Point2::new(2.0, -1.0), Point2::new(4.0, 1.0));
        assert_eq!(segment_arc_intersection(&seg, &s, EPS), None);
    }

    #[test]
    fn test_arc_miss() {
        let s = east_sector();
        let seg = Edge2::segment(Point2::new(20.0, -5.0), Point2::new(20.0, 5.0));
        assert_eq!(segment_arc_intersection(&seg, &s, EPS), None);
    }
}
