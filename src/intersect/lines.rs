//! Segment–segment and ray–segment intersection.
//!
//! Closed-form 2D solution after Real-Time Rendering §16.16.1, with
//! Antonio's early rejection: the signs of two dot products decide whether
//! the crossing lies on the second segment before anything is divided.

use crate::primitives::{Edge2, Point2};
use crate::tolerance::point_on_line;
use num_traits::Float;

/// Outcome of [`line_intersection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineIntersection<F> {
    /// The lines do not meet within their extents.
    Disjoint,
    /// The lines are parallel within tolerance.
    ///
    /// `hit` is only resolved for a ray against a colinear segment when a
    /// point was asked for; it is the first point of the segment the ray
    /// sees, with its ray parameter.
    Parallel {
        hit: Option<(F, Point2<F>)>,
    },
    /// The lines cross. `t` is the parameter along the first line; `point`
    /// is only computed when asked for.
    Intersect { t: F, point: Option<Point2<F>> },
}

impl<F: Float> LineIntersection<F> {
    /// Returns the parameter and point along the first line, if both are
    /// known. Colinear ray hits are included.
    #[inline]
    pub fn hit(&self) -> Option<(F, Point2<F>)> {
        match *self {
            LineIntersection::Intersect {
                t,
                point: Some(point),
            } => Some((t, point)),
            LineIntersection::Parallel { hit } => hit,
            _ => None,
        }
    }

    #[inline]
    pub fn is_intersect(&self) -> bool {
        matches!(self, LineIntersection::Intersect { .. })
    }
}

/// Intersects `line1` with the segment `line2`.
///
/// If `line1` is a [ray](crate::primitives::EdgeKind::Ray) it is unbounded
/// forward and bounded at its origin; otherwise both are segments. `line2`
/// is always treated as a segment.
///
/// Parallel lines (`|line2 · perp(line1)| <= eps`) are reported as
/// [`LineIntersection::Parallel`]. For a ray with `compute_point` set and a
/// segment on the ray's carrier line, the ray origin is located against the
/// segment: inside gives a hit at the origin (`t = 0`), a segment ahead gives
/// a hit at its nearer end, a segment behind gives none.
pub fn line_intersection<F: Float>(
    line1: &Edge2<F>,
    line2: &Edge2<F>,
    compute_point: bool,
    eps: F,
) -> LineIntersection<F> {
    let l1p = line1.direction().perpendicular();
    let f = line2.direction().dot(l1p);

    if f.abs() <= eps {
        let hit = if line1.is_ray() && compute_point && point_on_line(line2.start(), line1, eps)
        {
            colinear_ray_hit(line1, line2)
        } else {
            None
        };
        return LineIntersection::Parallel { hit };
    }

    let c = line1.start() - line2.start();
    let e = c.dot(l1p);
    // e / f is the parameter along line2; check it lies in [0, 1] by signs
    let on_line2 = if f > F::zero() {
        e >= F::zero() && e <= f
    } else {
        e <= F::zero() && e >= f
    };
    if !on_line2 {
        return LineIntersection::Disjoint;
    }

    let d = c.dot(line2.direction().perpendicular());
    // d / f is the parameter along line1; a ray only needs it non-negative
    let ahead = if f > F::zero() {
        d >= F::zero()
    } else {
        d <= F::zero()
    };
    let within = if f > F::zero() { d <= f } else { d >= f };
    if !(ahead && (line1.is_ray() || within)) {
        return LineIntersection::Disjoint;
    }

    let t = d / f;
    LineIntersection::Intersect {
        t,
        point: compute_point.then(|| line1.point_at(t)),
    }
}

/// First point of a colinear segment seen by a ray, with its ray parameter.
fn colinear_ray_hit<F: Float>(ray: &Edge2<F>, segment: &Edge2<F>) -> Option<(F, Point2<F>)> {
    let [a, b] = segment.ends();
    let ta = ray.inverse_lerp(a);
    let tb = ray.inverse_lerp(b);
    let (t_near, near, t_far) = if ta <= tb { (ta, a, tb) } else { (tb, b, ta) };

    if t_near <= F::zero() && t_far >= F::zero() {
        // Origin lies on the segment
        Some((F::zero(), ray.start()))
    } else if t_near > F::zero() {
        Some((t_near, near))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Vec2;
    use approx::assert_relative_eq;

    const EPS: f64 = 0.075;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Edge2<f64> {
        Edge2::segment(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    fn ray(x: f64, y: f64, dx: f64, dy: f64) -> Edge2<f64> {
        Edge2::ray(Point2::new(x, y), Vec2::new(dx, dy))
    }

    #[test]
    fn test_segments_crossing() {
        let r = line_intersection(&seg(0.0, 0.0, 10.0, 10.0), &seg(0.0, 10.0, 10.0, 0.0), true, EPS);
        let (t, p) = r.hit().unwrap();
        assert_relative_eq!(t, 0.5, epsilon = 1e-12);
        assert_relative_eq!(p.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_no_point_unless_asked() {
        let r = line_intersection(&seg(0.0, 0.0, 10.0, 10.0), &seg(0.0, 10.0, 10.0, 0.0), false, EPS);
        assert!(r.is_intersect());
        assert_eq!(r.hit(), None);
    }

    #[test]
    fn test_segments_short_of_each_other() {
        // line1 would need t = 2 to reach line2
        let r = line_intersection(&seg(0.0, 0.0, 5.0, 0.0), &seg(10.0, -5.0, 10.0, 5.0), true, EPS);
        assert_eq!(r, LineIntersection::Disjoint);
        // line2 is missed sideways
        let r = line_intersection(&seg(0.0, 0.0, 20.0, 0.0), &seg(10.0, 1.0, 10.0, 5.0), true, EPS);
        assert_eq!(r, LineIntersection::Disjoint);
    }

    #[test]
    fn test_ray_reaches_beyond_its_end() {
        let r = line_intersection(&ray(0.0, 0.0, 5.0, 0.0), &seg(10.0, -5.0, 10.0, 5.0), true, EPS);
        let (t, p) = r.hit().unwrap();
        assert_relative_eq!(t, 2.0, epsilon = 1e-12);
        assert_relative_eq!(p.x, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ray_ignores_segments_behind() {
        let r = line_intersection(&ray(0.0, 0.0, 5.0, 0.0), &seg(-10.0, -5.0, -10.0, 5.0), true, EPS);
        assert_eq!(r, LineIntersection::Disjoint);
    }

    #[test]
    fn test_both_orientations_of_second_segment() {
        for s in [seg(10.0, -5.0, 10.0, 5.0), seg(10.0, 5.0, 10.0, -5.0)] {
            let r = line_intersection(&ray(0.0, 0.0, 1.0, 0.0), &s, true, EPS);
            assert_relative_eq!(r.hit().unwrap().0, 10.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_parallel_offset() {
        let r = line_intersection(&ray(0.0, 0.0, 1.0, 0.0), &seg(5.0, 3.0, 9.0, 3.0), true, EPS);
        assert_eq!(r, LineIntersection::Parallel { hit: None });
    }

    #[test]
    fn test_colinear_segment_ahead() {
        // ---->   ______
        let r = line_intersection(&ray(0.0, 0.0, 1.0, 0.0), &seg(5.0, 0.0, 9.0, 0.0), true, EPS);
        let (t, p) = r.hit().unwrap();
        assert_relative_eq!(t, 5.0);
        assert_eq!(p, Point2::new(5.0, 0.0));

        // Same wall, drawn the other way round
        let r = line_intersection(&ray(0.0, 0.0, 1.0, 0.0), &seg(9.0, 0.0, 5.0, 0.0), true, EPS);
        assert_eq!(r.hit(), Some((5.0, Point2::new(5.0, 0.0))));
    }

    #[test]
    fn test_colinear_origin_inside_segment() {
        let r = line_intersection(&ray(6.0, 0.0, 1.0, 0.0), &seg(5.0, 0.0, 9.0, 0.0), true, EPS);
        assert_eq!(r.hit(), Some((0.0, Point2::new(6.0, 0.0))));
    }

    #[test]
    fn test_colinear_segment_behind() {
        for s in [seg(-9.0, 0.0, -5.0, 0.0), seg(-5.0, 0.0, -9.0, 0.0)] {
            let r = line_intersection(&ray(0.0, 0.0, 1.0, 0.0), &s, true, EPS);
            assert_eq!(r, LineIntersection::Parallel { hit: None });
        }
    }

    #[test]
    fn test_colinear_segments_not_resolved() {
        let r = line_intersection(&seg(0.0, 0.0, 1.0, 0.0), &seg(5.0, 0.0, 9.0, 0.0), true, EPS);
        assert_eq!(r, LineIntersection::Parallel { hit: None });
    }
}
