//! 2D line type shared by scene edges and sight rays.

use super::{Point2, Vec2};
use num_traits::Float;

/// Whether an [`Edge2`] stops at its second end or runs on forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Bounded by both ends; parameters are valid in `[0, 1]`.
    Segment,
    /// Starts at the first end and is unbounded forward; parameters are
    /// valid in `[0, ∞)`. The second end only fixes the direction.
    Ray,
}

/// A directed line: two ends, the vector between them and its squared length.
///
/// The cached vector and squared length are derived in the constructors and
/// the fields are private, so they always agree with the ends.
///
/// # Example
///
/// ```
/// use sightcone::primitives::{Edge2, Point2};
///
/// let wall: Edge2<f64> = Edge2::segment(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
/// assert_eq!(wall.length_squared(), 25.0);
/// assert_eq!(wall.point_at(0.5), Point2::new(1.5, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge2<F> {
    ends: [Point2<F>; 2],
    direction: Vec2<F>,
    length_squared: F,
    kind: EdgeKind,
}

impl<F: Float> Edge2<F> {
    /// Creates a bounded segment from `start` to `end`.
    #[inline]
    pub fn segment(start: Point2<F>, end: Point2<F>) -> Self {
        Self::with_kind(start, end, EdgeKind::Segment)
    }

    /// Creates a ray from `origin` along `direction` (not necessarily unit).
    #[inline]
    pub fn ray(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self::with_kind(origin, origin + direction, EdgeKind::Ray)
    }

    fn with_kind(start: Point2<F>, end: Point2<F>, kind: EdgeKind) -> Self {
        let direction = end - start;
        Self {
            ends: [start, end],
            direction,
            length_squared: direction.magnitude_squared(),
            kind,
        }
    }

    /// Returns the first end (the origin for a ray).
    #[inline]
    pub fn start(&self) -> Point2<F> {
        self.ends[0]
    }

    /// Returns the second end.
    #[inline]
    pub fn end(&self) -> Point2<F> {
        self.ends[1]
    }

    /// Returns both ends.
    #[inline]
    pub fn ends(&self) -> [Point2<F>; 2] {
        self.ends
    }

    /// Returns the vector from the first end to the second.
    #[inline]
    pub fn direction(&self) -> Vec2<F> {
        self.direction
    }

    /// Returns the squared length of [`direction`](Self::direction).
    #[inline]
    pub fn length_squared(&self) -> F {
        self.length_squared
    }

    #[inline]
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    #[inline]
    pub fn is_ray(&self) -> bool {
        self.kind == EdgeKind::Ray
    }

    /// Returns the point at parameter `t`; `t = 1` is the second end.
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.ends[0].offset(self.direction, t)
    }

    /// Returns the parameter of the projection of `p` onto the carrier line.
    ///
    /// Unclamped; a zero-length edge yields a non-finite value.
    #[inline]
    pub fn inverse_lerp(&self, p: Point2<F>) -> F {
        (p - self.ends[0]).dot(self.direction) / self.length_squared
    }

    /// Computes the squared distance from `p` to the closest point of the
    /// edge, treating it as a segment.
    ///
    /// The projection parameter is clamped to `[0, 1]` and only the
    /// perpendicular remainder is measured; the closest point itself is
    /// never built.
    pub fn distance_squared_to_point(&self, p: Point2<F>) -> F {
        let to_p = p - self.ends[0];
        if self.length_squared <= F::zero() {
            return to_p.magnitude_squared();
        }
        let s = to_p.dot(self.direction) / self.length_squared;
        let s = s.max(F::zero()).min(F::one());
        (to_p - self.direction * s).magnitude_squared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_caches_direction_and_length() {
        let e: Edge2<f64> = Edge2::segment(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0));
        assert_eq!(e.direction(), Vec2::new(3.0, 4.0));
        assert_eq!(e.length_squared(), 25.0);
        assert_eq!(e.kind(), EdgeKind::Segment);
        assert!(!e.is_ray());
    }

    #[test]
    fn test_ray_end_follows_direction() {
        let r: Edge2<f64> = Edge2::ray(Point2::new(2.0, 2.0), Vec2::new(0.0, -3.0));
        assert!(r.is_ray());
        assert_eq!(r.end(), Point2::new(2.0, -1.0));
        assert_eq!(r.length_squared(), 9.0);
    }

    #[test]
    fn test_inverse_lerp() {
        let e: Edge2<f64> = Edge2::segment(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        assert_relative_eq!(e.inverse_lerp(Point2::new(2.5, 7.0)), 0.25);
        assert_relative_eq!(e.inverse_lerp(Point2::new(-5.0, 0.0)), -0.5);
        assert_relative_eq!(e.inverse_lerp(e.point_at(1.7)), 1.7);
    }

    #[test]
    fn test_distance_squared_clamps_to_ends() {
        let e: Edge2<f64> = Edge2::segment(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        assert_relative_eq!(e.distance_squared_to_point(Point2::new(5.0, 3.0)), 9.0);
        assert_relative_eq!(e.distance_squared_to_point(Point2::new(-3.0, 4.0)), 25.0);
        assert_relative_eq!(e.distance_squared_to_point(Point2::new(13.0, -4.0)), 25.0);
    }

    #[test]
    fn test_degenerate_distance() {
        let p = Point2::new(5.0_f64, 5.0);
        let e = Edge2::segment(p, p);
        assert_eq!(e.distance_squared_to_point(Point2::new(8.0, 9.0)), 25.0);
    }
}
