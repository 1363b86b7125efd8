//! Geometric predicates with explicit tolerance.

use crate::primitives::{Edge2, Point2, Vec2};
use num_traits::Float;

/// Result of an orientation test of a vector against a reference direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `v` is rotated from the reference towards +y (cross product positive).
    Positive,
    /// `v` is rotated from the reference towards -y (cross product negative).
    Negative,
    /// `v` is parallel or anti-parallel to the reference (within tolerance).
    Parallel,
}

/// Classifies `v` against the `reference` direction.
///
/// Compares the raw cross product against `eps`, so the tolerance scales
/// with the lengths of both vectors.
#[inline]
pub fn orientation<F: Float>(reference: Vec2<F>, v: Vec2<F>, eps: F) -> Orientation {
    let cross = reference.cross(v);
    if cross > eps {
        Orientation::Positive
    } else if cross < -eps {
        Orientation::Negative
    } else {
        Orientation::Parallel
    }
}

/// Returns `true` if the vector is zero under the Manhattan norm:
/// `|x| + |y| <= eps`.
#[inline]
pub fn is_zero<F: Float>(v: Vec2<F>, eps: F) -> bool {
    v.x.abs() + v.y.abs() <= eps
}

/// Returns `true` if `|a × b| <= eps`.
///
/// Anti-parallel vectors count as parallel.
#[inline]
pub fn are_parallel<F: Float>(a: Vec2<F>, b: Vec2<F>, eps: F) -> bool {
    orientation(a, b, eps) == Orientation::Parallel
}

/// Checks if a point lies on the carrier line of an edge within tolerance.
///
/// The test is `|(p - start) × direction| <= eps`; where along the line the
/// point falls is not considered.
#[inline]
pub fn point_on_line<F: Float>(p: Point2<F>, line: &Edge2<F>, eps: F) -> bool {
    are_parallel(p - line.start(), line.direction(), eps)
}
