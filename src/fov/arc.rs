//! Quadratic Bézier approximation of sight-circle arcs.

use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// Control point of a quadratic Bézier curve approximating the arc of radius
/// `radius` about `centre` between the directions `unit` and `other`.
///
/// Both directions must be of unit length. The control point lies on the
/// unit bisector at `radius * (2 - cos(θ/2))` from the centre, which puts the
/// curve's midpoint exactly on the circle; the half-angle cosine is read off
/// `unit · bisector`.
///
/// Returns `None` for opposite directions, which have no bisector.
///
/// # Example
///
/// ```
/// use sightcone::fov::arc_control_point;
/// use sightcone::primitives::{Point2, Vec2};
///
/// let c = arc_control_point(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Point2::origin(), 1.0)
///     .unwrap();
/// let expected = 2.0 - std::f64::consts::FRAC_1_SQRT_2;
/// assert!((c.x - expected * std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
/// ```
pub fn arc_control_point<F: Float>(
    unit: Vec2<F>,
    other: Vec2<F>,
    centre: Point2<F>,
    radius: F,
) -> Option<Point2<F>> {
    let bisector = (unit + other).normalize()?;
    let two = F::one() + F::one();
    Some(centre.offset(bisector, radius * (two - unit.dot(bisector))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_curve_midpoint_on_circle() {
        let centre = Point2::new(5.0_f64, -3.0);
        let radius = 40.0;
        let a = Vec2::new(0.8, 0.6);
        let b = Vec2::new(-0.28, 0.96);
        let c = arc_control_point(a, b, centre, radius).unwrap();

        let p0 = centre.offset(a, radius);
        let p2 = centre.offset(b, radius);
        let mid_x = (p0.x + 2.0 * c.x + p2.x) / 4.0;
        let mid_y = (p0.y + 2.0 * c.y + p2.y) / 4.0;
        assert_relative_eq!(Point2::new(mid_x, mid_y).distance(centre), radius, epsilon = 1e-9);
    }

    #[test]
    fn test_symmetric_in_direction_order() {
        let a = Vec2::new(1.0_f64, 0.0);
        let b = Vec2::new(0.0, 1.0);
        let c1 = arc_control_point(a, b, Point2::origin(), 10.0).unwrap();
        let c2 = arc_control_point(b, a, Point2::origin(), 10.0).unwrap();
        assert_relative_eq!(c1.x, c2.x, epsilon = 1e-12);
        assert_relative_eq!(c1.y, c2.y, epsilon = 1e-12);
    }

    #[test]
    fn test_tiny_arc_hugs_the_circle() {
        let a = Vec2::new(1.0_f64, 0.0);
        let b = Vec2::new(1.0, 1e-4).normalize().unwrap();
        let c = arc_control_point(a, b, Point2::origin(), 100.0).unwrap();
        assert_relative_eq!(c.distance(Point2::origin()), 100.0, epsilon = 1e-4);
    }

    #[test]
    fn test_opposite_directions() {
        let a = Vec2::new(1.0_f64, 0.0);
        assert!(arc_control_point(a, -a, Point2::origin(), 1.0).is_none());
    }
}
