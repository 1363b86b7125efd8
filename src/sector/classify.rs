//! Point–sector classification.

use super::Sector;
use crate::primitives::Point2;
use num_traits::Float;

/// Where a point lies relative to a sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointInSector {
    /// In front of the observer and inside the bounding circle, but outside
    /// the cone's angular range.
    FrontSemicircle,
    /// On or behind the line through the centre perpendicular to the facing.
    Behind,
    /// In front, but beyond the bounding circle by more than the tolerance.
    Outside,
    /// Inside the cone: in front, within the circle and between the two
    /// cone edges. Points on the arc count as within.
    Within,
}

/// Classifies `p` against `sector`.
///
/// The cone test uses two cross-product signs and works for any point, not
/// only for points on the circle. Coordinates are screen-style (y down), so
/// a direction between the cone edges satisfies
/// `edge0 × v <= 0` and `v × edge1 <= 0`, where `edge0` is the facing rotated
/// towards +y and `edge1` the facing rotated towards -y.
pub fn classify<F: Float>(p: Point2<F>, sector: &Sector<F>, eps: F) -> PointInSector {
    let v = p - sector.centre();
    if v.dot(sector.mid_dir()) <= F::zero() {
        return PointInSector::Behind;
    }

    if v.magnitude_squared() - sector.radius_squared() > eps {
        return PointInSector::Outside;
    }

    let [edge0, edge1] = sector.fov_edges();
    if edge0.direction().cross(v) <= F::zero() && v.cross(edge1.direction()) <= F::zero() {
        PointInSector::Within
    } else {
        PointInSector::FrontSemicircle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Vec2;
    use std::f64::consts::FRAC_PI_4;

    fn east_sector() -> Sector<f64> {
        Sector::new(Point2::new(0.0, 0.0), Vec2::unit_x(), 10.0, FRAC_PI_4)
    }

    #[test]
    fn test_behind() {
        let s = east_sector();
        assert_eq!(classify(Point2::new(-1.0, 0.0), &s, 0.075), PointInSector::Behind);
        // Exactly abeam counts as behind
        assert_eq!(classify(Point2::new(0.0, 5.0), &s, 0.075), PointInSector::Behind);
        assert_eq!(classify(s.centre(), &s, 0.075), PointInSector::Behind);
    }

    #[test]
    fn test_outside() {
        let s = east_sector();
        assert_eq!(classify(Point2::new(10.5, 0.0), &s, 0.075), PointInSector::Outside);
    }

    #[test]
    fn test_within() {
        let s = east_sector();
        assert_eq!(classify(Point2::new(5.0, 0.0), &s, 0.075), PointInSector::Within);
        assert_eq!(classify(Point2::new(5.0, 4.9), &s, 0.075), PointInSector::Within);
        assert_eq!(classify(Point2::new(5.0, -4.9), &s, 0.075), PointInSector::Within);
    }

    #[test]
    fn test_front_semicircle() {
        let s = east_sector();
        assert_eq!(
            classify(Point2::new(1.0, 5.0), &s, 0.075),
            PointInSector::FrontSemicircle
        );
        assert_eq!(
            classify(Point2::new(1.0, -5.0), &s, 0.075),
            PointInSector::FrontSemicircle
        );
    }

    #[test]
    fn test_arc_tolerance_band() {
        let s = east_sector();
        // r² = 100; 10.003² - 100 ≈ 0.06 stays inside the band
        assert_eq!(classify(Point2::new(10.003, 0.0), &s, 0.075), PointInSector::Within);
        // 10.004² - 100 ≈ 0.08 falls outside
        assert_eq!(classify(Point2::new(10.004, 0.0), &s, 0.075), PointInSector::Outside);
    }

    #[test]
    fn test_cone_edge_ends_are_within() {
        let s = east_sector();
        for edge in s.fov_edges() {
            assert_eq!(classify(edge.end(), &s, 0.075), PointInSector::Within);
        }
    }
}
