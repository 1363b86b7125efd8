//! The observer and its vision cone.
//!
//! A [`Sector`] is rebuilt from the [`Observer`] every frame: its centre is
//! the observer's location, its mid-direction the observer's facing, and its
//! two bounding edges run from the centre to the arc's end points.
//!
//! # Example
//!
//! ```
//! use sightcone::sector::{classify, Observer, PointInSector};
//! use sightcone::primitives::{Point2, Vec2};
//!
//! let observer = Observer::new(Point2::new(0.0, 0.0), Vec2::new(0.0, 1.0));
//! let sector = observer.sector(100.0, 0.5);
//!
//! assert_eq!(classify(Point2::new(0.0, 50.0), &sector, 0.075), PointInSector::Within);
//! assert_eq!(classify(Point2::new(0.0, -50.0), &sector, 0.075), PointInSector::Behind);
//! ```

mod classify;

pub use classify::{classify, PointInSector};

use crate::primitives::{Edge2, Point2, Vec2};
use crate::tolerance::is_zero;
use num_traits::Float;

/// A bounded vision cone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector<F> {
    centre: Point2<F>,
    mid_dir: Vec2<F>,
    radius: F,
    radius_squared: F,
    fov_edges: [Edge2<F>; 2],
}

impl<F: Float> Sector<F> {
    /// Builds a sector facing along `mid_dir`, which must be a unit vector.
    ///
    /// `fov_edges()[0]` is `mid_dir` rotated by `half_aperture` towards +y,
    /// `fov_edges()[1]` the mirror image; both are `radius` long.
    pub fn new(centre: Point2<F>, mid_dir: Vec2<F>, radius: F, half_aperture: F) -> Self {
        let (sin, cos) = half_aperture.sin_cos();
        let [dir0, dir1] = mid_dir.rotated_both_ways(cos, sin);
        Self {
            centre,
            mid_dir,
            radius,
            radius_squared: radius * radius,
            fov_edges: [
                Edge2::segment(centre, centre + dir0 * radius),
                Edge2::segment(centre, centre + dir1 * radius),
            ],
        }
    }

    #[inline]
    pub fn centre(&self) -> Point2<F> {
        self.centre
    }

    /// Returns the unit facing direction.
    #[inline]
    pub fn mid_dir(&self) -> Vec2<F> {
        self.mid_dir
    }

    #[inline]
    pub fn radius(&self) -> F {
        self.radius
    }

    #[inline]
    pub fn radius_squared(&self) -> F {
        self.radius_squared
    }

    /// Returns the two bounding edges, centre to arc end.
    #[inline]
    pub fn fov_edges(&self) -> [Edge2<F>; 2] {
        self.fov_edges
    }

    /// Returns the two ends of the arc, in sweep order.
    #[inline]
    pub fn arc_ends(&self) -> [Point2<F>; 2] {
        [self.fov_edges[0].end(), self.fov_edges[1].end()]
    }

    /// Quadratic Bézier control point for the whole, unobstructed arc.
    ///
    /// Together with [`arc_ends`](Self::arc_ends) this outlines the bare
    /// sector: centre, first arc end, curve, second arc end, centre.
    pub fn arc_control_point(&self) -> Point2<F> {
        let two = F::one() + F::one();
        let half_cos = self.fov_edges[0].direction().dot(self.mid_dir) / self.radius;
        self.centre.offset(self.mid_dir, self.radius * (two - half_cos))
    }
}

/// Someone who looks: a location and a unit facing direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer<F> {
    location: Point2<F>,
    direction: Vec2<F>,
}

impl<F: Float> Observer<F> {
    /// Creates an observer at `location` facing along `direction`.
    ///
    /// The direction is normalised; a zero vector falls back to +x.
    pub fn new(location: Point2<F>, direction: Vec2<F>) -> Self {
        Self {
            location,
            direction: direction.normalize().unwrap_or_else(Vec2::unit_x),
        }
    }

    #[inline]
    pub fn location(&self) -> Point2<F> {
        self.location
    }

    /// Returns the unit facing direction.
    #[inline]
    pub fn direction(&self) -> Vec2<F> {
        self.direction
    }

    pub fn move_to(&mut self, location: Point2<F>) {
        self.location = location;
    }

    /// Turns to face along `direction`.
    ///
    /// A direction that is zero under `eps` leaves the facing unchanged.
    pub fn set_direction(&mut self, direction: Vec2<F>, eps: F) {
        if is_zero(direction, eps) {
            return;
        }
        if let Some(unit) = direction.normalize() {
            self.direction = unit;
        }
    }

    /// Turns to face `target`. Looking at one's own location is a no-op.
    pub fn look_at(&mut self, target: Point2<F>, eps: F) {
        self.set_direction(target - self.location, eps);
    }

    /// Builds this observer's sector for the current frame.
    pub fn sector(&self, radius: F, half_aperture: F) -> Sector<F> {
        Sector::new(self.location, self.direction, radius, half_aperture)
    }
}
