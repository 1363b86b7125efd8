//! Field-of-vision computation.
//!
//! Each frame runs three stages against the observer's [`Sector`]:
//! - collect the angle points where visibility can change, and the edges
//!   that can block sight ([`collect_angle_points`])
//! - sort them around the observer and cast one ray per distinct direction
//!   ([`sort_angularly`], [`make_rays`], [`shoot_rays`])
//! - join consecutive arc points with quadratic curves
//!   ([`arc_control_point`])
//!
//! [`FieldOfView`] owns the working buffers and reuses them between frames.
//!
//! # Example
//!
//! ```
//! use sightcone::{FieldOfView, FovConfig, Observer, Point2, Scene, Vec2};
//!
//! let scene = Scene::from_coords(&[&[100.0, -20.0, 100.0, 20.0][..]]).unwrap();
//! let observer = Observer::new(Point2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
//!
//! let mut fov = FieldOfView::new(FovConfig::default()).unwrap();
//! let visibility = fov.update(&scene, &observer);
//! assert_eq!(visibility.len(), 6);
//!
//! assert!(fov.is_point_visible(&scene, Point2::new(50.0, 0.0)));
//! assert!(!fov.is_point_visible(&scene, Point2::new(150.0, 0.0)));
//! ```

mod angle_points;
mod arc;
mod sweep;
mod visibility;

pub use angle_points::{collect_angle_points, AnglePointSet, AuxTilt};
pub use arc::arc_control_point;
pub use sweep::{make_rays, shoot_rays, sort_angularly};
pub use visibility::{Visibility, VisibilityVertex};

use crate::config::FovConfig;
use crate::error::FovError;
use crate::intersect::{line_intersection, LineIntersection};
use crate::primitives::{Edge2, Point2, Vec2};
use crate::scene::{EdgeId, Scene};
use crate::sector::{classify, Observer, PointInSector, Sector};
use num_traits::Float;

/// One observer's field of vision, recomputed per frame.
///
/// Holds only per-frame working state; the scene is borrowed for each call
/// and may be shared between any number of `FieldOfView`s. Nothing carries
/// over from one frame to the next.
#[derive(Debug, Clone)]
pub struct FieldOfView<F> {
    config: FovConfig<F>,
    tilt: AuxTilt<F>,
    sector: Option<Sector<F>>,
    angle_set: AnglePointSet<F>,
    blocking: Vec<EdgeId>,
    angle_points: Vec<Point2<F>>,
    rays: Vec<Vec2<F>>,
    visibility: Visibility<F>,
}

impl<F: Float> FieldOfView<F> {
    /// Creates a field of view after validating `config`.
    pub fn new(config: FovConfig<F>) -> Result<Self, FovError> {
        config.validate()?;
        Ok(Self {
            tilt: AuxTilt::new(config.aux_ray_tilt),
            config,
            sector: None,
            angle_set: AnglePointSet::new(),
            blocking: Vec::new(),
            angle_points: Vec::new(),
            rays: Vec::new(),
            visibility: Visibility::empty(),
        })
    }

    /// Recomputes the visible region for `observer` looking into `scene`.
    pub fn update(&mut self, scene: &Scene<F>, observer: &Observer<F>) -> &Visibility<F> {
        let eps = self.config.epsilon;
        let sector = observer.sector(self.config.radius, self.config.half_aperture);

        self.angle_set.clear();
        self.blocking.clear();
        collect_angle_points(
            scene,
            &sector,
            self.tilt,
            eps,
            &mut self.angle_set,
            &mut self.blocking,
        );

        let [first, last] = sector.arc_ends();
        self.angle_points.clear();
        self.angle_points.push(first);
        self.angle_points.extend_from_slice(self.angle_set.as_slice());
        self.angle_points.push(last);
        sort_angularly(&mut self.angle_points, &sector);

        self.rays.clear();
        make_rays(&self.angle_points, sector.centre(), eps, &mut self.rays);

        let blocking: Vec<&Edge2<F>> = self
            .blocking
            .iter()
            .filter_map(|&id| scene.edge(id))
            .collect();
        let vertices = self.visibility.reset(sector.centre());
        shoot_rays(&self.rays, &blocking, &sector, eps, vertices);

        log::debug!(
            "fov update: {} angle points, {} blocking edges, {} rays, {} vertices",
            self.angle_points.len(),
            self.blocking.len(),
            self.rays.len(),
            self.visibility.len()
        );

        self.sector = Some(sector);
        &self.visibility
    }

    /// Whether `target` is in the cone with nothing in between, as of the
    /// last [`update`](Self::update). `scene` must be the one last updated
    /// against.
    ///
    /// Always `false` before the first update.
    pub fn is_point_visible(&self, scene: &Scene<F>, target: Point2<F>) -> bool {
        let Some(sector) = &self.sector else {
            return false;
        };
        let eps = self.config.epsilon;
        if classify(target, sector, eps) != PointInSector::Within {
            return false;
        }

        let centre = sector.centre();
        let sight = Edge2::segment(centre, target);
        !self
            .blocking
            .iter()
            .filter_map(|&id| scene.edge(id))
            .any(|edge| match line_intersection(&sight, edge, true, eps) {
                LineIntersection::Intersect {
                    point: Some(p), ..
                } => p.distance_squared(centre) > eps,
                _ => false,
            })
    }

    #[inline]
    pub fn config(&self) -> &FovConfig<F> {
        &self.config
    }

    /// The sector of the last update.
    #[inline]
    pub fn sector(&self) -> Option<&Sector<F>> {
        self.sector.as_ref()
    }

    /// The visible region of the last update.
    #[inline]
    pub fn visibility(&self) -> &Visibility<F> {
        &self.visibility
    }

    pub fn into_visibility(self) -> Visibility<F> {
        self.visibility
    }

    /// Angle points of the last update in sweep order, cone ends included.
    #[inline]
    pub fn angle_points(&self) -> &[Point2<F>] {
        &self.angle_points
    }

    /// Rays cast in the last update, one per distinct direction.
    #[inline]
    pub fn rays(&self) -> &[Vec2<F>] {
        &self.rays
    }

    /// Edges found able to block sight in the last update.
    #[inline]
    pub fn blocking_edges(&self) -> &[EdgeId] {
        &self.blocking
    }
}

/// Computes a single frame without keeping a [`FieldOfView`] around.
pub fn compute_visibility<F: Float>(
    scene: &Scene<F>,
    observer: &Observer<F>,
    config: FovConfig<F>,
) -> Result<Visibility<F>, FovError> {
    let mut fov = FieldOfView::new(config)?;
    fov.update(scene, observer);
    Ok(fov.into_visibility())
}
