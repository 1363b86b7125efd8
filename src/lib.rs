//! sightcone - Occluder-aware 2D field of vision
//!
//! Computes the region an observer can see inside a circular sight cone when
//! polygons and walls get in the way. The boundary comes back as an ordered
//! list of points, with a quadratic-curve control point wherever the boundary
//! follows the sight circle, ready to be filled by any 2D renderer.
//!
//! Coordinates are screen-style (y grows downwards) and every comparison uses
//! an explicit tolerance from [`FovConfig`].
//!
//! # Example
//!
//! ```
//! use sightcone::{FieldOfView, FovConfig, Observer, Point2, Scene, Vec2};
//!
//! let scene = Scene::from_coords(&[
//!     &[100.0, 100.0, 200.0, 100.0, 200.0, 200.0, 100.0, 200.0][..],
//! ]).unwrap();
//! let observer = Observer::new(Point2::new(374.0, 203.0), Vec2::new(-0.707, 0.707));
//!
//! let mut fov = FieldOfView::new(FovConfig::default()).unwrap();
//! let visibility = fov.update(&scene, &observer);
//!
//! // Two hits on the rectangle, then the arc
//! assert_eq!(visibility.len(), 4);
//! assert!(!fov.is_point_visible(&scene, Point2::new(150.0, 150.0)));
//! ```

pub mod config;
pub mod error;
pub mod fov;
pub mod intersect;
pub mod io;
pub mod primitives;
pub mod scene;
pub mod sector;
pub mod tolerance;

pub use config::FovConfig;
pub use error::FovError;
pub use fov::{compute_visibility, FieldOfView, Visibility, VisibilityVertex};
pub use primitives::{Edge2, EdgeKind, Point2, Polygon, Vec2};
pub use scene::{EdgeId, Scene};
pub use sector::{classify, Observer, PointInSector, Sector};
