//! Floating-point geometric primitives.

mod edge2;
mod point2;
mod polygon;
mod vec2;

pub use edge2::{Edge2, EdgeKind};
pub use point2::Point2;
pub use polygon::Polygon;
pub use vec2::Vec2;
