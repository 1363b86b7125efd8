//! Intersection tests between edges, rays, the sight circle and its arc.

mod circle;
mod lines;

pub use circle::{segment_arc_intersection, segment_intersects_circle, ArcIntersection};
pub use lines::{line_intersection, LineIntersection};
