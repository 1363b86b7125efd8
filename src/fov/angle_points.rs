//! Angle-point collection: which directions need their own sight ray.

use crate::intersect::{
    line_intersection, segment_arc_intersection, segment_intersects_circle, ArcIntersection,
};
use crate::primitives::{Edge2, Point2, Vec2};
use crate::scene::{EdgeId, Scene};
use crate::sector::{classify, PointInSector, Sector};
use num_traits::Float;
use std::collections::HashSet;

/// Exact value key of a point; `-0.0` and `0.0` share a key.
type PointKey = [(u64, i16, i8); 2];

fn point_key<F: Float>(p: Point2<F>) -> PointKey {
    [
        (p.x + F::zero()).integer_decode(),
        (p.y + F::zero()).integer_decode(),
    ]
}

/// A set of points deduplicated by exact coordinate value.
///
/// Insertion order is kept, so iterating a set built from the same input
/// always yields the same sequence.
#[derive(Debug, Clone, Default)]
pub struct AnglePointSet<F> {
    keys: HashSet<PointKey>,
    points: Vec<Point2<F>>,
}

impl<F: Float> AnglePointSet<F> {
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
            points: Vec::new(),
        }
    }

    /// Adds a point; returns `false` if an equal point was already present.
    pub fn insert(&mut self, p: Point2<F>) -> bool {
        let added = self.keys.insert(point_key(p));
        if added {
            self.points.push(p);
        }
        added
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.points.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point2<F>] {
        &self.points
    }
}

/// Cosine and sine of the auxiliary ray tilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuxTilt<F> {
    cos: F,
    sin: F,
}

impl<F: Float> AuxTilt<F> {
    pub fn new(angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { cos, sin }
    }
}

/// How a vertex sits in its polygon, for deciding on auxiliary rays.
#[derive(Debug, Clone, Copy)]
enum Corner<'a, F> {
    /// A ring vertex: `incoming` ends at it, `outgoing` starts from it.
    Joint {
        incoming: &'a Edge2<F>,
        outgoing: &'a Edge2<F>,
    },
    /// An end of a standalone wall; `away` runs from it along the wall.
    WallEnd { away: Vec2<F> },
}

/// Adds a polygon vertex as an angle point, plus the auxiliary points that
/// let sight continue past the corner.
///
/// The auxiliary points are the vertex ray rotated by the tilt either way.
/// Projecting the corner's edges onto the ray's perpendicular tells on which
/// side, if any, the corner leaves a gap to see through:
///
/// ```text
///    ALLOW PENETRATION          DISALLOW PENETRATION
///
///   ----------X                   \  polygon  /
///   polygon  / \  <- ray           X---------X
///           /   \                             \  <- ray
/// ```
///
/// Nothing is added for a vertex already in the set, which happens for every
/// vertex shared by two edges that both reach the cone. An auxiliary point
/// tilted past a cone edge is dropped; the cone end ray covers that side.
fn add_vertex<F: Float>(
    vertex: Point2<F>,
    corner: Corner<'_, F>,
    sector: &Sector<F>,
    tilt: AuxTilt<F>,
    eps: F,
    angle_points: &mut AnglePointSet<F>,
) {
    if !angle_points.insert(vertex) {
        return;
    }

    let centre = sector.centre();
    let ray = vertex - centre;
    let [ccw, cw] = ray.rotated_both_ways(tilt.cos, tilt.sin);
    let axis = ray.perpendicular();
    let mut add_aux = |offset: Vec2<F>| {
        let p = centre + offset;
        if classify(p, sector, eps) == PointInSector::Within {
            angle_points.insert(p);
        } else {
            log::trace!("auxiliary point past the cone edge dropped");
        }
    };

    match corner {
        Corner::WallEnd { away } => {
            let p = away.dot(axis);
            if p <= F::zero() {
                add_aux(ccw);
            }
            // Both when the wall runs along the ray
            if p >= F::zero() {
                add_aux(cw);
            }
        }
        Corner::Joint { incoming, outgoing } => {
            let p1 = incoming.direction().dot(axis);
            let p2 = outgoing.direction().dot(axis);
            if p1 >= F::zero() && p2 <= F::zero() {
                add_aux(ccw);
            } else if p1 <= F::zero() && p2 >= F::zero() {
                add_aux(cw);
            }
        }
    }
}

/// Walks every polygon edge of `scene`, adding the angle points it
/// contributes to `angle_points` and recording edges that can block sight
/// in `blocking`.
///
/// Per edge:
/// 1. edges not passing strictly inside the sight circle, or with both ends
///    behind the observer, are skipped;
/// 2. an edge with both ends within the cone contributes both vertices and
///    blocks;
/// 3. otherwise it contributes the vertices within the cone; if an end lies
///    beyond the circle its arc crossings inside the cone are added too. An
///    edge that contributed nothing still blocks if it crosses either cone
///    edge, unless both its circle crossings lie behind the observer.
///
/// Vertex angle points bring auxiliary points with them (see the tilt in
/// [`AuxTilt`]) as long as those stay within the cone; arc crossings do not.
/// Both outputs are appended to.
pub fn collect_angle_points<F: Float>(
    scene: &Scene<F>,
    sector: &Sector<F>,
    tilt: AuxTilt<F>,
    eps: F,
    angle_points: &mut AnglePointSet<F>,
    blocking: &mut Vec<EdgeId>,
) {
    for (pi, polygon) in scene.polygons().iter().enumerate() {
        for (ei, edge) in polygon.edges().iter().enumerate() {
            let id = EdgeId {
                polygon: pi,
                edge: ei,
            };
            if !segment_intersects_circle(edge, sector.centre(), sector.radius_squared()) {
                continue;
            }

            let c0 = classify(edge.start(), sector, eps);
            let c1 = classify(edge.end(), sector, eps);
            if c0 == PointInSector::Behind && c1 == PointInSector::Behind {
                log::trace!("edge {:?} lies behind the observer", id);
                continue;
            }

            let (corner0, corner1) = if polygon.is_wall() {
                let away = edge.direction();
                (Corner::WallEnd { away }, Corner::WallEnd { away: -away })
            } else {
                let (prev, next) = polygon.neighbours(ei);
                (
                    Corner::Joint {
                        incoming: prev,
                        outgoing: edge,
                    },
                    Corner::Joint {
                        incoming: edge,
                        outgoing: next,
                    },
                )
            };

            let mut blocks = false;
            if c0 == PointInSector::Within {
                add_vertex(edge.start(), corner0, sector, tilt, eps, angle_points);
                blocks = true;
            }
            if c1 == PointInSector::Within {
                add_vertex(edge.end(), corner1, sector, tilt, eps, angle_points);
                blocks = true;
            }

            // Fully inside the cone: cannot reach the arc
            if c0 == PointInSector::Within && c1 == PointInSector::Within {
                blocking.push(id);
                continue;
            }

            // Only an edge with an end beyond the circle can cross the arc
            let mut test_cone_edges = true;
            if c0 == PointInSector::Outside || c1 == PointInSector::Outside {
                match segment_arc_intersection(edge, sector, eps) {
                    Some(ArcIntersection::Within(points)) => {
                        for p in points {
                            angle_points.insert(p);
                        }
                        blocks = true;
                    }
                    Some(ArcIntersection::Behind) => test_cone_edges = false,
                    None => {}
                }
            }

            if blocks {
                blocking.push(id);
            } else if test_cone_edges
                && sector
                    .fov_edges()
                    .iter()
                    .any(|fov_edge| line_intersection(edge, fov_edge, false, eps).is_intersect())
            {
                blocking.push(id);
            } else {
                log::trace!("edge {:?} does not block", id);
            }
        }
    }
}
