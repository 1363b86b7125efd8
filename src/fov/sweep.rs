//! Radial sweep: order angle points, build rays and cast them.

use super::arc::arc_control_point;
use super::visibility::VisibilityVertex;
use crate::intersect::line_intersection;
use crate::primitives::{Edge2, Point2, Vec2};
use crate::sector::Sector;
use crate::tolerance::{are_parallel, is_zero};
use num_traits::Float;
use std::cmp::Ordering;

/// Sorts `points` by direction from the sector centre, starting at the
/// first cone edge and sweeping towards the second.
///
/// On screen (y down) this is counter-clockwise. Directions are compared by
/// cross product only, within two half-planes split along the direction
/// straight behind the observer. The cone never reaches behind, so its two
/// ends come first and last. Points sharing a direction keep their input
/// order.
pub fn sort_angularly<F: Float>(points: &mut [Point2<F>], sector: &Sector<F>) {
    let centre = sector.centre();
    let reference = -sector.mid_dir();
    let half = |v: Vec2<F>| {
        let c = reference.cross(v);
        if c < F::zero() || (c == F::zero() && reference.dot(v) > F::zero()) {
            0u8
        } else {
            1u8
        }
    };

    points.sort_by(|a, b| {
        let (va, vb) = (*a - centre, *b - centre);
        half(va).cmp(&half(vb)).then_with(|| {
            va.cross(vb)
                .partial_cmp(&F::zero())
                .unwrap_or(Ordering::Equal)
        })
    });
}

/// Builds one ray per angularly distinct point of an already sorted list.
///
/// A point whose direction is parallel (within `eps`) to the last kept ray
/// adds nothing; neither does a point sitting on the centre. The final point
/// is the exception: it replaces a parallel predecessor instead, so the
/// sweep always closes on exactly that direction. Rays are the raw
/// centre-to-point vectors, not normalised.
pub fn make_rays<F: Float>(
    points: &[Point2<F>],
    centre: Point2<F>,
    eps: F,
    rays: &mut Vec<Vec2<F>>,
) {
    let start = rays.len();
    for (i, &p) in points.iter().enumerate() {
        let ray = p - centre;
        if is_zero(ray, eps) {
            continue;
        }
        if let Some(&last) = rays.last() {
            if are_parallel(ray, last, eps) {
                if i + 1 < points.len() || rays.len() - start < 2 {
                    continue;
                }
                rays.pop();
            }
        }
        rays.push(ray);
    }
}

/// Nearest accepted hit of one ray.
#[derive(Debug, Clone, Copy)]
struct Hit<'a, F> {
    t: F,
    point: Point2<F>,
    distance_squared: F,
    blocker: &'a Edge2<F>,
}

/// Finds the nearest blocking edge along `ray`.
///
/// Hits within `eps` (squared distance) of the origin are discarded: an
/// observer standing on a wall or a vertex is not blinded by it.
fn nearest_hit<'a, F: Float>(
    ray: &Edge2<F>,
    blocking: &[&'a Edge2<F>],
    eps: F,
) -> Option<Hit<'a, F>> {
    let origin = ray.start();
    let mut best: Option<Hit<'a, F>> = None;
    for &edge in blocking {
        let Some((t, point)) = line_intersection(ray, edge, true, eps).hit() else {
            continue;
        };
        if best.map_or(false, |b| t >= b.t) {
            continue;
        }
        let distance_squared = point.distance_squared(origin);
        if distance_squared > eps {
            best = Some(Hit {
                t,
                point,
                distance_squared,
                blocker: edge,
            });
        } else {
            log::trace!("discarding hit at the observer's feet, t = {:?}", t.to_f64());
        }
    }
    best
}

/// Casts every ray against the blocking edges and appends one boundary
/// vertex per ray to `out`.
///
/// A ray ends on the nearest blocking edge unless that hit is missing or at
/// or beyond the sight radius, in which case it ends on the arc. Two
/// consecutive arc vertices are joined by a curve, except when the second
/// ray's blocker runs parallel to the chord between them: the boundary there
/// is that straight edge, not the arc.
pub fn shoot_rays<F: Float>(
    rays: &[Vec2<F>],
    blocking: &[&Edge2<F>],
    sector: &Sector<F>,
    eps: F,
    out: &mut Vec<VisibilityVertex<F>>,
) {
    let centre = sector.centre();
    let radius = sector.radius();
    let mut prev_arc_dir: Option<Vec2<F>> = None;

    for &dir in rays {
        let ray = Edge2::ray(centre, dir);
        let hit = nearest_hit(&ray, blocking, eps);

        let on_arc = match hit {
            None => true,
            Some(h) => h.distance_squared + eps - sector.radius_squared() >= F::zero(),
        };

        let unit = if on_arc { dir.normalize() } else { None };
        let Some(unit) = unit else {
            // Interior hit
            out.push(VisibilityVertex {
                point: hit.map_or(centre, |h| h.point),
                control: None,
                on_arc: false,
            });
            prev_arc_dir = None;
            continue;
        };

        let point = centre.offset(unit, radius);
        let control = prev_arc_dir.and_then(|prev_unit| {
            let cut_by_blocker = hit.map_or(false, |h| {
                let chord = out.last().map_or(Vec2::zero(), |v| v.point - point);
                are_parallel(h.blocker.direction(), chord, eps)
            });
            if cut_by_blocker {
                None
            } else {
                arc_control_point(unit, prev_unit, centre, radius)
            }
        });

        out.push(VisibilityVertex {
            point,
            control,
            on_arc: true,
        });
        prev_arc_dir = Some(unit);
    }
}
