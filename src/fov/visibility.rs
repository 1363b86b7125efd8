//! The visible-region boundary produced each frame.

use crate::primitives::Point2;
use num_traits::Float;

/// One boundary vertex: where a sight ray ends.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityVertex<F> {
    /// Terminal point of the ray: on a blocking edge, or on the arc.
    pub point: Point2<F>,
    /// Control point of the quadratic curve from the previous vertex to this
    /// one; `None` means a straight segment.
    pub control: Option<Point2<F>>,
    /// Whether `point` lies on the sight circle rather than on an obstacle.
    pub on_arc: bool,
}

/// Boundary of the visible region, in sweep order.
///
/// The region is the closed path from the centre to the first vertex,
/// through every vertex (straight or curved per
/// [`control`](VisibilityVertex::control)), and back to the centre. The
/// first and last vertices lie on the two cone edges.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visibility<F> {
    centre: Point2<F>,
    vertices: Vec<VisibilityVertex<F>>,
}

impl<F: Float> Visibility<F> {
    pub fn new(centre: Point2<F>, vertices: Vec<VisibilityVertex<F>>) -> Self {
        Self { centre, vertices }
    }

    pub(crate) fn empty() -> Self {
        Self::new(Point2::origin(), Vec::new())
    }

    pub(crate) fn reset(&mut self, centre: Point2<F>) -> &mut Vec<VisibilityVertex<F>> {
        self.centre = centre;
        self.vertices.clear();
        &mut self.vertices
    }

    /// The observer's location, where the boundary starts and ends.
    #[inline]
    pub fn centre(&self) -> Point2<F> {
        self.centre
    }

    #[inline]
    pub fn vertices(&self) -> &[VisibilityVertex<F>] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Terminal points only, in order.
    pub fn points(&self) -> impl Iterator<Item = Point2<F>> + '_ {
        self.vertices.iter().map(|v| v.point)
    }

    /// Flattens the boundary into a closed polyline starting at the centre.
    ///
    /// Curved pieces are sampled with `segments` straight pieces each (at
    /// least one).
    pub fn to_polyline(&self, segments: usize) -> Vec<Point2<F>> {
        let segments = segments.max(1);
        let mut out = Vec::with_capacity(1 + self.vertices.len() * segments);
        out.push(self.centre);

        let mut from = self.centre;
        for v in &self.vertices {
            match v.control {
                Some(c) => {
                    let n = F::from(segments).unwrap();
                    for i in 1..=segments {
                        let t = F::from(i).unwrap() / n;
                        let u = F::one() - t;
                        let two = F::one() + F::one();
                        out.push(Point2::new(
                            u * u * from.x + two * u * t * c.x + t * t * v.point.x,
                            u * u * from.y + two * u * t * c.y + t * t * v.point.y,
                        ));
                    }
                }
                None => out.push(v.point),
            }
            from = v.point;
        }
        out
    }

    /// Area of the flattened boundary (shoelace formula).
    pub fn area(&self, segments: usize) -> F {
        let pts = self.to_polyline(segments);
        let n = pts.len();
        if n < 3 {
            return F::zero();
        }
        let two = F::one() + F::one();
        let twice = (0..n).fold(F::zero(), |acc, i| {
            let (a, b) = (pts[i], pts[(i + 1) % n]);
            acc + a.x * b.y - b.x * a.y
        });
        (twice / two).abs()
    }
}
