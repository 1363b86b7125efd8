//! Obstacle polygons with cached edges.

use super::{Edge2, Point2};
use crate::error::FovError;
use num_traits::Float;

/// An obstacle: an ordered vertex ring and the edges derived from it.
///
/// With three or more vertices the ring is closed and edge `i` runs from
/// vertex `i` to vertex `(i + 1) % n`. Two vertices make a single open edge,
/// a standalone wall. Edges are built once in the constructor.
///
/// # Example
///
/// ```
/// use sightcone::primitives::{Point2, Polygon};
///
/// let wall = Polygon::<f64>::from_coords(&[0.0, 0.0, 10.0, 0.0]).unwrap();
/// assert!(wall.is_wall());
/// assert_eq!(wall.edges().len(), 1);
///
/// let square = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ]).unwrap();
/// assert_eq!(square.edges().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    vertices: Vec<Point2<F>>,
    edges: Vec<Edge2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a polygon from its vertices.
    ///
    /// Self-intersecting or otherwise degenerate rings are not detected.
    pub fn new(vertices: Vec<Point2<F>>) -> Result<Self, FovError> {
        let n = vertices.len();
        if n < 2 {
            return Err(FovError::TooFewVertices { count: n });
        }

        let edge_count = if n > 2 { n } else { 1 };
        let edges = (0..edge_count)
            .map(|i| Edge2::segment(vertices[i], vertices[(i + 1) % n]))
            .collect();

        Ok(Self { vertices, edges })
    }

    /// Creates a polygon from a flat `[x0, y0, x1, y1, ...]` list.
    pub fn from_coords(coords: &[F]) -> Result<Self, FovError> {
        if coords.len() % 2 != 0 {
            return Err(FovError::OddCoordinateCount {
                count: coords.len(),
            });
        }
        let vertices = coords
            .chunks_exact(2)
            .map(|xy| Point2::new(xy[0], xy[1]))
            .collect();
        Self::new(vertices)
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2<F>] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge2<F>] {
        &self.edges
    }

    /// Returns `true` for a two-vertex polygon (one open edge).
    #[inline]
    pub fn is_wall(&self) -> bool {
        self.edges.len() == 1
    }

    /// Returns the edges before and after edge `i` around the ring.
    ///
    /// A wall's only edge is its own neighbour on both sides.
    #[inline]
    pub fn neighbours(&self, i: usize) -> (&Edge2<F>, &Edge2<F>) {
        let n = self.edges.len();
        (&self.edges[(i + n - 1) % n], &self.edges[(i + 1) % n])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_ring_edges() {
        let tri: Polygon<f64> =
            Polygon::from_coords(&[374.0, 300.0, 374.0, 450.0, 400.0, 400.0]).unwrap();
        let edges = tri.edges();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2].start(), Point2::new(400.0, 400.0));
        assert_eq!(edges[2].end(), Point2::new(374.0, 300.0));
        for (i, e) in edges.iter().enumerate() {
            assert_eq!(e.end(), edges[(i + 1) % 3].start());
        }
    }

    #[test]
    fn test_wall_is_its_own_neighbour() {
        let wall: Polygon<f64> = Polygon::from_coords(&[0.0, 0.0, 5.0, 5.0]).unwrap();
        let (prev, next) = wall.neighbours(0);
        assert_eq!(prev, &wall.edges()[0]);
        assert_eq!(next, &wall.edges()[0]);
    }

    #[test]
    fn test_ring_neighbours_wrap() {
        let sq: Polygon<f64> =
            Polygon::from_coords(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]).unwrap();
        let (prev, next) = sq.neighbours(0);
        assert_eq!(prev, &sq.edges()[3]);
        assert_eq!(next, &sq.edges()[1]);
        let (prev, next) = sq.neighbours(3);
        assert_eq!(prev, &sq.edges()[2]);
        assert_eq!(next, &sq.edges()[0]);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            Polygon::<f64>::from_coords(&[1.0, 2.0, 3.0]),
            Err(FovError::OddCoordinateCount { count: 3 })
        );
        assert_eq!(
            Polygon::<f64>::new(vec![Point2::new(0.0, 0.0)]),
            Err(FovError::TooFewVertices { count: 1 })
        );
    }
}
