//! Long-lived obstacle geometry.

use crate::error::FovError;
use crate::primitives::{Edge2, Polygon};
use num_traits::Float;

/// Identifies one edge of one polygon in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    pub polygon: usize,
    pub edge: usize,
}

/// The obstacles an observer looks at.
///
/// A scene is read-only during visibility computation and may be shared by
/// any number of observers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene<F> {
    polygons: Vec<Polygon<F>>,
}

impl<F: Float> Scene<F> {
    pub fn new(polygons: Vec<Polygon<F>>) -> Self {
        Self { polygons }
    }

    /// Builds a scene from flat `[x0, y0, x1, y1, ...]` coordinate lists, one
    /// per polygon.
    ///
    /// # Example
    ///
    /// ```
    /// use sightcone::Scene;
    ///
    /// let scene = Scene::<f64>::from_coords(&[
    ///     &[100.0, 100.0, 200.0, 100.0, 200.0, 200.0, 100.0, 200.0][..],
    ///     &[0.0, 0.0, 50.0, 0.0][..],
    /// ]).unwrap();
    /// assert_eq!(scene.polygons().len(), 2);
    /// assert_eq!(scene.edge_count(), 5);
    /// ```
    pub fn from_coords<C: AsRef<[F]>>(polygons: &[C]) -> Result<Self, FovError> {
        let polygons = polygons
            .iter()
            .map(|coords| Polygon::from_coords(coords.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(polygons))
    }

    /// Adds a polygon and returns its index.
    pub fn push(&mut self, polygon: Polygon<F>) -> usize {
        self.polygons.push(polygon);
        self.polygons.len() - 1
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon<F>] {
        &self.polygons
    }

    /// Looks up an edge; `None` if the id does not belong to this scene.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge2<F>> {
        self.polygons.get(id.polygon)?.edges().get(id.edge)
    }

    /// Total number of edges over all polygons.
    pub fn edge_count(&self) -> usize {
        self.polygons.iter().map(|p| p.edges().len()).sum()
    }
}
