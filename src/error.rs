//! Error types for sightcone construction.
//!
//! Only building a scene or a configuration can fail. The per-frame kernel
//! tolerates every degenerate configuration it can meet and never errors.

use thiserror::Error;

/// Errors raised while validating scene geometry or kernel parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FovError {
    /// Sight radius is not a finite positive number.
    #[error("sight radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    /// Half-aperture lies outside (0, π/2].
    #[error("half-aperture must lie in (0, π/2] radians, got {0}")]
    InvalidAperture(f64),

    /// Tolerance is negative or not finite.
    #[error("tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),

    /// Auxiliary ray tilt lies outside (0, π/2).
    #[error("auxiliary ray tilt must lie in (0, π/2) radians, got {0}")]
    InvalidTilt(f64),

    /// A polygon was given fewer than two vertices.
    #[error("polygon needs at least 2 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// A flat coordinate list had an odd number of values.
    #[error("coordinate list must hold x, y pairs, got {count} values")]
    OddCoordinateCount {
        /// Number of values supplied.
        count: usize,
    },
}
