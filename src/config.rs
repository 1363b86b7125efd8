//! Tunable constants of the visibility kernel.

use crate::error::FovError;
use num_traits::Float;

/// Parameters shared by every frame of one observer's field of vision.
///
/// `Default` reproduces the classic demo: a 240-unit sight radius, a
/// 114-degree cone and a 0.075 tolerance tuned for pixel-scale coordinates.
/// Scale `epsilon` along with the coordinate system.
///
/// # Example
///
/// ```
/// use sightcone::FovConfig;
///
/// let config = FovConfig::<f64>::default().with_radius(120.0);
/// assert!(config.validate().is_ok());
/// assert!(config.with_half_aperture(2.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FovConfig<F> {
    /// Sight radius.
    pub radius: F,
    /// Half of the cone's angular aperture, in radians.
    pub half_aperture: F,
    /// Tolerance for distance and cross-product comparisons.
    pub epsilon: F,
    /// Angle by which auxiliary rays are tilted off a vertex ray, in radians.
    pub aux_ray_tilt: F,
}

impl<F: Float> FovConfig<F> {
    /// Creates a configuration with the given radius and half-aperture and
    /// default tolerances.
    pub fn new(radius: F, half_aperture: F) -> Self {
        Self {
            radius,
            half_aperture,
            ..Self::default()
        }
    }

    pub fn with_radius(mut self, radius: F) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_half_aperture(mut self, half_aperture: F) -> Self {
        self.half_aperture = half_aperture;
        self
    }

    pub fn with_epsilon(mut self, epsilon: F) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_aux_ray_tilt(mut self, tilt: F) -> Self {
        self.aux_ray_tilt = tilt;
        self
    }

    /// Checks every parameter against its admissible range.
    pub fn validate(&self) -> Result<(), FovError> {
        let as_f64 = |v: F| v.to_f64().unwrap_or(f64::NAN);
        let half_pi = F::from(std::f64::consts::FRAC_PI_2).unwrap();

        if !self.radius.is_finite() || self.radius <= F::zero() {
            return Err(FovError::InvalidRadius(as_f64(self.radius)));
        }
        if !(self.half_aperture > F::zero() && self.half_aperture <= half_pi) {
            return Err(FovError::InvalidAperture(as_f64(self.half_aperture)));
        }
        if !self.epsilon.is_finite() || self.epsilon < F::zero() {
            return Err(FovError::InvalidTolerance(as_f64(self.epsilon)));
        }
        if !(self.aux_ray_tilt > F::zero() && self.aux_ray_tilt < half_pi) {
            return Err(FovError::InvalidTilt(as_f64(self.aux_ray_tilt)));
        }
        Ok(())
    }
}

impl<F: Float> Default for FovConfig<F> {
    fn default() -> Self {
        Self {
            radius: F::from(240.0).unwrap(),
            half_aperture: F::from(0.99484).unwrap(),
            epsilon: F::from(0.075).unwrap(),
            aux_ray_tilt: F::from(0.5_f64.to_radians()).unwrap(),
        }
    }
}
