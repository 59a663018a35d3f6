//! Configuration types for the solver.

use crate::boundary::CircularBoundary;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec;

/// Configuration for the solver: time stepping, gravity, contact response
/// and containment.
///
/// # Builder Pattern
/// ```
/// use pebble::config::SolverConfig;
/// use pebble::vec::Vec2;
///
/// let config: SolverConfig<Vec2<f32>> = SolverConfig::new()
///     .with_update_rate(60)
///     .with_sub_steps(8)
///     .with_gravity(Vec2::new(0.0, 1000.0))
///     .with_boundary(Vec2::new(500.0, 500.0), 450.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct SolverConfig<V: Vec> {
    /// Frames per simulated second. Frame dt is `1 / update_rate`. Default: 60.
    pub update_rate: u32,
    /// Number of sub-steps per frame. Higher = more stable. Default: 8.
    pub sub_steps: u32,
    /// Gravity acceleration vector. Default: 1000 along +y (screen space, y down).
    pub gravity: V,
    /// Fraction of each overlap removed per pass, in (0, 1]. Default: 0.75.
    pub response_coefficient: V::Scalar,
    /// Containment region. Default: radius 100 around the origin.
    pub boundary: CircularBoundary<V>,
}

impl<V: Vec> SolverConfig<V> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            update_rate: 60,
            sub_steps: 8,
            gravity: V::unit_y().scale(V::Scalar::from_f32(1000.0)),
            response_coefficient: V::Scalar::from_f32(0.75),
            boundary: CircularBoundary::new(V::zero(), V::Scalar::from_f32(100.0)),
        }
    }

    /// Set the frame rate the solver advances at.
    pub fn with_update_rate(mut self, rate: u32) -> Self {
        self.update_rate = rate;
        self
    }

    /// Set the number of sub-steps.
    pub fn with_sub_steps(mut self, sub_steps: u32) -> Self {
        self.sub_steps = sub_steps;
        self
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: V) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the contact response coefficient.
    pub fn with_response_coefficient(mut self, coefficient: V::Scalar) -> Self {
        self.response_coefficient = coefficient;
        self
    }

    /// Set the containment circle.
    pub fn with_boundary(mut self, center: V, radius: V::Scalar) -> Self {
        self.boundary = CircularBoundary::new(center, radius);
        self
    }

    /// Frame duration in seconds.
    pub fn frame_dt(&self) -> V::Scalar {
        V::Scalar::one() / V::Scalar::from_f32(self.update_rate as f32)
    }

    /// Sub-step duration in seconds.
    pub fn step_dt(&self) -> V::Scalar {
        self.frame_dt() / V::Scalar::from_f32(self.sub_steps as f32)
    }

    /// Checks every field against its domain.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        check_update_rate(self.update_rate)?;
        check_sub_steps(self.sub_steps)?;
        check_response_coefficient(self.response_coefficient)?;
        check_boundary(&self.boundary)?;
        if !self.gravity.is_finite() {
            return Err(PhysicsError::NonFiniteVector);
        }
        Ok(())
    }
}

impl<V: Vec> Default for SolverConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn check_update_rate(rate: u32) -> Result<(), PhysicsError> {
    if rate == 0 {
        return Err(PhysicsError::InvalidUpdateRate);
    }
    Ok(())
}

pub(crate) fn check_sub_steps(sub_steps: u32) -> Result<(), PhysicsError> {
    if sub_steps == 0 {
        return Err(PhysicsError::InvalidSubSteps);
    }
    Ok(())
}

pub(crate) fn check_response_coefficient<F: Float>(coefficient: F) -> Result<(), PhysicsError> {
    // NaN fails the first comparison
    if !(coefficient > F::zero()) || coefficient > F::one() {
        return Err(PhysicsError::InvalidResponseCoefficient);
    }
    Ok(())
}

pub(crate) fn check_boundary<V: Vec>(boundary: &CircularBoundary<V>) -> Result<(), PhysicsError> {
    if !boundary.center.is_finite()
        || !boundary.radius.is_finite()
        || !(boundary.radius > V::Scalar::zero())
    {
        return Err(PhysicsError::InvalidBoundary);
    }
    Ok(())
}
