//! Error types for solver configuration and spawning.

use core::fmt;

/// Errors that can occur while configuring the solver or adding bodies.
///
/// `Solver::update` never fails; every variant here is raised by a setter or
/// a spawn call before bad values can reach the integration passes.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Radius must be positive and finite.
    InvalidRadius,
    /// Sub-step count must be at least 1.
    InvalidSubSteps,
    /// Update rate must be at least 1 Hz.
    InvalidUpdateRate,
    /// Response coefficient must be in (0, 1].
    InvalidResponseCoefficient,
    /// Boundary radius must be positive and the center finite.
    InvalidBoundary,
    /// Position or velocity has a NaN or infinite component.
    NonFiniteVector,
    /// Body handle does not refer to a body in this solver.
    BodyOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidRadius => write!(f, "radius must be positive and finite"),
            PhysicsError::InvalidSubSteps => write!(f, "sub-step count must be at least 1"),
            PhysicsError::InvalidUpdateRate => write!(f, "update rate must be at least 1 Hz"),
            PhysicsError::InvalidResponseCoefficient => {
                write!(f, "response coefficient must be in (0, 1]")
            }
            PhysicsError::InvalidBoundary => {
                write!(f, "boundary needs a finite center and a positive radius")
            }
            PhysicsError::NonFiniteVector => write!(f, "vector has a non-finite component"),
            PhysicsError::BodyOutOfBounds { index, count } => {
                write!(f, "body index {} out of bounds (count: {})", index, count)
            }
        }
    }
}
