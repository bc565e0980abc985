//! Error types for construction and external point access.

use core::fmt;

/// Errors raised when building bodies and worlds or addressing points.
///
/// Stepping never fails; these only come from constructors and handle-based
/// access.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A body needs at least 2 points.
    InsufficientPoints { count: usize },
    /// Ring radius must be positive and finite.
    InvalidRadius,
    /// Body centre must be finite.
    InvalidCenter,
    /// World width and height must be positive.
    InvalidExtent,
    /// Mass must be positive and finite.
    InvalidMass,
    /// Stiffness must be non-negative and finite.
    InvalidStiffness,
    /// Damping must be non-negative and finite.
    InvalidDamping,
    /// Pop-in scale must be positive and finite.
    InvalidPopScale,
    /// Pressure inputs must be non-negative and finite.
    InvalidPressure,
    /// Body index is out of bounds.
    BodyOutOfBounds { index: usize, count: usize },
    /// Point index is out of bounds within its body.
    PointOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InsufficientPoints { count } => {
                write!(f, "body needs at least 2 points (got {})", count)
            }
            PhysicsError::InvalidRadius => write!(f, "radius must be positive and finite"),
            PhysicsError::InvalidCenter => write!(f, "center must be finite"),
            PhysicsError::InvalidExtent => write!(f, "world extent must be positive"),
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidStiffness => write!(f, "stiffness must be non-negative and finite"),
            PhysicsError::InvalidDamping => write!(f, "damping must be non-negative and finite"),
            PhysicsError::InvalidPopScale => write!(f, "pop scale must be positive and finite"),
            PhysicsError::InvalidPressure => {
                write!(f, "pressure mass, volume and coefficient must be non-negative and finite")
            }
            PhysicsError::BodyOutOfBounds { index, count } => {
                write!(f, "body index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::PointOutOfBounds { index, count } => {
                write!(f, "point index {} out of bounds (count: {})", index, count)
            }
        }
    }
}
