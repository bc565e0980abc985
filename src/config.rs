//! Configuration types for springs and pressure bodies.

use crate::error::PhysicsError;
use crate::float::Float;

/// Parameters shared by every spring a body creates.
///
/// # Builder Pattern
/// ```
/// use squish::config::SpringConfig;
///
/// let config: SpringConfig<f64> = SpringConfig::new()
///     .with_stiffness(0.002)
///     .with_damping(0.1)
///     .with_pop_scale(1.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringConfig<F: Float> {
    /// Force per unit of stretch. Default: 0.001.
    pub stiffness: F,
    /// Divides the spring force. Default: 1.0.
    pub mass: F,
    /// Fraction of velocity removed each update. Default: 0.05.
    pub damping: F,
    /// Scale applied once to the first endpoint's position on the first
    /// update. Default: 1.1. Use 1.0 to make the pop-in invisible.
    pub pop_scale: F,
}

impl<F: Float> SpringConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SpringConfig {
            stiffness: F::from_f64(0.001),
            mass: F::one(),
            damping: F::from_f64(0.05),
            pop_scale: F::from_f64(1.1),
        }
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_pop_scale(mut self, pop_scale: F) -> Self {
        self.pop_scale = pop_scale;
        self
    }

    /// Check every parameter is usable.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.mass.is_finite() || self.mass <= F::zero() {
            return Err(PhysicsError::InvalidMass);
        }
        if !self.stiffness.is_finite() || self.stiffness < F::zero() {
            return Err(PhysicsError::InvalidStiffness);
        }
        if !self.damping.is_finite() || self.damping < F::zero() {
            return Err(PhysicsError::InvalidDamping);
        }
        if !self.pop_scale.is_finite() || self.pop_scale <= F::zero() {
            return Err(PhysicsError::InvalidPopScale);
        }
        Ok(())
    }
}

impl<F: Float> Default for SpringConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters for a pressure body.
///
/// The per-point restoring strength is `mass * volume * stiffness_coefficient`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PressureConfig<F: Float> {
    /// Default: 1.0.
    pub mass: F,
    /// Default: 1.0.
    pub volume: F,
    /// Default: 0.005.
    pub stiffness_coefficient: F,
    /// Perimeter spring parameters.
    pub spring: SpringConfig<F>,
}

impl<F: Float> PressureConfig<F> {
    pub fn new() -> Self {
        PressureConfig {
            mass: F::one(),
            volume: F::one(),
            stiffness_coefficient: F::from_f64(0.005),
            spring: SpringConfig::new(),
        }
    }

    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_volume(mut self, volume: F) -> Self {
        self.volume = volume;
        self
    }

    pub fn with_stiffness_coefficient(mut self, coefficient: F) -> Self {
        self.stiffness_coefficient = coefficient;
        self
    }

    pub fn with_spring(mut self, spring: SpringConfig<F>) -> Self {
        self.spring = spring;
        self
    }

    /// Uniform pressure: `mass * volume * stiffness_coefficient`.
    pub fn pressure(&self) -> F {
        self.mass * self.volume * self.stiffness_coefficient
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        for value in [self.mass, self.volume, self.stiffness_coefficient] {
            if !value.is_finite() || value < F::zero() {
                return Err(PhysicsError::InvalidPressure);
            }
        }
        self.spring.validate()
    }
}

impl<F: Float> Default for PressureConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
