//! Mass points advanced by explicit per-tick integration.

use crate::float::Float;
use crate::vec::Vec2;

/// A simulated point mass.
///
/// `origin_offset` is the displacement from the owning body's centre at
/// construction time and is never changed afterwards. Acceleration is
/// written by springs and pressure before each [`Point::integrate`] call;
/// integration itself never clears it.
#[derive(Clone, Debug, PartialEq)]
pub struct Point<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    pub acceleration: Vec2<F>,
    origin_offset: Vec2<F>,
}

impl<F: Float> Point<F> {
    /// A point at rest with no offset from its body's centre.
    pub fn new(position: Vec2<F>) -> Self {
        Self::with_offset(position, Vec2::zero())
    }

    /// A point at rest that remembers its displacement from the body centre.
    pub fn with_offset(position: Vec2<F>, origin_offset: Vec2<F>) -> Self {
        Point {
            position,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            origin_offset,
        }
    }

    /// Advance one integration step: position by the current velocity, then
    /// velocity by the current acceleration.
    pub fn integrate(&mut self) {
        self.position = self.position + self.velocity;
        self.velocity = self.velocity + self.acceleration;
    }

    pub fn origin_offset(&self) -> Vec2<F> {
        self.origin_offset
    }

    /// Squared speed; the per-point term of the world's kinetic energy.
    pub fn speed_sq(&self) -> F {
        let speed = self.velocity.length();
        speed * speed
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite() && self.acceleration.is_finite()
    }
}
