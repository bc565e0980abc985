//! Two-dimensional vector value type.

use crate::float::Float;
use core::ops::{Add, Sub, Neg, Mul};

/// 2D vector used for positions, velocities, accelerations and offsets.
///
/// A plain value: every operation returns a new vector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self {
        Vec2 { x: self.x * s, y: self.y * s }
    }

    /// Component-wise multiplication.
    pub fn component_mul(self, other: Self) -> Self {
        Vec2 { x: self.x * other.x, y: self.y * other.y }
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean distance: square root of the summed squared axis differences.
    pub fn distance(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Length (distance to the origin).
    pub fn length(self) -> F {
        self.distance(Self::zero())
    }

    /// Divide by the length.
    ///
    /// Unguarded: a zero-length vector yields NaN components. Use
    /// [`Vec2::try_normalize`] when the input may be degenerate.
    pub fn normalize(self) -> Self {
        let len = self.length();
        Vec2 { x: self.x / len, y: self.y / len }
    }

    /// Normalize, or `None` if the length is zero or the result is not finite.
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.length();
        if len == F::zero() || !len.is_finite() {
            return None;
        }
        Some(Vec2 { x: self.x / len, y: self.y / len })
    }

    /// True if both components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;
    fn mul(self, rhs: F) -> Self { self.scale(rhs) }
}
