//! Axis-aligned world bounds with a one-sided, velocity-gated clamp.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::point::Point;

/// The clampable area `[0, width] x [0, height]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<F: Float> {
    width: F,
    height: F,
}

/// Which axes a clamp touched.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Clamped {
    pub x: bool,
    pub y: bool,
}

impl Clamped {
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

impl<F: Float> Bounds<F> {
    /// Bounds of the given extent. Both must be positive; infinity is allowed.
    pub fn new(width: F, height: F) -> Result<Self, PhysicsError> {
        // Written so NaN fails too.
        if !(width > F::zero()) || !(height > F::zero()) {
            return Err(PhysicsError::InvalidExtent);
        }
        Ok(Bounds { width, height })
    }

    /// Bounds with infinite width and height.
    ///
    /// Only the far edges are removed: points moving out through `x = 0` or
    /// `y = 0` are still clamped.
    pub fn infinite_extent() -> Self {
        Bounds { width: F::infinity(), height: F::infinity() }
    }

    pub fn width(&self) -> F { self.width }
    pub fn height(&self) -> F { self.height }

    /// Stop outward motion at an edge.
    ///
    /// Per axis: a point beyond an edge and still moving further out is put
    /// back on the edge with that axis' velocity and acceleration zeroed.
    /// A point outside but moving back in is left alone.
    pub fn clamp(&self, p: &mut Point<F>) -> Clamped {
        let (x, y) = (
            clamp_axis(&mut p.position.x, &mut p.velocity.x, &mut p.acceleration.x, self.width),
            clamp_axis(&mut p.position.y, &mut p.velocity.y, &mut p.acceleration.y, self.height),
        );
        Clamped { x, y }
    }
}

fn clamp_axis<F: Float>(pos: &mut F, vel: &mut F, acc: &mut F, extent: F) -> bool {
    let edge = if *pos < F::zero() && *vel < F::zero() {
        F::zero()
    } else if *pos > extent && *vel > F::zero() {
        extent
    } else {
        return false;
    };
    *pos = edge;
    *vel = F::zero();
    *acc = F::zero();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;

    #[test]
    fn outward_motion_is_stopped() {
        let bounds = Bounds::new(100.0f64, 100.0).unwrap();
        let mut p = Point::new(Vec2::new(-1.0, 5.0));
        p.velocity = Vec2::new(-0.5, 0.25);
        p.acceleration = Vec2::new(-0.1, 0.3);
        let hit = bounds.clamp(&mut p);
        assert_eq!(hit, Clamped { x: true, y: false });
        assert_eq!(p.position, Vec2::new(0.0, 5.0));
        assert_eq!(p.velocity, Vec2::new(0.0, 0.25));
        assert_eq!(p.acceleration, Vec2::new(0.0, 0.3));
    }

    #[test]
    fn inward_motion_is_left_alone() {
        let bounds = Bounds::new(10.0f64, 10.0).unwrap();
        let mut p = Point::new(Vec2::new(12.0, -3.0));
        p.velocity = Vec2::new(-1.0, 1.0);
        assert!(!bounds.clamp(&mut p).any());
        assert_eq!(p.position, Vec2::new(12.0, -3.0));
    }

    #[test]
    fn far_edges_clamp_to_extent() {
        let bounds = Bounds::new(10.0f32, 20.0).unwrap();
        let mut p = Point::new(Vec2::new(11.0, 25.0));
        p.velocity = Vec2::new(1.0, 2.0);
        assert_eq!(bounds.clamp(&mut p), Clamped { x: true, y: true });
        assert_eq!(p.position, Vec2::new(10.0, 20.0));
        assert_eq!(p.velocity, Vec2::zero());
    }

    #[test]
    fn extent_must_be_positive() {
        assert_eq!(Bounds::new(0.0f64, 1.0).unwrap_err(), PhysicsError::InvalidExtent);
        assert_eq!(Bounds::new(1.0f64, -2.0).unwrap_err(), PhysicsError::InvalidExtent);
        assert_eq!(Bounds::new(f64::NAN, 1.0).unwrap_err(), PhysicsError::InvalidExtent);
        assert!(Bounds::new(f64::INFINITY, 1.0).is_ok());
    }

    #[test]
    fn infinite_extent_still_has_zero_edges() {
        let bounds = Bounds::<f64>::infinite_extent();
        let mut p = Point::new(Vec2::new(1e12, -1.0));
        p.velocity = Vec2::new(5.0, -1.0);
        assert_eq!(bounds.clamp(&mut p), Clamped { x: false, y: true });
    }
}
