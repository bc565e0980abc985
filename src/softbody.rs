//! 2D pressure-based soft body.

use crate::body::{centroid, cycle_springs, ring};
use crate::config::PressureConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::point::Point;
use crate::spring::Spring;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A gas-filled polygon.
///
/// Perimeter springs resist local stretching; a uniform pressure term pulls
/// every point back toward `centroid + origin_offset`, restoring the overall
/// shape around wherever the body currently is.
#[derive(Clone, Debug)]
pub struct PressureBody<F: Float> {
    points: AllocVec<Point<F>>,
    springs: AllocVec<Spring<F>>,
    mass: F,
    volume: F,
    stiffness_coefficient: F,
    pressure: F,
}

impl<F: Float> PressureBody<F> {
    /// Create a ring of `count` points joined in a single perimeter cycle.
    pub fn new(
        count: usize,
        radius: F,
        center: Vec2<F>,
        config: &PressureConfig<F>,
    ) -> Result<Self, PhysicsError> {
        config.validate()?;
        let points = ring(count, radius, center)?;
        let springs = cycle_springs(&points, &config.spring);
        let pressure = config.pressure();

        log::debug!("pressure body: {} points, pressure {:?}", points.len(), pressure);
        Ok(PressureBody {
            points,
            springs,
            mass: config.mass,
            volume: config.volume,
            stiffness_coefficient: config.stiffness_coefficient,
            pressure,
        })
    }

    /// Update the perimeter springs, then apply pressure to every point.
    ///
    /// The pressure acceleration replaces whatever the springs wrote, and
    /// each point is integrated once more with it.
    pub fn update(&mut self) {
        for spring in self.springs.iter_mut() {
            spring.update(&mut self.points);
        }

        let center = self.centroid();
        let pressure = self.pressure;
        for p in self.points.iter_mut() {
            let target = center + p.origin_offset();
            p.acceleration = (p.position - target).scale(-pressure);
            p.integrate();
        }
    }

    /// Get the centroid (average position) of the soft body.
    pub fn centroid(&self) -> Vec2<F> {
        centroid(&self.points)
    }

    pub fn points(&self) -> &[Point<F>] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [Point<F>] {
        &mut self.points
    }

    pub fn springs(&self) -> &[Spring<F>] {
        &self.springs
    }

    pub fn pressure(&self) -> F {
        self.pressure
    }

    pub fn mass(&self) -> F {
        self.mass
    }

    pub fn volume(&self) -> F {
        self.volume
    }

    pub fn stiffness_coefficient(&self) -> F {
        self.stiffness_coefficient
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpringConfig;

    #[test]
    fn centroid_at_center() {
        let body = PressureBody::new(16, 1.0f32, Vec2::new(3.0, 4.0), &PressureConfig::new()).unwrap();
        let c = body.centroid();
        assert!((c.x - 3.0).abs() < 0.01, "centroid.x = {}", c.x);
        assert!((c.y - 4.0).abs() < 0.01, "centroid.y = {}", c.y);
    }

    #[test]
    fn default_pressure() {
        let body = PressureBody::new(6, 5.0f64, Vec2::zero(), &PressureConfig::new()).unwrap();
        assert_eq!(body.pressure(), 0.005);
    }

    #[test]
    fn displaced_point_is_pulled_back() {
        let config = PressureConfig::new()
            .with_stiffness_coefficient(0.1)
            .with_spring(SpringConfig::new().with_stiffness(0.0).with_damping(0.0).with_pop_scale(1.0));
        let mut body = PressureBody::new(4, 10.0f64, Vec2::new(50.0, 50.0), &config).unwrap();
        // Point 0 sits at angle 0, on the +x side of the ring.
        body.points_mut()[0].position.x += 2.0;

        body.update();
        assert!(body.points()[0].acceleration.x < 0.0);
        assert!(body.points()[0].velocity.x < 0.0);
    }
}
