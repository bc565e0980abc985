//! Spring bodies: rings of points tied together by springs.

use crate::body::{centroid, cycle_springs, ring};
use crate::config::SpringConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::point::Point;
use crate::spring::Spring;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A ring of points held in shape purely by springs.
#[derive(Clone, Debug)]
pub struct SpringBody<F: Float> {
    points: AllocVec<Point<F>>,
    springs: AllocVec<Spring<F>>,
}

impl<F: Float> SpringBody<F> {
    /// Create a fully connected body: one spring for every unordered pair
    /// of points, `n * (n - 1) / 2` in total.
    ///
    /// Pairs are created as `(i, j)` with `i < j`, iterating `i` then `j`,
    /// so point `i` is the first endpoint.
    pub fn new(
        count: usize,
        radius: F,
        center: Vec2<F>,
        config: &SpringConfig<F>,
    ) -> Result<Self, PhysicsError> {
        config.validate()?;
        let points = ring(count, radius, center)?;

        let mut springs = AllocVec::with_capacity(count * (count - 1) / 2);
        for i in 0..count {
            for j in (i + 1)..count {
                springs.push(Spring::between(i, j, &points, config));
            }
        }

        log::debug!("spring body: {} points, {} springs", points.len(), springs.len());
        Ok(SpringBody { points, springs })
    }

    /// Create a body whose springs only follow the perimeter: point `i` to
    /// `i + 1`, and the last point back to point 0.
    pub fn perimeter(
        count: usize,
        radius: F,
        center: Vec2<F>,
        config: &SpringConfig<F>,
    ) -> Result<Self, PhysicsError> {
        config.validate()?;
        let points = ring(count, radius, center)?;
        let springs = cycle_springs(&points, config);

        log::debug!("perimeter spring body: {} points", points.len());
        Ok(SpringBody { points, springs })
    }

    /// Update every spring in creation order.
    pub fn update(&mut self) {
        for spring in self.springs.iter_mut() {
            spring.update(&mut self.points);
        }
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

    pub fn centroid(&self) -> Vec2<F> {
        centroid(&self.points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
