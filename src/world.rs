//! The world: an ordered set of bodies advanced one tick at a time.

use crate::body::Body;
use crate::bounds::Bounds;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::point::Point;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Addresses one point: its body's insertion index and its index in that body.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointHandle {
    pub body: usize,
    pub point: usize,
}

/// Owns every body and the boundary they are clamped against.
#[derive(Clone, Debug)]
pub struct World<F: Float> {
    bodies: AllocVec<Body<F>>,
    bounds: Bounds<F>,
    tick: u64,
}

impl<F: Float> World<F> {
    /// Create an empty world clamped to `[0, width] x [0, height]`.
    pub fn new(width: F, height: F) -> Result<Self, PhysicsError> {
        let bounds = Bounds::new(width, height)?;
        log::debug!("world: {:?} x {:?}", width, height);
        Ok(Self::with_bounds(bounds))
    }

    /// Create an empty world with infinite width and height.
    ///
    /// The zero edges still clamp; see [`Bounds::infinite_extent`].
    pub fn infinite_extent() -> Self {
        Self::with_bounds(Bounds::infinite_extent())
    }

    pub fn with_bounds(bounds: Bounds<F>) -> Self {
        World { bodies: AllocVec::new(), bounds, tick: 0 }
    }

    /// Add a body, returning its index.
    pub fn add(&mut self, body: impl Into<Body<F>>) -> usize {
        let index = self.bodies.len();
        self.bodies.push(body.into());
        log::debug!("world: added body {} ({} points)", index, self.bodies[index].len());
        index
    }

    /// Advance the simulation by one tick.
    pub fn step(&mut self) {
        self.step_with(&mut NoOpStepObserver);
    }

    /// Advance by one tick, reporting progress to `observer`.
    ///
    /// Bodies update in insertion order; once all of them have, every point
    /// is clamped against the bounds. Clamped points are not integrated
    /// again this tick.
    pub fn step_with<O: StepObserver>(&mut self, observer: &mut O) {
        for (index, body) in self.bodies.iter_mut().enumerate() {
            body.update();
            observer.on_body_updated(index);
        }

        self.clamp_to_bounds(observer);

        self.tick += 1;
        observer.on_step_complete(self.tick);
    }

    /// Run the boundary clamp over every point, returning how many were clamped.
    pub fn clamp_to_bounds<O: StepObserver>(&mut self, observer: &mut O) -> usize {
        let bounds = self.bounds;
        let mut clamped = 0;
        for (b, body) in self.bodies.iter_mut().enumerate() {
            for (i, p) in body.points_mut().iter_mut().enumerate() {
                if bounds.clamp(p).any() {
                    let handle = PointHandle { body: b, point: i };
                    log::trace!("clamped {:?} at {:?}", handle, p.position);
                    observer.on_point_clamped(handle);
                    clamped += 1;
                }
            }
        }
        clamped
    }

    /// Every point, in body insertion order then point order.
    pub fn points(&self) -> impl Iterator<Item = &Point<F>> + '_ {
        self.bodies.iter().flat_map(|b| b.points().iter())
    }

    /// Mutable view of every point, in the same order as [`World::points`].
    pub fn points_mut(&mut self) -> impl Iterator<Item = &mut Point<F>> + '_ {
        self.bodies.iter_mut().flat_map(|b| b.points_mut().iter_mut())
    }

    /// Every point paired with its handle, in the same order as [`World::points`].
    pub fn handles(&self) -> impl Iterator<Item = (PointHandle, &Point<F>)> + '_ {
        self.bodies.iter().enumerate().flat_map(|(b, body)| {
            body.points()
                .iter()
                .enumerate()
                .map(move |(i, p)| (PointHandle { body: b, point: i }, p))
        })
    }

    /// Flattened positions of every point.
    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.points().map(|p| p.position).collect()
    }

    pub fn point(&self, handle: PointHandle) -> Result<&Point<F>, PhysicsError> {
        let count = self.bodies.len();
        let body = self
            .bodies
            .get(handle.body)
            .ok_or(PhysicsError::BodyOutOfBounds { index: handle.body, count })?;
        let points = body.points();
        points
            .get(handle.point)
            .ok_or(PhysicsError::PointOutOfBounds { index: handle.point, count: points.len() })
    }

    pub fn point_mut(&mut self, handle: PointHandle) -> Result<&mut Point<F>, PhysicsError> {
        let count = self.bodies.len();
        let body = self
            .bodies
            .get_mut(handle.body)
            .ok_or(PhysicsError::BodyOutOfBounds { index: handle.body, count })?;
        let points = body.points_mut();
        let len = points.len();
        points
            .get_mut(handle.point)
            .ok_or(PhysicsError::PointOutOfBounds { index: handle.point, count: len })
    }

    /// Overwrite a point's position, leaving velocity and acceleration as
    /// they are. Meant to be called between steps.
    pub fn move_point(&mut self, handle: PointHandle, position: Vec2<F>) -> Result<(), PhysicsError> {
        self.point_mut(handle)?.position = position;
        Ok(())
    }

    /// The point within `radius` of `at`, if any.
    ///
    /// Points are scanned in flattened order and the last match wins.
    pub fn pick(&self, at: Vec2<F>, radius: F) -> Option<PointHandle> {
        self.handles()
            .filter(|(_, p)| p.position.distance(at) < radius)
            .map(|(handle, _)| handle)
            .last()
    }

    /// Sum of squared speeds over every point.
    pub fn kinetic_energy(&self) -> F {
        self.points().fold(F::zero(), |sum, p| sum + p.speed_sq())
    }

    /// False once any point has picked up a NaN or infinity.
    pub fn is_finite(&self) -> bool {
        self.points().all(|p| p.is_finite())
    }

    pub fn bodies(&self) -> &[Body<F>] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body<F>> {
        self.bodies.get(index)
    }

    pub fn bounds(&self) -> Bounds<F> {
        self.bounds
    }

    /// Number of completed steps.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn point_count(&self) -> usize {
        self.bodies.iter().map(|b| b.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PressureConfig, SpringConfig};
    use crate::mesh::SpringBody;
    use crate::softbody::PressureBody;

    fn two_body_world() -> World<f64> {
        let mut world = World::new(100.0, 100.0).unwrap();
        world.add(SpringBody::new(3, 5.0, Vec2::new(20.0, 20.0), &SpringConfig::new()).unwrap());
        world.add(PressureBody::new(4, 5.0, Vec2::new(60.0, 60.0), &PressureConfig::new()).unwrap());
        world
    }

    #[test]
    fn points_are_flattened_in_order() {
        let world = two_body_world();
        assert_eq!(world.point_count(), 7);
        let handles: AllocVec<_> = world.handles().map(|(h, _)| h).collect();
        assert_eq!(handles[0], PointHandle { body: 0, point: 0 });
        assert_eq!(handles[3], PointHandle { body: 1, point: 0 });
        assert_eq!(handles[6], PointHandle { body: 1, point: 3 });
        assert_eq!(world.points().count(), 7);
    }

    #[test]
    fn bad_handles_are_reported() {
        let mut world = two_body_world();
        assert_eq!(
            world.move_point(PointHandle { body: 5, point: 0 }, Vec2::zero()).unwrap_err(),
            PhysicsError::BodyOutOfBounds { index: 5, count: 2 },
        );
        assert_eq!(
            world.point(PointHandle { body: 0, point: 3 }).unwrap_err(),
            PhysicsError::PointOutOfBounds { index: 3, count: 3 },
        );
    }

    #[test]
    fn move_point_keeps_velocity() {
        let mut world = two_body_world();
        let handle = PointHandle { body: 1, point: 2 };
        world.point_mut(handle).unwrap().velocity = Vec2::new(1.0, 2.0);
        world.move_point(handle, Vec2::new(7.0, 8.0)).unwrap();
        let p = world.point(handle).unwrap();
        assert_eq!(p.position, Vec2::new(7.0, 8.0));
        assert_eq!(p.velocity, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn step_counts_ticks() {
        let mut world = two_body_world();
        world.step();
        world.step();
        assert_eq!(world.tick(), 2);
        assert!(world.is_finite());
    }

    #[test]
    fn pick_last_match_wins() {
        let mut world: World<f64> = World::infinite_extent();
        world.add(SpringBody::new(3, 1.0, Vec2::new(10.0, 10.0), &SpringConfig::new()).unwrap());
        // Every point of a radius-1 ring lies within 2 of its centre.
        assert_eq!(world.pick(Vec2::new(10.0, 10.0), 2.0), Some(PointHandle { body: 0, point: 2 }));
        assert_eq!(world.pick(Vec2::new(50.0, 50.0), 2.0), None);
    }
}
