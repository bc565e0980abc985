//! Body variants and the ring layout they share.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::mesh::SpringBody;
use crate::point::Point;
use crate::softbody::PressureBody;
use crate::spring::Spring;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Any body a [`World`](crate::world::World) can hold.
#[derive(Clone, Debug)]
pub enum Body<F: Float> {
    Spring(SpringBody<F>),
    Pressure(PressureBody<F>),
}

impl<F: Float> Body<F> {
    /// Advance every point of the body by one tick.
    pub fn update(&mut self) {
        match self {
            Body::Spring(b) => b.update(),
            Body::Pressure(b) => b.update(),
        }
    }

    pub fn points(&self) -> &[Point<F>] {
        match self {
            Body::Spring(b) => b.points(),
            Body::Pressure(b) => b.points(),
        }
    }

    pub fn points_mut(&mut self) -> &mut [Point<F>] {
        match self {
            Body::Spring(b) => b.points_mut(),
            Body::Pressure(b) => b.points_mut(),
        }
    }

    pub fn springs(&self) -> &[Spring<F>] {
        match self {
            Body::Spring(b) => b.springs(),
            Body::Pressure(b) => b.springs(),
        }
    }

    /// Average position of the body's points.
    pub fn centroid(&self) -> Vec2<F> {
        centroid(self.points())
    }

    pub fn len(&self) -> usize {
        self.points().len()
    }

    pub fn is_empty(&self) -> bool {
        self.points().is_empty()
    }
}

impl<F: Float> From<SpringBody<F>> for Body<F> {
    fn from(body: SpringBody<F>) -> Self {
        Body::Spring(body)
    }
}

impl<F: Float> From<PressureBody<F>> for Body<F> {
    fn from(body: PressureBody<F>) -> Self {
        Body::Pressure(body)
    }
}

/// Place `count` points evenly on a circle.
///
/// The angle advances by `2π / count` per point starting at 0, and each
/// point records its displacement from `center` as its origin offset.
pub fn ring<F: Float>(
    count: usize,
    radius: F,
    center: Vec2<F>,
) -> Result<AllocVec<Point<F>>, PhysicsError> {
    if count < 2 {
        return Err(PhysicsError::InsufficientPoints { count });
    }
    if !radius.is_finite() || radius <= F::zero() {
        return Err(PhysicsError::InvalidRadius);
    }
    if !center.is_finite() {
        return Err(PhysicsError::InvalidCenter);
    }

    let step = F::two() * F::pi() / F::from_usize(count);
    let mut angle = F::zero();
    let mut points = AllocVec::with_capacity(count);
    for _ in 0..count {
        let position = Vec2::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        );
        points.push(Point::with_offset(position, position - center));
        angle = angle + step;
    }
    Ok(points)
}

/// Springs joining consecutive points, closing the loop back to point 0.
pub(crate) fn cycle_springs<F: Float>(
    points: &[Point<F>],
    config: &crate::config::SpringConfig<F>,
) -> AllocVec<Spring<F>> {
    let n = points.len();
    (0..n)
        .map(|i| Spring::between(i, (i + 1) % n, points, config))
        .collect()
}

pub(crate) fn centroid<F: Float>(points: &[Point<F>]) -> Vec2<F> {
    if points.is_empty() {
        return Vec2::zero();
    }
    let n = F::from_usize(points.len());
    let mut sum = Vec2::zero();
    for p in points {
        sum = sum + p.position;
    }
    Vec2::new(sum.x / n, sum.y / n)
}
