//! Pointer-driven dragging of a single point between steps.

use crate::float::Float;
use crate::vec::Vec2;
use crate::world::{PointHandle, World};

/// Holds the currently dragged point, if any.
///
/// The world knows nothing about dragging: the controller only overwrites
/// the held point's position through [`World::move_point`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragController<F: Float> {
    held: Option<PointHandle>,
    pick_radius: F,
}

impl<F: Float> DragController<F> {
    /// A controller with the default pick radius of 2.
    pub fn new() -> Self {
        DragController { held: None, pick_radius: F::two() }
    }

    pub fn with_pick_radius(mut self, radius: F) -> Self {
        self.pick_radius = radius;
        self
    }

    /// Pointer down: pick the point under `at` and move it there.
    ///
    /// Any previous selection is dropped first, so a miss leaves nothing held.
    pub fn press(&mut self, world: &mut World<F>, at: Vec2<F>) -> Option<PointHandle> {
        self.held = world.pick(at, self.pick_radius);
        if let Some(handle) = self.held {
            log::trace!("picked {:?}", handle);
        }
        self.drag_to(world, at);
        self.held
    }

    /// Pointer move: overwrite the held point's position. Returns whether a
    /// point was moved.
    pub fn drag_to(&mut self, world: &mut World<F>, at: Vec2<F>) -> bool {
        match self.held {
            Some(handle) => match world.move_point(handle, at) {
                Ok(()) => true,
                Err(err) => {
                    log::warn!("dropping stale drag handle: {}", err);
                    self.held = None;
                    false
                }
            },
            None => false,
        }
    }

    /// Pointer up.
    pub fn release(&mut self) {
        self.held = None;
    }

    pub fn held(&self) -> Option<PointHandle> {
        self.held
    }

    pub fn pick_radius(&self) -> F {
        self.pick_radius
    }
}

impl<F: Float> Default for DragController<F> {
    fn default() -> Self {
        Self::new()
    }
}
