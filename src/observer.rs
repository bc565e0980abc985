//! Step observer trait for monitoring world updates.

use crate::world::PointHandle;

/// Trait for observing world steps.
///
/// Implement this trait to watch the simulation (e.g. for debugging,
/// visualization, or counting boundary hits). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after a body has finished its update.
    fn on_body_updated(&mut self, _body: usize) {}

    /// Called when the boundary clamp touched a point.
    fn on_point_clamped(&mut self, _handle: PointHandle) {}

    /// Called when a step is fully complete, with the new tick count.
    fn on_step_complete(&mut self, _tick: u64) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
