//! Damped linear springs between two points of a body.

use crate::config::SpringConfig;
use crate::float::Float;
use crate::point::Point;

/// One-shot pop-in state of a spring.
///
/// A spring starts `Primed`; its first update scales the first endpoint's
/// position and moves it to `Fired`, where it stays.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PopState {
    Primed,
    Fired,
}

/// A damped spring connecting points `a` and `b` of a point arena.
///
/// Springs also drive integration: every update overwrites both endpoints'
/// acceleration (last writer wins, nothing is summed) and integrates them.
/// A point no spring touches never moves on its own.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    a: usize,
    b: usize,
    rest_length: F,
    stiffness: F,
    mass: F,
    damping: F,
    pop_scale: F,
    state: PopState,
}

impl<F: Float> Spring<F> {
    pub fn new(a: usize, b: usize, rest_length: F, config: &SpringConfig<F>) -> Self {
        Spring {
            a,
            b,
            rest_length,
            stiffness: config.stiffness,
            mass: config.mass,
            damping: config.damping,
            pop_scale: config.pop_scale,
            state: PopState::Primed,
        }
    }

    /// Spring whose rest length is the current distance between `a` and `b`.
    pub fn between(a: usize, b: usize, points: &[Point<F>], config: &SpringConfig<F>) -> Self {
        let rest_length = points[a].position.distance(points[b].position);
        Self::new(a, b, rest_length, config)
    }

    /// Apply the spring law to both endpoints and integrate them.
    pub fn update(&mut self, points: &mut [Point<F>]) {
        if self.state == PopState::Primed {
            self.state = PopState::Fired;
            let p = &mut points[self.a];
            p.position.x = p.position.x * self.pop_scale;
            p.position.y = p.position.y * self.pop_scale;
        }

        let a_pos = points[self.a].position;
        let b_pos = points[self.b].position;

        // Positive when stretched, negative when compressed.
        let force = self.stiffness * (a_pos.distance(b_pos) - self.rest_length);
        let dir = (b_pos - a_pos).scale(F::half());

        let a = &mut points[self.a];
        a.acceleration = dir.scale(force / self.mass) - a.velocity.scale(self.damping);

        let b = &mut points[self.b];
        b.acceleration = dir.scale((-force) / self.mass) - b.velocity.scale(self.damping);

        points[self.a].integrate();
        points[self.b].integrate();
    }

    /// Absolute deviation from rest length.
    pub fn strain(&self, points: &[Point<F>]) -> F {
        let current = points[self.a].position.distance(points[self.b].position);
        (current - self.rest_length).abs()
    }

    pub fn endpoints(&self) -> (usize, usize) { (self.a, self.b) }
    pub fn rest_length(&self) -> F { self.rest_length }
    pub fn stiffness(&self) -> F { self.stiffness }
    pub fn mass(&self) -> F { self.mass }
    pub fn damping(&self) -> F { self.damping }
    pub fn state(&self) -> PopState { self.state }

    /// True if this spring joins `i` and `j` in either direction.
    pub fn connects(&self, i: usize, j: usize) -> bool {
        (self.a == i && self.b == j) || (self.a == j && self.b == i)
    }
}
