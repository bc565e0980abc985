//! Discrete-time 2D particle-spring soft bodies.
//!
//! `squish` simulates small sets of point masses tied together by damped
//! springs, integrated one fixed tick at a time. Two body shapes are
//! provided, both built from points evenly spaced on a circle:
//!
//! - **Spring bodies**: every pair of points joined by a spring (or only the
//!   perimeter, with [`SpringBody::perimeter`])
//! - **Pressure bodies**: a perimeter of springs plus a pressure term that
//!   pulls each point back toward its rest offset from the centroid
//!
//! A [`World`] steps its bodies in insertion order and then clamps every
//! point at the edges of `[0, width] x [0, height]`, stopping outward motion
//! without bouncing.
//!
//! Springs overwrite their endpoints' acceleration rather than summing it,
//! and integrate both endpoints themselves; a point touched by several
//! springs in one tick ends up with the acceleration of the last one.
//!
//! # Example
//! ```
//! use squish::{World, SpringBody, SpringConfig, Vec2};
//!
//! let mut world: World<f64> = World::new(100.0, 100.0).unwrap();
//! world.add(SpringBody::new(5, 10.0, Vec2::new(40.0, 40.0), &SpringConfig::new()).unwrap());
//! for _ in 0..60 {
//!     world.step();
//! }
//! assert!(world.is_finite());
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point;
pub mod spring;
pub mod body;
pub mod mesh;
pub mod softbody;
pub mod bounds;
pub mod world;
pub mod interaction;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use point::Point;
pub use spring::{Spring, PopState};
pub use body::Body;
pub use mesh::SpringBody;
pub use softbody::PressureBody;
pub use bounds::{Bounds, Clamped};
pub use world::{World, PointHandle};
pub use interaction::DragController;
pub use config::{SpringConfig, PressureConfig};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
