//! Sub-stepped Verlet solver for circles in a circular arena.
//!
//! `pebble` advances a growing population of sized point bodies under
//! gravity, mutual impenetrability, and a circular containment boundary.
//! Velocity is implicit (position Verlet) and every frame is split into
//! fixed sub-steps for stability.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Circle contacts**: Radius-weighted positional de-penetration
//! - **Pluggable broad phase**: All-pairs or sweep-and-prune via `NeighborQuery`
//! - **Circular boundary**: Bodies are clamped inside a circle (or sphere)
//! - **Stable handles**: Append-only storage, spawn calls return `BodyHandle`
//! - **Observable**: Monitor sub-steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use pebble::{Solver, Vec2};
//!
//! let mut solver: Solver<Vec2<f32>> = Solver::new();
//! solver.set_constraint(Vec2::new(500.0, 500.0), 450.0).unwrap();
//! solver.set_sub_steps_count(8).unwrap();
//! let ball = solver.add_object(Vec2::new(500.0, 200.0), 10.0).unwrap();
//! solver.set_object_velocity(ball, Vec2::new(300.0, 0.0)).unwrap();
//! solver.update();
//! assert_eq!(solver.objects_count(), 1);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod body;
pub mod collision;
pub mod boundary;
pub mod solver;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2, Vec3};
pub use body::{Body, BodyHandle};
pub use collision::{AllPairs, NeighborQuery, SweepAndPrune};
pub use boundary::CircularBoundary;
pub use solver::Solver;
pub use config::SolverConfig;
pub use observer::{StepObserver, NoOpStepObserver, StepStats};
pub use error::PhysicsError;
