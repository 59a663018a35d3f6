//! Sub-stepped Verlet solver for circles under gravity inside a circular boundary.

use crate::body::{Body, BodyHandle};
use crate::boundary::CircularBoundary;
use crate::collision::{resolve_collisions, AllPairs, NeighborQuery};
use crate::config::{
    check_boundary, check_response_coefficient, check_sub_steps, check_update_rate, SolverConfig,
};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// Owns every body and advances them one frame per [`update`](Solver::update).
///
/// Each frame is split into `sub_steps` equal sub-steps, and each sub-step
/// runs, in order: gravity, collisions, boundary, integration. The corrective
/// passes only touch `pos`, so integration turns them into velocity.
///
/// `T` is the per-body display tag. `Q` picks candidate pairs for the
/// collision pass; the default [`AllPairs`] checks every pair in index order.
pub struct Solver<V: Vec, T = (), Q = AllPairs> {
    bodies: AllocVec<Body<V, T>>,
    config: SolverConfig<V>,
    query: Q,
    time: V::Scalar,
}

impl<V: Vec, T> Solver<V, T, AllPairs> {
    /// Solver with [`SolverConfig::default`] and no bodies.
    pub fn new() -> Self {
        Solver {
            bodies: AllocVec::new(),
            config: SolverConfig::new(),
            query: AllPairs,
            time: V::Scalar::zero(),
        }
    }

    pub fn with_config(config: SolverConfig<V>) -> Result<Self, PhysicsError> {
        Self::with_neighbor_query(config, AllPairs)
    }
}

impl<V: Vec, T> Default for Solver<V, T, AllPairs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vec, T, Q: NeighborQuery<V>> Solver<V, T, Q> {
    pub fn with_neighbor_query(config: SolverConfig<V>, query: Q) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Solver {
            bodies: AllocVec::new(),
            config,
            query,
            time: V::Scalar::zero(),
        })
    }

    // ---- configuration ----

    /// Sets frame dt to `1 / rate`.
    pub fn set_simulation_update_rate(&mut self, rate: u32) -> Result<(), PhysicsError> {
        check_update_rate(rate)?;
        self.config.update_rate = rate;
        Ok(())
    }

    pub fn set_sub_steps_count(&mut self, sub_steps: u32) -> Result<(), PhysicsError> {
        check_sub_steps(sub_steps)?;
        self.config.sub_steps = sub_steps;
        Ok(())
    }

    pub fn set_constraint(&mut self, center: V, radius: V::Scalar) -> Result<(), PhysicsError> {
        let boundary = CircularBoundary::new(center, radius);
        check_boundary(&boundary)?;
        self.config.boundary = boundary;
        Ok(())
    }

    pub fn set_gravity(&mut self, gravity: V) -> Result<(), PhysicsError> {
        if !gravity.is_finite() {
            return Err(PhysicsError::NonFiniteVector);
        }
        self.config.gravity = gravity;
        Ok(())
    }

    pub fn set_response_coefficient(&mut self, coefficient: V::Scalar) -> Result<(), PhysicsError> {
        check_response_coefficient(coefficient)?;
        self.config.response_coefficient = coefficient;
        Ok(())
    }

    // ---- spawning ----

    /// Appends a body at rest with a default tag.
    pub fn add_object(&mut self, position: V, radius: V::Scalar) -> Result<BodyHandle, PhysicsError>
    where
        T: Default,
    {
        self.add_object_tagged(position, radius, T::default())
    }

    /// Appends a body at rest.
    pub fn add_object_tagged(
        &mut self,
        position: V,
        radius: V::Scalar,
        tag: T,
    ) -> Result<BodyHandle, PhysicsError> {
        if !radius.is_finite() || !(radius > V::Scalar::zero()) {
            return Err(PhysicsError::InvalidRadius);
        }
        if !position.is_finite() {
            return Err(PhysicsError::NonFiniteVector);
        }
        let handle = BodyHandle(self.bodies.len());
        self.bodies.push(Body::new(position, radius, tag));
        Ok(handle)
    }

    /// Gives the body velocity `v`, expressed through `prev_pos` at the
    /// current step dt. Call after any sub-step or rate change.
    pub fn set_object_velocity(&mut self, handle: BodyHandle, v: V) -> Result<(), PhysicsError> {
        if !v.is_finite() {
            return Err(PhysicsError::NonFiniteVector);
        }
        let dt = self.step_dt();
        self.body_mut(handle)?.set_velocity(v, dt);
        Ok(())
    }

    pub fn set_object_tag(&mut self, handle: BodyHandle, tag: T) -> Result<(), PhysicsError> {
        self.body_mut(handle)?.tag = tag;
        Ok(())
    }

    /// First body whose disk contains `point`, in spawn order.
    pub fn object_at(&self, point: V) -> Option<BodyHandle> {
        self.bodies
            .iter()
            .position(|body| body.contains(point))
            .map(BodyHandle)
    }

    /// Moves a body to `target` (clamped inside the boundary) and stops it.
    ///
    /// For interactive grabbing: call once per frame while the body is held.
    pub fn drag_object(&mut self, handle: BodyHandle, target: V) -> Result<(), PhysicsError> {
        if !target.is_finite() {
            return Err(PhysicsError::NonFiniteVector);
        }
        let boundary = self.config.boundary;
        let body = self.body_mut(handle)?;
        let pos = boundary.clamp(target, body.radius);
        body.place(pos);
        Ok(())
    }

    // ---- stepping ----

    /// Advances the simulation by one frame.
    pub fn update(&mut self) {
        self.update_observed(&mut NoOpStepObserver);
    }

    pub fn update_observed<O: StepObserver<V::Scalar>>(&mut self, observer: &mut O) {
        self.time = self.time + self.config.frame_dt();
        let step_dt = self.step_dt();

        for substep in 0..self.config.sub_steps {
            self.apply_gravity();

            let contacts = resolve_collisions(
                &mut self.query,
                &mut self.bodies,
                self.config.response_coefficient,
            );
            observer.on_collisions(substep, contacts);

            let clamped = self.config.boundary.contain(&mut self.bodies);
            observer.on_constrain(substep, clamped);

            for body in self.bodies.iter_mut() {
                body.integrate(step_dt);
            }
            observer.on_integrate(substep);
        }

        observer.on_step_complete(self.time);
    }

    fn apply_gravity(&mut self) {
        let gravity = self.config.gravity;
        for body in self.bodies.iter_mut() {
            body.accelerate(gravity);
        }
    }

    fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut Body<V, T>, PhysicsError> {
        let count = self.bodies.len();
        self.bodies
            .get_mut(handle.0)
            .ok_or(PhysicsError::BodyOutOfBounds { index: handle.0, count })
    }

    // ---- read surface ----

    pub fn objects(&self) -> &[Body<V, T>] { &self.bodies }
    pub fn object(&self, handle: BodyHandle) -> Option<&Body<V, T>> { self.bodies.get(handle.0) }
    pub fn objects_count(&self) -> usize { self.bodies.len() }
    pub fn constraint(&self) -> CircularBoundary<V> { self.config.boundary }
    pub fn gravity(&self) -> V { self.config.gravity }
    pub fn time(&self) -> V::Scalar { self.time }
    pub fn sub_steps(&self) -> u32 { self.config.sub_steps }
    pub fn frame_dt(&self) -> V::Scalar { self.config.frame_dt() }
    pub fn step_dt(&self) -> V::Scalar { self.config.step_dt() }
    pub fn config(&self) -> &SolverConfig<V> { &self.config }
}
