//! Circular Verlet bodies with implicit velocity.

use crate::float::Float;
use crate::vec::Vec;

/// Stable handle to a body inside a [`Solver`](crate::Solver).
///
/// Bodies are never removed, so a handle stays valid for the lifetime of the
/// solver that issued it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyHandle(pub(crate) usize);

impl BodyHandle {
    /// Position of the body in [`Solver::objects`](crate::Solver::objects).
    pub fn index(self) -> usize {
        self.0
    }
}

/// A sized point body integrated with position Verlet.
///
/// Velocity is not stored: it is `pos - prev_pos` per sub-step. Fields are
/// public for reading; the solver is the only writer.
#[derive(Clone, Debug)]
pub struct Body<V: Vec, T = ()> {
    pub pos: V,
    pub prev_pos: V,
    /// Accumulated for the current sub-step only.
    pub acceleration: V,
    pub radius: V::Scalar,
    /// Opaque payload for renderers. Physics never reads it.
    pub tag: T,
}

impl<V: Vec, T> Body<V, T> {
    /// Body at rest at `pos`.
    pub(crate) fn new(pos: V, radius: V::Scalar, tag: T) -> Self {
        Body {
            pos,
            prev_pos: pos,
            acceleration: V::zero(),
            radius,
            tag,
        }
    }

    pub(crate) fn accelerate(&mut self, accel: V) {
        self.acceleration = self.acceleration + accel;
    }

    pub(crate) fn integrate(&mut self, dt: V::Scalar) {
        let displacement = self.pos - self.prev_pos;
        self.prev_pos = self.pos;
        self.pos = self.pos + displacement + self.acceleration.scale(dt * dt);
        self.acceleration = V::zero();
    }

    /// Seeds `prev_pos` so the next integration moves the body by `v * dt`.
    pub(crate) fn set_velocity(&mut self, v: V, dt: V::Scalar) {
        self.prev_pos = self.pos - v.scale(dt);
    }

    /// Teleports the body and drops its implicit velocity.
    pub(crate) fn place(&mut self, pos: V) {
        self.pos = pos;
        self.prev_pos = pos;
    }

    /// Implicit velocity for a sub-step of length `dt`.
    pub fn velocity(&self, dt: V::Scalar) -> V {
        if dt.is_near_zero(V::Scalar::from_f32(1e-30)) {
            return V::zero();
        }
        (self.pos - self.prev_pos).scale(V::Scalar::one() / dt)
    }

    /// Distance travelled during the last sub-step.
    pub fn displacement(&self) -> V {
        self.pos - self.prev_pos
    }

    /// True if `point` lies on or inside the body's disk.
    pub fn contains(&self, point: V) -> bool {
        self.pos.distance_sq(point) <= self.radius * self.radius
    }
}
