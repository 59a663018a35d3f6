//! Circular containment boundary.

use crate::body::Body;
use crate::float::Float;
use crate::vec::Vec;

/// Circle (or sphere, for `Vec3`) that every body is held inside.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CircularBoundary<V: Vec> {
    pub center: V,
    pub radius: V::Scalar,
}

impl<V: Vec> CircularBoundary<V> {
    pub fn new(center: V, radius: V::Scalar) -> Self {
        CircularBoundary { center, radius }
    }

    /// Furthest a body's center may sit from `center`. Never negative: a
    /// body wider than the boundary is held at the center.
    pub fn margin(&self, body_radius: V::Scalar) -> V::Scalar {
        (self.radius - body_radius).max(V::Scalar::zero())
    }

    /// True if the whole disk of `body` lies inside, within `tolerance`.
    pub fn contains<T>(&self, body: &Body<V, T>, tolerance: V::Scalar) -> bool {
        body.pos.distance(self.center) <= self.margin(body.radius) + tolerance
    }

    /// Moves `point` onto the nearest position a body of `body_radius` may occupy.
    pub fn clamp(&self, point: V, body_radius: V::Scalar) -> V {
        let margin = self.margin(body_radius);
        let delta = self.center - point;
        let dist = delta.length();
        if dist <= margin {
            return point;
        }
        // dist > margin >= 0
        let normal = delta.scale(V::Scalar::one() / dist);
        self.center - normal.scale(margin)
    }

    /// Clamps every body back inside. Only `pos` moves, so the clamp turns
    /// into a velocity change at the next integration. Returns how many
    /// bodies were moved.
    pub fn contain<T>(&self, bodies: &mut [Body<V, T>]) -> usize {
        let mut clamped = 0;
        for body in bodies.iter_mut() {
            let margin = self.margin(body.radius);
            let delta = self.center - body.pos;
            let dist = delta.length();
            if dist > margin {
                // dist > margin >= 0, so the normal is well defined.
                let normal = delta.scale(V::Scalar::one() / dist);
                body.pos = self.center - normal.scale(margin);
                clamped += 1;
            }
        }
        clamped
    }
}
