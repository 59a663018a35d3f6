//! Spawn-side collaborator shared by the integration tests.
#![allow(dead_code)]

use core::f32::consts::{FRAC_PI_2, PI};

use pebble::{BodyHandle, NeighborQuery, Solver, Vec, Vec2};
use rand::Rng;

pub type Rgb = [u8; 3];

/// Sweeping fountain: one body per `interval` seconds of simulated time,
/// launched from `origin` at an angle that swings with `sin(time)`.
pub struct Fountain {
    pub origin: Vec2<f32>,
    pub speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub interval: f32,
    pub max_bodies: usize,
    next_spawn: f32,
}

impl Fountain {
    pub fn new(origin: Vec2<f32>, max_bodies: usize) -> Self {
        Fountain {
            origin,
            speed: 1200.0,
            min_radius: 1.0,
            max_radius: 20.0,
            interval: 0.025,
            max_bodies,
            next_spawn: 0.0,
        }
    }

    /// Spawns at most one body. The generator is owned by the caller.
    pub fn emit<Q: NeighborQuery<Vec2<f32>>>(
        &mut self,
        solver: &mut Solver<Vec2<f32>, Rgb, Q>,
        rng: &mut impl Rng,
    ) -> Option<BodyHandle> {
        let time = solver.time();
        if solver.objects_count() >= self.max_bodies || time < self.next_spawn {
            return None;
        }
        self.next_spawn = time + self.interval;

        let radius = rng.gen_range(self.min_radius..self.max_radius);
        let handle = solver.add_object_tagged(self.origin, radius, rainbow(time)).ok()?;
        let angle = time.sin() + FRAC_PI_2;
        let velocity = Vec2::new(angle.cos(), angle.sin()).scale(self.speed);
        solver.set_object_velocity(handle, velocity).ok()?;
        Some(handle)
    }
}

pub fn rainbow(t: f32) -> Rgb {
    let channel = |phase: f32| {
        let s = (t + phase).sin();
        (255.0 * s * s) as u8
    };
    [channel(0.0), channel(2.0 * PI / 3.0), channel(4.0 * PI / 3.0)]
}

/// Largest amount by which any pair of bodies interpenetrates.
pub fn max_overlap<V: Vec, T, Q>(solver: &Solver<V, T, Q>) -> V::Scalar
where
    Q: NeighborQuery<V>,
{
    let bodies = solver.objects();
    let mut worst = <V::Scalar as pebble::Float>::zero();
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let overlap = bodies[i].radius + bodies[j].radius - bodies[i].pos.distance(bodies[j].pos);
            if overlap > worst {
                worst = overlap;
            }
        }
    }
    worst
}

/// Bound on how far past the rim a body may sit after a full update: the
/// constraint pass runs before integration, so the last Verlet step can
/// carry a body outward by at most its own displacement.
pub fn assert_contained<V: Vec, T, Q>(solver: &Solver<V, T, Q>, slack: V::Scalar)
where
    Q: NeighborQuery<V>,
{
    let boundary = solver.constraint();
    for (index, body) in solver.objects().iter().enumerate() {
        let tolerance = body.displacement().length() + slack;
        assert!(
            boundary.contains(body, tolerance),
            "body {} at {:?} (radius {:?}) escaped the boundary",
            index,
            body.pos,
            body.radius,
        );
    }
}
