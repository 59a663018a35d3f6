//! Pairwise circle de-penetration and pluggable candidate-pair queries.

use core::cmp::Ordering;

use crate::body::Body;
use crate::float::Float;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// Pushes bodies `i` and `j` apart if their disks overlap.
///
/// Pure positional correction: `prev_pos` is left alone, so the move shows
/// up as velocity on the next integration. The overlap is split by radius,
/// the larger body moving less, and scaled by `0.5 * response`.
///
/// Coincident centers (or a separation so small its normal overflows) fall
/// back to the `Vec::unit_x` axis, `i` moving toward +x. Returns true if a
/// correction was applied.
pub fn resolve_pair<V: Vec, T>(
    bodies: &mut [Body<V, T>],
    i: usize,
    j: usize,
    response: V::Scalar,
) -> bool {
    let (pos_i, radius_i) = (bodies[i].pos, bodies[i].radius);
    let (pos_j, radius_j) = (bodies[j].pos, bodies[j].radius);

    let delta = pos_i - pos_j;
    let min_dist = radius_i + radius_j;
    let dist_sq = delta.length_sq();
    if dist_sq >= min_dist * min_dist {
        return false;
    }

    let dist = dist_sq.sqrt();
    let normal = if dist > V::Scalar::zero() {
        delta.scale(V::Scalar::one() / dist)
    } else {
        V::unit_x()
    };
    let normal = if normal.is_finite() { normal } else { V::unit_x() };

    let ratio_i = radius_i / min_dist;
    let ratio_j = radius_j / min_dist;
    let correction = V::Scalar::half() * response * (dist - min_dist);

    bodies[i].pos = pos_i - normal.scale(ratio_j * correction);
    bodies[j].pos = pos_j + normal.scale(ratio_i * correction);
    true
}

/// Source of candidate pairs for the collision pass.
///
/// Implementations may over-report (every pair is re-checked exactly by
/// [`resolve_pair`]) but must not skip a pair that overlaps at the start of
/// the pass. Pairs are reported with `i < j`, in a deterministic order.
pub trait NeighborQuery<V: Vec> {
    fn for_each_pair<T, P>(&mut self, bodies: &mut [Body<V, T>], visit: P)
    where
        P: FnMut(&mut [Body<V, T>], usize, usize);
}

/// Every unordered pair in index order. O(n²).
#[derive(Clone, Copy, Debug, Default)]
pub struct AllPairs;

impl<V: Vec> NeighborQuery<V> for AllPairs {
    fn for_each_pair<T, P>(&mut self, bodies: &mut [Body<V, T>], mut visit: P)
    where
        P: FnMut(&mut [Body<V, T>], usize, usize),
    {
        let count = bodies.len();
        for i in 0..count {
            for j in (i + 1)..count {
                visit(bodies, i, j);
            }
        }
    }
}

/// Sweep-and-prune along a single axis.
///
/// Extents are projected onto `axis` once per pass; only pairs whose
/// projected intervals overlap are visited. Bodies pushed into new contacts
/// during the pass are picked up on the next sub-step.
#[derive(Clone, Debug)]
pub struct SweepAndPrune<V: Vec> {
    axis: V,
    intervals: AllocVec<(V::Scalar, V::Scalar, usize)>,
}

impl<V: Vec> SweepAndPrune<V> {
    /// Sweeps along `axis`. A zero axis falls back to `Vec::unit_x`.
    pub fn new(axis: V) -> Self {
        let axis = axis.normalize();
        let axis = if axis == V::zero() { V::unit_x() } else { axis };
        SweepAndPrune { axis, intervals: AllocVec::new() }
    }

    pub fn axis(&self) -> V {
        self.axis
    }
}

impl<V: Vec> Default for SweepAndPrune<V> {
    fn default() -> Self {
        Self::new(V::unit_x())
    }
}

impl<V: Vec> NeighborQuery<V> for SweepAndPrune<V> {
    fn for_each_pair<T, P>(&mut self, bodies: &mut [Body<V, T>], mut visit: P)
    where
        P: FnMut(&mut [Body<V, T>], usize, usize),
    {
        self.intervals.clear();
        for (index, body) in bodies.iter().enumerate() {
            let center = body.pos.dot(self.axis);
            self.intervals.push((center - body.radius, center + body.radius, index));
        }
        self.intervals.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(Ordering::Equal)
                .then(a.2.cmp(&b.2))
        });

        for a in 0..self.intervals.len() {
            let (_, max_a, index_a) = self.intervals[a];
            for b in (a + 1)..self.intervals.len() {
                let (min_b, _, index_b) = self.intervals[b];
                if min_b > max_a {
                    break;
                }
                let (i, j) = if index_a < index_b {
                    (index_a, index_b)
                } else {
                    (index_b, index_a)
                };
                visit(bodies, i, j);
            }
        }
    }
}

/// Runs one collision pass over `bodies`. Returns the number of contacts.
pub fn resolve_collisions<V, T, Q>(
    query: &mut Q,
    bodies: &mut [Body<V, T>],
    response: V::Scalar,
) -> usize
where
    V: Vec,
    Q: NeighborQuery<V>,
{
    let mut contacts = 0;
    query.for_each_pair(bodies, |bodies, i, j| {
        if resolve_pair(bodies, i, j, response) {
            contacts += 1;
        }
    });
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;
    use alloc::vec;

    fn body(x: f32, y: f32, radius: f32) -> Body<Vec2<f32>> {
        Body::new(Vec2::new(x, y), radius, ())
    }

    #[test]
    fn equal_radii_split_correction_evenly() {
        let mut bodies = vec![body(0.0, 0.0, 10.0), body(15.0, 0.0, 10.0)];
        assert!(resolve_pair(&mut bodies, 0, 1, 0.75));

        // overlap 5, correction 0.5 * 0.75 * 5 = 1.875, half each
        let moved_a = bodies[0].pos.distance(Vec2::new(0.0, 0.0));
        let moved_b = bodies[1].pos.distance(Vec2::new(15.0, 0.0));
        assert!(Float::abs(moved_a - 0.9375) < 1e-5, "a moved {}", moved_a);
        assert!(Float::abs(moved_b - 0.9375) < 1e-5, "b moved {}", moved_b);
        assert!(bodies[0].pos.x < 0.0);
        assert!(bodies[1].pos.x > 15.0);
        assert_eq!(bodies[0].pos.y, 0.0);
        assert_eq!(bodies[1].pos.y, 0.0);
    }

    #[test]
    fn larger_body_moves_less() {
        let mut bodies = vec![body(0.0, 0.0, 30.0), body(35.0, 0.0, 10.0)];
        resolve_pair(&mut bodies, 0, 1, 1.0);
        let moved_big = bodies[0].pos.distance(Vec2::new(0.0, 0.0));
        let moved_small = bodies[1].pos.distance(Vec2::new(35.0, 0.0));
        assert!(moved_big < moved_small);
        assert!(Float::abs(moved_small / moved_big - 3.0) < 1e-4);
    }

    #[test]
    fn separated_bodies_untouched() {
        let mut bodies = vec![body(0.0, 0.0, 5.0), body(10.0, 0.0, 5.0)];
        assert!(!resolve_pair(&mut bodies, 0, 1, 0.75));
        assert_eq!(bodies[0].pos, Vec2::new(0.0, 0.0));
        assert_eq!(bodies[1].pos, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn coincident_centers_use_fallback_axis() {
        let mut bodies = vec![body(4.0, 4.0, 2.0), body(4.0, 4.0, 2.0)];
        assert!(resolve_pair(&mut bodies, 0, 1, 1.0));
        assert!(bodies[0].pos.is_finite() && bodies[1].pos.is_finite());
        assert!(Float::abs(bodies[0].pos.x - 5.0) < 1e-6);
        assert!(Float::abs(bodies[1].pos.x - 3.0) < 1e-6);
        assert_eq!(bodies[0].pos.y, 4.0);
    }

    #[test]
    fn tiny_separation_keeps_its_direction() {
        let mut bodies: AllocVec<Body<Vec2<f64>>> = vec![
            Body::new(Vec2::new(0.0, 5e-7), 1.0, ()),
            Body::new(Vec2::new(0.0, 0.0), 1.0, ()),
        ];
        assert!(resolve_pair(&mut bodies, 0, 1, 1.0));

        assert_eq!(bodies[0].pos.x, 0.0);
        assert_eq!(bodies[1].pos.x, 0.0);
        // separated along y by the usual half of the overlap
        let gap = bodies[0].pos.y - bodies[1].pos.y;
        let expected = 5e-7 + 0.5 * (2.0 - 5e-7);
        assert!(Float::abs(gap - expected) < 1e-12, "gap = {}", gap);
        assert!(bodies[0].pos.y > 5e-7 && bodies[1].pos.y < 0.0);
    }

    #[test]
    fn all_pairs_visits_in_index_order() {
        let mut bodies = vec![body(0.0, 0.0, 1.0), body(0.0, 0.0, 1.0), body(0.0, 0.0, 1.0)];
        let mut seen = vec![];
        AllPairs.for_each_pair(&mut bodies, |_, i, j| seen.push((i, j)));
        assert_eq!(seen, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn sweep_and_prune_skips_distant_pairs() {
        let mut bodies = vec![
            body(100.0, 0.0, 5.0),
            body(0.0, 0.0, 5.0),
            body(8.0, 50.0, 5.0),
            body(200.0, 0.0, 5.0),
        ];
        let mut sap = SweepAndPrune::default();
        let mut seen = vec![];
        sap.for_each_pair(&mut bodies, |_, i, j| seen.push((i, j)));
        // only bodies 1 and 2 overlap on x
        assert_eq!(seen, vec![(1, 2)]);
    }

    #[test]
    fn sweep_and_prune_finds_every_overlap() {
        let mut bodies = vec![
            body(0.0, 0.0, 6.0),
            body(10.0, 1.0, 6.0),
            body(5.0, 9.0, 6.0),
            body(60.0, 0.0, 6.0),
            body(-8.0, -3.0, 6.0),
        ];
        let mut brute = bodies.clone();

        let sap_contacts = resolve_collisions(&mut SweepAndPrune::default(), &mut bodies, 0.0);
        let brute_contacts = resolve_collisions(&mut AllPairs, &mut brute, 0.0);
        assert_eq!(sap_contacts, brute_contacts);
        assert!(brute_contacts >= 3);
    }

    #[test]
    fn zero_axis_falls_back_to_unit_x() {
        let sap = SweepAndPrune::new(Vec2::<f32>::zero());
        assert_eq!(sap.axis(), Vec2::unit_x());
    }
}
