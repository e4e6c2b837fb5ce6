//! Exact anchored route search by Held–Karp dynamic programming.
//!
//! # Algorithm
//!
//! Let `F` be the k free hubs. For every subset `S ⊆ F` and hub `j ∈ S`,
//! `rest[S][j]` is the cheapest way to finish the route from `j`, having
//! already visited exactly `S`: visit `F \ S` in some order, then arrive at
//! the end anchor.
//!
//! ```text
//! rest[F][j] = d(j, end)
//! rest[S][j] = min over n ∉ S of d(j, n) + rest[S ∪ {n}][n]
//! ```
//!
//! Subsets are filled from the full set downward. The route is then read off
//! forward from the start anchor, taking the lowest-index hub among equally
//! cheap choices at each step, which yields the lexicographically smallest
//! optimal order.
//!
//! # Complexity
//!
//! O(2^k · k²) time, O(2^k · k) memory.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *Journal of the SIAM* 10(1), 196-210.

use crate::distance::DistanceMatrix;
use crate::error::RoutingError;
use crate::models::{Route, RouteConstraint};

use super::{Anchored, RouteSolver};

/// Largest number of free hubs the DP table is built for.
pub(crate) const MAX_FREE_HUBS: usize = 20;

/// Proven-optimal solver for small hub counts.
///
/// # Examples
///
/// ```
/// use hub_routing::models::{HubPoint, RouteConstraint};
/// use hub_routing::distance::DistanceMatrix;
/// use hub_routing::solver::{ExactSolver, RouteSolver};
///
/// // Corners of a one-degree square.
/// let hubs = vec![
///     HubPoint::new(0.0, 0.0),
///     HubPoint::new(0.0, 1.0),
///     HubPoint::new(1.0, 1.0),
///     HubPoint::new(1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_hubs(&hubs).unwrap();
///
/// let route = ExactSolver::new().solve(&dm, RouteConstraint::ClosedLoop).unwrap();
/// assert_eq!(route.order(), &[0, 1, 2, 3]);
/// assert_eq!(route.cost(), 4 * 69);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSolver;

impl ExactSolver {
    /// Creates an exact solver.
    pub fn new() -> Self {
        Self
    }
}

impl RouteSolver for ExactSolver {
    fn solve(
        &self,
        distances: &DistanceMatrix,
        constraint: RouteConstraint,
    ) -> Result<Route, RoutingError> {
        let anchored = Anchored::new(distances, constraint)?;
        let k = anchored.free.len();
        if k > MAX_FREE_HUBS {
            return Err(RoutingError::invalid_input(format!(
                "{} hubs is too many for exact search (at most {} free hubs)",
                anchored.size, MAX_FREE_HUBS
            )));
        }

        let interior = held_karp(&anchored.free, anchored.start, anchored.end, distances)
            .ok_or(RoutingError::NoSolution {
                hubs: anchored.size,
            })?;
        let route = anchored.assemble(&interior, distances, true)?;
        log::debug!("exact search: cost {} over {} hubs", route.cost(), route.len());
        Ok(route)
    }
}

/// Returns the cheapest ordering of `free` between `start` and `end`.
fn held_karp(
    free: &[usize],
    start: usize,
    end: usize,
    distances: &DistanceMatrix,
) -> Option<Vec<usize>> {
    let k = free.len();
    if k == 0 {
        return Some(Vec::new());
    }

    let full = (1usize << k) - 1;
    let idx = |mask: usize, j: usize| mask * k + j;
    let d = |a: usize, b: usize| distances.get(free[a], free[b]);

    let mut rest = vec![u64::MAX; (full + 1) * k];
    for j in 0..k {
        rest[idx(full, j)] = distances.get(free[j], end);
    }

    for mask in (1..full).rev() {
        for j in (0..k).filter(|&j| mask & (1 << j) != 0) {
            let mut best = u64::MAX;
            for n in (0..k).filter(|&n| mask & (1 << n) == 0) {
                let tail = rest[idx(mask | (1 << n), n)];
                if tail != u64::MAX {
                    best = best.min(d(j, n) + tail);
                }
            }
            rest[idx(mask, j)] = best;
        }
    }

    // Walk forward from the start anchor.
    let mut interior = Vec::with_capacity(k);
    let mut mask = 0usize;
    let mut current = start;
    for _ in 0..k {
        let mut choice: Option<(u64, usize)> = None;
        for n in (0..k).filter(|&n| mask & (1 << n) == 0) {
            let tail = rest[idx(mask | (1 << n), n)];
            if tail == u64::MAX {
                continue;
            }
            let cost = distances.get(current, free[n]) + tail;
            if choice.map_or(true, |(best, _)| cost < best) {
                choice = Some((cost, n));
            }
        }
        let (_, n) = choice?;
        mask |= 1 << n;
        current = free[n];
        interior.push(current);
    }

    Some(interior)
}
