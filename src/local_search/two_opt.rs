//! Anchored 2-opt improvement.
//!
//! # Algorithm
//!
//! The free hubs sit between a fixed `start` and a fixed `end`. For each
//! pair of positions (i, j) in the free sequence, compute the change in
//! distance from reversing `route[i..=j]`:
//!
//! ```text
//! delta = d(prev_i, r[j]) + d(r[i], next_j) - d(prev_i, r[i]) - d(r[j], next_j)
//! ```
//!
//! where `prev_i` is `start` when i = 0 and `next_j` is `end` when j is the
//! last position. Anchors are never moved. If delta < 0, reverse the
//! segment (first-improvement) and keep scanning. Repeat until a pass
//! finds nothing.
//!
//! The delta ignores edges inside the segment, which is only valid for a
//! symmetric matrix. Haversine matrices are symmetric by construction.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;

use super::or_opt::route_distance;

/// Applies 2-opt improvement to the free hubs between two anchors.
///
/// Returns the improved free sequence and the anchored route distance
/// `start → route[0] → … → route[n-1] → end`.
///
/// # Arguments
///
/// * `route` — Free hub indices in visiting order (anchors excluded)
/// * `start` — Hub the route leaves from
/// * `end` — Hub the route finishes into (the origin again for a closed loop)
/// * `distances` — Distance matrix
///
/// # Examples
///
/// ```
/// use hub_routing::models::HubPoint;
/// use hub_routing::distance::DistanceMatrix;
/// use hub_routing::local_search::two_opt_improve;
///
/// // Four hubs along the equator, one degree apart.
/// let hubs: Vec<HubPoint> = (0..4).map(|i| HubPoint::new(0.0, i as f64)).collect();
/// let dm = DistanceMatrix::from_hubs(&hubs).unwrap();
///
/// // Open path 0 → {2, 1} → 3 doubles back; 2-opt straightens it.
/// let (improved, dist) = two_opt_improve(&[2, 1], 0, 3, &dm);
/// assert_eq!(improved, vec![1, 2]);
/// assert_eq!(dist, dm.get(0, 3));
/// ```
pub fn two_opt_improve(
    route: &[usize],
    start: usize,
    end: usize,
    distances: &DistanceMatrix,
) -> (Vec<usize>, u64) {
    let mut current = route.to_vec();
    while two_opt_pass(&mut current, start, end, distances) {}
    let dist = route_distance(&current, start, end, distances);
    (current, dist)
}

/// One full scan over all (i, j) pairs. Returns `true` if any segment was
/// reversed.
pub(crate) fn two_opt_pass(
    route: &mut [usize],
    start: usize,
    end: usize,
    distances: &DistanceMatrix,
) -> bool {
    let n = route.len();
    if n < 2 {
        return false;
    }

    let mut improved = false;
    for i in 0..n - 1 {
        for j in i + 1..n {
            if two_opt_delta(route, start, end, distances, i, j) < 0 {
                route[i..=j].reverse();
                improved = true;
            }
        }
    }
    improved
}

/// Computes the distance change from reversing `route[i..=j]`.
///
/// Before: ...-prev_i - route[i] - ... - route[j] - next_j-...
/// After:  ...-prev_i - route[j] - ... - route[i] - next_j-...
fn two_opt_delta(
    route: &[usize],
    start: usize,
    end: usize,
    distances: &DistanceMatrix,
    i: usize,
    j: usize,
) -> i64 {
    let n = route.len();
    let prev_i = if i == 0 { start } else { route[i - 1] };
    let next_j = if j == n - 1 { end } else { route[j + 1] };

    let old_cost = distances.get(prev_i, route[i]) + distances.get(route[j], next_j);
    let new_cost = distances.get(prev_i, route[j]) + distances.get(route[i], next_j);

    new_cost as i64 - old_cost as i64
}
