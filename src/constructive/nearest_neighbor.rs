//! Nearest-neighbor constructive heuristic.
//!
//! Builds the route greedily: starting from the start anchor, always visit
//! the nearest unvisited free hub. The end anchor is appended implicitly by
//! the caller, so it is never a candidate.
//!
//! # Complexity
//!
//! O(n²) where n = number of free hubs.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for TSP. While solution
//! quality is typically 15-25% above optimal, it provides a fast baseline
//! for local search.

use crate::distance::DistanceMatrix;

/// Orders the free hubs by repeatedly moving to the nearest unvisited one.
///
/// Ties go to the lowest hub index, so the result is fully determined by
/// the matrix.
///
/// # Arguments
///
/// * `start` — Start anchor
/// * `free` — Hubs to order (anchors excluded)
/// * `distances` — Distance matrix
///
/// # Examples
///
/// ```
/// use hub_routing::models::HubPoint;
/// use hub_routing::distance::DistanceMatrix;
/// use hub_routing::constructive::nearest_neighbor;
///
/// let hubs = vec![
///     HubPoint::new(0.0, 0.0),
///     HubPoint::new(0.0, 3.0),
///     HubPoint::new(0.0, 1.0),
///     HubPoint::new(0.0, 2.0),
/// ];
/// let dm = DistanceMatrix::from_hubs(&hubs).unwrap();
///
/// assert_eq!(nearest_neighbor(0, &[1, 2, 3], &dm), vec![2, 3, 1]);
/// ```
pub fn nearest_neighbor(start: usize, free: &[usize], distances: &DistanceMatrix) -> Vec<usize> {
    let mut remaining = free.to_vec();
    let mut route = Vec::with_capacity(free.len());
    let mut current = start;

    while let Some(next) = distances.nearest_neighbor(current, &remaining) {
        remaining.retain(|&h| h != next);
        route.push(next);
        current = next;
    }

    route
}
