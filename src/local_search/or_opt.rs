//! Anchored Or-opt improvement.
//!
//! # Algorithm
//!
//! Tries moving segments of 1, 2, or 3 consecutive free hubs to a different
//! position between the anchors. For each segment size k ∈ {1, 2, 3} the
//! pass evaluates every removal point and every reinsertion point and
//! applies the single best move (lowest index wins among equal deltas).
//! Anchors never move: a segment can be reinserted right after `start` or
//! right before `end`, but never outside them.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use crate::distance::DistanceMatrix;

/// Applies Or-opt improvement to the free hubs between two anchors.
///
/// Returns the improved free sequence and the anchored route distance.
///
/// # Arguments
///
/// * `route` — Free hub indices in visiting order (anchors excluded)
/// * `start` — Hub the route leaves from
/// * `end` — Hub the route finishes into
/// * `distances` — Distance matrix
///
/// # Examples
///
/// ```
/// use hub_routing::models::HubPoint;
/// use hub_routing::distance::DistanceMatrix;
/// use hub_routing::local_search::{or_opt_improve, route_distance};
///
/// let hubs: Vec<HubPoint> = (0..5).map(|i| HubPoint::new(0.0, i as f64)).collect();
/// let dm = DistanceMatrix::from_hubs(&hubs).unwrap();
///
/// // Hub 3 is visited too early; Or-opt moves it back into place.
/// let (improved, dist) = or_opt_improve(&[3, 1, 2], 0, 4, &dm);
/// assert_eq!(improved, vec![1, 2, 3]);
/// assert!(dist < route_distance(&[3, 1, 2], 0, 4, &dm));
/// ```
pub fn or_opt_improve(
    route: &[usize],
    start: usize,
    end: usize,
    distances: &DistanceMatrix,
) -> (Vec<usize>, u64) {
    let mut current = route.to_vec();
    while or_opt_pass(&mut current, start, end, distances) {}
    let dist = route_distance(&current, start, end, distances);
    (current, dist)
}

/// Computes the anchored distance: start → route[0] → ... → route[n-1] → end.
///
/// An empty route costs the direct `start → end` arc, which is zero for a
/// closed loop over the origin alone.
pub fn route_distance(route: &[usize], start: usize, end: usize, distances: &DistanceMatrix) -> u64 {
    let (Some(&first), Some(&last)) = (route.first(), route.last()) else {
        return distances.get(start, end);
    };
    let inner: u64 = route.windows(2).map(|w| distances.get(w[0], w[1])).sum();
    distances.get(start, first) + inner + distances.get(last, end)
}

/// One pass over segment sizes 1, 2, and 3. Returns `true` if any move was
/// applied.
pub(crate) fn or_opt_pass(
    route: &mut Vec<usize>,
    start: usize,
    end: usize,
    distances: &DistanceMatrix,
) -> bool {
    let mut improved = false;
    for seg_len in 1..=3.min(route.len()) {
        if try_segment_move(route, start, end, distances, seg_len) {
            improved = true;
        }
    }
    improved
}

/// Finds and applies the best relocation of a `seg_len` segment.
fn try_segment_move(
    route: &mut Vec<usize>,
    start: usize,
    end: usize,
    distances: &DistanceMatrix,
    seg_len: usize,
) -> bool {
    let n = route.len();
    if n < seg_len + 1 {
        return false;
    }
    let d = |a: usize, b: usize| distances.get(a, b) as i64;

    let mut best_delta = 0i64;
    let mut best_move = None;

    for from in 0..=(n - seg_len) {
        let prev = if from == 0 { start } else { route[from - 1] };
        let after = if from + seg_len >= n {
            end
        } else {
            route[from + seg_len]
        };
        let seg_first = route[from];
        let seg_last = route[from + seg_len - 1];

        // Old edges: prev→seg_first + seg_last→after; after removal: prev→after
        let removal_gain = d(prev, seg_first) + d(seg_last, after) - d(prev, after);

        // `to` is the insertion point in the original indexing: the segment
        // lands between route[to - 1] and route[to].
        for to in 0..=n {
            if to >= from && to <= from + seg_len {
                continue;
            }

            let ins_prev = if to == 0 { start } else { route[to - 1] };
            let ins_next = if to >= n { end } else { route[to] };

            let insertion_cost =
                d(ins_prev, seg_first) + d(seg_last, ins_next) - d(ins_prev, ins_next);
            let delta = insertion_cost - removal_gain;

            if delta < best_delta {
                best_delta = delta;
                best_move = Some((from, to));
            }
        }
    }

    let Some((from, to)) = best_move else {
        return false;
    };

    let segment: Vec<usize> = route.drain(from..from + seg_len).collect();
    let insert_pos = if to > from { to - seg_len } else { to };
    route.splice(insert_pos..insert_pos, segment);
    true
}
