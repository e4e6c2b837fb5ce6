//! Solver route type.

use serde::{Deserialize, Serialize};

/// An ordered visiting sequence of hub indices produced by a solver.
///
/// `order` is a permutation of `0..N` with the constraint's anchors in
/// place. `cost` is the search objective in whole matrix miles: the sum of
/// matrix cells along consecutive hubs, plus the arc back to the origin for
/// a closed loop.
///
/// # Examples
///
/// ```
/// use hub_routing::models::Route;
///
/// let route = Route::new(vec![0, 2, 1, 3], 120, true);
/// assert_eq!(route.len(), 4);
/// assert!(route.is_optimal());
/// assert!(route.is_permutation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    order: Vec<usize>,
    cost: u64,
    optimal: bool,
}

impl Route {
    /// Creates a route from a hub order and its objective cost.
    pub fn new(order: Vec<usize>, cost: u64, optimal: bool) -> Self {
        Self {
            order,
            cost,
            optimal,
        }
    }

    /// Hub indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Search objective in whole miles.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// `true` if the route is proven optimal (exact regime),
    /// `false` if it is the best found by the heuristic.
    pub fn is_optimal(&self) -> bool {
        self.optimal
    }

    /// Number of hubs in the route.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the route visits no hubs.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if `order` contains each of `0..len` exactly once.
    pub fn is_permutation(&self) -> bool {
        is_permutation(&self.order)
    }

    /// Consumes the route, returning the hub order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }
}

pub(crate) fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    for &i in order {
        match seen.get_mut(i) {
            Some(s) if !*s => *s = true,
            _ => return false,
        }
    }
    true
}
