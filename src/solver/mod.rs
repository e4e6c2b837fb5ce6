//! Route search: exact for small hub counts, heuristic above that.
//!
//! - [`ExactSolver`] — Held–Karp dynamic programming, proven optimal
//! - [`HeuristicSolver`] — Nearest neighbor + 2-opt/Or-opt, multi-start
//! - [`AutoSolver`] — Picks one of the two by hub count
//!
//! All three share the [`RouteSolver`] contract and return a [`Route`]
//! whose [`is_optimal`](Route::is_optimal) flag says which regime produced it.

mod config;
mod exact;
mod heuristic;

pub use config::SolverConfig;
pub use exact::ExactSolver;

use exact::MAX_FREE_HUBS;
pub use heuristic::HeuristicSolver;

use crate::distance::DistanceMatrix;
use crate::error::RoutingError;
use crate::local_search::route_distance;
use crate::models::{Route, RouteConstraint};

/// Finds a minimum-cost visiting order under an anchoring constraint.
///
/// # Examples
///
/// ```
/// use hub_routing::models::{HubPoint, RouteConstraint};
/// use hub_routing::distance::DistanceMatrix;
/// use hub_routing::solver::{AutoSolver, RouteSolver};
///
/// let hubs = vec![
///     HubPoint::new(0.0, 0.0),
///     HubPoint::new(0.0, 2.0),
///     HubPoint::new(0.0, 1.0),
///     HubPoint::new(0.0, 3.0),
/// ];
/// let dm = DistanceMatrix::from_hubs(&hubs).unwrap();
///
/// let route = AutoSolver::default().solve(&dm, RouteConstraint::OpenPath).unwrap();
/// assert_eq!(route.order(), &[0, 2, 1, 3]);
/// assert!(route.is_optimal());
/// ```
pub trait RouteSolver {
    /// Returns a route visiting every hub exactly once with the
    /// constraint's anchors in place.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::InvalidInput`] if the matrix is empty.
    /// - [`RoutingError::InvalidConstraint`] if the anchors need more hubs
    ///   than the matrix has.
    /// - [`RoutingError::NoSolution`] if the search ends without a full
    ///   permutation.
    fn solve(
        &self,
        distances: &DistanceMatrix,
        constraint: RouteConstraint,
    ) -> Result<Route, RoutingError>;
}

/// Runs [`ExactSolver`] when the hub count is within
/// [`SolverConfig::exact_threshold`], [`HeuristicSolver`] otherwise.
///
/// A threshold beyond what the exact search can hold is capped, so a
/// valid input never fails on regime choice.
#[derive(Debug, Clone, Default)]
pub struct AutoSolver {
    config: SolverConfig,
}

impl AutoSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

impl RouteSolver for AutoSolver {
    fn solve(
        &self,
        distances: &DistanceMatrix,
        constraint: RouteConstraint,
    ) -> Result<Route, RoutingError> {
        let n = distances.size();
        let free = constraint.free_hubs(n).len();
        let mut exact = n <= self.config.exact_threshold;
        if exact && free > MAX_FREE_HUBS {
            log::debug!("{n} hubs, {constraint}: {free} free hubs exceed exact capacity");
            exact = false;
        }
        if exact {
            log::debug!("{n} hubs, {constraint}: exact search");
            ExactSolver::new().solve(distances, constraint)
        } else {
            log::debug!(
                "{n} hubs, {constraint}: heuristic search, {} restarts",
                self.config.restarts.max(1)
            );
            HeuristicSolver::new(self.config.clone()).solve(distances, constraint)
        }
    }
}

/// Anchors and free hubs of a validated problem.
#[derive(Debug)]
struct Anchored {
    size: usize,
    start: usize,
    end: usize,
    terminal: bool,
    free: Vec<usize>,
}

impl Anchored {
    /// Rejects problems no search can satisfy, before any search begins.
    fn new(distances: &DistanceMatrix, constraint: RouteConstraint) -> Result<Self, RoutingError> {
        let size = distances.size();
        if size == 0 {
            return Err(RoutingError::invalid_input(
                "at least one hub (the origin) is required",
            ));
        }
        if size < constraint.min_hubs() {
            return Err(RoutingError::InvalidConstraint {
                constraint,
                hubs: size,
            });
        }
        Ok(Self {
            size,
            start: constraint.start(size),
            end: constraint.end(size),
            terminal: constraint.has_terminal(),
            free: constraint.free_hubs(size),
        })
    }

    /// Wraps an ordering of the free hubs into a full route.
    fn assemble(
        &self,
        interior: &[usize],
        distances: &DistanceMatrix,
        optimal: bool,
    ) -> Result<Route, RoutingError> {
        let mut order = Vec::with_capacity(self.size);
        order.push(self.start);
        order.extend_from_slice(interior);
        if self.terminal {
            order.push(self.end);
        }

        let route = Route::new(
            order,
            route_distance(interior, self.start, self.end, distances),
            optimal,
        );
        if route.len() != self.size || !route.is_permutation() {
            return Err(RoutingError::NoSolution { hubs: self.size });
        }
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HubPoint;

    fn hubs(n: usize) -> DistanceMatrix {
        let hubs: Vec<HubPoint> = (0..n)
            .map(|i| HubPoint::new((i % 4) as f64, (i / 4) as f64 * 1.5))
            .collect();
        DistanceMatrix::from_hubs(&hubs).expect("valid hubs")
    }

    #[test]
    fn test_auto_uses_exact_for_small() {
        let route = AutoSolver::default()
            .solve(&hubs(6), RouteConstraint::ClosedLoop)
            .expect("solvable");
        assert!(route.is_optimal());
        assert_eq!(route.len(), 6);
    }

    #[test]
    fn test_auto_uses_heuristic_above_threshold() {
        let solver = AutoSolver::new(SolverConfig::default().with_exact_threshold(4));
        let route = solver
            .solve(&hubs(6), RouteConstraint::ClosedLoop)
            .expect("solvable");
        assert!(!route.is_optimal());
        assert!(route.is_permutation());
    }

    #[test]
    fn test_auto_oversized_threshold_falls_back() {
        let solver = AutoSolver::new(SolverConfig::default().with_exact_threshold(64));
        let route = solver
            .solve(&hubs(25), RouteConstraint::OpenPath)
            .expect("valid input is always solvable");
        assert!(!route.is_optimal());
        assert!(route.is_permutation());
        assert_eq!(route.order()[24], 24);
    }

    #[test]
    fn test_auto_one_past_exact_capacity() {
        // A 22-hub closed loop has 21 free hubs, one more than exact search holds.
        assert_eq!(RouteConstraint::ClosedLoop.free_hubs(22).len(), MAX_FREE_HUBS + 1);
        let solver = AutoSolver::new(SolverConfig::default().with_exact_threshold(22));
        let route = solver
            .solve(&hubs(22), RouteConstraint::ClosedLoop)
            .expect("solvable");
        assert!(!route.is_optimal());
        assert_eq!(route.len(), 22);
    }

    #[test]
    fn test_empty_matrix_is_invalid_input() {
        let dm = DistanceMatrix::from_data(0, vec![]).expect("empty grid");
        let err = AutoSolver::default()
            .solve(&dm, RouteConstraint::ClosedLoop)
            .unwrap_err();
        assert!(matches!(err, RoutingError::InvalidInput { .. }));
    }

    #[test]
    fn test_open_path_single_hub_is_invalid_constraint() {
        let err = AutoSolver::default()
            .solve(&hubs(1), RouteConstraint::OpenPath)
            .unwrap_err();
        assert_eq!(
            err,
            RoutingError::InvalidConstraint {
                constraint: RouteConstraint::OpenPath,
                hubs: 1
            }
        );
    }

    #[test]
    fn test_assemble_rejects_partial_route() {
        let dm = hubs(4);
        let anchored = Anchored::new(&dm, RouteConstraint::OpenPath).expect("valid");
        let err = anchored.assemble(&[1], &dm, true).unwrap_err();
        assert_eq!(err, RoutingError::NoSolution { hubs: 4 });
    }
}
