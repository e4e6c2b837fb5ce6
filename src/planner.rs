//! End-to-end route planning over a hub list.

use crate::distance::DistanceMatrix;
use crate::error::RoutingError;
use crate::evaluation::RouteExtractor;
use crate::models::{HubPoint, ReturnArc, RouteConstraint, ShortestPath};
use crate::solver::{AutoSolver, RouteSolver, SolverConfig};

/// Plans the shortest visiting order for a hub list.
///
/// Chains matrix construction, size-selected search, and extraction. The
/// planner holds only configuration; every call to [`plan`](Self::plan) is
/// a pure computation over its argument.
///
/// # Examples
///
/// ```
/// use hub_routing::{HubPoint, RouteConstraint, RoutePlanner};
///
/// let hubs = vec![
///     HubPoint::new(40.7128, -74.0060),  // New York (origin)
///     HubPoint::new(39.9526, -75.1652),  // Philadelphia
///     HubPoint::new(41.8781, -87.6298),  // Chicago
///     HubPoint::new(34.0522, -118.2437), // Los Angeles (destination)
/// ];
/// let path = RoutePlanner::new(RouteConstraint::OpenPath).plan(&hubs).unwrap();
///
/// assert_eq!(path.order(), &[0, 1, 2, 3]);
/// assert_eq!(path.legs().len(), 3);
/// assert!(path.is_optimal());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoutePlanner {
    constraint: RouteConstraint,
    return_arc: ReturnArc,
    solver: SolverConfig,
}

impl RoutePlanner {
    /// Creates a planner for the given anchoring with default search settings.
    pub fn new(constraint: RouteConstraint) -> Self {
        Self {
            constraint,
            ..Self::default()
        }
    }

    /// Sets whether a closed loop reports the leg back to the origin.
    pub fn with_return_arc(mut self, return_arc: ReturnArc) -> Self {
        self.return_arc = return_arc;
        self
    }

    /// Replaces the search configuration.
    pub fn with_solver_config(mut self, config: SolverConfig) -> Self {
        self.solver = config;
        self
    }

    /// The active anchoring.
    pub fn constraint(&self) -> RouteConstraint {
        self.constraint
    }

    /// Plans a route over `hubs`: index 0 is the origin and, for an open
    /// path, the last hub is the destination.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::InvalidInput`] for an empty list or bad coordinates.
    /// - [`RoutingError::InvalidConstraint`] when the anchoring needs more hubs.
    /// - [`RoutingError::NoSolution`] if the search yields no full route.
    pub fn plan(&self, hubs: &[HubPoint]) -> Result<ShortestPath, RoutingError> {
        let distances = DistanceMatrix::from_hubs(hubs)?;
        let route = AutoSolver::new(self.solver.clone()).solve(&distances, self.constraint)?;
        RouteExtractor::new(hubs, self.constraint)
            .with_return_arc(self.return_arc)
            .extract(&route)
    }
}

/// Plans a route with default search settings.
///
/// Shorthand for `RoutePlanner::new(constraint).plan(hubs)`.
pub fn shortest_path(
    hubs: &[HubPoint],
    constraint: RouteConstraint,
) -> Result<ShortestPath, RoutingError> {
    RoutePlanner::new(constraint).plan(hubs)
}
