//! Multi-start construction + local search for larger hub counts.
//!
//! # Algorithm
//!
//! Each restart builds an initial order of the free hubs (restart 0 by
//! nearest neighbor, restart k ≥ 1 by a shuffle seeded from `seed + k`),
//! then alternates 2-opt and Or-opt passes until neither improves, the pass
//! cap is reached, or the time budget runs out. The budget is checked only
//! before each pass, never inside one.
//!
//! Restarts are independent: each owns its order and reads the shared
//! matrix. The winner is the lowest cost, ties going to the lowest restart
//! index, so running restarts in parallel does not change the result.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::constructive::{nearest_neighbor, shuffled};
use crate::distance::DistanceMatrix;
use crate::error::RoutingError;
use crate::local_search::{or_opt_pass, route_distance, two_opt_pass};
use crate::models::{Route, RouteConstraint};

use super::{Anchored, RouteSolver, SolverConfig};

/// Best-effort solver: result routes are never flagged optimal.
///
/// # Examples
///
/// ```
/// use hub_routing::models::{HubPoint, RouteConstraint};
/// use hub_routing::distance::DistanceMatrix;
/// use hub_routing::solver::{HeuristicSolver, RouteSolver, SolverConfig};
///
/// let hubs: Vec<HubPoint> = (0..20)
///     .map(|i| HubPoint::new((i % 5) as f64, (i / 5) as f64))
///     .collect();
/// let dm = DistanceMatrix::from_hubs(&hubs).unwrap();
///
/// let solver = HeuristicSolver::new(SolverConfig::default().with_seed(1));
/// let route = solver.solve(&dm, RouteConstraint::OpenPath).unwrap();
/// assert_eq!(route.len(), 20);
/// assert_eq!(route.order()[19], 19);
/// assert!(!route.is_optimal());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeuristicSolver {
    config: SolverConfig,
}

/// Outcome of one restart.
#[derive(Debug)]
struct Restart {
    interior: Vec<usize>,
    cost: u64,
    /// Stopped by the time budget before converging.
    cut_short: bool,
}

impl HeuristicSolver {
    /// Creates a heuristic solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    fn run_restart(
        &self,
        index: usize,
        anchored: &Anchored,
        distances: &DistanceMatrix,
        deadline: Option<Instant>,
    ) -> Restart {
        let mut interior = if index == 0 {
            nearest_neighbor(anchored.start, &anchored.free, distances)
        } else {
            let mut rng = StdRng::seed_from_u64(self.config.seed.wrapping_add(index as u64));
            shuffled(&anchored.free, &mut rng)
        };

        let (start, end) = (anchored.start, anchored.end);
        let mut cut_short = false;
        for pass in 0..self.config.max_passes {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                log::trace!("restart {index}: time budget exhausted after {pass} passes");
                cut_short = true;
                break;
            }
            let reversed = two_opt_pass(&mut interior, start, end, distances);
            let relocated = or_opt_pass(&mut interior, start, end, distances);
            if !reversed && !relocated {
                break;
            }
        }

        let cost = route_distance(&interior, start, end, distances);
        log::trace!("restart {index}: cost {cost}");
        Restart {
            interior,
            cost,
            cut_short,
        }
    }
}

impl RouteSolver for HeuristicSolver {
    fn solve(
        &self,
        distances: &DistanceMatrix,
        constraint: RouteConstraint,
    ) -> Result<Route, RoutingError> {
        let anchored = Anchored::new(distances, constraint)?;
        let deadline = self.config.time_limit().map(|limit| Instant::now() + limit);
        let restarts = self.config.restarts.max(1);

        let run = |index: usize| self.run_restart(index, &anchored, distances, deadline);
        let results: Vec<Restart> = if self.config.parallel {
            (0..restarts).into_par_iter().map(run).collect()
        } else {
            (0..restarts).map(run).collect()
        };

        let cut_short = results.iter().filter(|r| r.cut_short).count();
        if cut_short > 0 {
            log::warn!("time budget exhausted: {cut_short} of {restarts} restarts stopped early");
        }

        let (winner, best) = results
            .into_iter()
            .enumerate()
            .min_by_key(|(index, r)| (r.cost, *index))
            .ok_or(RoutingError::NoSolution {
                hubs: anchored.size,
            })?;

        let route = anchored.assemble(&best.interior, distances, false)?;
        log::debug!(
            "heuristic search: cost {} over {} hubs (restart {winner} of {restarts})",
            route.cost(),
            route.len()
        );
        Ok(route)
    }
}
