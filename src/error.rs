//! Error types raised while planning a hub route.

use thiserror::Error;

use crate::models::RouteConstraint;

/// Errors raised by matrix construction, route search, and route extraction.
///
/// None of these are retried internally: the search is deterministic, so
/// running it again on the same input cannot change the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// The hub list is empty or contains malformed coordinates.
    #[error("invalid hub input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },
    /// The requested anchoring cannot be satisfied with this many hubs.
    #[error("{constraint} routing needs at least {} hubs, got {hubs}", .constraint.min_hubs())]
    InvalidConstraint {
        /// The anchoring that was requested.
        constraint: RouteConstraint,
        /// Number of hubs supplied.
        hubs: usize,
    },
    /// The search finished without a feasible permutation.
    #[error("no feasible route found for {hubs} hubs")]
    NoSolution {
        /// Number of hubs supplied.
        hubs: usize,
    },
}

impl RoutingError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
