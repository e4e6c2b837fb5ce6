//! Domain model types for hub routing.
//!
//! Provides geographic hubs, the anchoring constraint that pins the route's
//! endpoints, the solver's index permutation, and the externally reported
//! path with per-leg distances.

mod constraint;
mod hub;
mod route;
mod solution;

pub use constraint::{ReturnArc, RouteConstraint};
pub use hub::{HubPoint, HubSet};
pub use route::Route;
pub(crate) use route::is_permutation;
pub use solution::ShortestPath;
