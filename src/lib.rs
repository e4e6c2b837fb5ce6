//! # hub-routing
//!
//! Minimum-distance visiting order over a fixed set of geographic hubs: an
//! origin, intermediate warehouses or drone hubs, and optionally a pinned
//! destination. A single vehicle visits every hub exactly once.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (HubPoint, RouteConstraint, Route, ShortestPath)
//! - [`distance`] — Haversine distance and the whole-mile distance matrix
//! - [`constructive`] — Initial orders (nearest neighbor, seeded shuffle)
//! - [`local_search`] — Anchored improvement moves (2-opt, Or-opt)
//! - [`solver`] — Exact (Held–Karp) and heuristic (multi-start) route search
//! - [`evaluation`] — Extraction of ordered hubs and leg distances
//!
//! ## Usage
//!
//! ```
//! use hub_routing::{shortest_path, HubPoint, RouteConstraint};
//!
//! let hubs = vec![
//!     HubPoint::new(40.7128, -74.0060),
//!     HubPoint::new(34.0522, -118.2437),
//! ];
//! let (ordered, legs) = shortest_path(&hubs, RouteConstraint::OpenPath)
//!     .unwrap()
//!     .into_parts();
//! assert_eq!(ordered, hubs);
//! assert_eq!(legs.len(), 1);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
mod planner;
pub mod solver;

pub use error::RoutingError;
pub use models::{HubPoint, HubSet, ReturnArc, Route, RouteConstraint, ShortestPath};
pub use planner::{shortest_path, RoutePlanner};
