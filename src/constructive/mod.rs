//! Constructive heuristics for building an initial anchored route.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor from the start anchor, O(n²)
//! - [`shuffled`] — Seeded random order, used to diversify restarts

mod nearest_neighbor;
mod shuffled;

pub use nearest_neighbor::nearest_neighbor;
pub use shuffled::shuffled;
