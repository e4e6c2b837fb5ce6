//! Great-circle distance and hub distance matrices.
//!
//! [`haversine_miles`] is the only geometry primitive; [`DistanceMatrix`]
//! truncates it to whole miles for the route search.

mod haversine;
mod matrix;

pub use haversine::{haversine, haversine_miles, EARTH_RADIUS_MILES};
pub use matrix::DistanceMatrix;
