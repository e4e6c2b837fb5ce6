//! Externally reported route result.

use serde::{Deserialize, Serialize};

use super::HubPoint;

/// The ordered hubs of a planned route and the distance of each leg.
///
/// `legs[k]` is the great-circle distance in miles from `hubs[k]` to
/// `hubs[k + 1]`, so a route over `N` hubs has `N - 1` legs. Leg distances
/// are computed from the raw coordinates, not read back from the truncated
/// distance matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPath {
    order: Vec<usize>,
    hubs: Vec<HubPoint>,
    legs: Vec<f64>,
    return_leg: Option<f64>,
    optimal: bool,
}

impl ShortestPath {
    pub(crate) fn new(
        order: Vec<usize>,
        hubs: Vec<HubPoint>,
        legs: Vec<f64>,
        return_leg: Option<f64>,
        optimal: bool,
    ) -> Self {
        Self {
            order,
            hubs,
            legs,
            return_leg,
            optimal,
        }
    }

    /// Input indices of the hubs in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Hubs in visiting order.
    pub fn hubs(&self) -> &[HubPoint] {
        &self.hubs
    }

    /// Distance of each consecutive leg, in miles.
    pub fn legs(&self) -> &[f64] {
        &self.legs
    }

    /// Leg from the last hub back to the origin, if reported.
    pub fn return_leg(&self) -> Option<f64> {
        self.return_leg
    }

    /// `true` if the visiting order is proven optimal.
    pub fn is_optimal(&self) -> bool {
        self.optimal
    }

    /// Sum of all reported legs, including the return leg when present.
    pub fn total_distance(&self) -> f64 {
        self.legs.iter().sum::<f64>() + self.return_leg.unwrap_or(0.0)
    }

    /// Splits the result into `(ordered hubs, leg distances)`.
    pub fn into_parts(self) -> (Vec<HubPoint>, Vec<f64>) {
        (self.hubs, self.legs)
    }
}
