//! Hub point and hub list types.

use serde::{Deserialize, Serialize};

use crate::distance::haversine_miles;

/// A geographic hub (origin, warehouse, drone hub, or destination).
///
/// Hubs carry no identity of their own: a hub is identified by its position
/// in the input sequence. Index 0 is always the origin.
///
/// # Examples
///
/// ```
/// use hub_routing::models::HubPoint;
///
/// let nyc = HubPoint::new(40.7128, -74.0060);
/// let la = HubPoint::new(34.0522, -118.2437);
/// assert!(nyc.is_valid());
/// assert!((nyc.distance_to(&la) - 2445.71).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HubPoint {
    #[serde(rename = "lat")]
    latitude: f64,
    #[serde(rename = "lon")]
    longitude: f64,
}

impl HubPoint {
    /// Creates a hub at the given coordinates, in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `true` if both coordinates are finite and within range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to another hub, in miles.
    pub fn distance_to(&self, other: &HubPoint) -> f64 {
        haversine_miles(self, other)
    }
}

impl From<(f64, f64)> for HubPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// The document shape hub loaders produce: `{"hubs": [{"lat": .., "lon": ..}, ..]}`.
///
/// Reading the document is the caller's business; this type only fixes
/// the field layout so loaders and the engine agree on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HubSet {
    /// Hubs in visiting-priority order: origin first, destination last.
    pub hubs: Vec<HubPoint>,
}

impl HubSet {
    /// Wraps a hub list.
    pub fn new(hubs: Vec<HubPoint>) -> Self {
        Self { hubs }
    }

    /// Number of hubs.
    pub fn len(&self) -> usize {
        self.hubs.len()
    }

    /// Returns `true` if there are no hubs.
    pub fn is_empty(&self) -> bool {
        self.hubs.is_empty()
    }
}
