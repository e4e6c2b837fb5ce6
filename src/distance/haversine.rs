//! Haversine great-circle distance.
//!
//! # Formula
//!
//! ```text
//! a = sin²(Δφ/2) + cos(φ1)·cos(φ2)·sin²(Δλ/2)
//! c = 2·atan2(√a, √(1−a))
//! d = R·c
//! ```
//!
//! Assumes a spherical Earth, so results drift from ellipsoidal distances by
//! up to about 0.5%.

use crate::models::HubPoint;

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Great-circle distance between two coordinates given in degrees, on a
/// sphere of the given radius. The result is in the radius' unit.
///
/// # Examples
///
/// ```
/// use hub_routing::distance::{haversine, EARTH_RADIUS_MILES};
///
/// let d = haversine(0.0, 0.0, 0.0, 1.0, EARTH_RADIUS_MILES);
/// assert!((d - 69.0976).abs() < 1e-3);
/// assert_eq!(haversine(10.0, 20.0, 10.0, 20.0, EARTH_RADIUS_MILES), 0.0);
/// ```
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64, radius: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let sin_dphi = ((phi2 - phi1) / 2.0).sin();
    let sin_dlambda = ((lon2.to_radians() - lon1.to_radians()) / 2.0).sin();

    let a = sin_dphi * sin_dphi + phi1.cos() * phi2.cos() * sin_dlambda * sin_dlambda;
    // Rounding can push `a` a hair past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    radius * c
}

/// Great-circle distance between two hubs, in miles.
pub fn haversine_miles(from: &HubPoint, to: &HubPoint) -> f64 {
    haversine(
        from.latitude(),
        from.longitude(),
        to.latitude(),
        to.longitude(),
        EARTH_RADIUS_MILES,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_points() {
        let p = HubPoint::new(-33.8688, 151.2093);
        assert_eq!(haversine_miles(&p, &p), 0.0);
    }

    #[test]
    fn test_nyc_to_la() {
        let nyc = HubPoint::new(40.7128, -74.0060);
        let la = HubPoint::new(34.0522, -118.2437);
        let d = haversine_miles(&nyc, &la);
        assert!((d - 2445.710158844749).abs() < 1e-6);
    }

    #[test]
    fn test_symmetric() {
        let a = HubPoint::new(48.8566, 2.3522);
        let b = HubPoint::new(35.6762, 139.6503);
        assert!((haversine_miles(&a, &b) - haversine_miles(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let d = haversine(0.0, 0.0, 0.0, 1.0, EARTH_RADIUS_MILES);
        assert!((d - 69.09758508645551).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal_points() {
        let d = haversine(0.0, 0.0, 0.0, 180.0, EARTH_RADIUS_MILES);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_MILES).abs() < 1e-6);
    }

    #[test]
    fn test_radius_scales_result() {
        let miles = haversine(10.0, 10.0, 20.0, 20.0, 1.0);
        let scaled = haversine(10.0, 10.0, 20.0, 20.0, 2.0);
        assert!((scaled - 2.0 * miles).abs() < 1e-12);
    }
}
