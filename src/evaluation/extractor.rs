//! Turns a solver's index order into ordered hubs and leg distances.

use crate::distance::haversine_miles;
use crate::error::RoutingError;
use crate::models::{is_permutation, HubPoint, ReturnArc, Route, RouteConstraint, ShortestPath};

/// Maps a hub index order back onto the input hubs and measures each leg.
///
/// Leg distances are recomputed from the raw coordinates, so they keep full
/// floating precision rather than the matrix's whole miles.
///
/// # Examples
///
/// ```
/// use hub_routing::models::{HubPoint, Route, RouteConstraint};
/// use hub_routing::evaluation::RouteExtractor;
///
/// let hubs = vec![
///     HubPoint::new(40.7128, -74.0060),  // New York
///     HubPoint::new(34.0522, -118.2437), // Los Angeles
/// ];
/// let extractor = RouteExtractor::new(&hubs, RouteConstraint::OpenPath);
/// let path = extractor.extract(&Route::new(vec![0, 1], 2445, true)).unwrap();
///
/// assert_eq!(path.hubs(), &hubs[..]);
/// assert_eq!(path.legs().len(), 1);
/// assert!((path.legs()[0] - 2445.71).abs() < 0.01);
/// ```
pub struct RouteExtractor<'a> {
    hubs: &'a [HubPoint],
    constraint: RouteConstraint,
    return_arc: ReturnArc,
}

impl<'a> RouteExtractor<'a> {
    /// Creates an extractor over the original hub list.
    pub fn new(hubs: &'a [HubPoint], constraint: RouteConstraint) -> Self {
        Self {
            hubs,
            constraint,
            return_arc: ReturnArc::default(),
        }
    }

    /// Sets whether a closed loop reports the leg back to the origin.
    pub fn with_return_arc(mut self, return_arc: ReturnArc) -> Self {
        self.return_arc = return_arc;
        self
    }

    /// Extracts the ordered hubs and leg distances of a solved route.
    pub fn extract(&self, route: &Route) -> Result<ShortestPath, RoutingError> {
        self.extract_order(route.order(), route.is_optimal())
    }

    /// Extracts from a bare index order.
    ///
    /// Path-style orders often stop before the terminal hub. For an open
    /// path, an order that is one short and lacks hub `N-1` gets it
    /// appended, so the terminal leg is always reported.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidInput`] if the (completed) order is not a
    /// permutation of `0..N` or violates the anchors.
    pub fn extract_order(&self, order: &[usize], optimal: bool) -> Result<ShortestPath, RoutingError> {
        let n = self.hubs.len();
        if n < self.constraint.min_hubs() {
            return Err(RoutingError::InvalidConstraint {
                constraint: self.constraint,
                hubs: n,
            });
        }

        let mut order = order.to_vec();
        let terminal = self.constraint.end(n);
        if self.constraint.has_terminal() && order.len() + 1 == n && !order.contains(&terminal) {
            order.push(terminal);
        }

        if order.len() != n || !is_permutation(&order) {
            return Err(RoutingError::invalid_input(format!(
                "route {order:?} is not a permutation of {n} hubs"
            )));
        }
        if order[0] != self.constraint.start(n)
            || (self.constraint.has_terminal() && order[n - 1] != terminal)
        {
            return Err(RoutingError::invalid_input(format!(
                "route {order:?} does not respect {} anchors",
                self.constraint
            )));
        }

        let hubs: Vec<HubPoint> = order.iter().map(|&i| self.hubs[i]).collect();
        let legs: Vec<f64> = hubs
            .windows(2)
            .map(|w| haversine_miles(&w[0], &w[1]))
            .collect();

        let return_leg = match (self.constraint, self.return_arc) {
            (RouteConstraint::ClosedLoop, ReturnArc::Include) => {
                Some(haversine_miles(&hubs[n - 1], &hubs[0]))
            }
            _ => None,
        };

        Ok(ShortestPath::new(order, hubs, legs, return_leg, optimal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_hubs() -> Vec<HubPoint> {
        (0..4).map(|i| HubPoint::new(0.0, i as f64)).collect()
    }

    #[test]
    fn test_extract_orders_hubs() {
        let hubs = line_hubs();
        let extractor = RouteExtractor::new(&hubs, RouteConstraint::ClosedLoop);
        let path = extractor
            .extract(&Route::new(vec![0, 2, 1, 3], 0, false))
            .expect("valid route");
        assert_eq!(path.hubs(), &[hubs[0], hubs[2], hubs[1], hubs[3]]);
        assert_eq!(path.order(), &[0, 2, 1, 3]);
        assert_eq!(path.legs().len(), 3);
        assert!((path.legs()[0] - hubs[0].distance_to(&hubs[2])).abs() < 1e-12);
        assert!(!path.is_optimal());
    }

    #[test]
    fn test_legs_keep_fractional_miles() {
        let hubs = line_hubs();
        let extractor = RouteExtractor::new(&hubs, RouteConstraint::OpenPath);
        let path = extractor
            .extract(&Route::new(vec![0, 1, 2, 3], 207, true))
            .expect("valid route");
        for leg in path.legs() {
            assert!((leg - 69.09758508645551).abs() < 1e-6);
        }
    }

    #[test]
    fn test_appends_omitted_terminal() {
        let hubs = line_hubs();
        let extractor = RouteExtractor::new(&hubs, RouteConstraint::OpenPath);
        let path = extractor.extract_order(&[0, 2, 1], true).expect("completed");
        assert_eq!(path.order(), &[0, 2, 1, 3]);
        assert_eq!(path.legs().len(), 3);
        assert!((path.legs()[2] - hubs[1].distance_to(&hubs[3])).abs() < 1e-12);
    }

    #[test]
    fn test_return_leg_included() {
        let hubs = line_hubs();
        let extractor = RouteExtractor::new(&hubs, RouteConstraint::ClosedLoop)
            .with_return_arc(ReturnArc::Include);
        let path = extractor.extract_order(&[0, 1, 2, 3], true).expect("valid");
        let back = hubs[3].distance_to(&hubs[0]);
        assert_eq!(path.return_leg(), Some(back));
        let legs: f64 = path.legs().iter().sum();
        assert!((path.total_distance() - (legs + back)).abs() < 1e-9);
    }

    #[test]
    fn test_return_leg_omitted_by_default() {
        let hubs = line_hubs();
        let extractor = RouteExtractor::new(&hubs, RouteConstraint::ClosedLoop);
        let path = extractor.extract_order(&[0, 1, 2, 3], true).expect("valid");
        assert!(path.return_leg().is_none());
    }

    #[test]
    fn test_open_path_never_has_return_leg() {
        let hubs = line_hubs();
        let extractor = RouteExtractor::new(&hubs, RouteConstraint::OpenPath)
            .with_return_arc(ReturnArc::Include);
        let path = extractor.extract_order(&[0, 1, 2, 3], true).expect("valid");
        assert!(path.return_leg().is_none());
    }

    #[test]
    fn test_single_hub_closed_loop() {
        let hubs = vec![HubPoint::new(5.0, 5.0)];
        let extractor = RouteExtractor::new(&hubs, RouteConstraint::ClosedLoop)
            .with_return_arc(ReturnArc::Include);
        let path = extractor.extract_order(&[0], true).expect("valid");
        assert!(path.legs().is_empty());
        assert_eq!(path.return_leg(), Some(0.0));
    }

    #[test]
    fn test_rejects_duplicate_index() {
        let hubs = line_hubs();
        let extractor = RouteExtractor::new(&hubs, RouteConstraint::ClosedLoop);
        let err = extractor.extract_order(&[0, 1, 1, 3], true).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidInput { .. }));
    }

    #[test]
    fn test_rejects_short_closed_loop() {
        let hubs = line_hubs();
        let extractor = RouteExtractor::new(&hubs, RouteConstraint::ClosedLoop);
        assert!(extractor.extract_order(&[0, 1, 2], true).is_err());
    }

    #[test]
    fn test_rejects_misplaced_anchor() {
        let hubs = line_hubs();
        let extractor = RouteExtractor::new(&hubs, RouteConstraint::OpenPath);
        assert!(extractor.extract_order(&[0, 3, 1, 2], true).is_err());
        assert!(extractor.extract_order(&[1, 0, 2, 3], true).is_err());
    }

    #[test]
    fn test_open_path_needs_two_hubs() {
        let hubs = vec![HubPoint::new(0.0, 0.0)];
        let extractor = RouteExtractor::new(&hubs, RouteConstraint::OpenPath);
        let err = extractor.extract_order(&[0], true).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidConstraint { .. }));
    }
}
