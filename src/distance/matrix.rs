//! Dense hub distance matrix.

use crate::error::RoutingError;
use crate::models::HubPoint;

/// A dense n×n matrix of whole-mile distances, stored in row-major order.
///
/// Each off-diagonal cell holds the haversine distance truncated toward zero
/// (`floor`, not rounded). The fractional loss is part of the cost model the
/// search runs on. The diagonal is zero and the matrix is symmetric; both
/// hold by construction and can be checked with [`is_symmetric`](Self::is_symmetric)
/// and [`has_zero_diagonal`](Self::has_zero_diagonal).
///
/// # Examples
///
/// ```
/// use hub_routing::models::HubPoint;
/// use hub_routing::distance::DistanceMatrix;
///
/// let hubs = vec![
///     HubPoint::new(0.0, 0.0),
///     HubPoint::new(0.0, 1.0),
///     HubPoint::new(1.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_hubs(&hubs).unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 1), 69); // 69.0976 miles, truncated
/// assert_eq!(dm.get(0, 2), 97);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<u64>,
    size: usize,
}

impl DistanceMatrix {
    /// Builds the matrix from an ordered hub list.
    ///
    /// Computes the upper triangle and mirrors it, so `N(N-1)/2` haversine
    /// evaluations are made.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidInput`] if `hubs` is empty or any hub has
    /// non-finite or out-of-range coordinates.
    pub fn from_hubs(hubs: &[HubPoint]) -> Result<Self, RoutingError> {
        if hubs.is_empty() {
            return Err(RoutingError::invalid_input(
                "at least one hub (the origin) is required",
            ));
        }
        if let Some(idx) = hubs.iter().position(|h| !h.is_valid()) {
            let hub = &hubs[idx];
            return Err(RoutingError::invalid_input(format!(
                "hub {idx} has invalid coordinates ({}, {})",
                hub.latitude(),
                hub.longitude()
            )));
        }

        let n = hubs.len();
        let mut data = vec![0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = hubs[i].distance_to(&hubs[j]).floor() as u64;
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        log::trace!("built {n}x{n} distance matrix");
        Ok(Self { data, size: n })
    }

    /// Creates a matrix from an explicit n×n grid of whole miles.
    ///
    /// Returns `None` if the data length doesn't match `size * size`, the
    /// diagonal is not zero, or the grid is not symmetric.
    pub fn from_data(size: usize, data: Vec<u64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        let dm = Self { data, size };
        (dm.has_zero_diagonal() && dm.is_symmetric()).then_some(dm)
    }

    /// Returns the distance from hub `from` to hub `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.data[from * self.size + to]
    }

    /// Number of hubs in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `get(i, j) == get(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Returns `true` if every diagonal cell is zero.
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.size).all(|i| self.get(i, i) == 0)
    }

    /// Sum of matrix cells along consecutive pairs of `order`.
    pub fn path_cost(&self, order: &[usize]) -> u64 {
        order.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }

    /// Returns the nearest of `candidates` to `from`.
    ///
    /// Ties go to the candidate with the lowest index. Returns `None` if
    /// `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by_key(|&c| (self.get(from, c), c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_hubs() -> Vec<HubPoint> {
        vec![
            HubPoint::new(0.0, 0.0),
            HubPoint::new(0.0, 1.0),
            HubPoint::new(1.0, 1.0),
            HubPoint::new(1.0, 0.0),
        ]
    }

    #[test]
    fn test_from_hubs() {
        let dm = DistanceMatrix::from_hubs(&square_hubs()).expect("valid hubs");
        assert_eq!(dm.size(), 4);
        assert_eq!(dm.get(0, 1), 69);
        assert_eq!(dm.get(0, 2), 97);
        assert_eq!(dm.get(2, 3), 69);
        assert_eq!(dm.get(3, 3), 0);
    }

    #[test]
    fn test_truncates_not_rounds() {
        // 97.716 miles must become 97, not 98
        let dm = DistanceMatrix::from_hubs(&square_hubs()).expect("valid hubs");
        assert_eq!(dm.get(1, 3), 97);
    }

    #[test]
    fn test_symmetric_zero_diagonal() {
        let dm = DistanceMatrix::from_hubs(&square_hubs()).expect("valid hubs");
        assert!(dm.is_symmetric());
        assert!(dm.has_zero_diagonal());
    }

    #[test]
    fn test_single_hub() {
        let dm = DistanceMatrix::from_hubs(&[HubPoint::new(10.0, 10.0)]).expect("valid hub");
        assert_eq!(dm.size(), 1);
        assert_eq!(dm.get(0, 0), 0);
    }

    #[test]
    fn test_empty_hubs_rejected() {
        let err = DistanceMatrix::from_hubs(&[]).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidInput { .. }));
    }

    #[test]
    fn test_invalid_coordinates_rejected() {
        let hubs = vec![HubPoint::new(0.0, 0.0), HubPoint::new(f64::NAN, 1.0)];
        let err = DistanceMatrix::from_hubs(&hubs).unwrap_err();
        assert!(err.to_string().contains("hub 1"));
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0, 5, 5, 0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5);
        assert_eq!(dm.get(1, 0), 5);
    }

    #[test]
    fn test_from_data_invalid() {
        assert!(DistanceMatrix::from_data(2, vec![0, 1, 2]).is_none());
        assert!(DistanceMatrix::from_data(2, vec![1, 1, 1, 0]).is_none());
    }

    #[test]
    fn test_asymmetric_matrix_rejected() {
        assert!(DistanceMatrix::from_data(2, vec![0, 10, 15, 0]).is_none());
        // Only the (2, 1) cell differs from its mirror.
        assert!(DistanceMatrix::from_data(3, vec![0, 4, 7, 4, 0, 2, 7, 3, 0]).is_none());
        let dm = DistanceMatrix::from_data(3, vec![0, 4, 7, 4, 0, 2, 7, 2, 0]).expect("symmetric");
        assert!(dm.is_symmetric());
    }

    #[test]
    fn test_path_cost() {
        let dm = DistanceMatrix::from_hubs(&square_hubs()).expect("valid hubs");
        assert_eq!(dm.path_cost(&[0, 1, 2, 3, 0]), 276);
        assert_eq!(dm.path_cost(&[0]), 0);
    }

    #[test]
    fn test_nearest_neighbor_lowest_index_on_tie() {
        let dm = DistanceMatrix::from_hubs(&square_hubs()).expect("valid hubs");
        // hubs 1 and 3 are both 69 miles from the origin
        assert_eq!(dm.nearest_neighbor(0, &[3, 2, 1]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, &[2]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[]), None);
    }
}
