//! Route anchoring constraints.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which route positions are pinned, and to which hubs.
///
/// Both variants are described by a start anchor and an end anchor. The
/// start is always hub 0. For [`ClosedLoop`](RouteConstraint::ClosedLoop)
/// the end anchor is hub 0 again: the vehicle returns to the origin, so the
/// search charges the arc from the last visited hub back to the origin. For
/// [`OpenPath`](RouteConstraint::OpenPath) the end anchor is hub `N-1`, a
/// true terminal with nothing after it.
///
/// # Examples
///
/// ```
/// use hub_routing::models::RouteConstraint;
///
/// let c = RouteConstraint::OpenPath;
/// assert_eq!(c.start(5), 0);
/// assert_eq!(c.end(5), 4);
/// assert_eq!(RouteConstraint::ClosedLoop.end(5), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteConstraint {
    /// Fixed start at hub 0; the vehicle returns to it after the last hub.
    #[default]
    ClosedLoop,
    /// Fixed start at hub 0 and fixed end at hub `N-1`.
    OpenPath,
}

impl RouteConstraint {
    /// Index of the start anchor.
    ///
    /// Always the origin; `num_hubs` is taken to mirror [`end`](Self::end).
    pub fn start(&self, _num_hubs: usize) -> usize {
        0
    }

    /// Index of the node the route must finish into.
    ///
    /// For a closed loop this is the origin (the return arc).
    pub fn end(&self, num_hubs: usize) -> usize {
        match self {
            Self::ClosedLoop => 0,
            Self::OpenPath => num_hubs.saturating_sub(1),
        }
    }

    /// Smallest hub count for which the anchors are satisfiable.
    pub fn min_hubs(&self) -> usize {
        match self {
            Self::ClosedLoop => 1,
            Self::OpenPath => 2,
        }
    }

    /// Returns `true` if the route has a terminal hub distinct from the start.
    pub fn has_terminal(&self) -> bool {
        matches!(self, Self::OpenPath)
    }

    /// Indices that may be permuted freely between the anchors, ascending.
    pub(crate) fn free_hubs(&self, num_hubs: usize) -> Vec<usize> {
        let end = self.end(num_hubs);
        (0..num_hubs)
            .filter(|&i| i != self.start(num_hubs) && i != end)
            .collect()
    }
}

impl fmt::Display for RouteConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClosedLoop => f.write_str("closed-loop"),
            Self::OpenPath => f.write_str("open-path"),
        }
    }
}

/// Whether a closed-loop result reports the arc back to the origin.
///
/// The closed-loop search always charges that arc. This policy only decides
/// whether [`ShortestPath`](super::ShortestPath) carries it as a
/// `return_leg`. Open paths never have one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnArc {
    /// Report only the outbound visiting order and its legs.
    #[default]
    Omit,
    /// Also report the leg from the last hub back to the origin.
    Include,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_loop_anchors() {
        let c = RouteConstraint::ClosedLoop;
        assert_eq!(c.start(4), 0);
        assert_eq!(c.end(4), 0);
        assert_eq!(c.min_hubs(), 1);
        assert!(!c.has_terminal());
        assert_eq!(c.free_hubs(4), vec![1, 2, 3]);
    }

    #[test]
    fn test_open_path_anchors() {
        let c = RouteConstraint::OpenPath;
        assert_eq!(c.end(4), 3);
        assert_eq!(c.min_hubs(), 2);
        assert!(c.has_terminal());
        assert_eq!(c.free_hubs(4), vec![1, 2]);
        assert!(c.free_hubs(2).is_empty());
    }

    #[test]
    fn test_single_hub_free_set() {
        assert!(RouteConstraint::ClosedLoop.free_hubs(1).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(RouteConstraint::ClosedLoop.to_string(), "closed-loop");
        assert_eq!(RouteConstraint::OpenPath.to_string(), "open-path");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(RouteConstraint::default(), RouteConstraint::ClosedLoop);
        assert_eq!(ReturnArc::default(), ReturnArc::Omit);
    }
}
