//! Route search configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Parameters for regime selection and the heuristic search.
///
/// # Examples
///
/// ```
/// use hub_routing::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_exact_threshold(10)
///     .with_restarts(4)
///     .with_seed(7)
///     .with_time_limit_ms(250);
/// assert_eq!(config.exact_threshold, 10);
/// assert_eq!(config.restarts, 4);
/// assert!(config.time_limit().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Largest hub count solved exactly (Held–Karp). Above it the
    /// heuristic runs.
    pub exact_threshold: usize,
    /// Number of heuristic restarts. Restart 0 starts from nearest
    /// neighbor, the rest from seeded random orders.
    pub restarts: usize,
    /// Base seed for the random restarts.
    pub seed: u64,
    /// Cap on improvement passes per restart.
    pub max_passes: usize,
    /// Wall-clock budget for the heuristic, in milliseconds.
    pub time_limit_ms: Option<u64>,
    /// Run restarts on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            exact_threshold: 13,
            restarts: 8,
            seed: 42,
            max_passes: 1000,
            time_limit_ms: None,
            parallel: true,
        }
    }
}

impl SolverConfig {
    /// Sets the largest hub count solved exactly.
    pub fn with_exact_threshold(mut self, threshold: usize) -> Self {
        self.exact_threshold = threshold;
        self
    }

    /// Sets the number of heuristic restarts (at least one always runs).
    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    /// Sets the base seed for random restarts.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the cap on improvement passes per restart.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Sets the heuristic's wall-clock budget.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Enables or disables parallel restarts.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The time budget as a [`Duration`], if set.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let c = SolverConfig::default();
        assert_eq!(c.exact_threshold, 13);
        assert_eq!(c.restarts, 8);
        assert_eq!(c.seed, 42);
        assert_eq!(c.max_passes, 1000);
        assert!(c.time_limit().is_none());
        assert!(c.parallel);
    }

    #[test]
    fn test_builder() {
        let c = SolverConfig::default()
            .with_exact_threshold(5)
            .with_restarts(2)
            .with_seed(9)
            .with_max_passes(10)
            .with_time_limit_ms(1500)
            .with_parallel(false);
        assert_eq!(c.exact_threshold, 5);
        assert_eq!(c.restarts, 2);
        assert_eq!(c.seed, 9);
        assert_eq!(c.max_passes, 10);
        assert_eq!(c.time_limit(), Some(Duration::from_millis(1500)));
        assert!(!c.parallel);
    }
}
