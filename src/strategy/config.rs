//! Local search configuration.

/// Configuration for [`LocalSearch`](super::LocalSearch).
///
/// The number of restarts scales with the problem size `n`:
/// `small_restart_factor · n` when `n < small_problem_threshold`,
/// otherwise `large_restart_factor · n`.
///
/// # Examples
///
/// ```
/// use u_shelf::strategy::LocalSearchConfig;
///
/// let config = LocalSearchConfig::default().with_seed(7);
/// assert_eq!(config.restarts_for(10), 30);
/// assert_eq!(config.restarts_for(14), 70);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSearchConfig {
    /// Sizes strictly below this use the small restart factor.
    pub small_problem_threshold: usize,

    /// Restarts per item for small problems.
    pub small_restart_factor: usize,

    /// Restarts per item for large problems.
    pub large_restart_factor: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed on every call.
    pub seed: Option<u64>,

    /// Whether to run restarts in parallel using rayon.
    ///
    /// Only effective with the `parallel` cargo feature.
    pub parallel: bool,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            small_problem_threshold: 14,
            small_restart_factor: 3,
            large_restart_factor: 5,
            seed: None,
            parallel: false,
        }
    }
}

impl LocalSearchConfig {
    pub fn with_small_problem_threshold(mut self, n: usize) -> Self {
        self.small_problem_threshold = n;
        self
    }

    pub fn with_small_restart_factor(mut self, factor: usize) -> Self {
        self.small_restart_factor = factor;
        self
    }

    pub fn with_large_restart_factor(mut self, factor: usize) -> Self {
        self.large_restart_factor = factor;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Number of restarts for a problem of `n` items.
    pub fn restarts_for(&self, n: usize) -> usize {
        if n < self.small_problem_threshold {
            self.small_restart_factor * n
        } else {
            self.large_restart_factor * n
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.small_restart_factor == 0 {
            return Err("small_restart_factor must be at least 1".into());
        }
        if self.large_restart_factor == 0 {
            return Err("large_restart_factor must be at least 1".into());
        }
        Ok(())
    }
}
