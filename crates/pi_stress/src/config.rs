//! Stress run configuration.

use crate::error::{StressError, StressResult};

/// Default number of sequential trials.
pub const DEFAULT_REPEATS: usize = 10;

/// Default number of concurrent trials.
pub const DEFAULT_PARALLELISM: usize = 10;

/// Default number of series terms per trial.
///
/// One billion terms keeps a modern core busy for a few seconds.
pub const DEFAULT_TERM_COUNT: i64 = 1_000_000_000;

/// Configuration for a stress run.
///
/// # Example
///
/// ```
/// use pi_stress::StressConfig;
///
/// let config = StressConfig::default();
/// assert_eq!(config.repeats, 10);
/// assert_eq!(config.parallelism, 10);
///
/// let quick = StressConfig::new(2, 4, 1_000);
/// assert!(quick.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StressConfig {
    /// Number of trials run back to back. Zero is allowed and yields an
    /// empty report.
    pub repeats: usize,

    /// Number of trials run concurrently, one per pool thread.
    pub parallelism: usize,

    /// Series terms summed by each trial. Non-positive values sum nothing.
    pub term_count: i64,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            repeats: DEFAULT_REPEATS,
            parallelism: DEFAULT_PARALLELISM,
            term_count: DEFAULT_TERM_COUNT,
        }
    }
}

impl StressConfig {
    /// Creates a configuration with the given values.
    pub fn new(repeats: usize, parallelism: usize, term_count: i64) -> Self {
        Self {
            repeats,
            parallelism,
            term_count,
        }
    }

    /// Returns a copy with a different term count.
    pub fn with_term_count(mut self, term_count: i64) -> Self {
        self.term_count = term_count;
        self
    }

    /// Checks that a parallel run can be built from this configuration.
    ///
    /// A parallel run needs at least one thread; every other value is
    /// meaningful, including zero repeats and non-positive term counts.
    pub fn validate(&self) -> StressResult<()> {
        if self.parallelism == 0 {
            return Err(StressError::InvalidConfig(
                "parallelism must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
