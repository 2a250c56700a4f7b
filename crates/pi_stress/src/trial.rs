//! A single timed call of the series estimator.

use pi_core::series::{estimate, truncation_bound};
use std::time::{Duration, Instant};
use tracing::debug;

/// Outcome of one timed estimator call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trial {
    /// Position of the trial within its run, starting at 0
    pub index: usize,
    /// Series terms summed
    pub term_count: i64,
    /// Estimate returned by the series
    pub estimate: f64,
    /// Wall-clock time spent in the estimator
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_secs"))]
    pub elapsed: Duration,
}

impl Trial {
    /// Absolute distance between the estimate and π.
    #[inline]
    pub fn abs_error(&self) -> f64 {
        (self.estimate - std::f64::consts::PI).abs()
    }

    /// Theoretical bound on [`Trial::abs_error`] for this term count.
    #[inline]
    pub fn error_bound(&self) -> f64 {
        truncation_bound(self.term_count)
    }

    /// Elapsed time in seconds.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Serialises a duration as fractional seconds.
#[cfg(feature = "serde")]
pub(crate) fn serialize_secs<S>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Runs the estimator once and times it.
pub fn run_trial(index: usize, term_count: i64) -> Trial {
    let start = Instant::now();
    let value = estimate(term_count);
    let elapsed = start.elapsed();

    debug!(
        index,
        term_count,
        estimate = value,
        elapsed_secs = elapsed.as_secs_f64(),
        "Trial finished"
    );

    Trial {
        index,
        term_count,
        estimate: value,
        elapsed,
    }
}
