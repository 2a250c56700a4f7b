//! Collected trials and their summary statistics.

use crate::trial::Trial;
use std::fmt;
use std::time::Duration;

/// How the trials of a report were scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RunMode {
    /// One trial after another on the calling thread
    Sequential,
    /// All trials at once on a dedicated pool
    Parallel,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Sequential => write!(f, "sequential"),
            RunMode::Parallel => write!(f, "parallel"),
        }
    }
}

/// Timing summary over the trials of a report.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StressSummary {
    /// Number of trials
    pub count: usize,
    /// Fastest trial, seconds
    pub min_secs: f64,
    /// Mean trial time, seconds
    pub mean_secs: f64,
    /// Slowest trial, seconds
    pub max_secs: f64,
    /// Wall-clock time for the whole run, seconds
    pub wall_secs: f64,
}

/// Trials of one stress run, ordered by trial index.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StressReport {
    mode: RunMode,
    trials: Vec<Trial>,
    #[cfg_attr(feature = "serde", serde(rename = "wall_secs", serialize_with = "crate::trial::serialize_secs"))]
    wall_time: Duration,
}

impl StressReport {
    /// Builds a report, sorting trials by index.
    pub fn new(mode: RunMode, mut trials: Vec<Trial>, wall_time: Duration) -> Self {
        trials.sort_by_key(|t| t.index);
        Self {
            mode,
            trials,
            wall_time,
        }
    }

    /// Scheduling mode of the run.
    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Trials in index order.
    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    /// Wall-clock time for the whole run.
    pub fn wall_time(&self) -> Duration {
        self.wall_time
    }

    /// Returns `true` if the run executed no trials.
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Summary statistics, or `None` for an empty report.
    pub fn summary(&self) -> Option<StressSummary> {
        if self.trials.is_empty() {
            return None;
        }

        let secs = self.trials.iter().map(Trial::elapsed_secs);
        let min_secs = secs.clone().fold(f64::INFINITY, f64::min);
        let max_secs = secs.clone().fold(f64::NEG_INFINITY, f64::max);
        let mean_secs = secs.sum::<f64>() / self.trials.len() as f64;

        Some(StressSummary {
            count: self.trials.len(),
            min_secs,
            mean_secs,
            max_secs,
            wall_secs: self.wall_time.as_secs_f64(),
        })
    }
}
