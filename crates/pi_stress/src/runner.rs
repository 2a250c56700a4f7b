//! Sequential and parallel stress runs.
//!
//! A sequential run calls the estimator `repeats` times on the calling thread.
//! A parallel run builds a dedicated rayon pool with `parallelism` threads and
//! starts that many trials at once, so each thread carries one full workload.

use crate::config::StressConfig;
use crate::error::StressResult;
use crate::report::{RunMode, StressReport};
use crate::trial::{run_trial, Trial};
use rayon::prelude::*;
use std::time::Instant;
use tracing::info;

/// Runs `config.repeats` trials back to back.
///
/// Zero repeats produces an empty report.
pub fn run_sequential(config: &StressConfig) -> StressReport {
    info!(
        repeats = config.repeats,
        term_count = config.term_count,
        "Starting sequential stress run"
    );

    let start = Instant::now();
    let trials: Vec<Trial> = (0..config.repeats)
        .map(|index| run_trial(index, config.term_count))
        .collect();
    let wall_time = start.elapsed();

    info!(
        wall_secs = wall_time.as_secs_f64(),
        "Sequential stress run finished"
    );
    StressReport::new(RunMode::Sequential, trials, wall_time)
}

/// Runs `config.parallelism` trials concurrently.
///
/// # Errors
///
/// Returns `StressError::InvalidConfig` if `parallelism` is zero, or
/// `StressError::ThreadPool` if the pool cannot be built.
pub fn run_parallel(config: &StressConfig) -> StressResult<StressReport> {
    config.validate()?;

    info!(
        parallelism = config.parallelism,
        term_count = config.term_count,
        "Starting parallel stress run"
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.parallelism)
        .thread_name(|i| format!("pi-stress-{}", i))
        .build()?;

    let term_count = config.term_count;
    let start = Instant::now();
    let trials: Vec<Trial> = pool.install(|| {
        (0..config.parallelism)
            .into_par_iter()
            .with_max_len(1)
            .map(|index| run_trial(index, term_count))
            .collect()
    });
    let wall_time = start.elapsed();

    info!(
        wall_secs = wall_time.as_secs_f64(),
        "Parallel stress run finished"
    );
    Ok(StressReport::new(RunMode::Parallel, trials, wall_time))
}
