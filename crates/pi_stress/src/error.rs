//! Error types for stress runs.

use thiserror::Error;

/// Stress run errors.
///
/// The estimator itself cannot fail; these cover building the run around it.
#[derive(Debug, Error)]
pub enum StressError {
    /// Configuration cannot be executed
    #[error("Invalid stress configuration: {0}")]
    InvalidConfig(String),

    /// Worker pool could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result alias for stress operations.
pub type StressResult<T> = Result<T, StressError>;
