//! # pi_stress: Timed Stress Runs of the Series Estimator
//!
//! Drives [`pi_core::series::estimate`] as a floating-point workload and
//! records how long each call takes.
//!
//! This crate provides:
//! - [`StressConfig`]: repeat count, parallelism and term count for a run
//! - [`Trial`]: one timed estimator call
//! - [`run_sequential`] / [`run_parallel`]: back-to-back or concurrent trials
//! - [`StressReport`]: collected trials with min / mean / max timings
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             pi_stress (L2)              │
//! ├─────────────────────────────────────────┤
//! │  config  - StressConfig, validation     │
//! │  trial   - single timed estimate        │
//! │  runner  - sequential / rayon parallel  │
//! │  report  - StressReport, summary stats  │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │              pi_core (L1)               │
//! │  series estimator, digit spigot         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Timings are wall-clock and unscientific: one sample per trial, no warm-up,
//! no outlier rejection.
//!
//! ## Example
//!
//! ```
//! use pi_stress::{run_sequential, run_parallel, StressConfig};
//!
//! let config = StressConfig::new(3, 2, 10_000);
//!
//! let sequential = run_sequential(&config);
//! assert_eq!(sequential.trials().len(), 3);
//!
//! let parallel = run_parallel(&config).unwrap();
//! assert_eq!(parallel.trials().len(), 2);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod trial;

pub use config::StressConfig;
pub use error::{StressError, StressResult};
pub use report::{RunMode, StressReport, StressSummary};
pub use runner::{run_parallel, run_sequential};
pub use trial::{run_trial, Trial};
