//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to the given writer; logging goes to stderr.

pub mod digits;
pub mod estimate;
pub mod run;
pub mod stress;
