//! Stress command implementation
//!
//! Runs the sequential trials, then the parallel trials, and renders both
//! reports as one output.

use std::io::Write;

use pi_stress::{run_parallel, run_sequential, StressConfig};
use tracing::info;

use crate::output::{render_stress, OutputFormat};
use crate::Result;

/// Run the stress command
pub fn run<W: Write>(out: &mut W, config: &StressConfig, format: OutputFormat) -> Result<()> {
    info!(
        repeats = config.repeats,
        parallelism = config.parallelism,
        term_count = config.term_count,
        "Starting stress runs"
    );

    let sequential = run_sequential(config);
    let parallel = run_parallel(config)?;
    render_stress(out, &sequential, &parallel, format)?;

    info!("Stress runs complete");
    Ok(())
}
