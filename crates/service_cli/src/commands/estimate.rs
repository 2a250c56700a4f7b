//! Estimate command implementation
//!
//! Runs one timed series estimate and reports its accuracy.

use std::io::Write;

use pi_stress::run_trial;
use tracing::info;

use crate::Result;

/// Run the estimate command
pub fn run<W: Write>(out: &mut W, term_count: i64) -> Result<()> {
    info!(term_count, "Estimating pi from the alternating series");

    let trial = run_trial(0, term_count);

    writeln!(out, "terms:        {}", trial.term_count)?;
    writeln!(out, "estimate:     {:.15}", trial.estimate)?;
    writeln!(out, "abs error:    {:.3e}", trial.abs_error())?;
    writeln!(out, "error bound:  {:.3e}", trial.error_bound())?;
    writeln!(out, "elapsed:      {:.6} secs", trial.elapsed_secs())?;
    Ok(())
}
