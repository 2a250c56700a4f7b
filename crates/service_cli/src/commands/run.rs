//! Default command: digits, then one timed series estimate
//!
//! Output layout:
//!
//! ```text
//! 3141592653589793238462643383279502884197169399375105820974944592307816...
//!
//! ------------------------------------------------
//!
//! ancient_pi=3.141593
//! ancient_pi clock time spent: 2.734120 secs
//! ```

use std::io::Write;

use pi_stress::run_trial;

use crate::commands::digits;
use crate::Result;

const SEPARATOR: &str = "------------------------------------------------";

/// Run the default command
pub fn run<W: Write>(out: &mut W, group_size: usize, term_count: i64) -> Result<()> {
    digits::run(out, group_size)?;
    writeln!(out, "\n{}\n", SEPARATOR)?;

    let trial = run_trial(0, term_count);
    writeln!(out, "ancient_pi={:.6}", trial.estimate)?;
    writeln!(
        out,
        "ancient_pi clock time spent: {:.6} secs",
        trial.elapsed_secs()
    )?;
    Ok(())
}
