//! Digits command implementation
//!
//! Prints the 800 digits of π produced by the spigot.

use std::io::Write;

use pi_core::spigot::{format_grouped, produce_digits, DigitGroup, DIGIT_COUNT};
use tracing::info;

use crate::Result;

/// Run the digits command
///
/// `group_size` is the number of four-digit groups per line; 0 prints all
/// digits on one line.
pub fn run<W: Write>(out: &mut W, group_size: usize) -> Result<()> {
    info!(digits = DIGIT_COUNT, group_size, "Computing digits of pi");

    let groups: Vec<DigitGroup> = produce_digits().collect();
    writeln!(out, "{}", format_grouped(&groups, group_size))?;
    Ok(())
}
