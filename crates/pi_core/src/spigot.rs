//! Integer-only spigot for the first 800 decimal digits of π.
//!
//! This is Dik T. Winter's spigot: a working array of limbs, each seeded with
//! `2000`, is swept from a shrinking upper index down to 1. Limb `i` is divided
//! by the odd number `2i - 1` and its quotient is carried, multiplied by `i - 1`,
//! into the next limb down. Each sweep leaves four more digits of π in the
//! running value, which are emitted together with the carry from the previous
//! sweep.
//!
//! The array length and the number of limbs retired per sweep fix the output at
//! exactly [`GROUP_COUNT`] groups of [`GROUP_WIDTH`] digits. They are not
//! parameters.
//!
//! ```
//! use pi_core::spigot::produce_digits;
//!
//! let first: Vec<String> = produce_digits().take(3).map(|g| g.to_string()).collect();
//! assert_eq!(first, ["3141", "5926", "5358"]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

/// Number of active limbs in the working array.
const LIMB_COUNT: usize = 2800;

/// Limbs retired from the top of the array after each emitted group.
const LIMBS_PER_GROUP: usize = 14;

/// Initial value of every active limb (2.0 in the fixed-point representation).
const LIMB_SEED: u32 = 2000;

/// Radix of one emitted group.
const GROUP_RADIX: u64 = 10_000;

/// Decimal digits per emitted group.
pub const GROUP_WIDTH: usize = 4;

/// Number of groups a spigot yields.
pub const GROUP_COUNT: usize = LIMB_COUNT / LIMBS_PER_GROUP;

/// Number of decimal digits a spigot yields.
pub const DIGIT_COUNT: usize = GROUP_COUNT * GROUP_WIDTH;

/// One group of four consecutive decimal digits of π.
///
/// Displays zero-padded to [`GROUP_WIDTH`] characters, so a group holding `89`
/// prints as `"0089"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitGroup(u32);

impl DigitGroup {
    /// Numeric value of the group, in `0..10000`.
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DigitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = GROUP_WIDTH)
    }
}

/// Streaming producer of the digits of π.
///
/// Owns its limb buffer; each call to `next` performs one downward sweep and
/// yields one [`DigitGroup`]. After [`GROUP_COUNT`] groups the spigot is
/// exhausted and keeps returning `None`. A fresh spigot must be created to
/// start over.
#[derive(Debug, Clone)]
pub struct DigitSpigot {
    limbs: Vec<u32>,
    carry: u64,
    top: usize,
}

impl DigitSpigot {
    /// Creates a spigot positioned before the first group.
    pub fn new() -> Self {
        let mut limbs = vec![LIMB_SEED; LIMB_COUNT + 1];
        // Sentinel above the active limbs
        limbs[LIMB_COUNT] = 0;

        Self {
            limbs,
            carry: 0,
            top: LIMB_COUNT,
        }
    }

    /// Number of groups still to be produced.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.top / LIMBS_PER_GROUP
    }

    /// Sweeps limbs `top..=1` and returns the undivided running value.
    fn sweep(&mut self) -> u64 {
        let mut d: u64 = 0;
        let mut i = self.top;
        loop {
            d += u64::from(self.limbs[i]) * GROUP_RADIX;
            let b = (2 * i - 1) as u64;
            // Remainder is < b <= 2 * LIMB_COUNT, fits comfortably in a limb
            self.limbs[i] = (d % b) as u32;
            d /= b;
            i -= 1;
            if i == 0 {
                break;
            }
            d *= i as u64;
        }
        d
    }
}

impl Default for DigitSpigot {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for DigitSpigot {
    type Item = DigitGroup;

    fn next(&mut self) -> Option<DigitGroup> {
        if self.top == 0 {
            return None;
        }

        let d = self.sweep();
        let group = self.carry + d / GROUP_RADIX;
        self.carry = d % GROUP_RADIX;
        self.top -= LIMBS_PER_GROUP;

        Some(DigitGroup(group as u32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for DigitSpigot {}

impl FusedIterator for DigitSpigot {}

/// Starts a fresh spigot over the first [`DIGIT_COUNT`] digits of π.
///
/// Groups are computed lazily, one sweep per group.
#[inline]
pub fn produce_digits() -> DigitSpigot {
    DigitSpigot::new()
}

/// Runs a spigot to completion and concatenates every group.
///
/// # Examples
/// ```
/// use pi_core::spigot::{pi_digits, DIGIT_COUNT};
///
/// let digits = pi_digits();
/// assert_eq!(digits.len(), DIGIT_COUNT);
/// assert!(digits.starts_with("31415926535897932384"));
/// ```
pub fn pi_digits() -> String {
    let mut out = String::with_capacity(DIGIT_COUNT);
    for group in produce_digits() {
        out.push_str(&group.to_string());
    }
    out
}

/// Lays out digit groups for display.
///
/// Groups are separated by a single space, with `groups_per_line` groups on each
/// line. A `groups_per_line` of zero joins every group into one unbroken string.
///
/// # Examples
/// ```
/// use pi_core::spigot::{format_grouped, produce_digits};
///
/// let groups: Vec<_> = produce_digits().take(5).collect();
/// assert_eq!(format_grouped(&groups, 2), "3141 5926\n5358 9793\n2384");
/// assert_eq!(format_grouped(&groups, 0), "31415926535897932384");
/// ```
pub fn format_grouped(groups: &[DigitGroup], groups_per_line: usize) -> String {
    if groups_per_line == 0 {
        return groups.iter().map(ToString::to_string).collect();
    }

    groups
        .chunks(groups_per_line)
        .map(|line| {
            line.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
