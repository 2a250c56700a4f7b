//! Alternating-series approximation of π.
//!
//! Sums the Leibniz series
//!
//! ```text
//! π / 4 = 1 - 1/3 + 1/5 - 1/7 + 1/9 - ...
//! ```
//!
//! one term at a time. The series converges at rate O(1/N), which makes it a
//! terrible way to compute π and a good way to keep a floating-point unit busy.
//!
//! All summation is generic over `T: num_traits::Float`; [`estimate`] is the
//! `f64` entry point.

use num_traits::Float;

/// Estimates π from the first `term_count` terms of the Leibniz series.
///
/// # Mathematical Definition
/// ```text
/// estimate(N) = 4 * Σ_{n=0}^{N-1} (-1)^n / (2n + 1)
/// ```
///
/// # Arguments
/// * `term_count` - Number of series terms to sum. Values `<= 0` sum nothing.
///
/// # Returns
/// The partial-sum estimate. Returns exactly `0.0` for `term_count <= 0` and
/// exactly `4.0` for `term_count == 1`.
///
/// # Examples
/// ```
/// use pi_core::series::estimate;
///
/// assert_eq!(estimate(0), 0.0);
/// assert_eq!(estimate(1), 4.0);
/// assert!((estimate(1_000_000) - std::f64::consts::PI).abs() < 1e-3);
/// ```
#[inline]
pub fn estimate(term_count: i64) -> f64 {
    estimate_with::<f64>(term_count)
}

/// Generic version of [`estimate`] for any floating-point type.
///
/// The divisor is carried as a running `T` value incremented by two per term,
/// so no integer-to-float conversion happens inside the loop.
///
/// # Examples
/// ```
/// use pi_core::series::estimate_with;
///
/// let single: f32 = estimate_with(1_000);
/// assert!((single - std::f32::consts::PI).abs() < 1e-2);
/// ```
pub fn estimate_with<T: Float>(term_count: i64) -> T {
    let one = T::one();
    let two = one + one;
    let four = two + two;

    let mut sum = T::zero();
    let mut divisor = one;
    for n in 0..term_count.max(0) {
        let term = one / divisor;
        sum = if n % 2 == 0 { sum + term } else { sum - term };
        divisor = divisor + two;
    }

    four * sum
}

/// Upper bound on `|estimate(term_count) - π|`.
///
/// For an alternating series with decreasing terms, the truncation error is
/// bounded by the first omitted term, here `4 / (2N + 1)`. For `N <= 0` the
/// estimate is `0.0` and the bound is `4.0`.
///
/// # Examples
/// ```
/// use pi_core::series::{estimate, truncation_bound};
///
/// let n = 1_000;
/// assert!((estimate(n) - std::f64::consts::PI).abs() <= truncation_bound(n));
/// ```
#[inline]
pub fn truncation_bound(term_count: i64) -> f64 {
    if term_count <= 0 {
        return 4.0;
    }
    4.0 / (2.0 * term_count as f64 + 1.0)
}
