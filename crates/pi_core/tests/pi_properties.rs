//! Integration tests for the public pi_core API.
//!
//! Exercises both kernels through the crate root re-exports.

use pi_core::spigot::{format_grouped, DIGIT_COUNT, GROUP_COUNT, GROUP_WIDTH};
use pi_core::{estimate, estimate_with, pi_digits, produce_digits, truncation_bound, DigitGroup};
use std::f64::consts::PI;

/// Test the exact edge values of the series estimator.
#[test]
fn test_series_exact_edges() {
    assert_eq!(estimate(0), 0.0);
    assert_eq!(estimate(-42), 0.0);
    assert_eq!(estimate(1), 4.0);
}

/// Test the one-million-term estimate lands within 1e-3 of pi.
#[test]
fn test_series_million_terms() {
    let value = estimate(1_000_000);
    assert!((value - PI).abs() < 1e-3);
    assert!((value - PI).abs() <= truncation_bound(1_000_000));
}

/// Test that the estimate error shrinks as the term count grows.
#[test]
fn test_series_error_decreases() {
    let errors: Vec<f64> = [10_i64, 100, 1_000, 10_000, 100_000]
        .iter()
        .map(|&n| (estimate(n) - PI).abs())
        .collect();

    for pair in errors.windows(2) {
        assert!(pair[1] < pair[0], "errors should decrease: {:?}", errors);
    }
}

/// Test that each call is independent of previous calls.
#[test]
fn test_series_is_pure() {
    let first = estimate(12_345);
    let _ = estimate(99);
    assert_eq!(estimate(12_345), first);
    assert_eq!(estimate_with::<f64>(12_345), first);
}

/// Test that the spigot output is the known prefix of pi.
#[test]
fn test_spigot_prefix_and_shape() {
    let groups: Vec<String> = produce_digits().map(|g| g.to_string()).collect();
    assert_eq!(groups.len(), GROUP_COUNT);
    assert!(groups.iter().all(|g| g.len() == GROUP_WIDTH));

    let joined = groups.concat();
    assert_eq!(joined.len(), DIGIT_COUNT);
    assert_eq!(&joined[..20], "31415926535897932384");
    assert!(joined.chars().all(|c| c.is_ascii_digit()));
}

/// Test that the concatenation helper agrees with the raw stream.
#[test]
fn test_pi_digits_matches_stream() {
    let streamed: String = produce_digits().map(|g| g.to_string()).collect();
    assert_eq!(pi_digits(), streamed);
    assert_eq!(pi_digits(), pi_digits());
}

/// Test that spigots on separate threads produce identical output.
#[test]
fn test_spigot_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| produce_digits().collect::<Vec<DigitGroup>>()))
        .collect();

    let reference: Vec<DigitGroup> = produce_digits().collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), reference);
    }
}

/// Test that grouped formatting keeps every digit in order.
#[test]
fn test_grouped_layout_preserves_digits() {
    let groups: Vec<DigitGroup> = produce_digits().collect();
    for per_line in [0, 1, 7, 10, GROUP_COUNT, GROUP_COUNT + 3] {
        let text = format_grouped(&groups, per_line);
        assert_eq!(text.replace([' ', '\n'], ""), pi_digits());
    }
}
