//! Integration tests for stress runs through the public API.

use pi_stress::{run_parallel, run_sequential, RunMode, StressConfig, StressError};

#[test]
fn test_sequential_then_parallel() {
    let config = StressConfig::new(2, 3, 20_000);

    let sequential = run_sequential(&config);
    assert_eq!(sequential.mode(), RunMode::Sequential);
    assert_eq!(sequential.trials().len(), 2);

    let parallel = run_parallel(&config).unwrap();
    assert_eq!(parallel.mode(), RunMode::Parallel);
    assert_eq!(parallel.trials().len(), 3);

    for trial in sequential.trials().iter().chain(parallel.trials()) {
        assert!(trial.abs_error() <= trial.error_bound());
    }
}

#[test]
fn test_summary_is_consistent() {
    let report = run_sequential(&StressConfig::new(5, 1, 10_000));
    let summary = report.summary().unwrap();

    assert_eq!(summary.count, 5);
    assert!(summary.min_secs <= summary.mean_secs);
    assert!(summary.mean_secs <= summary.max_secs);
    assert!(summary.wall_secs >= summary.max_secs);
}

#[test]
fn test_negative_term_count_runs() {
    let report = run_sequential(&StressConfig::new(1, 1, -10));
    assert_eq!(report.trials()[0].estimate, 0.0);
}

#[test]
fn test_invalid_parallelism() {
    let err = run_parallel(&StressConfig::new(1, 0, 10)).unwrap_err();
    assert!(matches!(err, StressError::InvalidConfig(_)));
}

#[cfg(feature = "serde")]
#[test]
fn test_report_serialises_to_json() {
    let report = run_sequential(&StressConfig::new(2, 1, 100));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["mode"], "sequential");
    assert_eq!(json["trials"].as_array().unwrap().len(), 2);
    assert_eq!(json["trials"][1]["index"], 1);
    assert_eq!(json["trials"][0]["term_count"], 100);
    assert!(json["trials"][0]["elapsed"].is_f64());
    assert!(json["wall_secs"].is_f64());
}
