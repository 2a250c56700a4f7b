//! Rendering of stress reports as table, JSON or CSV.
//!
//! A stress run yields a sequential and a parallel report. [`render_stress`]
//! writes both as one output: consecutive tables, a single JSON document
//! keyed by mode, or one CSV stream with a single header row.

use std::io::Write;

use clap::ValueEnum;
use pi_stress::{StressReport, StressSummary};
use serde::Serialize;

use crate::Result;

/// Output format for stress reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON document
    Json,
    /// One CSV row per trial
    Csv,
}

/// JSON document: the report plus its summary
#[derive(Serialize)]
struct ReportDocument<'a> {
    #[serde(flatten)]
    report: &'a StressReport,
    summary: Option<StressSummary>,
}

impl<'a> ReportDocument<'a> {
    fn new(report: &'a StressReport) -> Self {
        Self {
            report,
            summary: report.summary(),
        }
    }
}

/// JSON document for a full stress run
#[derive(Serialize)]
struct StressDocument<'a> {
    sequential: ReportDocument<'a>,
    parallel: ReportDocument<'a>,
}

/// CSV row for one trial
#[derive(Serialize)]
struct TrialRow {
    mode: String,
    index: usize,
    term_count: i64,
    estimate: f64,
    abs_error: f64,
    elapsed_secs: f64,
}

/// Write the sequential and parallel reports of one stress run to `out`.
pub fn render_stress<W: Write>(
    out: &mut W,
    sequential: &StressReport,
    parallel: &StressReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            render_table(out, sequential)?;
            writeln!(out)?;
            render_table(out, parallel)
        }
        OutputFormat::Json => {
            let document = StressDocument {
                sequential: ReportDocument::new(sequential),
                parallel: ReportDocument::new(parallel),
            };
            write_json(out, &document)
        }
        OutputFormat::Csv => write_csv(out, &[sequential, parallel]),
    }
}

fn render_table<W: Write>(out: &mut W, report: &StressReport) -> Result<()> {
    writeln!(out, "{} run", report.mode())?;
    writeln!(out, "┌───────┬──────────────────────┬──────────────┬──────────────┐")?;
    writeln!(out, "│ Trial │ Estimate             │ Abs error    │ Elapsed (s)  │")?;
    writeln!(out, "├───────┼──────────────────────┼──────────────┼──────────────┤")?;
    if report.is_empty() {
        writeln!(out, "│ (none)│                      │              │              │")?;
    }
    for trial in report.trials() {
        writeln!(
            out,
            "│ {:>5} │ {:<20.15} │ {:<12.3e} │ {:<12.4} │",
            trial.index,
            trial.estimate,
            trial.abs_error(),
            trial.elapsed_secs()
        )?;
    }
    writeln!(out, "└───────┴──────────────────────┴──────────────┴──────────────┘")?;

    if let Some(summary) = report.summary() {
        writeln!(
            out,
            "min {:.4}s  mean {:.4}s  max {:.4}s  wall {:.4}s",
            summary.min_secs, summary.mean_secs, summary.max_secs, summary.wall_secs
        )?;
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, document: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, document)?;
    writeln!(out)?;
    Ok(())
}

/// One writer for every report, so the header row appears once
fn write_csv<W: Write>(out: &mut W, reports: &[&StressReport]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(&mut *out);
    for report in reports {
        for trial in report.trials() {
            writer.serialize(TrialRow {
                mode: report.mode().to_string(),
                index: trial.index,
                term_count: trial.term_count,
                estimate: trial.estimate,
                abs_error: trial.abs_error(),
                elapsed_secs: trial.elapsed_secs(),
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pi_stress::{RunMode, Trial};
    use std::time::Duration;

    fn sample_report() -> StressReport {
        let trials = vec![
            Trial {
                index: 0,
                term_count: 1,
                estimate: 4.0,
                elapsed: Duration::from_millis(250),
            },
            Trial {
                index: 1,
                term_count: 1,
                estimate: 4.0,
                elapsed: Duration::from_millis(750),
            },
        ];
        StressReport::new(RunMode::Sequential, trials, Duration::from_secs(1))
    }

    fn render_to_string(report: &StressReport, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        match format {
            OutputFormat::Table => render_table(&mut buf, report),
            OutputFormat::Json => write_json(&mut buf, &ReportDocument::new(report)),
            OutputFormat::Csv => write_csv(&mut buf, &[report]),
        }
        .unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn render_stress_to_string(format: OutputFormat) -> String {
        let sequential = sample_report();
        let parallel = StressReport::new(
            RunMode::Parallel,
            vec![Trial {
                index: 0,
                term_count: 2,
                estimate: 8.0 / 3.0,
                elapsed: Duration::from_millis(100),
            }],
            Duration::from_millis(100),
        );
        let mut buf = Vec::new();
        render_stress(&mut buf, &sequential, &parallel, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_table_output() {
        let text = render_to_string(&sample_report(), OutputFormat::Table);
        assert!(text.starts_with("sequential run"));
        assert!(text.contains("4.000000000000000"));
        assert!(text.contains("mean 0.5000s"));
    }

    #[test]
    fn test_table_output_empty() {
        let report = StressReport::new(RunMode::Parallel, Vec::new(), Duration::ZERO);
        let text = render_to_string(&report, OutputFormat::Table);
        assert!(text.contains("(none)"));
        assert!(!text.contains("mean"));
    }

    #[test]
    fn test_json_output() {
        let text = render_to_string(&sample_report(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["mode"], "sequential");
        assert_eq!(value["trials"].as_array().unwrap().len(), 2);
        assert_eq!(value["summary"]["count"], 2);
        assert_eq!(value["summary"]["max_secs"], 0.75);
    }

    #[test]
    fn test_csv_output() {
        let text = render_to_string(&sample_report(), OutputFormat::Csv);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "mode,index,term_count,estimate,abs_error,elapsed_secs"
        );
        assert!(lines[1].starts_with("sequential,0,1,4.0,"));
        assert!(lines[2].ends_with(",0.75"));
    }

    #[test]
    fn test_stress_json_is_one_document() {
        let text = render_stress_to_string(OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["sequential"]["mode"], "sequential");
        assert_eq!(value["sequential"]["trials"].as_array().unwrap().len(), 2);
        assert_eq!(value["parallel"]["mode"], "parallel");
        assert_eq!(value["parallel"]["trials"].as_array().unwrap().len(), 1);
        assert_eq!(value["parallel"]["summary"]["count"], 1);
    }

    #[test]
    fn test_stress_csv_single_header() {
        let text = render_stress_to_string(OutputFormat::Csv);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines.iter().filter(|l| l.starts_with("mode,")).count(), 1);
        assert_eq!(
            lines[0],
            "mode,index,term_count,estimate,abs_error,elapsed_secs"
        );
        assert!(lines[1].starts_with("sequential,0,"));
        assert!(lines[2].starts_with("sequential,1,"));
        assert!(lines[3].starts_with("parallel,0,2,"));
    }

    #[test]
    fn test_stress_table_shows_both_runs() {
        let text = render_stress_to_string(OutputFormat::Table);
        assert!(text.starts_with("sequential run"));
        assert!(text.contains("\nparallel run"));
        assert_eq!(text.matches("mean ").count(), 2);
    }
}
