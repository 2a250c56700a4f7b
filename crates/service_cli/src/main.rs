//! eat-pi CLI - Floating-Point Stress via π
//!
//! Operational entry point for the pi_core kernels.
//!
//! # Commands
//!
//! - `eat-pi` / `eat-pi run` - Print 800 digits of π, then time one series estimate
//! - `eat-pi digits` - Print the 800 digits, optionally grouped
//! - `eat-pi estimate --terms <N>` - Time one series estimate and report its error
//! - `eat-pi stress -n <REPEATS> -p <PARALLEL>` - Sequential and parallel timed trials
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate only parses arguments, layers
//! configuration, and renders results. All computation lives in `pi_core`
//! and `pi_stress`.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use config::{build_config, CliOverrides, EatPiConfig, LogLevel};
use output::OutputFormat;

/// Compute π two ways and time the slow one
#[derive(Parser, Debug)]
#[command(name = "eat-pi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML, optional)
    #[arg(short, long, global = true, default_value = "eat_pi.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Print the digits of pi, then time one series estimate
    Run {
        /// Number of series terms to sum
        #[arg(short, long, allow_negative_numbers = true)]
        terms: Option<i64>,
    },

    /// Print 800 digits of pi
    Digits {
        /// Four-digit groups per line (0 = one unbroken line)
        #[arg(short, long)]
        group_size: Option<usize>,
    },

    /// Time one series estimate and report its accuracy
    Estimate {
        /// Number of series terms to sum
        #[arg(short, long, allow_negative_numbers = true)]
        terms: Option<i64>,
    },

    /// Run repeated and parallel timed estimates
    Stress {
        /// Number of sequential trials
        #[arg(short = 'n', long)]
        repeats: Option<usize>,

        /// Number of concurrent trials
        #[arg(short = 'p', long)]
        parallelism: Option<usize>,

        /// Number of series terms per trial
        #[arg(short, long, allow_negative_numbers = true)]
        terms: Option<i64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

impl Cli {
    /// Collect command-line values that override file and environment config
    fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides {
            config_file: Some(self.config.clone()),
            log_level: self.verbose.then_some(LogLevel::Debug),
            ..Default::default()
        };

        match &self.command {
            Some(Commands::Run { terms }) | Some(Commands::Estimate { terms }) => {
                overrides.term_count = *terms;
            }
            Some(Commands::Digits { group_size }) => {
                overrides.group_size = *group_size;
            }
            Some(Commands::Stress {
                repeats,
                parallelism,
                terms,
                ..
            }) => {
                overrides.repeats = *repeats;
                overrides.parallelism = *parallelism;
                overrides.term_count = *terms;
            }
            None => {}
        }

        overrides
    }
}

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn execute<W: Write>(out: &mut W, command: Commands, config: &EatPiConfig) -> Result<()> {
    match command {
        Commands::Run { .. } => {
            commands::run::run(out, config.digits.group_size, config.stress.term_count)
        }
        Commands::Digits { .. } => commands::digits::run(out, config.digits.group_size),
        Commands::Estimate { .. } => commands::estimate::run(out, config.stress.term_count),
        Commands::Stress { format, .. } => {
            commands::stress::run(out, &config.stress_config()?, format)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.overrides())?;

    init_tracing(config.log_level);
    info!("eat-pi v{}", env!("CARGO_PKG_VERSION"));
    debug!(?config, "Configuration loaded");

    let command = cli.command.unwrap_or(Commands::Run { terms: None });
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&mut out, command, &config)?;
    out.flush()?;

    Ok(())
}
