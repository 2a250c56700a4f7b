//! CLI configuration management
//!
//! Configuration is layered. Priority (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables (`EAT_PI_*`)
//! 3. TOML config file (`eat_pi.toml` by default, optional)
//! 4. Built-in defaults
//!
//! ```toml
//! log_level = "info"
//!
//! [stress]
//! repeats = 10
//! parallelism = 10
//! term_count = 1000000000
//!
//! [digits]
//! group_size = 10
//! ```

use pi_stress::config::{DEFAULT_PARALLELISM, DEFAULT_REPEATS, DEFAULT_TERM_COUNT};
use pi_stress::StressConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Upper limit on concurrent trials.
pub const MAX_PARALLELISM: usize = 1024;

const ENV_LOG_LEVEL: &str = "EAT_PI_LOG_LEVEL";
const ENV_REPEATS: &str = "EAT_PI_REPEATS";
const ENV_PARALLELISM: &str = "EAT_PI_PARALLELISM";
const ENV_TERM_COUNT: &str = "EAT_PI_TERM_COUNT";
const ENV_GROUP_SIZE: &str = "EAT_PI_GROUP_SIZE";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable {var} has invalid value '{value}'")]
    EnvError { var: String, value: String },

    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Directive handed to the tracing `EnvFilter`
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// `[stress]` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StressSection {
    /// Sequential trials
    pub repeats: usize,
    /// Concurrent trials
    pub parallelism: usize,
    /// Series terms per trial
    pub term_count: i64,
}

impl Default for StressSection {
    fn default() -> Self {
        Self {
            repeats: DEFAULT_REPEATS,
            parallelism: DEFAULT_PARALLELISM,
            term_count: DEFAULT_TERM_COUNT,
        }
    }
}

/// `[digits]` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct DigitsSection {
    /// Four-digit groups per output line; 0 prints one unbroken line
    pub group_size: usize,
}

/// Full CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EatPiConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Stress run settings
    pub stress: StressSection,
    /// Digit output settings
    pub digits: DigitsSection,
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<LogLevel>,
    /// Sequential trial override
    pub repeats: Option<usize>,
    /// Concurrent trial override
    pub parallelism: Option<usize>,
    /// Term count override
    pub term_count: Option<i64>,
    /// Digit grouping override
    pub group_size: Option<usize>,
}

impl EatPiConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply `EAT_PI_*` environment variables
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`
    pub fn with_env_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(value) = lookup(ENV_REPEATS) {
            self.stress.repeats = parse_env(ENV_REPEATS, &value)?;
        }
        if let Some(value) = lookup(ENV_PARALLELISM) {
            self.stress.parallelism = parse_env(ENV_PARALLELISM, &value)?;
        }
        if let Some(value) = lookup(ENV_TERM_COUNT) {
            self.stress.term_count = parse_env(ENV_TERM_COUNT, &value)?;
        }
        if let Some(value) = lookup(ENV_GROUP_SIZE) {
            self.digits.group_size = parse_env(ENV_GROUP_SIZE, &value)?;
        }
        Ok(self)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        if let Some(repeats) = cli.repeats {
            self.stress.repeats = repeats;
        }
        if let Some(parallelism) = cli.parallelism {
            self.stress.parallelism = parallelism;
        }
        if let Some(term_count) = cli.term_count {
            self.stress.term_count = term_count;
        }
        if let Some(group_size) = cli.group_size {
            self.digits.group_size = group_size;
        }
    }

    /// Check the `[stress]` section, collecting every problem
    ///
    /// Only the stress command reads these settings, so other commands run
    /// with whatever values the section holds.
    pub fn validate_stress(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.stress.parallelism == 0 {
            errors.push("parallelism must be greater than 0".to_string());
        }
        if self.stress.parallelism > MAX_PARALLELISM {
            errors.push(format!(
                "parallelism {} exceeds maximum allowed ({})",
                self.stress.parallelism, MAX_PARALLELISM
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Validated stress settings in the form the runner takes
    pub fn stress_config(&self) -> Result<StressConfig, ConfigError> {
        self.validate_stress()?;
        Ok(StressConfig::new(
            self.stress.repeats,
            self.stress.parallelism,
            self.stress.term_count,
        ))
    }
}

fn parse_env<T: FromStr>(var: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::EnvError {
        var: var.to_string(),
        value: value.to_string(),
    })
}

/// Build configuration from all sources
///
/// A config file that does not exist is skipped; one that exists but cannot
/// be read or parsed is an error.
pub fn build_config(cli: &CliOverrides) -> Result<EatPiConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) if path.exists() => EatPiConfig::from_file(path)?,
        _ => EatPiConfig::default(),
    };

    config = config.with_env()?;
    config.merge_with_cli(cli);

    Ok(config)
}
