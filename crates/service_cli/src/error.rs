//! Error types for the eat-pi CLI.

use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be built
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Stress run could not be executed
    #[error("Stress run error: {0}")]
    Stress(#[from] pi_stress::StressError),

    /// Writing output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV rendering failed
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::from(ConfigError::InvalidLogLevel("loud".to_string()));
        assert!(err.to_string().starts_with("Configuration error:"));
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: CliError = io.into();
        assert!(matches!(err, CliError::Io(_)));
    }
}
