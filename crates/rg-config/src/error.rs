//! Error types for rg-config.

use thiserror::Error;

/// Errors reading or resolving the daily-routine configuration.
///
/// Any of these aborts processing of the affected driver; no partial leg
/// list is ever produced.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("driver {driver:?}: standard_sequence references unknown stop {stop:?}")]
    UnknownStop { driver: String, stop: String },
}

/// Alias for `Result<T, ConfigError>`.
pub type ConfigResult<T> = Result<T, ConfigError>;
