use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Invalid time format: '{0}' (expected HH:MM in 24-hour time)")]
    #[diagnostic(code(workhours::invalid_time_format))]
    InvalidTimeFormat(String),

    #[error("Unknown timezone: '{0}'")]
    #[diagnostic(code(workhours::unknown_timezone))]
    UnknownTimezone(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(workhours::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(workhours::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(workhours::serialization))]
    Serialization(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Helper to create invalid-time errors
pub fn invalid_time_error(input: &str) -> Error {
    Error::InvalidTimeFormat(input.to_string())
}

/// Helper to create unknown-timezone errors
pub fn unknown_timezone_error(identifier: &str) -> Error {
    Error::UnknownTimezone(identifier.to_string())
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}
