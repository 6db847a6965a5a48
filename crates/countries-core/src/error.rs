//! Error types for countries-core

use thiserror::Error;

/// Result type alias for loader operations
pub type Result<T> = std::result::Result<T, LoadError>;

/// Failure to obtain the country collection.
///
/// The view collapses every variant into the same "Something went wrong."
/// state; the distinction only reaches the logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Transport failure (DNS, connect, reset, timeout)
    #[error("Request failed: {0}")]
    Request(String),

    /// Server answered with a non-success status
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// Body was not a JSON array of countries
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            LoadError::Status(status.as_u16())
        } else if err.is_decode() {
            LoadError::Decode(err.to_string())
        } else {
            LoadError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Decode(err.to_string())
    }
}

/// Configuration loading or validation error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Required field is missing or empty
    #[error("Missing field: {0}")]
    MissingField(String),
}
