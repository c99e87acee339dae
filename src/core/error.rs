//! Error types and error handling for the romanos service.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific handling (HTTP status codes) lives
//! in the respective adapter modules.

use thiserror::Error;

/// Smallest value representable as a Roman numeral
pub const MIN_ARABIC: i64 = 1;

/// Largest value representable as a Roman numeral
pub const MAX_ARABIC: i64 = 3999;

/// Result type alias for romanos operations
pub type Result<T> = std::result::Result<T, RomanosError>;

/// Main error type for the romanos service
#[derive(Error, Debug)]
pub enum RomanosError {
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Malformed parameter: {0}")]
    MalformedParameter(String),

    #[error("Value out of range: {0} (expected 1..=3999)")]
    OutOfRange(i64),

    #[error("Invalid Roman numeral: {0:?}")]
    InvalidNumeral(String),

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl RomanosError {
    /// True for errors caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RomanosError::MissingParameter(_)
                | RomanosError::MalformedParameter(_)
                | RomanosError::OutOfRange(_)
                | RomanosError::InvalidNumeral(_)
                | RomanosError::RouteNotFound(_)
        )
    }

    /// Message returned to API clients
    ///
    /// Unlike `Display`, this never echoes the offending input back
    /// and names the query parameter the client has to fix.
    pub fn public_message(&self) -> String {
        match self {
            RomanosError::MissingParameter(name) => format!("Missing \"{name}\" parameter"),
            RomanosError::MalformedParameter(name) => format!("Invalid \"{name}\" parameter"),
            RomanosError::OutOfRange(_) => {
                format!("Number must be between {MIN_ARABIC} and {MAX_ARABIC}")
            }
            RomanosError::InvalidNumeral(_) => "Invalid \"roman\" parameter".to_string(),
            RomanosError::RouteNotFound(_) => "Route not found".to_string(),
            RomanosError::ConfigError(_)
            | RomanosError::IoError(_)
            | RomanosError::TomlError(_) => "Internal server error".to_string(),
        }
    }
}
