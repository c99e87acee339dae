//! Core data types for the romanos service.
//!
//! Query parameters and JSON response bodies shared by the HTTP and
//! CLI adapters.

use serde::{Deserialize, Serialize};

/// Query string of `GET /a2r`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArabicQuery {
    /// Integer text, validated by `parse_arabic`
    pub arabic: Option<String>,
}

/// Query string of `GET /r2a`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RomanQuery {
    /// Roman numeral text, validated by `roman_to_arabic`
    pub roman: Option<String>,
}

/// Successful arabic -> roman conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomanResponse {
    pub roman: String,
}

/// Successful roman -> arabic conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArabicResponse {
    pub arabic: u16,
}

/// Informational response for the root route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body returned with every 4xx/5xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A completed conversion, as reported by the CLI in JSON mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub arabic: u16,
    pub roman: String,
}
