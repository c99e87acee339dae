//! Core domain logic (protocol-agnostic)
//!
//! This module contains all conversion logic that is independent
//! of the transport (HTTP, CLI).
//!
//! # Architecture
//!
//! - **converter**: Arabic <-> Roman conversion and input parsing
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Query and response data structures
//! - **xdg**: XDG directory handling

pub mod config;
pub mod converter;
pub mod error;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use converter::{arabic_to_roman, parse_arabic, roman_to_arabic, ArabicValue, RomanValue};
pub use error::{Result, RomanosError};
