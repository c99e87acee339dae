//! romanos - Roman numeral conversion service
//!
//! Converts between Arabic integers (1-3999) and canonical Roman
//! numerals over HTTP/JSON and from the command line.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - converter (arabic <-> roman, strict input parsing)
//!   - config, error, types, xdg
//!
//! - **http**: REST API adapter (depends on core)
//!   - handlers, error mapping, middleware, router
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - to-roman, to-arabic, show-config, completions
//!
//! # Key Features
//!
//! - Strict validation: only canonical numerals are accepted
//!   ("IIII" and "VX" are rejected)
//! - JSON error bodies for every failure
//! - Permissive CORS for browser clients

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::converter::{arabic_to_roman, parse_arabic, roman_to_arabic, ArabicValue, RomanValue};
pub use core::error::{Result, RomanosError};
pub use core::types::*;
