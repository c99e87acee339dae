//! CLI adapter for romanos
//!
//! Provides a command-line interface to the same conversions the HTTP
//! API serves. This module is parallel to `http/` - both depend on
//! `core/` but not on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (conversions)   |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      http/       |      |      cli/        |
//! | (axum adapter)   |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// romanos - Roman numeral converter
///
/// Convert between Arabic integers (1-3999) and canonical Roman
/// numerals using the same rules as the romanos HTTP API.
#[derive(Parser, Debug)]
#[command(name = "romanos")]
#[command(version)]
#[command(about = "Roman numeral converter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
///
/// Conversion commands mirror the HTTP routes (`/a2r`, `/r2a`).
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert an Arabic integer to a Roman numeral
    #[command(name = "to-roman")]
    ToRoman(commands::ToRomanArgs),

    /// Convert a Roman numeral to an Arabic integer
    #[command(name = "to-arabic")]
    ToArabic(commands::ToArabicArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  romanos completions bash > ~/.local/share/bash-completion/completions/romanos
    ///   zsh:   romanos completions zsh > ~/.zfunc/_romanos
    ///   fish:  romanos completions fish > ~/.config/fish/completions/romanos.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::ToRoman(args) => commands::convert::execute_to_roman(args, cli.format),
        Commands::ToArabic(args) => commands::convert::execute_to_arabic(args, cli.format),
        Commands::ShowConfig(args) => {
            let config = crate::core::config::Config::load()?;
            commands::config::execute(args, &config, cli.format)
        }
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
