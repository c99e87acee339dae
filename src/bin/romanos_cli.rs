//! romanos CLI - Command-line interface for Roman numeral conversion
//!
//! Uses the same validation rules as the HTTP API, for scripting or
//! quick lookups without running the server.
//!
//! # Examples
//!
//! ```bash
//! # Arabic to Roman
//! romanos to-roman 1994
//!
//! # Roman to Arabic, JSON output
//! romanos --format json to-arabic MCMXCIV
//!
//! # Show configuration
//! romanos show-config --all
//! ```

use clap::Parser;
use romanos::cli::{output, run, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
