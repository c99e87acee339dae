//! Conversion commands - to-roman and to-arabic
//!
//! Inputs follow the HTTP API rules exactly: integers must be plain
//! base-10 text in 1..=3999, numerals must be canonical uppercase.

use crate::cli::output::{colors, print_output};
use crate::cli::OutputFormat;
use crate::core::converter::{arabic_to_roman, parse_arabic, roman_to_arabic, ArabicValue};
use crate::core::types::Conversion;
use clap::Args;

/// Arguments for the to-roman command
#[derive(Args, Debug)]
pub struct ToRomanArgs {
    /// Integer to convert (1-3999)
    #[arg(allow_hyphen_values = true)]
    pub arabic: String,
}

/// Arguments for the to-arabic command
#[derive(Args, Debug)]
pub struct ToArabicArgs {
    /// Canonical uppercase Roman numeral (e.g. CXXIII)
    pub roman: String,
}

/// Execute the to-roman command
pub fn execute_to_roman(
    args: ToRomanArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = parse_arabic(&args.arabic)?;
    let roman = arabic_to_roman(value)?;

    match format {
        OutputFormat::Human => println!("{}", colors::numeral(&roman)),
        OutputFormat::Json => {
            let conversion = Conversion {
                arabic: ArabicValue::try_from(value)?.value(),
                roman,
            };
            print_output(&conversion, format);
        }
    }

    Ok(())
}

/// Execute the to-arabic command
pub fn execute_to_arabic(
    args: ToArabicArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let arabic = roman_to_arabic(&args.roman)?;

    match format {
        OutputFormat::Human => println!("{}", colors::number(&arabic.to_string())),
        OutputFormat::Json => {
            let conversion = Conversion {
                arabic,
                roman: args.roman,
            };
            print_output(&conversion, format);
        }
    }

    Ok(())
}
