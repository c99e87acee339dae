//! Config command - show current configuration

use crate::cli::output::{colors, print_header, print_warning};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show where the configuration file is looked up
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    pub server: ServerSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Serialize)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
    pub bind_addr: String,
}

#[derive(Debug, Serialize)]
pub struct LoggingSection {
    pub filter: String,
    pub json: bool,
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_file = if args.all {
        let path = XdgDirs::new().config_file();
        if !path.exists() {
            print_warning(&format!("Config file {} does not exist", path.display()));
        }
        Some(path.to_string_lossy().into_owned())
    } else {
        None
    };

    let response = ConfigResponse {
        config_file,
        server: ServerSection {
            host: config.server.host.clone(),
            port: config.server.port,
            bind_addr: config.bind_addr(),
        },
        logging: LoggingSection {
            filter: config.logging.filter.clone(),
            json: config.logging.json,
        },
    };

    match format {
        OutputFormat::Human => {
            print_header("Configuration:");
            if let Some(path) = &response.config_file {
                println!("  config_file: {}", colors::file_path(path));
            }
            println!("  server:");
            println!("    host: {}", response.server.host);
            println!(
                "    port: {}",
                colors::number(&response.server.port.to_string())
            );
            println!("  logging:");
            println!("    filter: {}", response.logging.filter);
            println!("    json: {}", response.logging.json);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
