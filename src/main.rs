//! romanos HTTP server entry point
//!
//! Starts the REST API that converts between Arabic integers and
//! Roman numerals.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use romanos::core::config::{Config, LoggingConfig};
use romanos::http;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration first: it decides the log format
    let config = Config::load()?;

    init_tracing(&config.logging);

    tracing::info!("Starting romanos conversion service");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    config.log_config();

    http::serve(&config).await?;

    Ok(())
}

/// RUST_LOG wins over the configured filter
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
