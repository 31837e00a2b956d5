//! Readyz service entry point.
//!
//! Initializes structured logging, loads configuration, builds the shared
//! application state (configuration + lazy database pool), and serves the
//! readiness endpoint until shutdown.

use readyz::config::{ReadyzConfig, DEFAULT_CONFIG_PATH};
use readyz::error::Result;
use readyz::logging::init_structured_logging;
use readyz::web::{self, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    init_structured_logging();

    let config_path =
        std::env::var("READYZ_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = ReadyzConfig::load(&config_path)?;
    tracing::info!(config_path = %config_path, "Loaded configuration");

    let state = AppState::from_config(config)?;

    web::serve(state).await
}
