//! Main entry point for the contact relay binary

use anyhow::Result;
use relay_core::{config::LoggingConfig, create_app_with_config, run_server, AppConfig, AppState};
use std::{net::SocketAddr, time::Duration};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    init_tracing(&config.logging);

    info!("Configuration loaded successfully");
    for warning in config.warnings() {
        warn!("{}", warning);
    }
    info!("Server will bind to: {}", config.bind_address());
    info!("Forwarding submissions to: {}", config.hubspot.api_base);

    let addr: SocketAddr = config.bind_address().parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;

    let state = AppState::from_config(&config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize relay: {}", e))?;

    info!("App: {} v{}", state.app_name, state.version);
    if !state.relay.is_configured() {
        warn!("HUBSPOT_PORTAL_ID / HUBSPOT_FORM_GUID are not set; every submission will fail until they are");
    }

    let app = create_app_with_config(state, &config);

    run_server(app, addr, Duration::from_secs(config.server.shutdown_timeout_seconds)).await?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            format!(
                "{}={level},relay_core={level},tower_http=debug",
                env!("CARGO_CRATE_NAME").replace('-', "_"),
                level = logging.level
            ).into()
        });

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let is_json = logging.json
        || std::env::var("LOG_FORMAT")
            .map(|v| v.to_lowercase() == "json")
            .unwrap_or(false);

    if is_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.pretty())
            .init();
    }
}
