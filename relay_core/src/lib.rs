//! Core library for the contact form relay: forwards website contact
//! submissions to the HubSpot forms API.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod hubspot;
pub mod middleware;
pub mod models;
pub mod services;

pub use client::{ContactForm, Notification, RelayClient, SubmissionTransport};
pub use config::AppConfig;
pub use error::{RelayError, Result};
pub use handlers::routes::create_routes;
pub use hubspot::{CredentialSource, EnvCredentials, FormsApi, HubSpotClient, HubSpotCredentials};
pub use models::{FormSubmission, SubmissionResult};
pub use services::ContactRelay;

use axum::Router;
use std::{future::IntoFuture, net::SocketAddr, time::Duration};
use tokio::signal;
use tracing::{info, warn};

/// Shared handles, built once at startup and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub relay: ContactRelay,
}

impl AppState {
    pub fn new(relay: ContactRelay) -> Self {
        Self {
            app_name: "Contact Relay".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            relay,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let relay = ContactRelay::from_config(&config.hubspot)?;
        Ok(Self::new(relay))
    }
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, &AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(middleware::cors::cors_layer_from_config(&config.cors))
        .layer(middleware::logging::logging_layer())
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr, shutdown_timeout: Duration) -> anyhow::Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .into_future();

    // In-flight submissions get a bounded window to finish once shutdown starts.
    tokio::select! {
        result = server => result?,
        _ = async {
            shutdown_signal().await;
            tokio::time::sleep(shutdown_timeout).await;
        } => {
            warn!("Graceful shutdown timed out after {:?}", shutdown_timeout);
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
