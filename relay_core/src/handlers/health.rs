//! Health check handler

use crate::{models::request::ApiResponse, AppState};
use axum::{extract::State, response::IntoResponse, Json};
use tracing::{info, warn};

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /health");

    let hubspot_configured = state.relay.is_configured();
    if !hubspot_configured {
        warn!("HubSpot environment variables are not set; submissions will fail");
    }

    Json(ApiResponse::success(serde_json::json!({
        "status": "healthy",
        "app": state.app_name,
        "version": state.version,
        "timestamp": chrono::Utc::now().timestamp(),
        "hubspot_configured": hubspot_configured
    })))
}
