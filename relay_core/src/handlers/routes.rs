//! Route table for the relay

use crate::{
    handlers::{contact::handle_contact, health::handle_health},
    models::request::ApiResponse,
    AppState,
};
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{any, get},
    Json, Router,
};

pub const CONTACT_PATH: &str = "/api/contact";
pub const VERCEL_CONTACT_PATH: &str = "/api/submit-hubspot-form";
pub const NETLIFY_CONTACT_PATH: &str = "/.netlify/functions/contact";

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route(CONTACT_PATH, any(handle_contact))
        .route(VERCEL_CONTACT_PATH, any(handle_contact))
        .route(NETLIFY_CONTACT_PATH, any(handle_contact))
}

async fn handle_root(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::success(serde_json::json!({
        "app": state.app_name,
        "version": state.version,
        "endpoints": {
            "health": "/health",
            "contact": CONTACT_PATH,
            "aliases": [VERCEL_CONTACT_PATH, NETLIFY_CONTACT_PATH]
        }
    })))
}
