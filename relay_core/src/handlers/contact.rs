//! Contact form relay endpoint

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{error::RelayError, AppState};

/// Accepts any method so non-POST requests get the relay's JSON 405 body
/// instead of the router's empty one. Body read failures (e.g. over the size
/// limit) are answered in the same JSON shape.
pub async fn handle_contact(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            let err = match state.relay.preflight(&method) {
                Ok(_) => RelayError::BadRequestBody(rejection.body_text()),
                Err(err) => err,
            };
            return err.into_response();
        }
    };

    let referer = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok());

    match state.relay.relay(&method, referer, &body).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => err.into_response(),
    }
}
