//! Relay error types and their HTTP rendering

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::SubmissionResult;

pub type Result<T> = std::result::Result<T, RelayError>;

pub const DOWNSTREAM_FALLBACK_MESSAGE: &str = "Failed to submit to HubSpot.";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("HubSpot environment variables are not set")]
    ConfigurationMissing,

    #[error("Invalid form data: {0}")]
    BadRequestBody(String),

    #[error("HubSpot responded with {status}: {message}")]
    DownstreamHttp { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::ConfigurationMissing => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::BadRequestBody(_) => StatusCode::BAD_REQUEST,
            // A downstream status outside the valid range still has to map to something.
            RelayError::DownstreamHttp { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            RelayError::Network(_) | RelayError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to the caller. Internal detail stays in the logs.
    pub fn public_message(&self) -> String {
        match self {
            RelayError::MethodNotAllowed => "Method Not Allowed".to_string(),
            RelayError::ConfigurationMissing => "Server configuration error.".to_string(),
            RelayError::BadRequestBody(_) => "Bad request: Invalid form data.".to_string(),
            RelayError::DownstreamHttp { message, .. } => message.clone(),
            RelayError::Network(_) => "Network error communicating with HubSpot.".to_string(),
            RelayError::Unexpected(_) => "Internal server error.".to_string(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match &self {
            RelayError::MethodNotAllowed => {
                tracing::warn!("Rejected non-POST request to the contact relay");
            }
            RelayError::ConfigurationMissing => {
                tracing::error!("Server configuration error: {}", self);
            }
            RelayError::BadRequestBody(detail) => {
                tracing::warn!("Failed to parse request body: {}", detail);
            }
            RelayError::DownstreamHttp { status, message } => {
                tracing::error!("HubSpot API error ({}): {}", status, message);
            }
            RelayError::Network(detail) => {
                tracing::error!("Network error communicating with HubSpot: {}", detail);
            }
            RelayError::Unexpected(detail) => {
                tracing::error!("Unexpected relay error: {}", detail);
            }
        }

        let status = self.status_code();
        let body = Json(SubmissionResult::failure(self.public_message()));

        if matches!(self, RelayError::MethodNotAllowed) {
            return (status, [(header::ALLOW, "POST")], body).into_response();
        }

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            RelayError::Network(err.to_string())
        } else {
            RelayError::Unexpected(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(RelayError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(RelayError::ConfigurationMissing.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            RelayError::BadRequestBody("eof".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RelayError::DownstreamHttp { status: 422, message: "Invalid email".to_string() }.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            RelayError::Network("refused".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_out_of_range_downstream_status_falls_back_to_500() {
        let err = RelayError::DownstreamHttp { status: 42, message: "odd".to_string() };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_public_message_hides_internal_detail() {
        let err = RelayError::BadRequestBody("expected value at line 1 column 1".to_string());
        assert_eq!(err.public_message(), "Bad request: Invalid form data.");

        let err = RelayError::Unexpected("builder error".to_string());
        assert_eq!(err.public_message(), "Internal server error.");
    }

    #[test]
    fn test_method_not_allowed_sets_allow_header() {
        let response = RelayError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "POST");
    }
}
