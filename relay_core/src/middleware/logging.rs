//! Request logging middleware configuration

use axum::body::Body;
use http::{header, Request, Response};
use std::time::Duration;
use tower_http::{
    classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier},
    trace::{
        DefaultOnBodyChunk, DefaultOnEos, MakeSpan, OnFailure, OnRequest, OnResponse, TraceLayer,
    },
};
use tracing::{info_span, Span};

/// Trace layer for the relay. Spans carry the referer, which is what the
/// relay forwards to HubSpot as the page URI.
pub fn logging_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    impl MakeSpan<Body> + Clone + Send + Sync + 'static,
    impl OnRequest<Body> + Clone + Send + Sync + 'static,
    impl OnResponse<Body> + Clone + Send + Sync + 'static,
    DefaultOnBodyChunk,
    DefaultOnEos,
    impl OnFailure<ServerErrorsFailureClass> + Clone + Send + Sync + 'static,
> {
    TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            let referer = request
                .headers()
                .get(header::REFERER)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");

            info_span!(
                "relay_request",
                method = %request.method(),
                path = %request.uri().path(),
                referer = %referer,
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::debug!("received {} {}", request.method(), request.uri().path());
        })
        .on_response(|response: &Response<Body>, latency: Duration, _span: &Span| {
            let status = response.status().as_u16();
            let latency_ms = latency.as_millis();

            match status {
                200..=299 => tracing::info!(status, latency_ms, outcome = "success", "relay response"),
                400..=499 => tracing::warn!(status, latency_ms, outcome = "rejected", "relay response"),
                _ => tracing::error!(status, latency_ms, outcome = "failed", "relay response"),
            }
        })
        .on_failure(|error: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
            tracing::error!(latency_ms = latency.as_millis(), error = %error, "relay request failed");
        })
}
