use axum::{extract::Path, http::StatusCode, routing::post, Json, Router};
use relay_core::{
    config::HubSpotConfig,
    hubspot::{HubSpotSubmission, SubmissionContext},
    FormSubmission, FormsApi, HubSpotClient, HubSpotCredentials, RelayError,
};
use serde_json::{json, Value};
use std::net::SocketAddr;

/// Fake HubSpot: accepts form `ok`, rejects form `bad-email` with 422 and
/// answers form `broken` with a non-JSON 502.
async fn spawn_fake_hubspot() -> SocketAddr {
    let app = Router::new().route(
        "/submissions/v3/portal/:portal/forms/:form",
        post(
            |Path((portal, form)): Path<(String, String)>, Json(body): Json<Value>| async move {
                assert_eq!(portal, "243272332");
                match form.as_str() {
                    "ok" => {
                        let field_count = body["fields"].as_array().map_or(0, |f| f.len());
                        (StatusCode::OK, Json(json!({ "inlineMessage": "Thanks", "fields": field_count })))
                    }
                    "bad-email" => (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        Json(json!({ "status": "error", "message": "Invalid email" })),
                    ),
                    _ => (StatusCode::BAD_GATEWAY, Json(json!("upstream unavailable"))),
                }
            },
        ),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(api_base: String) -> HubSpotClient {
    HubSpotClient::new(&HubSpotConfig {
        api_base,
        timeout_seconds: 5,
        ..HubSpotConfig::default()
    })
    .unwrap()
}

fn credentials(form_guid: &str) -> HubSpotCredentials {
    HubSpotCredentials {
        portal_id: "243272332".to_string(),
        form_guid: form_guid.to_string(),
    }
}

fn submission() -> HubSpotSubmission {
    let form = FormSubmission {
        name: "Arjun".to_string(),
        email: "arjun@example.com".to_string(),
        phone: None,
        business_type: None,
        message: "Hello".to_string(),
    };
    HubSpotSubmission::new(
        &form,
        SubmissionContext {
            page_uri: "https://lumens.agency/contact".to_string(),
            page_name: None,
        },
    )
}

#[tokio::test]
async fn test_accepted_submission() {
    let addr = spawn_fake_hubspot().await;
    let client = client_for(format!("http://{}", addr));

    let result = client.submit(&credentials("ok"), &submission()).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_rejection_carries_status_and_message() {
    let addr = spawn_fake_hubspot().await;
    let client = client_for(format!("http://{}", addr));

    let err = client.submit(&credentials("bad-email"), &submission()).await.unwrap_err();
    match err {
        RelayError::DownstreamHttp { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "Invalid email");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_rejection_without_message_uses_fallback() {
    let addr = spawn_fake_hubspot().await;
    let client = client_for(format!("http://{}", addr));

    let err = client.submit(&credentials("broken"), &submission()).await.unwrap_err();
    match err {
        RelayError::DownstreamHttp { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Failed to submit to HubSpot.");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(format!("http://{}", addr));
    let err = client.submit(&credentials("ok"), &submission()).await.unwrap_err();

    assert!(matches!(err, RelayError::Network(_)), "got {:?}", err);
}
