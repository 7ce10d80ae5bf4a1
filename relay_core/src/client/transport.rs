//! HTTP transport from the contact form to the relay

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{ContactRequest, FormSubmission, SubmissionResult};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request to relay failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Relay returned an unreadable response ({status}): {body}")]
    InvalidResponse { status: u16, body: String },
}

#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn send(&self, submission: &FormSubmission) -> Result<SubmissionResult, ClientError>;
}

#[derive(Clone)]
pub struct RelayClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RelayClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SubmissionTransport for RelayClient {
    /// Reads `{ success, message }` regardless of status code; the relay
    /// answers every outcome with that shape.
    async fn send(&self, submission: &FormSubmission) -> Result<SubmissionResult, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ContactRequest::new(submission.clone()))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|_| ClientError::InvalidResponse { status, body })
    }
}
