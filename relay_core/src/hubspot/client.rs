//! Outbound client for the HubSpot forms submission endpoint

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

use super::{HubSpotCredentials, HubSpotSubmission};
use crate::config::HubSpotConfig;
use crate::error::{RelayError, Result, DOWNSTREAM_FALLBACK_MESSAGE};

#[async_trait]
pub trait FormsApi: Send + Sync {
    /// Sends one submission. No retries: any failure is returned as-is.
    async fn submit(
        &self,
        credentials: &HubSpotCredentials,
        submission: &HubSpotSubmission,
    ) -> Result<()>;
}

#[derive(Clone)]
pub struct HubSpotClient {
    client: reqwest::Client,
    api_base: String,
}

impl HubSpotClient {
    pub fn new(config: &HubSpotConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| RelayError::Unexpected(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn submission_url(&self, credentials: &HubSpotCredentials) -> String {
        format!(
            "{}/submissions/v3/portal/{}/forms/{}",
            self.api_base, credentials.portal_id, credentials.form_guid
        )
    }
}

#[async_trait]
impl FormsApi for HubSpotClient {
    async fn submit(
        &self,
        credentials: &HubSpotCredentials,
        submission: &HubSpotSubmission,
    ) -> Result<()> {
        let url = self.submission_url(credentials);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(submission).send().await?;
        let status = response.status();

        if status.is_success() {
            info!(status = status.as_u16(), "HubSpot accepted submission");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(RelayError::DownstreamHttp {
            status: status.as_u16(),
            message: downstream_message(&body),
        })
    }
}

/// Picks the `message` field out of a HubSpot error body.
fn downstream_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(str::to_string))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| DOWNSTREAM_FALLBACK_MESSAGE.to_string())
}
