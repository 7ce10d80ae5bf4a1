use axum::http::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    config::HubSpotConfig,
    error::{RelayError, Result},
    hubspot::{
        CredentialSource, EnvCredentials, FormsApi, HubSpotClient, HubSpotCredentials,
        HubSpotSubmission, SubmissionContext,
    },
    models::{FormSubmission, SubmissionResult},
};

pub const SUCCESS_MESSAGE: &str = "Submission successful!";

/// Turns one inbound contact request into at most one HubSpot submission.
///
/// Holds no per-request state; clones share the same HTTP client.
#[derive(Clone)]
pub struct ContactRelay {
    forms_api: Arc<dyn FormsApi>,
    credentials: Arc<dyn CredentialSource>,
    default_page_uri: String,
    page_name: Option<String>,
}

impl ContactRelay {
    pub fn new(
        forms_api: Arc<dyn FormsApi>,
        credentials: Arc<dyn CredentialSource>,
        config: &HubSpotConfig,
    ) -> Self {
        Self {
            forms_api,
            credentials,
            default_page_uri: config.default_page_uri.clone(),
            page_name: config.page_name.clone().filter(|name| !name.is_empty()),
        }
    }

    /// Relay backed by the real HubSpot client and process environment.
    pub fn from_config(config: &HubSpotConfig) -> Result<Self> {
        let client = HubSpotClient::new(config)?;
        Ok(Self::new(Arc::new(client), Arc::new(EnvCredentials), config))
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.credentials().is_some()
    }

    pub async fn relay(
        &self,
        method: &Method,
        referer: Option<&str>,
        body: &[u8],
    ) -> Result<SubmissionResult> {
        let credentials = self.preflight(method)?;

        let form = parse_form_data(body)?;
        let submission = HubSpotSubmission::new(&form, self.context(referer));

        info!(
            fields = ?submission.field_names(),
            page_uri = %submission.context.page_uri,
            "Forwarding contact submission to HubSpot"
        );

        self.forms_api.submit(&credentials, &submission).await?;

        Ok(SubmissionResult::success(SUCCESS_MESSAGE))
    }

    /// Method and configuration checks, which take precedence over any
    /// problem with the request body.
    pub fn preflight(&self, method: &Method) -> Result<HubSpotCredentials> {
        if *method != Method::POST {
            return Err(RelayError::MethodNotAllowed);
        }

        self.credentials
            .credentials()
            .ok_or(RelayError::ConfigurationMissing)
    }

    fn context(&self, referer: Option<&str>) -> SubmissionContext {
        let page_uri = referer
            .filter(|r| !r.is_empty())
            .unwrap_or(self.default_page_uri.as_str())
            .to_string();

        SubmissionContext {
            page_uri,
            page_name: self.page_name.clone(),
        }
    }
}

/// Extracts the `formData` object from a request body.
fn parse_form_data(body: &[u8]) -> Result<FormSubmission> {
    if body.is_empty() {
        return Err(RelayError::BadRequestBody("request body is empty".to_string()));
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| RelayError::BadRequestBody(e.to_string()))?;

    let form_data = value
        .get("formData")
        .filter(|v| v.is_object())
        .cloned()
        .ok_or_else(|| {
            warn!("Contact request body has no formData object");
            RelayError::BadRequestBody("formData key is missing".to_string())
        })?;

    serde_json::from_value(form_data).map_err(|e| RelayError::BadRequestBody(e.to_string()))
}
