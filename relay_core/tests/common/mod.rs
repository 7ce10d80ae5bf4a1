#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use relay_core::{
    config::HubSpotConfig,
    hubspot::HubSpotSubmission,
    AppState, ContactRelay, CredentialSource, FormsApi, HubSpotCredentials, RelayError,
};
use std::sync::Arc;

pub enum Reply {
    Accept,
    Reject { status: u16, message: String },
    Unreachable,
}

/// Stand-in for HubSpot that records every submission it receives.
pub struct RecordingFormsApi {
    reply: Reply,
    calls: Mutex<Vec<(HubSpotCredentials, HubSpotSubmission)>>,
}

impl RecordingFormsApi {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn last_submission(&self) -> Option<HubSpotSubmission> {
        self.calls.lock().last().map(|(_, submission)| submission.clone())
    }
}

#[async_trait]
impl FormsApi for RecordingFormsApi {
    async fn submit(
        &self,
        credentials: &HubSpotCredentials,
        submission: &HubSpotSubmission,
    ) -> relay_core::Result<()> {
        self.calls.lock().push((credentials.clone(), submission.clone()));

        match &self.reply {
            Reply::Accept => Ok(()),
            Reply::Reject { status, message } => Err(RelayError::DownstreamHttp {
                status: *status,
                message: message.clone(),
            }),
            Reply::Unreachable => Err(RelayError::Network("connection refused".to_string())),
        }
    }
}

pub struct FixedCredentials(pub Option<HubSpotCredentials>);

impl CredentialSource for FixedCredentials {
    fn credentials(&self) -> Option<HubSpotCredentials> {
        self.0.clone()
    }
}

pub fn test_credentials() -> HubSpotCredentials {
    HubSpotCredentials {
        portal_id: "243272332".to_string(),
        form_guid: "1ff828bf-c049-41e3-b223-529fe3d6e968".to_string(),
    }
}

pub fn test_state(forms_api: Arc<RecordingFormsApi>, configured: bool) -> AppState {
    let credentials = FixedCredentials(configured.then(test_credentials));
    let relay = ContactRelay::new(forms_api, Arc::new(credentials), &HubSpotConfig::default());
    AppState::new(relay)
}
