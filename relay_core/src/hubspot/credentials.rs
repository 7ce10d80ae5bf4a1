//! Portal and form identifiers for the HubSpot submission URL

pub const PORTAL_ID_VAR: &str = "HUBSPOT_PORTAL_ID";
pub const FORM_GUID_VAR: &str = "HUBSPOT_FORM_GUID";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubSpotCredentials {
    pub portal_id: String,
    pub form_guid: String,
}

impl HubSpotCredentials {
    /// Resolves both identifiers through `lookup`; empty values count as missing.
    pub fn resolve<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let portal_id = lookup(PORTAL_ID_VAR).filter(|v| !v.is_empty())?;
        let form_guid = lookup(FORM_GUID_VAR).filter(|v| !v.is_empty())?;

        Some(Self {
            portal_id,
            form_guid,
        })
    }
}

pub trait CredentialSource: Send + Sync {
    fn credentials(&self) -> Option<HubSpotCredentials>;
}

/// Reads the process environment on every call, so fixing the environment
/// takes effect without a restart.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn credentials(&self) -> Option<HubSpotCredentials> {
        HubSpotCredentials::resolve(|key| std::env::var(key).ok())
    }
}
