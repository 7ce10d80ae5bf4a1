//! HubSpot forms API integration

pub mod client;
pub mod credentials;
pub mod mapping;

pub use client::{FormsApi, HubSpotClient};
pub use credentials::{CredentialSource, EnvCredentials, HubSpotCredentials};
pub use mapping::{map_fields, HubSpotSubmission, MappedField, SubmissionContext};
