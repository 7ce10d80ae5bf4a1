//! Client side of the contact form: form state plus the transport to the relay

pub mod form;
pub mod transport;

pub use form::{ContactForm, Notification, GENERIC_FAILURE_NOTICE, SUCCESS_NOTICE};
pub use transport::{ClientError, RelayClient, SubmissionTransport};
