pub mod request;
pub mod submission;

pub use request::{ApiResponse, ContactRequest, SubmissionResult};
pub use submission::{FormField, FormSubmission};
