//! Headless state of the website's contact form

use tracing::{debug, warn};
use validator::{Validate, ValidationErrors};

use super::{ClientError, SubmissionTransport};
use crate::models::{FormField, FormSubmission, SubmissionResult};

pub const SUCCESS_NOTICE: &str = "Thanks for your message! We'll get back to you within 24 hours.";
pub const GENERIC_FAILURE_NOTICE: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

impl Notification {
    pub fn message(&self) -> &str {
        match self {
            Notification::Success(message) | Notification::Error(message) => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notification::Success(_))
    }
}

#[derive(Debug, Default)]
pub struct ContactForm {
    data: FormSubmission,
    pending: bool,
    notification: Option<Notification>,
}

/// Clears the pending flag if the submit future is dropped mid-flight.
struct PendingGuard<'a>(&'a mut bool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.data.set(field, value);
    }

    pub fn data(&self) -> &FormSubmission {
        &self.data
    }

    /// While true the submit control is disabled.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Submits the current fields through `transport`, making at most one request.
    ///
    /// Returns `None` when a submission is already in flight. Fields are only
    /// cleared when the relay reports success.
    pub async fn submit<T>(&mut self, transport: &T) -> Option<&Notification>
    where
        T: SubmissionTransport + ?Sized,
    {
        if self.pending {
            debug!("Submit ignored while a submission is pending");
            return None;
        }

        let Some(data) = self.begin_submit() else {
            return self.notification.as_ref();
        };

        let outcome = {
            let _pending = PendingGuard(&mut self.pending);
            transport.send(&data).await
        };

        Some(self.finish_submit(outcome))
    }

    /// First half of a submission: validates and marks the form pending.
    ///
    /// Returns the fields to send, or `None` if a submission is already in
    /// flight or a required field is missing (an error notification is set).
    pub fn begin_submit(&mut self) -> Option<FormSubmission> {
        if self.pending {
            return None;
        }

        if let Err(errors) = self.data.validate() {
            self.notification = Some(Notification::Error(first_validation_message(&errors)));
            return None;
        }

        self.pending = true;
        Some(self.data.clone())
    }

    /// Second half of a submission: applies the relay's answer and re-enables submit.
    pub fn finish_submit(&mut self, outcome: Result<SubmissionResult, ClientError>) -> &Notification {
        self.pending = false;

        let notification = match outcome {
            Ok(result) if result.success => {
                self.data = FormSubmission::default();
                Notification::Success(SUCCESS_NOTICE.to_string())
            }
            Ok(result) => {
                warn!("Relay rejected submission: {}", result.message);
                if result.message.is_empty() {
                    Notification::Error(GENERIC_FAILURE_NOTICE.to_string())
                } else {
                    Notification::Error(result.message)
                }
            }
            Err(err) => {
                warn!("Contact submission failed: {}", err);
                Notification::Error(GENERIC_FAILURE_NOTICE.to_string())
            }
        };

        self.notification.insert(notification)
    }
}

fn first_validation_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();

    ["name", "email", "message"]
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .filter_map(|errs| errs.first())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Please fill in all required fields.".to_string())
}
