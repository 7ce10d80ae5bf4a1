//! Request and response models

use serde::{Deserialize, Serialize};

use super::FormSubmission;

/// Body the website posts to the relay: `{ "formData": { ... } }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(rename = "formData", default)]
    pub form_data: Option<FormSubmission>,
}

impl ContactRequest {
    pub fn new(form_data: FormSubmission) -> Self {
        Self {
            form_data: Some(form_data),
        }
    }
}

/// Normalized outcome of one submission, returned for every relay response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl SubmissionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contact_request_reads_form_data_key() {
        let request: ContactRequest = serde_json::from_value(json!({
            "formData": { "name": "Asha", "email": "asha@example.com", "message": "Hi" }
        }))
        .unwrap();

        let form = request.form_data.unwrap();
        assert_eq!(form.name, "Asha");
        assert_eq!(form.phone, None);
    }

    #[test]
    fn test_contact_request_without_form_data() {
        let request: ContactRequest = serde_json::from_value(json!({ "data": {} })).unwrap();
        assert!(request.form_data.is_none());

        let request: ContactRequest = serde_json::from_value(json!({ "formData": null })).unwrap();
        assert!(request.form_data.is_none());
    }

    #[test]
    fn test_submission_result_tolerates_missing_message() {
        let result: SubmissionResult = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(result, SubmissionResult::success(""));
    }
}
