//! Mapping from the website's form fields to HubSpot contact properties

use serde::{Deserialize, Serialize};

use crate::models::FormSubmission;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedField {
    pub name: String,
    pub value: String,
}

impl MappedField {
    fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionContext {
    pub page_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_name: Option<String>,
}

/// Body of a HubSpot form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubSpotSubmission {
    pub fields: Vec<MappedField>,
    pub context: SubmissionContext,
}

impl HubSpotSubmission {
    pub fn new(form: &FormSubmission, context: SubmissionContext) -> Self {
        Self {
            fields: map_fields(form),
            context,
        }
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

/// Maps a submission to HubSpot properties, dropping absent and empty values.
pub fn map_fields(form: &FormSubmission) -> Vec<MappedField> {
    let candidates = [
        ("firstname", Some(form.name.as_str())),
        ("email", Some(form.email.as_str())),
        ("phone", form.phone.as_deref()),
        ("business_type", form.business_type.as_deref()),
        ("message", Some(form.message.as_str())),
    ];

    candidates
        .into_iter()
        .filter_map(|(name, value)| match value {
            Some(value) if !value.is_empty() => Some(MappedField::new(name, value)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete_form() -> FormSubmission {
        FormSubmission {
            name: "Kiran".to_string(),
            email: "kiran@example.com".to_string(),
            phone: Some("+91 98765 43210".to_string()),
            business_type: Some("healthcare".to_string()),
            message: "Clinic website please".to_string(),
        }
    }

    #[test]
    fn test_all_fields_mapped_to_hubspot_names() {
        let fields = map_fields(&complete_form());
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["firstname", "email", "phone", "business_type", "message"]);
        assert_eq!(fields[0].value, "Kiran");
        assert_eq!(fields[3].value, "healthcare");
    }

    #[test]
    fn test_empty_and_absent_values_dropped() {
        let mut form = complete_form();
        form.phone = None;
        form.business_type = Some(String::new());

        let fields = map_fields(&form);
        assert_eq!(fields.len(), 3);
        assert!(fields.iter().all(|f| !f.value.is_empty()));
        assert!(!fields.iter().any(|f| f.name == "phone" || f.name == "business_type"));
    }

    #[test]
    fn test_empty_form_maps_to_nothing() {
        assert!(map_fields(&FormSubmission::default()).is_empty());
    }

    #[test]
    fn test_submission_wire_format() {
        let submission = HubSpotSubmission::new(
            &complete_form(),
            SubmissionContext {
                page_uri: "https://lumens.agency/contact".to_string(),
                page_name: None,
            },
        );

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["context"], json!({ "pageUri": "https://lumens.agency/contact" }));
        assert_eq!(value["fields"][1], json!({ "name": "email", "value": "kiran@example.com" }));
    }
}
