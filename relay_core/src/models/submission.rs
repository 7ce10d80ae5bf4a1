//! Contact form submission as entered on the website

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    #[serde(default, deserialize_with = "required_text")]
    #[validate(length(min = 1, message = "Full name is required"))]
    pub name: String,

    #[serde(default, deserialize_with = "required_text")]
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,

    #[serde(default, deserialize_with = "required_text")]
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// Reads any JSON value as form text. `null`, `false`, `0` and `""` are
/// absent; other scalars use their JSON spelling and compound values their
/// compact JSON text.
fn text_of(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        compound => Some(compound.to_string()),
    }
}

fn required_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(Value::deserialize(deserializer)?))
}

/// Input names used by the contact form markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    BusinessType,
    Message,
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "phone" => Ok(FormField::Phone),
            "businessType" => Ok(FormField::BusinessType),
            "message" => Ok(FormField::Message),
            other => Err(format!("Unknown form field: {}", other)),
        }
    }
}

impl FormSubmission {
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = Some(value),
            FormField::BusinessType => self.business_type = Some(value),
            FormField::Message => self.message = value,
        }
    }
}
