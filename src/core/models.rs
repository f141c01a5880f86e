use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ContactError;

/// Contact form payload as posted by the site.
///
/// Every field is optional on the wire so that an absent field is reported
/// as a missing field instead of a JSON error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(rename = "nom")]
    pub name: Option<String>,
    #[serde(rename = "telephone")]
    pub phone: Option<String>,
    pub message: Option<String>,
}

/// A submission whose three fields are present and not blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub name: String,
    pub phone: String,
    pub message: String,
}

fn non_blank(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}

impl ContactSubmission {
    /// # Errors
    ///
    /// Returns [`ContactError::MissingFields`] if any field is absent or
    /// whitespace-only.
    pub fn validate(self) -> Result<ValidSubmission, ContactError> {
        match (
            non_blank(self.name),
            non_blank(self.phone),
            non_blank(self.message),
        ) {
            (Some(name), Some(phone), Some(message)) => Ok(ValidSubmission {
                name,
                phone,
                message,
            }),
            _ => Err(ContactError::MissingFields),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub recipient: String,
    pub subject: String,
    pub html_body: String,
}

/// API Gateway v2 proxy response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HttpResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Map<String, Value>,
    pub body: String,
}
