use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::core::models::{ContactSubmission, ValidSubmission};
use crate::errors::ContactError;

/// Pulls the request body out of an API Gateway v2 event.
///
/// Bodies flagged `isBase64Encoded` are decoded first. Absent, non-string
/// and whitespace-only bodies are all reported as [`ContactError::EmptyBody`].
pub fn extract_body(payload: &Value) -> Result<String, ContactError> {
    let Some(raw) = payload.get("body").and_then(Value::as_str) else {
        return Err(ContactError::EmptyBody);
    };

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let body = if encoded {
        let bytes = STANDARD
            .decode(raw.trim())
            .map_err(|e| ContactError::InvalidEncoding(format!("base64: {e}")))?;
        String::from_utf8(bytes)
            .map_err(|e| ContactError::InvalidEncoding(format!("utf-8: {e}")))?
    } else {
        raw.to_string()
    };

    if body.trim().is_empty() {
        return Err(ContactError::EmptyBody);
    }
    Ok(body)
}

/// Parses and validates the contact form JSON.
pub fn parse_submission(body: &str) -> Result<ValidSubmission, ContactError> {
    let value: Value = serde_json::from_str(body)?;
    let submission: ContactSubmission = match value {
        Value::Null => return Err(ContactError::MissingFields),
        Value::Object(_) => serde_json::from_value(value)?,
        other => {
            return Err(ContactError::MalformedJson(format!(
                "expected an object, found {other}"
            )));
        }
    };
    submission.validate()
}
