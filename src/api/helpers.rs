//! Response builders for the API Gateway proxy integration.

use serde_json::{Map, Value, json};

use crate::core::models::HttpResponse;
use crate::errors::ContactError;

// ============================================================================
// Response Builders
// ============================================================================

/// Returns a 200 OK response with an empty body.
#[must_use]
pub fn ok_empty() -> HttpResponse {
    empty(200)
}

/// Returns a 500 response with an empty body.
#[must_use]
pub fn server_error() -> HttpResponse {
    empty(500)
}

/// Returns an error response whose JSON body carries `message`.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> HttpResponse {
    let mut headers = Map::new();
    headers.insert(
        "Content-Type".to_string(),
        Value::String("application/json".to_string()),
    );

    HttpResponse {
        status_code,
        headers,
        body: json!({ "message": message }).to_string(),
    }
}

/// Maps an error to its response. Only client errors carry a message.
#[must_use]
pub fn from_error(error: &ContactError) -> HttpResponse {
    match error.client_message() {
        Some(message) => err_response(error.status_code(), message),
        None => empty(error.status_code()),
    }
}

fn empty(status_code: u16) -> HttpResponse {
    HttpResponse {
        status_code,
        headers: Map::new(),
        body: String::new(),
    }
}
