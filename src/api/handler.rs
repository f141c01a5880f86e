//! Contact form Lambda handler.
//!
//! Flow per invocation:
//! - extract the body (400 when empty)
//! - parse and validate the three fields (400 when any is blank)
//! - send the notification (200 on success, 500 otherwise)

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::{helpers, parsing};
use crate::core::config::AppConfig;
use crate::core::models::HttpResponse;
use crate::email::{self, EmailSender};

/// Maps one API Gateway event to its HTTP response. Never fails.
///
/// The raw event is logged at info level, form contents included. Visitors
/// submit their name and phone to be contacted back, and the log is the
/// only trace of a submission whose email bounced.
pub async fn handle_contact_event(
    payload: &Value,
    config: &AppConfig,
    sender: &dyn EmailSender,
) -> HttpResponse {
    info!("input {}", payload);

    let body = match parsing::extract_body(payload) {
        Ok(body) => body,
        Err(e) => {
            error!(error = %e, "Body is empty or unreadable");
            return helpers::from_error(&e);
        }
    };

    let submission = match parsing::parse_submission(&body) {
        Ok(submission) => submission,
        Err(e) => {
            warn!(error = %e, "Rejected contact submission");
            return helpers::from_error(&e);
        }
    };

    info!(nom = %submission.name, "Contact submission received");

    if email::send_notification(sender, config, &submission).await {
        helpers::ok_empty()
    } else {
        helpers::server_error()
    }
}

/// Lambda entrypoint; the sender and config are shared across invocations.
///
/// # Errors
///
/// Never returns an error: every outcome is an HTTP response.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    sender: &dyn EmailSender,
    config: &AppConfig,
    event: LambdaEvent<Value>,
) -> Result<HttpResponse, Error> {
    let response = handle_contact_event(&event.payload, config, sender).await;
    info!(status_code = response.status_code, "Responding");
    Ok(response)
}
