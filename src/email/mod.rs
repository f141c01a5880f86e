//! Notification email: composition and delivery.
//!
//! The handler only sees the [`EmailSender`] seam; production wires in
//! [`ses::SesEmailSender`], tests wire in an in-memory double.

pub mod compose;
pub mod ses;

use async_trait::async_trait;
use tracing::{error, info};

use crate::core::config::AppConfig;
use crate::core::models::{OutboundEmail, ValidSubmission};
use crate::errors::ContactError;

pub use compose::compose;
pub use ses::SesEmailSender;

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ContactError::Delivery`] or [`ContactError::Build`] when the
    /// email was not accepted by the delivery API.
    async fn send(&self, email: &OutboundEmail) -> Result<(), ContactError>;
}

/// Composes and sends the notification for `submission`.
///
/// Returns `true` only when the delivery API accepted the email. Failures
/// are logged and never retried.
pub async fn send_notification(
    sender: &dyn EmailSender,
    config: &AppConfig,
    submission: &ValidSubmission,
) -> bool {
    let email = compose(config, submission);

    info!(recipient = %email.recipient, "sendEmail to {}...", email.recipient);
    match sender.send(&email).await {
        Ok(()) => {
            info!("sendEmail DONE.");
            true
        }
        Err(e) => {
            error!(error = %e, "Failed to sendEmail");
            false
        }
    }
}
