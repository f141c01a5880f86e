use async_trait::async_trait;
use aws_sdk_sesv2::Client as SesClient;
use aws_sdk_sesv2::config::Region;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use tracing::debug;

use super::EmailSender;
use crate::core::config::AppConfig;
use crate::core::models::OutboundEmail;
use crate::errors::ContactError;

const CHARSET: &str = "UTF-8";

/// Sends notifications through SES v2 as simple HTML emails.
///
/// Built once per process; the client is reused by every invocation.
#[derive(Debug, Clone)]
pub struct SesEmailSender {
    client: SesClient,
    from_address: String,
}

impl SesEmailSender {
    /// Loads credentials from the environment provider chain and pins the
    /// configured region.
    pub async fn from_config(config: &AppConfig) -> Self {
        let shared_config = aws_config::from_env()
            .region(Region::new(config.aws_region.clone()))
            .load()
            .await;
        Self::new(SesClient::new(&shared_config), config.from_address.clone())
    }

    #[must_use]
    pub fn new(client: SesClient, from_address: String) -> Self {
        Self {
            client,
            from_address,
        }
    }
}

fn utf8_content(data: &str) -> Result<Content, ContactError> {
    Ok(Content::builder().data(data).charset(CHARSET).build()?)
}

/// Maps an [`OutboundEmail`] onto the SES simple-content model.
///
/// # Errors
///
/// Returns [`ContactError::Build`] if a required SES field is missing.
pub fn build_email_content(email: &OutboundEmail) -> Result<EmailContent, ContactError> {
    let message = Message::builder()
        .subject(utf8_content(&email.subject)?)
        .body(Body::builder().html(utf8_content(&email.html_body)?).build())
        .build();

    Ok(EmailContent::builder().simple(message).build())
}

#[async_trait]
impl EmailSender for SesEmailSender {
    async fn send(&self, email: &OutboundEmail) -> Result<(), ContactError> {
        let destination = Destination::builder()
            .to_addresses(email.recipient.as_str())
            .build();
        let content = build_email_content(email)?;

        let output = self
            .client
            .send_email()
            .from_email_address(self.from_address.as_str())
            .destination(destination)
            .content(content)
            .send()
            .await?;

        debug!(message_id = ?output.message_id(), "SES accepted email");
        Ok(())
    }
}
