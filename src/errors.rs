use aws_sdk_sesv2::error::{BuildError, SdkError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Request body is empty")]
    EmptyBody,

    #[error("Request body could not be decoded: {0}")]
    InvalidEncoding(String),

    #[error("Request body is not valid JSON: {0}")]
    MalformedJson(String),

    #[error("One or more required fields are missing")]
    MissingFields,

    #[error("Failed to build SES request: {0}")]
    Build(String),

    #[error("Failed to deliver email: {0}")]
    Delivery(String),
}

impl ContactError {
    /// HTTP status the handler answers with for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() { 400 } else { 500 }
    }

    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ContactError::EmptyBody
                | ContactError::InvalidEncoding(_)
                | ContactError::MalformedJson(_)
                | ContactError::MissingFields
        )
    }

    /// Message returned to the caller. Delivery failures expose nothing.
    #[must_use]
    pub fn client_message(&self) -> Option<&'static str> {
        match self {
            ContactError::EmptyBody => Some("[BadRequest] Body vide"),
            ContactError::InvalidEncoding(_) => Some("[BadRequest] Body illisible"),
            ContactError::MalformedJson(_) => Some("[BadRequest] JSON invalide"),
            ContactError::MissingFields => {
                Some("[BadRequest] nom ou telephone ou message absent")
            }
            ContactError::Build(_) | ContactError::Delivery(_) => None,
        }
    }
}

impl From<BuildError> for ContactError {
    fn from(error: BuildError) -> Self {
        ContactError::Build(error.to_string())
    }
}

impl<E, R> From<SdkError<E, R>> for ContactError
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug,
{
    fn from(error: SdkError<E, R>) -> Self {
        // Display on SdkError only says "service error"; the source chain has the code.
        let detail = aws_sdk_sesv2::error::DisplayErrorContext(&error).to_string();
        ContactError::Delivery(detail)
    }
}

impl From<serde_json::Error> for ContactError {
    fn from(error: serde_json::Error) -> Self {
        ContactError::MalformedJson(error.to_string())
    }
}
