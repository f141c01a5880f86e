//! AJEVIF contact form - forwards website contact submissions by email.
//!
//! This crate implements the single Lambda behind the site's contact form:
//! API Gateway posts the form as JSON, the handler validates the three
//! fields (`nom`, `telephone`, `message`) and sends a notification to the
//! association's inbox through Amazon SES v2.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda (API Gateway v2 HTTP events) for serverless execution
//! - SES v2 for email delivery, one client per process
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use ajevif_contact::core::config::AppConfig;
//! use ajevif_contact::email::SesEmailSender;
//!
//! #[tokio::main]
//! async fn main() {
//!     ajevif_contact::setup_logging();
//!
//!     let config = AppConfig::default();
//!     let sender = SesEmailSender::from_config(&config).await;
//!
//!     let event = serde_json::json!({
//!         "body": r#"{"nom":"Jean","telephone":"0600000000","message":"Bonjour"}"#
//!     });
//!     let response = ajevif_contact::handle_contact_event(&event, &config, &sender).await;
//!     println!("status: {}", response.status_code);
//! }
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod email;
pub mod errors;

pub use api::handle_contact_event;
pub use errors::ContactError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// The level defaults to `info` and can be changed through `RUST_LOG`.
/// Calling it more than once is harmless.
///
/// # Example
///
/// ```
/// ajevif_contact::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_current_span(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
