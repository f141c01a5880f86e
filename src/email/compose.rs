use crate::core::config::AppConfig;
use crate::core::models::{OutboundEmail, ValidSubmission};

#[must_use]
pub fn subject_for(name: &str) -> String {
    format!("Mail de '{name}' envoyé depuis le site ajevif.org")
}

/// Escapes the characters that are significant in HTML text and attributes.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[must_use]
pub fn html_body(submission: &ValidSubmission) -> String {
    format!(
        "<html><head></head><body><p>Nom: {}</p><p>Téléphone: {}</p><p>{}</p></body></html>",
        escape_html(&submission.name),
        escape_html(&submission.phone),
        escape_html(&submission.message),
    )
}

/// Builds the notification sent to the association's inbox.
#[must_use]
pub fn compose(config: &AppConfig, submission: &ValidSubmission) -> OutboundEmail {
    OutboundEmail {
        recipient: config.to_address.clone(),
        subject: subject_for(&submission.name),
        html_body: html_body(submission),
    }
}
