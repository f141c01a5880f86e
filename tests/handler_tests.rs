use std::sync::Mutex;

use ajevif_contact::ContactError;
use ajevif_contact::core::config::AppConfig;
use ajevif_contact::core::models::{HttpResponse, OutboundEmail};
use ajevif_contact::email::EmailSender;
use ajevif_contact::handle_contact_event;
use async_trait::async_trait;
use serde_json::{Value, json};

/// In-memory sender that records every email and fails on demand.
struct StubSender {
    fail: bool,
    sent: Mutex<Vec<OutboundEmail>>,
}

impl StubSender {
    fn accepting() -> Self {
        Self {
            fail: false,
            sent: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for StubSender {
    async fn send(&self, email: &OutboundEmail) -> Result<(), ContactError> {
        self.sent.lock().unwrap().push(email.clone());
        if self.fail {
            Err(ContactError::Delivery(
                "MessageRejected: Email address is not verified".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

fn event(body: &str) -> Value {
    json!({
        "version": "2.0",
        "rawPath": "/contact",
        "requestContext": { "http": { "method": "POST" } },
        "body": body,
        "isBase64Encoded": false
    })
}

async fn invoke(payload: &Value, sender: &StubSender) -> HttpResponse {
    handle_contact_event(payload, &AppConfig::default(), sender).await
}

const JEAN: &str = r#"{"nom":"Jean","telephone":"0600000000","message":"Bonjour"}"#;

#[tokio::test]
async fn well_formed_submission_is_sent_and_answers_200() {
    let sender = StubSender::accepting();
    let resp = invoke(&event(JEAN), &sender).await;

    assert_eq!(resp.status_code, 200);
    assert!(resp.body.is_empty());

    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "inscription@ajevif.org");
    assert_eq!(
        sent[0].subject,
        "Mail de 'Jean' envoyé depuis le site ajevif.org"
    );
    assert!(sent[0].html_body.contains("<p>Nom: Jean</p>"));
    assert!(sent[0].html_body.contains("<p>Téléphone: 0600000000</p>"));
    assert!(sent[0].html_body.contains("<p>Bonjour</p>"));
}

#[tokio::test]
async fn empty_body_answers_400_vide() {
    let sender = StubSender::accepting();
    let resp = invoke(&event(""), &sender).await;

    assert_eq!(resp.status_code, 400);
    assert!(resp.body.contains("vide"));
    let body: Value = serde_json::from_str(&resp.body).unwrap();
    assert_eq!(body["message"], "[BadRequest] Body vide");
    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn absent_or_blank_body_answers_400() {
    let sender = StubSender::accepting();
    for payload in [json!({}), json!({ "body": null }), event("   \n")] {
        let resp = invoke(&payload, &sender).await;
        assert_eq!(resp.status_code, 400, "{payload}");
    }
    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn empty_name_answers_400() {
    let sender = StubSender::accepting();
    let resp = invoke(
        &event(r#"{"nom":"","telephone":"0600000000","message":"Bonjour"}"#),
        &sender,
    )
    .await;

    assert_eq!(resp.status_code, 400);
    let body: Value = serde_json::from_str(&resp.body).unwrap();
    assert_eq!(
        body["message"],
        "[BadRequest] nom ou telephone ou message absent"
    );
    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn any_missing_or_blank_field_answers_400() {
    let sender = StubSender::accepting();
    for body in [
        r#"{"telephone":"0600000000","message":"Bonjour"}"#,
        r#"{"nom":"Jean","message":"Bonjour"}"#,
        r#"{"nom":"Jean","telephone":"0600000000"}"#,
        r#"{"nom":" ","telephone":"0600000000","message":"Bonjour"}"#,
        r#"{"nom":"Jean","telephone":"\t","message":"Bonjour"}"#,
        r#"{"nom":"Jean","telephone":"0600000000","message":"\n"}"#,
        "null",
    ] {
        let resp = invoke(&event(body), &sender).await;
        assert_eq!(resp.status_code, 400, "{body}");
    }
    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn malformed_json_answers_400() {
    let sender = StubSender::accepting();
    let resp = invoke(&event(r#"{"nom":"Jean","#), &sender).await;

    assert_eq!(resp.status_code, 400);
    let body: Value = serde_json::from_str(&resp.body).unwrap();
    assert_eq!(body["message"], "[BadRequest] JSON invalide");
    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn delivery_failure_answers_500_with_empty_body() {
    let sender = StubSender::failing();
    let resp = invoke(&event(JEAN), &sender).await;

    assert_eq!(resp.status_code, 500);
    assert!(resp.body.is_empty());
    assert!(!resp.body.contains("MessageRejected"));
    assert_eq!(sender.sent().len(), 1, "no retry");
}

#[tokio::test]
async fn base64_encoded_body_is_accepted() {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;

    let sender = StubSender::accepting();
    let payload = json!({ "body": STANDARD.encode(JEAN), "isBase64Encoded": true });
    let resp = invoke(&payload, &sender).await;

    assert_eq!(resp.status_code, 200);
    assert_eq!(sender.sent().len(), 1);
}

#[tokio::test]
async fn markup_in_fields_is_escaped_in_the_email() {
    let sender = StubSender::accepting();
    let body = json!({
        "nom": "Jean",
        "telephone": "0600000000",
        "message": "<img src=x onerror=alert(1)>"
    })
    .to_string();
    let resp = invoke(&event(&body), &sender).await;

    assert_eq!(resp.status_code, 200);
    let sent = sender.sent();
    let html = &sent[0].html_body;
    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
}

#[tokio::test]
async fn recipient_ignores_environment_variables() {
    // SAFETY: no other test in this binary reads these variables.
    unsafe {
        std::env::set_var("CONTACT_TO_ADDRESS", "attacker@example.com");
        std::env::set_var("CONTACT_FROM_ADDRESS", "attacker@example.com");
    }

    let sender = StubSender::accepting();
    let config = AppConfig::default();
    let resp = handle_contact_event(&event(JEAN), &config, &sender).await;

    assert_eq!(resp.status_code, 200);
    assert_eq!(config.from_address, "ne-pas-repondre@ajevif.org");
    assert_eq!(config.aws_region, "eu-west-3");
    assert_eq!(sender.sent()[0].recipient, "inscription@ajevif.org");
}
