/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Resend client and contact mailer against a mock Resend API.

use std::sync::Arc;

use serde_json::json;
use sws_mailer::{ContactMailer, EmailTransport, MailerConfig, MailerError, OutboundEmail, ResendClient};
use sws_types::{ContactResponse, ContactSubmission};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn email(to: &str) -> OutboundEmail {
    OutboundEmail {
        from: "SWS <support@example.com>".to_string(),
        to: vec![to.to_string()],
        subject: "Hello".to_string(),
        html: "<p>Hello</p>".to_string(),
        reply_to: None,
    }
}

fn config_for(server: &MockServer) -> MailerConfig {
    let url = server.uri();
    MailerConfig::from_lookup(move |key| match key {
        "RESEND_API_KEY" => Some("re_test_key".to_string()),
        "RESEND_API_URL" => Some(url.clone()),
        "CONTACT_OPERATOR_EMAIL" => Some("ops@example.com".to_string()),
        _ => None,
    })
    .expect("config")
}

#[tokio::test]
async fn batch_is_posted_with_bearer_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails/batch"))
        .and(header("authorization", "Bearer re_test_key"))
        .and(body_partial_json(json!([{ "to": ["a@example.com"] }, { "to": ["b@example.com"] }])))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": [{ "id": "id-a" }, { "id": "id-b" }] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ResendClient::new(server.uri(), "re_test_key");
    let ids = client
        .send_batch(&[email("a@example.com"), email("b@example.com")])
        .await
        .expect("batch accepted");

    assert_eq!(ids, vec!["id-a".to_string(), "id-b".to_string()]);
}

#[tokio::test]
async fn provider_error_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails/batch"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "statusCode": 422,
            "name": "validation_error",
            "message": "Invalid `to` field."
        })))
        .mount(&server)
        .await;

    let client = ResendClient::new(server.uri(), "re_test_key");
    let err = client.send_batch(&[email("nope")]).await.unwrap_err();

    match err {
        MailerError::Provider(message) => assert_eq!(message, "Invalid `to` field."),
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_error_body_is_unexpected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails/batch"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = ResendClient::new(server.uri(), "re_test_key");
    let err = client.send_batch(&[email("a@example.com")]).await.unwrap_err();

    assert!(matches!(err, MailerError::UnexpectedResponse(_)));
    assert_eq!(err.public_message(), "Failed to send email");
}

#[tokio::test]
async fn contact_mailer_sends_operator_and_confirmation_together() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails/batch"))
        .and(body_partial_json(json!([
            {
                "to": ["ops@example.com"],
                "reply_to": "ada@example.com",
                "subject": "New Contact Form Submission from Ada"
            },
            {
                "to": ["ada@example.com"],
                "subject": "Thank you for contacting SWS"
            }
        ])))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": [{ "id": "op" }, { "id": "user" }] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mailer = ContactMailer::resend(&config_for(&server));
    let response = mailer
        .submit(ContactSubmission::new(
            "Ada",
            "ada@example.com",
            "",
            "We need a new storefront.",
        ))
        .await;

    assert_eq!(
        response,
        ContactResponse::Sent {
            ids: vec!["op".to_string(), "user".to_string()]
        }
    );
}

#[tokio::test]
async fn contact_mailer_skips_the_api_for_invalid_input() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mailer = ContactMailer::new(
        &config_for(&server),
        Arc::new(ResendClient::new(server.uri(), "re_test_key")),
    );
    let response = mailer
        .submit(ContactSubmission::new("Ada", "", "Acme", "hello"))
        .await;

    assert_eq!(response.error(), Some("Missing required fields"));
}
