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

//! Turns a contact submission into a delivered email batch.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use log::{error, info, warn};
use sws_types::{ContactResponse, ContactSubmission};

use crate::config::MailerConfig;
use crate::error::MailerError;
use crate::resend::ResendClient;
use crate::templates;
use crate::transport::{EmailTransport, OutboundEmail};

/// Cheap to clone; shared between requests.
#[derive(Clone)]
pub struct ContactMailer {
    transport: Arc<dyn EmailTransport>,
    operator_email: String,
    from_operator: String,
    from_confirmation: String,
}

impl ContactMailer {
    pub fn new(config: &MailerConfig, transport: Arc<dyn EmailTransport>) -> Self {
        Self {
            transport,
            operator_email: config.operator_email.clone(),
            from_operator: config.from_operator.clone(),
            from_confirmation: config.from_confirmation.clone(),
        }
    }

    /// Mailer backed by the Resend API.
    pub fn resend(config: &MailerConfig) -> Self {
        Self::new(config, Arc::new(ResendClient::from_config(config)))
    }

    /// The operator notification followed by the submitter's confirmation.
    pub fn compose(&self, submission: &ContactSubmission, year: i32) -> Vec<OutboundEmail> {
        vec![
            OutboundEmail {
                from: self.from_operator.clone(),
                to: vec![self.operator_email.clone()],
                subject: templates::operator_subject(submission),
                html: templates::operator_notification(submission),
                reply_to: Some(submission.email.clone()),
            },
            OutboundEmail {
                from: self.from_confirmation.clone(),
                to: vec![submission.email.clone()],
                subject: templates::CONFIRMATION_SUBJECT.to_string(),
                html: templates::submitter_confirmation(submission, year),
                reply_to: None,
            },
        ]
    }

    /// Validates and sends, returning the provider ids.
    pub async fn deliver(&self, submission: &ContactSubmission) -> Result<Vec<String>, MailerError> {
        submission.validate()?;
        let batch = self.compose(submission, Utc::now().year());
        self.transport.send_batch(&batch).await
    }

    /// [`ContactMailer::deliver`], folded into the response the browser sees.
    pub async fn submit(&self, submission: ContactSubmission) -> ContactResponse {
        match self.deliver(&submission).await {
            Ok(ids) => {
                info!("contact submission delivered ({} emails)", ids.len());
                ContactResponse::Sent { ids }
            }
            Err(err @ MailerError::Invalid(_)) => {
                warn!("contact submission rejected: {err}");
                ContactResponse::failed(err.public_message())
            }
            Err(err) => {
                error!("contact submission failed: {err}");
                ContactResponse::failed(err.public_message())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        batches: Mutex<Vec<Vec<OutboundEmail>>>,
    }

    #[async_trait]
    impl EmailTransport for RecordingTransport {
        async fn send_batch(&self, batch: &[OutboundEmail]) -> Result<Vec<String>, MailerError> {
            self.batches.lock().unwrap().push(batch.to_vec());
            Ok((0..batch.len()).map(|i| format!("email-{i}")).collect())
        }
    }

    struct RejectingTransport(&'static str);

    #[async_trait]
    impl EmailTransport for RejectingTransport {
        async fn send_batch(&self, _batch: &[OutboundEmail]) -> Result<Vec<String>, MailerError> {
            Err(MailerError::Provider(self.0.to_string()))
        }
    }

    struct BrokenTransport;

    #[async_trait]
    impl EmailTransport for BrokenTransport {
        async fn send_batch(&self, _batch: &[OutboundEmail]) -> Result<Vec<String>, MailerError> {
            Err(MailerError::UnexpectedResponse("connection reset".into()))
        }
    }

    fn config() -> MailerConfig {
        MailerConfig::from_lookup(|key| match key {
            "RESEND_API_KEY" => Some("re_test".to_string()),
            "CONTACT_OPERATOR_EMAIL" => Some("ops@example.com".to_string()),
            _ => None,
        })
        .unwrap()
    }

    fn submission() -> ContactSubmission {
        ContactSubmission::new("Ada", "ada@example.com", "Acme", "Build me a shop")
    }

    #[test]
    fn compose_addresses_operator_then_submitter() {
        let mailer = ContactMailer::new(&config(), Arc::new(RecordingTransport::default()));
        let batch = mailer.compose(&submission(), 2026);
        assert_eq!(batch.len(), 2);

        assert_eq!(batch[0].to, vec!["ops@example.com".to_string()]);
        assert_eq!(batch[0].reply_to.as_deref(), Some("ada@example.com"));
        assert_eq!(batch[0].subject, "New Contact Form Submission from Ada");

        assert_eq!(batch[1].to, vec!["ada@example.com".to_string()]);
        assert_eq!(batch[1].reply_to, None);
        assert_eq!(batch[1].subject, "Thank you for contacting SWS");
        assert!(batch[1].html.contains("2026"));
    }

    #[tokio::test]
    async fn valid_submission_is_sent_as_one_batch() {
        let transport = Arc::new(RecordingTransport::default());
        let mailer = ContactMailer::new(&config(), transport.clone());

        let response = mailer.submit(submission()).await;

        assert_eq!(
            response,
            ContactResponse::Sent {
                ids: vec!["email-0".into(), "email-1".into()]
            }
        );
        let batches = transport.batches.lock().unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 2);
    }

    #[tokio::test]
    async fn invalid_submission_never_reaches_transport() {
        let transport = Arc::new(RecordingTransport::default());
        let mailer = ContactMailer::new(&config(), transport.clone());

        let response = mailer
            .submit(ContactSubmission::new("", "ada@example.com", "", "hi"))
            .await;

        assert_eq!(response.error(), Some("Missing required fields"));
        assert!(transport.batches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn provider_error_is_reported_verbatim() {
        let mailer = ContactMailer::new(
            &config(),
            Arc::new(RejectingTransport("You can only send testing emails to your own address")),
        );
        let response = mailer.submit(submission()).await;
        assert_eq!(
            response.error(),
            Some("You can only send testing emails to your own address")
        );
    }

    #[tokio::test]
    async fn other_failures_are_generic() {
        let mailer = ContactMailer::new(&config(), Arc::new(BrokenTransport));
        let response = mailer.submit(submission()).await;
        assert_eq!(response.error(), Some("Failed to send email"));
    }
}
