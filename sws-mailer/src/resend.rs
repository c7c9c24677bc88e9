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

//! Client for the Resend batch email endpoint (`POST /emails/batch`).

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::MailerConfig;
use crate::error::MailerError;
use crate::transport::{EmailTransport, OutboundEmail};

#[derive(Debug, Deserialize)]
struct BatchResponse {
    data: Vec<SentEmail>,
}

#[derive(Debug, Deserialize)]
struct SentEmail {
    id: String,
}

/// Error body returned by Resend on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Clone)]
pub struct ResendClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl ResendClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &MailerConfig) -> Self {
        Self::new(config.api_url.clone(), config.api_key.clone())
    }

    fn batch_url(&self) -> String {
        format!("{}/emails/batch", self.api_url)
    }
}

#[async_trait]
impl EmailTransport for ResendClient {
    async fn send_batch(&self, batch: &[OutboundEmail]) -> Result<Vec<String>, MailerError> {
        let response = self
            .http
            .post(self.batch_url())
            .bearer_auth(&self.api_key)
            .json(batch)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match serde_json::from_str::<ErrorBody>(&body) {
                Ok(error) => MailerError::Provider(error.message),
                Err(_) => MailerError::UnexpectedResponse(format!("status {status}: {body}")),
            });
        }

        let body: BatchResponse = response
            .json()
            .await
            .map_err(|e| MailerError::UnexpectedResponse(e.to_string()))?;
        Ok(body.data.into_iter().map(|sent| sent.id).collect())
    }
}
