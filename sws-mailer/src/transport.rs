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

use async_trait::async_trait;
use serde::Serialize;

use crate::error::MailerError;

/// One message in a batch, serialized the way the Resend API expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

/// Anything that can deliver a batch of emails in one request.
#[async_trait]
pub trait EmailTransport: Send + Sync {
    /// Sends every email in `batch` at once and returns the provider ids in
    /// batch order.
    async fn send_batch(&self, batch: &[OutboundEmail]) -> Result<Vec<String>, MailerError>;
}
