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

use sws_types::contact::{ContactError, DELIVERY_FAILED_MESSAGE};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("invalid mailer configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Invalid(#[from] ContactError),

    /// The email provider rejected the batch; carries its own message.
    #[error("{0}")]
    Provider(String),

    #[error("email request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected email provider response: {0}")]
    UnexpectedResponse(String),
}

impl MailerError {
    /// Message shown to the person who submitted the form.
    ///
    /// Validation and provider messages pass through unchanged; everything
    /// else collapses to a generic failure.
    pub fn public_message(&self) -> String {
        match self {
            MailerError::Invalid(err) => err.to_string(),
            MailerError::Provider(message) => message.clone(),
            _ => DELIVERY_FAILED_MESSAGE.to_string(),
        }
    }
}
