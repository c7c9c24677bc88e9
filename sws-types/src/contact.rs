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

//! Contact form submission contract.
//!
//! The form posts `name`, `email`, `company` and `message`; `company` is the
//! only optional field. The server answers with a [`ContactResponse`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned when a required field is blank.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// Message returned for failures that are not the email provider's own.
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send email";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingRequiredFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    /// Builds a submission from raw form values. A blank company becomes `None`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        company: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let company = company.into();
        Self {
            name: name.into(),
            email: email.into(),
            company: (!company.trim().is_empty()).then_some(company),
            message: message.into(),
        }
    }

    /// Rejects submissions whose name, email or message is blank.
    pub fn validate(&self) -> Result<(), ContactError> {
        let blank = [&self.name, &self.email, &self.message]
            .iter()
            .any(|field| field.trim().is_empty());
        if blank {
            Err(ContactError::MissingRequiredFields)
        } else {
            Ok(())
        }
    }
}

/// Outcome of a contact submission as seen by the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ContactResponse {
    /// Both emails were accepted; ids are the provider's message ids.
    Sent { ids: Vec<String> },
    Failed { error: String },
}

impl ContactResponse {
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Sent { .. } => None,
            Self::Failed { error } => Some(error),
        }
    }
}

impl From<ContactError> for ContactResponse {
    fn from(err: ContactError) -> Self {
        Self::failed(err.to_string())
    }
}
