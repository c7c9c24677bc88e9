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

//! Mailer configuration loaded from environment variables.

use std::env;

use crate::error::MailerError;

pub const DEFAULT_API_URL: &str = "https://api.resend.com";
pub const DEFAULT_OPERATOR_EMAIL: &str = "contact@souswebstudi.com";
pub const DEFAULT_FROM_OPERATOR: &str = "SWS Contact <support@support.souswebstudi.com>";
pub const DEFAULT_FROM_CONFIRMATION: &str = "SWS <support@support.souswebstudi.com>";

#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// Resend API key, sent as a bearer token.
    pub api_key: String,
    /// Base URL of the Resend API, without a trailing slash.
    pub api_url: String,
    /// Mailbox that receives every submission.
    pub operator_email: String,
    /// Sender of the operator notification.
    pub from_operator: String,
    /// Sender of the thank-you email.
    pub from_confirmation: String,
}

impl MailerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Required
    /// - `RESEND_API_KEY`
    ///
    /// # Optional
    /// - `RESEND_API_URL` (default: `"https://api.resend.com"`)
    /// - `CONTACT_OPERATOR_EMAIL`
    /// - `CONTACT_FROM_OPERATOR`, `CONTACT_FROM_CONFIRMATION`
    pub fn from_env() -> Result<Self, MailerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`MailerConfig::from_env`] with an arbitrary variable source.
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MailerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = var("RESEND_API_KEY").ok_or_else(|| {
            MailerError::Config("RESEND_API_KEY environment variable is required".to_string())
        })?;
        let api_url = var("RESEND_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            api_key,
            api_url,
            operator_email: var("CONTACT_OPERATOR_EMAIL")
                .unwrap_or_else(|| DEFAULT_OPERATOR_EMAIL.to_string()),
            from_operator: var("CONTACT_FROM_OPERATOR")
                .unwrap_or_else(|| DEFAULT_FROM_OPERATOR.to_string()),
            from_confirmation: var("CONTACT_FROM_CONFIRMATION")
                .unwrap_or_else(|| DEFAULT_FROM_CONFIRMATION.to_string()),
        })
    }
}
