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

//! Server-side delivery of contact form submissions.
//!
//! A submission becomes two HTML emails, one notifying the studio and one
//! thanking the submitter, sent to the provider as a single batch.

pub mod config;
pub mod error;
pub mod resend;
pub mod service;
pub mod templates;
pub mod transport;

pub use config::MailerConfig;
pub use error::MailerError;
pub use resend::ResendClient;
pub use service::ContactMailer;
pub use transport::{EmailTransport, OutboundEmail};
