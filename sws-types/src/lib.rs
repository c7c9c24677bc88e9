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

//! Shared domain types for the Sous Web Studio website.
//!
//! Everything here is plain data and arithmetic: the section registry, the
//! scroll tracker, the price estimator, the static catalog and the contact
//! submission contract. No leptos, no axum, no HTTP client.

pub mod catalog;
pub mod contact;
pub mod estimator;
pub mod scroll;
pub mod sections;

pub use contact::{ContactError, ContactResponse, ContactSubmission};
pub use estimator::{EstimateInput, Feature, Timeline};
pub use sections::{SectionKind, SectionDef, SECTIONS};
