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

//! Price estimator.
//!
//! `estimate = round((BASE_PRICE + pages * PRICE_PER_PAGE + Σ feature price) * timeline multiplier)`
//!
//! The figure is indicative only. Nothing here is persisted or sent anywhere
//! except as free text in a contact message.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const BASE_PRICE: u64 = 1000;
pub const PRICE_PER_PAGE: u64 = 300;
pub const MIN_PAGES: u32 = 1;
pub const MAX_PAGES: u32 = 50;
pub const DEFAULT_PAGES: u32 = 5;
pub const CURRENCY_SYMBOL: &str = "$";

/// Optional add-ons, each with a flat price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Ecommerce,
    Cms,
    Api,
    Seo,
    Analytics,
}

impl Feature {
    /// Display order.
    pub const ALL: [Feature; 5] = [
        Feature::Ecommerce,
        Feature::Cms,
        Feature::Api,
        Feature::Seo,
        Feature::Analytics,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Feature::Ecommerce => "ecommerce",
            Feature::Cms => "cms",
            Feature::Api => "api",
            Feature::Seo => "seo",
            Feature::Analytics => "analytics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Feature::Ecommerce => "E-commerce",
            Feature::Cms => "CMS",
            Feature::Api => "API integration",
            Feature::Seo => "SEO",
            Feature::Analytics => "Analytics",
        }
    }

    pub fn price(self) -> u64 {
        match self {
            Feature::Ecommerce => 2000,
            Feature::Cms => 1500,
            Feature::Api => 1200,
            Feature::Seo => 800,
            Feature::Analytics => 600,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Delivery timeline, scaling the whole subtotal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeline {
    Rush,
    #[default]
    Standard,
    Flexible,
}

impl Timeline {
    pub const ALL: [Timeline; 3] = [Timeline::Rush, Timeline::Standard, Timeline::Flexible];

    pub fn key(self) -> &'static str {
        match self {
            Timeline::Rush => "rush",
            Timeline::Standard => "standard",
            Timeline::Flexible => "flexible",
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Timeline::Rush => 1.5,
            Timeline::Standard => 1.0,
            Timeline::Flexible => 0.85,
        }
    }

    /// Signed percentage relative to the standard timeline, e.g. `"+50%"`.
    pub fn adjustment_label(self) -> String {
        let percent = ((self.multiplier() - 1.0) * 100.0).round() as i64;
        if percent > 0 {
            format!("+{percent}%")
        } else {
            format!("{percent}%")
        }
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The estimator's inputs.
///
/// `features` keeps the order in which they were selected. Deserialized
/// values go through the same clamping and de-duplication as the setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEstimateInput")]
pub struct EstimateInput {
    pages: u32,
    features: Vec<Feature>,
    pub timeline: Timeline,
}

#[derive(Deserialize)]
struct RawEstimateInput {
    pages: u32,
    #[serde(default)]
    features: Vec<Feature>,
    #[serde(default)]
    timeline: Timeline,
}

impl From<RawEstimateInput> for EstimateInput {
    fn from(raw: RawEstimateInput) -> Self {
        Self::new(raw.pages, raw.features, raw.timeline)
    }
}

impl Default for EstimateInput {
    fn default() -> Self {
        Self {
            pages: DEFAULT_PAGES,
            features: Vec::new(),
            timeline: Timeline::default(),
        }
    }
}

impl EstimateInput {
    pub fn new(pages: u32, features: impl IntoIterator<Item = Feature>, timeline: Timeline) -> Self {
        let mut input = Self {
            pages: DEFAULT_PAGES,
            features: Vec::new(),
            timeline,
        };
        input.set_pages(pages);
        for feature in features {
            if !input.has_feature(feature) {
                input.features.push(feature);
            }
        }
        input
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Sets the page count, clamped to the slider range.
    pub fn set_pages(&mut self, pages: u32) {
        self.pages = pages.clamp(MIN_PAGES, MAX_PAGES);
    }

    /// Selected features, oldest selection first.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// Adds `feature` if absent, removes it otherwise.
    pub fn toggle(&mut self, feature: Feature) {
        match self.features.iter().position(|f| *f == feature) {
            Some(index) => {
                self.features.remove(index);
            }
            None => self.features.push(feature),
        }
    }

    pub fn features_cost(&self) -> u64 {
        self.features.iter().map(|f| f.price()).sum()
    }

    /// Cost before the timeline multiplier.
    pub fn subtotal(&self) -> u64 {
        BASE_PRICE + u64::from(self.pages) * PRICE_PER_PAGE + self.features_cost()
    }

    pub fn estimate(&self) -> u64 {
        (self.subtotal() as f64 * self.timeline.multiplier()).round() as u64
    }

    /// Text used to prefill the contact form from the estimator.
    pub fn contact_message(&self) -> String {
        let features = if self.features.is_empty() {
            "None".to_string()
        } else {
            self.features
                .iter()
                .map(|f| f.key())
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!(
            "Hi! I used your price estimator and got an estimate of {CURRENCY_SYMBOL}{} for a project with:\n\n- {} pages\n- Features: {features}\n- Timeline: {}\n\nI'd like to discuss this project further.",
            format_amount(self.estimate()),
            self.pages,
            self.timeline,
        )
    }
}

/// Renders `amount` with comma thousands separators.
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
