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

//! The ordered registry of full-viewport sections that make up the page.

use serde::{Deserialize, Serialize};

/// Which component renders a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Generic panel: optional badge, title, optional content and button.
    Intro,
    About,
    Gallery,
    Team,
    Pricing,
    Estimator,
    Contact,
}

/// Static description of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDef {
    pub id: &'static str,
    pub kind: SectionKind,
    pub badge: Option<&'static str>,
    pub title: Option<&'static str>,
    pub content: Option<&'static str>,
    pub button_text: Option<&'static str>,
    /// Id of the section the button scrolls to.
    pub button_target: Option<&'static str>,
}

impl SectionDef {
    const fn kind(id: &'static str, kind: SectionKind) -> Self {
        Self {
            id,
            kind,
            badge: None,
            title: None,
            content: None,
            button_text: None,
            button_target: None,
        }
    }
}

pub const SECTIONS: &[SectionDef] = &[
    SectionDef {
        id: "hero",
        kind: SectionKind::Intro,
        badge: Some("Digital Agency"),
        title: Some("Transform Your Ideas Into Digital Experiences"),
        content: None,
        button_text: Some("Get Started"),
        button_target: Some("estimator"),
    },
    SectionDef::kind("about", SectionKind::About),
    SectionDef::kind("gallery", SectionKind::Gallery),
    SectionDef::kind("team", SectionKind::Team),
    SectionDef::kind("pricing", SectionKind::Pricing),
    SectionDef::kind("estimator", SectionKind::Estimator),
    SectionDef::kind("contact", SectionKind::Contact),
    SectionDef {
        id: "join",
        kind: SectionKind::Intro,
        badge: None,
        title: Some("Ready to Build Something Great?"),
        content: Some(
            "Let's discuss your project and explore how Sous Web Studio can help bring your digital vision to life. Contact us today to get started.",
        ),
        button_text: Some("Contact Us"),
        button_target: Some("contact"),
    },
];

/// Position of the section with `id` in [`SECTIONS`].
pub fn section_index(id: &str) -> Option<usize> {
    SECTIONS.iter().position(|section| section.id == id)
}

pub fn contact_section_index() -> Option<usize> {
    SECTIONS
        .iter()
        .position(|section| section.kind == SectionKind::Contact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SECTIONS.len());
    }

    #[test]
    fn every_button_target_resolves() {
        for section in SECTIONS {
            if let Some(target) = section.button_target {
                assert!(
                    section_index(target).is_some(),
                    "{} points at unknown section {target}",
                    section.id
                );
                assert!(section.button_text.is_some());
            }
        }
    }

    #[test]
    fn hero_comes_first_and_join_last() {
        assert_eq!(SECTIONS.first().map(|s| s.id), Some("hero"));
        assert_eq!(SECTIONS.last().map(|s| s.id), Some("join"));
    }

    #[test]
    fn contact_index_matches_registry() {
        assert_eq!(contact_section_index(), section_index("contact"));
        assert_eq!(section_index("missing"), None);
    }

    #[test]
    fn intro_sections_carry_a_title() {
        for section in SECTIONS.iter().filter(|s| s.kind == SectionKind::Intro) {
            assert!(section.title.is_some(), "{} has no title", section.id);
        }
    }
}
