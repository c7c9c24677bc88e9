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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::components::sections::About::AboutSection;
use crate::components::sections::Contact::ContactSection;
use crate::components::sections::Estimator::EstimatorSection;
use crate::components::sections::Gallery::GallerySection;
use crate::components::sections::Intro::IntroSection;
use crate::components::sections::Pricing::PricingSection;
use crate::components::sections::Team::TeamSection;
use leptos::*;
use sws_types::scroll::{active_section, scroll_progress, section_offset};
use sws_types::sections::contact_section_index;
use sws_types::{SectionKind, SECTIONS};

/// The scroll container holding every section.
///
/// Owns the active section index, the progress bar, and the contact message
/// that other sections can prefill before jumping to the form.
#[island]
pub fn LandingPage() -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    let (active, set_active) = create_signal(0usize);
    let (progress, set_progress) = create_signal(0.0f64);
    let contact_message = create_rw_signal(String::new());

    let on_scroll = move |_: ev::Event| {
        if let Some(el) = container.get_untracked() {
            let top = f64::from(el.scroll_top());
            let viewport = f64::from(el.client_height());
            set_active.set(active_section(top, viewport, SECTIONS.len()));
            set_progress.set(scroll_progress(top, f64::from(el.scroll_height()), viewport));
        }
    };

    let go_to = move |index: usize| {
        if let Some(el) = container.get_untracked() {
            let offset = section_offset(index, f64::from(el.client_height()));
            el.set_scroll_top(offset.round() as i32);
        }
    };

    let on_navigate = Callback::new(go_to);
    let on_contact = Callback::new(move |message: String| {
        contact_message.set(message);
        if let Some(index) = contact_section_index() {
            go_to(index);
        }
    });

    let sections = SECTIONS
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let is_active = Signal::derive(move || active.get() == index);
            match section.kind {
                SectionKind::Intro => {
                    view! { <IntroSection section=*section active=is_active on_navigate/> }
                        .into_view()
                }
                SectionKind::About => view! { <AboutSection active=is_active/> }.into_view(),
                SectionKind::Gallery => view! { <GallerySection active=is_active/> }.into_view(),
                SectionKind::Team => view! { <TeamSection active=is_active/> }.into_view(),
                SectionKind::Pricing => {
                    view! { <PricingSection active=is_active on_inquire=on_contact/> }.into_view()
                }
                SectionKind::Estimator => {
                    view! {
                        <EstimatorSection active=is_active on_quote=on_contact on_navigate/>
                    }
                    .into_view()
                }
                SectionKind::Contact => {
                    view! { <ContactSection active=is_active message=contact_message/> }
                        .into_view()
                }
            }
        })
        .collect_view();

    view! {
        <nav
            class="fixed top-0 right-0 h-screen flex flex-col justify-center z-30 p-4"
            aria-label="Sections"
        >
            {SECTIONS
                .iter()
                .enumerate()
                .map(|(index, section)| {
                    view! {
                        <button
                            class=move || {
                                if active.get() == index {
                                    "w-3 h-3 rounded-full my-2 transition-all duration-300 bg-white scale-150"
                                } else {
                                    "w-3 h-3 rounded-full my-2 transition-all duration-300 bg-gray-600 hover:bg-gray-400"
                                }
                            }
                            title=section.id
                            aria-label=format!("Go to section {}", index + 1)
                            on:click=move |_| go_to(index)
                        ></button>
                    }
                })
                .collect_view()}
        </nav>

        <div
            class="fixed top-0 left-0 right-0 h-0.5 bg-gradient-to-r from-[#FF4D00] to-orange-400 origin-left z-30"
            style=move || format!("transform: scaleX({})", progress.get())
        ></div>

        <div
            node_ref=container
            on:scroll=on_scroll
            class="section-scroller h-full overflow-y-auto snap-y snap-mandatory scroll-smooth"
        >
            {sections}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos_router::{Router, RouterIntegrationContext, ServerIntegration};

    fn render() -> String {
        leptos::ssr::render_to_string(|| {
            provide_context(RouterIntegrationContext::new(ServerIntegration {
                path: "http://localhost/".to_string(),
            }));
            view! {
                <Router>
                    <LandingPage/>
                </Router>
            }
        })
        .to_string()
    }

    #[test]
    fn every_section_is_rendered_in_order() {
        let html = render();
        let mut last = 0;
        for section in SECTIONS {
            let anchor = format!("id=\"{}\"", section.id);
            let position = html
                .find(&anchor)
                .unwrap_or_else(|| panic!("missing section {}", section.id));
            assert!(position >= last, "{} rendered out of order", section.id);
            last = position;
        }
    }

    #[test]
    fn sections_are_dispatched_by_kind() {
        let html = render();
        assert!(html.contains("Our Studio"));
        assert!(html.contains("Featured Projects"));
        assert!(html.contains("The People Behind SWS"));
        assert!(html.contains("Simple, Transparent Plans"));
        assert!(html.contains("Get Your Price Estimate"));
        assert!(html.contains("name=\"message\""));
        assert!(html.contains("Ready to Build Something Great?"));
    }

    #[test]
    fn one_nav_dot_per_section_with_the_first_active() {
        let html = render();
        for index in 1..=SECTIONS.len() {
            assert!(html.contains(&format!("aria-label=\"Go to section {index}\"")));
        }
        assert!(!html.contains(&format!(
            "aria-label=\"Go to section {}\"",
            SECTIONS.len() + 1
        )));
        assert_eq!(html.matches("bg-white scale-150").count(), 1);
        let active = html.find("bg-white scale-150").unwrap();
        let first_dot = html.find("aria-label=\"Go to section 1\"").unwrap();
        let second_dot = html.find("aria-label=\"Go to section 2\"").unwrap();
        assert!(active < second_dot && first_dot < second_dot);
    }

    #[test]
    fn sections_live_in_the_scroll_container() {
        let html = render();
        let container = html.find("section-scroller").expect("scroll container");
        let hero = html.find("id=\"hero\"").unwrap();
        assert!(container < hero);
    }
}
