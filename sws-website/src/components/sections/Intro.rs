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

use crate::components::CTAButton::{ButtonSize, ButtonVariant, CTAButton};
use crate::components::Reveal::Reveal;
use leptos::*;
use sws_types::sections::section_index;
use sws_types::SectionDef;

/// Generic panel driven entirely by its [`SectionDef`]: optional badge,
/// title, optional paragraph and an optional button that jumps to another
/// section.
#[component]
pub fn IntroSection(
    section: SectionDef,
    #[prop(into)] active: Signal<bool>,
    on_navigate: Callback<usize>,
) -> impl IntoView {
    let target = section.button_target.and_then(section_index);

    view! {
        <section
            id=section.id
            class="relative min-h-screen w-full snap-start flex flex-col justify-center px-4 py-12 sm:px-6 sm:py-16 md:px-12 md:py-20 lg:px-20 lg:py-24"
        >
            <div class="max-w-4xl mx-auto w-full">
                {section
                    .badge
                    .map(|badge| {
                        view! {
                            <Reveal active=active class="mb-8 md:mb-12">
                                <span class="inline-flex items-center rounded-full border border-white px-3 py-1 text-xs font-semibold text-white">
                                    {badge}
                                </span>
                            </Reveal>
                        }
                    })}
                <Reveal active=active order=1>
                    <h2 class="text-3xl sm:text-4xl md:text-5xl lg:text-6xl font-bold leading-tight mb-6 md:mb-8">
                        {section.title}
                    </h2>
                </Reveal>
                {section
                    .content
                    .map(|content| {
                        view! {
                            <Reveal active=active order=2>
                                <p class="text-base sm:text-lg md:text-xl text-neutral-400 leading-relaxed mb-6 md:mb-8">
                                    {content}
                                </p>
                            </Reveal>
                        }
                    })}
                {section
                    .button_text
                    .map(|text| {
                        view! {
                            <Reveal active=active order=3>
                                <CTAButton
                                    variant=ButtonVariant::Outline
                                    size=ButtonSize::Large
                                    class="w-full sm:w-auto"
                                    on_click=Callback::new(move |_| {
                                        if let Some(index) = target {
                                            on_navigate.call(index);
                                        }
                                    })
                                >
                                    {text}
                                </CTAButton>
                            </Reveal>
                        }
                    })}
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use sws_types::SECTIONS;

    #[test]
    fn renders_hero_badge_title_and_button() {
        let hero = SECTIONS[0];
        let html = leptos::ssr::render_to_string(move || {
            view! {
                <IntroSection
                    section=hero
                    active=Signal::derive(|| true)
                    on_navigate=Callback::new(|_| ())
                />
            }
        });
        assert!(html.contains("id=\"hero\""));
        assert!(html.contains("Digital Agency"));
        assert!(html.contains("Transform Your Ideas Into Digital Experiences"));
        assert!(html.contains("Get Started"));
    }
}
