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

use crate::components::CTAButton::{ButtonVariant, CTAButton};
use crate::components::Reveal::Reveal;
use leptos::*;
use sws_types::estimator::{format_amount, CURRENCY_SYMBOL, MAX_PAGES, MIN_PAGES};
use sws_types::sections::contact_section_index;
use sws_types::{EstimateInput, Feature, Timeline};

#[component]
pub fn EstimatorSection(
    #[prop(into)] active: Signal<bool>,
    /// Receives the estimate summary to prefill the contact form with.
    on_quote: Callback<String>,
    on_navigate: Callback<usize>,
) -> impl IntoView {
    let input = create_rw_signal(EstimateInput::default());
    let estimate = create_memo(move |_| input.with(EstimateInput::estimate));

    view! {
        <section
            id="estimator"
            class="relative min-h-screen w-full snap-start py-12 sm:py-16 md:py-20 lg:py-24"
        >
            <div class="max-w-6xl mx-auto w-full px-4 sm:px-6 md:px-12 lg:px-20">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 sm:gap-12 lg:gap-16 items-center">
                    <Reveal active=active class="space-y-4 sm:space-y-6">
                        <span class="text-sm font-semibold text-[#FF4D00] uppercase tracking-wider">
                            "Estimator"
                        </span>
                        <h2 class="text-2xl sm:text-3xl md:text-4xl lg:text-5xl font-bold leading-tight">
                            "Get Your Price Estimate"
                        </h2>
                        <p class="text-base sm:text-lg text-neutral-400 leading-relaxed">
                            "Use our interactive calculator to get a rough estimate for your web project. Adjust the parameters below to see how the price changes."
                        </p>
                    </Reveal>

                    <Reveal active=active order=1 class="w-full">
                        <div class="bg-neutral-900/50 border border-neutral-700 rounded-xl p-4 sm:p-6 md:p-8 shadow-2xl backdrop-blur-sm space-y-5 sm:space-y-6">
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-5 sm:gap-6">
                                <PagesSlider input=input/>
                                <div class="flex flex-col justify-center items-center p-4 bg-neutral-800/50 rounded-lg border border-neutral-700">
                                    <span class="text-sm text-neutral-400 mb-1">"Estimated Price"</span>
                                    <span class="text-3xl font-bold text-[#FF4D00]">
                                        {CURRENCY_SYMBOL}
                                        {move || format_amount(estimate.get())}
                                    </span>
                                    <p class="text-xs text-neutral-500 mt-1">"Starting price"</p>
                                </div>
                            </div>

                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-5 sm:gap-6">
                                <FeaturePicker input=input/>
                                <TimelinePicker input=input/>
                            </div>

                            <div class="flex flex-col sm:flex-row gap-3 pt-2 sm:pt-4">
                                <CTAButton
                                    class="w-full sm:flex-1"
                                    on_click=Callback::new(move |_| {
                                        if let Some(index) = contact_section_index() {
                                            on_navigate.call(index);
                                        }
                                    })
                                >
                                    "Request Quote"
                                </CTAButton>
                                <CTAButton
                                    variant=ButtonVariant::Ghost
                                    class="w-full sm:flex-1"
                                    on_click=Callback::new(move |_| {
                                        on_quote.call(input.with(EstimateInput::contact_message))
                                    })
                                >
                                    "Contact Us"
                                </CTAButton>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PagesSlider(input: RwSignal<EstimateInput>) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <label for="estimator-pages" class="text-sm font-medium text-neutral-300">
                "Number of Pages"
            </label>
            <input
                id="estimator-pages"
                type="range"
                min=MIN_PAGES.to_string()
                max=MAX_PAGES.to_string()
                step="1"
                class="w-full accent-[#FF4D00]"
                prop:value=move || input.with(|i| i.pages().to_string())
                on:input=move |ev| {
                    if let Ok(pages) = event_target_value(&ev).parse::<u32>() {
                        input.update(|i| i.set_pages(pages));
                    }
                }
            />
            <div class="flex justify-between text-xs text-neutral-400">
                <span>{format!("{MIN_PAGES} page")}</span>
                <span class="font-semibold text-white">
                    {move || format!("{} pages", input.with(EstimateInput::pages))}
                </span>
                <span>{format!("{MAX_PAGES} pages")}</span>
            </div>
        </div>
    }
}

#[component]
fn FeaturePicker(input: RwSignal<EstimateInput>) -> impl IntoView {
    view! {
        <fieldset class="space-y-3">
            <legend class="text-sm font-medium text-neutral-300 mb-3">"Features"</legend>
            <div class="space-y-2">
                {Feature::ALL
                    .into_iter()
                    .map(|feature| {
                        let id = format!("feature-{}", feature.key());
                        view! {
                            <label
                                for=id.clone()
                                class="flex items-center space-x-2 text-xs sm:text-sm text-neutral-300 cursor-pointer"
                            >
                                <input
                                    id=id
                                    type="checkbox"
                                    name="features"
                                    value=feature.key()
                                    class="accent-[#FF4D00]"
                                    prop:checked=move || input.with(|i| i.has_feature(feature))
                                    on:change=move |_| input.update(|i| i.toggle(feature))
                                />
                                <span class="flex-1">{feature.label()}</span>
                                <span class="text-neutral-500">
                                    {format!("+{CURRENCY_SYMBOL}{}", format_amount(feature.price()))}
                                </span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </fieldset>
    }
}

#[component]
fn TimelinePicker(input: RwSignal<EstimateInput>) -> impl IntoView {
    view! {
        <fieldset class="space-y-3">
            <legend class="text-sm font-medium text-neutral-300 mb-3">"Timeline"</legend>
            <div class="space-y-2">
                {Timeline::ALL
                    .into_iter()
                    .map(|timeline| {
                        let id = format!("timeline-{}", timeline.key());
                        let tone = if timeline.multiplier() > 1.0 {
                            "text-red-400"
                        } else if timeline.multiplier() < 1.0 {
                            "text-green-400"
                        } else {
                            "text-neutral-400"
                        };
                        view! {
                            <label
                                for=id.clone()
                                class="flex items-center space-x-2 text-xs sm:text-sm text-neutral-300 cursor-pointer"
                            >
                                <input
                                    id=id
                                    type="radio"
                                    name="timeline"
                                    value=timeline.key()
                                    class="accent-[#FF4D00]"
                                    prop:checked=move || input.with(|i| i.timeline == timeline)
                                    on:change=move |_| input.update(|i| i.timeline = timeline)
                                />
                                <span class="flex-1 capitalize">{timeline.key()}</span>
                                <span class=format!("text-xs font-medium {tone}")>
                                    {timeline.adjustment_label()}
                                </span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </fieldset>
    }
}
