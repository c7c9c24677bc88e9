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

use crate::components::Reveal::Reveal;
use leptos::*;
use sws_types::catalog::ABOUT_ITEMS;

#[component]
pub fn AboutSection(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    view! {
        <section
            id="about"
            class="relative min-h-screen w-full snap-start flex flex-col justify-center px-4 py-12 sm:px-6 sm:py-16 md:px-12 md:py-20 lg:px-20 lg:py-24"
        >
            <div class="max-w-6xl mx-auto w-full">
                <Reveal active=active class="mb-8 md:mb-16">
                    <span class="text-sm font-semibold text-[#FF4D00] uppercase tracking-wider">
                        "About Us"
                    </span>
                </Reveal>
                <Reveal active=active order=1>
                    <h2 class="text-3xl sm:text-4xl md:text-5xl lg:text-6xl font-bold leading-tight mb-8 md:mb-16">
                        "Our Studio"
                    </h2>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 sm:gap-8 md:gap-10 lg:gap-12">
                    {ABOUT_ITEMS
                        .iter()
                        .zip(2..)
                        .map(|(item, order)| {
                            view! {
                                <Reveal active=active order=order class="flex flex-col">
                                    <h3 class="text-lg sm:text-xl md:text-2xl font-bold mb-3 md:mb-4 text-white">
                                        {item.title}
                                    </h3>
                                    <p class="text-sm sm:text-base md:text-lg text-neutral-400 leading-relaxed">
                                        {item.content}
                                    </p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
