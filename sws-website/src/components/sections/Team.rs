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
use sws_types::catalog::TEAM_MEMBERS;

#[component]
pub fn TeamSection(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    view! {
        <section
            id="team"
            class="relative min-h-screen w-full snap-start flex flex-col justify-center px-4 py-12 sm:px-6 sm:py-16 md:px-12 md:py-20 lg:px-20 lg:py-24"
        >
            <div class="max-w-6xl mx-auto w-full">
                <Reveal active=active class="mb-8 md:mb-16">
                    <span class="text-sm font-semibold text-[#FF4D00] uppercase tracking-wider">
                        "Team"
                    </span>
                </Reveal>
                <Reveal active=active order=1>
                    <h2 class="text-3xl sm:text-4xl md:text-5xl lg:text-6xl font-bold leading-tight mb-8 md:mb-16">
                        "The People Behind SWS"
                    </h2>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 md:gap-8">
                    {TEAM_MEMBERS
                        .iter()
                        .zip(2..)
                        .map(|(member, order)| {
                            view! {
                                <Reveal
                                    active=active
                                    order=order
                                    class="rounded-lg p-6 sm:p-8 border border-neutral-700 bg-neutral-900/50"
                                >
                                    <div class="w-14 h-14 rounded-full bg-[#FF4D00]/10 border border-[#FF4D00] flex items-center justify-center text-[#FF4D00] font-bold mb-6">
                                        {member.initials()}
                                    </div>
                                    <h3 class="text-xl font-bold text-white">{member.name}</h3>
                                    <p class="text-sm font-semibold text-[#FF4D00] mb-4">{member.role}</p>
                                    <p class="text-sm sm:text-base text-neutral-400 leading-relaxed">
                                        {member.bio}
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
