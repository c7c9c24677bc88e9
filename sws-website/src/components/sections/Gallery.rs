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
use sws_types::catalog::{WorkItem, WORK_ITEMS};

#[component]
pub fn GallerySection(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    let hovered = create_rw_signal(None::<&'static str>);

    view! {
        <section
            id="gallery"
            class="relative min-h-screen w-full snap-start flex flex-col justify-center px-6 py-16 md:px-12 md:py-20 lg:px-20 lg:py-24"
        >
            <div class="max-w-7xl mx-auto w-full">
                <Reveal active=active class="mb-12">
                    <span class="text-sm font-semibold text-[#FF4D00] uppercase tracking-wider">
                        "Our Work"
                    </span>
                </Reveal>
                <Reveal active=active order=1>
                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-bold leading-tight mb-16">
                        "Featured Projects"
                    </h2>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 md:gap-8">
                    {WORK_ITEMS
                        .iter()
                        .zip(2..)
                        .map(|(item, order)| {
                            view! {
                                <Reveal active=active order=order>
                                    <WorkCard item=*item hovered=hovered/>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn WorkCard(item: WorkItem, hovered: RwSignal<Option<&'static str>>) -> impl IntoView {
    let is_hovered = move || hovered.get() == Some(item.id);

    view! {
        <div
            class="relative overflow-hidden rounded-lg cursor-pointer group"
            on:mouseenter=move |_| hovered.set(Some(item.id))
            on:mouseleave=move |_| hovered.set(None)
        >
            <div class="relative h-64 md:h-72 overflow-hidden bg-neutral-900">
                <img
                    src=item.image
                    alt=item.title
                    loading="lazy"
                    class=move || {
                        if is_hovered() {
                            "w-full h-full object-cover transition-transform duration-300 scale-110"
                        } else {
                            "w-full h-full object-cover transition-transform duration-300 scale-100"
                        }
                    }
                />
                <div class=move || {
                    if is_hovered() {
                        "absolute inset-0 bg-black/60 flex flex-col justify-end p-6 transition-opacity duration-300 opacity-100"
                    } else {
                        "absolute inset-0 bg-black/60 flex flex-col justify-end p-6 transition-opacity duration-300 opacity-0"
                    }
                }>
                    <h3 class="text-xl font-bold text-white mb-2">{item.title}</h3>
                    <p class="text-sm text-neutral-300">{item.category}</p>
                </div>
            </div>
        </div>
    }
}
