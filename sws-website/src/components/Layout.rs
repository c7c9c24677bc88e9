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

use leptos::*;

/// Full-height dark frame with the animated grid background and the logo.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="h-[100dvh] overflow-hidden bg-black relative">
            <div class="absolute inset-0 z-10 squares-background" aria-hidden="true"></div>
            <a href="/" class="fixed top-4 left-4 sm:top-6 sm:left-6 md:top-8 md:left-8 z-30">
                <img
                    src="/icon.png"
                    alt="SWS Logo"
                    width="48"
                    height="48"
                    class="w-10 h-10 sm:w-12 sm:h-12 md:w-14 md:h-14 object-contain"
                />
            </a>
            <div class="relative z-20 h-full touch-pan-y">{children()}</div>
        </div>
    }
}
