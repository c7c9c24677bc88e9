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

/// Fades and slides its children in while `active` is true.
///
/// `order` staggers siblings: each step adds 100ms to the 200ms base delay.
#[component]
pub fn Reveal(
    #[prop(into)] active: Signal<bool>,
    #[prop(default = 0)] order: u32,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let style = format!("transition-delay: {}ms", 200 + order * 100);
    let extra = class;
    let class = move || {
        let state = if active.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-5"
        };
        format!("transition-all duration-700 ease-out {state} {extra}")
    };

    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}
