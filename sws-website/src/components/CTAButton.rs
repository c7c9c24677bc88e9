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

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Solid accent fill.
    Primary,
    /// Accent outline that fills on hover.
    Outline,
    /// Neutral outline, accent on hover.
    Ghost,
}

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Medium,
    Large,
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let base_classes = "inline-flex items-center justify-center gap-2 font-semibold transition-colors duration-200 focus:outline-none focus:ring-2 focus:ring-[#FF4D00]/40 disabled:opacity-50 disabled:cursor-not-allowed";

    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-[#FF4D00] text-black hover:bg-[#FF4D00]/90",
        ButtonVariant::Outline => "bg-transparent border border-[#FF4D00] text-[#FF4D00] hover:bg-[#FF4D00] hover:text-black",
        ButtonVariant::Ghost => "bg-transparent border border-neutral-600 text-white hover:border-[#FF4D00] hover:text-[#FF4D00]",
    };

    let size_classes = match size {
        ButtonSize::Medium => "px-6 py-2.5 sm:py-3 text-sm sm:text-base rounded-lg",
        ButtonSize::Large => "px-8 py-4 text-lg rounded-lg",
    };

    format!("{base_classes} {variant_classes} {size_classes} {extra}")
}

/// Themed `<button>`; `on_click` is optional so it can also submit a form.
#[component]
pub fn CTAButton(
    children: Children,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Medium)] size: ButtonSize,
    #[prop(default = String::new(), into)] class: String,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
    #[prop(default = false.into(), into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let combined_class = button_class(variant, size, &class);

    view! {
        <button
            type=button_type
            class=combined_class
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_combines_variant_size_and_extra() {
        let class = button_class(ButtonVariant::Outline, ButtonSize::Large, "w-full");
        assert!(class.contains("border-[#FF4D00]"));
        assert!(class.contains("px-8 py-4"));
        assert!(class.ends_with("w-full"));
    }

    #[test]
    fn primary_is_filled() {
        let class = button_class(ButtonVariant::Primary, ButtonSize::Medium, "");
        assert!(class.contains("bg-[#FF4D00] text-black"));
    }
}
