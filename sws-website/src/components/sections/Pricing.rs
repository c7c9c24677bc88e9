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
use crate::icons::CheckIcon;
use leptos::*;
use sws_types::catalog::{Plan, PLANS};

#[component]
pub fn PricingSection(
    #[prop(into)] active: Signal<bool>,
    /// Receives the plan's inquiry message.
    on_inquire: Callback<String>,
) -> impl IntoView {
    view! {
        <section
            id="pricing"
            class="relative min-h-screen w-full snap-start flex flex-col justify-center px-6 py-16 md:px-12 md:py-20 lg:px-20 lg:py-24"
        >
            <div class="max-w-7xl mx-auto w-full">
                <Reveal active=active class="mb-12">
                    <span class="text-sm font-semibold text-[#FF4D00] uppercase tracking-wider">
                        "Pricing"
                    </span>
                </Reveal>
                <Reveal active=active order=1>
                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-bold leading-tight mb-16">
                        "Simple, Transparent Plans"
                    </h2>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 md:gap-8">
                    {PLANS
                        .iter()
                        .zip(2..)
                        .map(|(plan, order)| {
                            view! {
                                <Reveal active=active order=order>
                                    <PricingCard plan=*plan on_inquire/>
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
fn PricingCard(plan: Plan, on_inquire: Callback<String>) -> impl IntoView {
    let card_class = if plan.highlighted {
        "border-[#FF4D00] bg-[#FF4D00]/10"
    } else {
        "border-neutral-700 bg-neutral-900/50"
    };
    let variant = if plan.highlighted {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    };

    view! {
        <div class=format!(
            "rounded-lg p-8 border transition-transform duration-300 hover:-translate-y-1 {card_class}"
        )>
            <h3 class="text-2xl font-bold mb-2">{plan.name}</h3>
            <p class="text-neutral-400 text-sm mb-6">{plan.description}</p>
            <div class="mb-8">
                <span class="text-4xl font-bold">{plan.price}</span>
                {(!plan.is_custom())
                    .then(|| view! { <span class="text-neutral-400 ml-2">"one-time"</span> })}
            </div>

            <CTAButton
                variant=variant
                size=ButtonSize::Medium
                class="w-full mb-8"
                on_click=Callback::new(move |_| on_inquire.call(plan.inquiry_message()))
            >
                "Get Started"
            </CTAButton>

            <ul class="space-y-4">
                {plan
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="flex items-center gap-3">
                                <span class="text-[#FF4D00] flex-shrink-0">
                                    <CheckIcon/>
                                </span>
                                <span class="text-sm text-neutral-300">{*feature}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render() -> String {
        leptos::ssr::render_to_string(|| {
            view! {
                <PricingSection active=Signal::derive(|| true) on_inquire=Callback::new(|_| ())/>
            }
        })
        .to_string()
    }

    #[test]
    fn lists_all_plans_and_features() {
        let html = render();
        for plan in PLANS {
            assert!(html.contains(plan.name));
            for feature in plan.features {
                assert!(html.contains(feature), "missing {feature}");
            }
        }
    }

    #[test]
    fn custom_plan_has_no_one_time_suffix() {
        let html = render();
        let fixed_price_plans = PLANS.iter().filter(|p| !p.is_custom()).count();
        assert_eq!(html.matches("one-time").count(), fixed_price_plans);
    }
}
