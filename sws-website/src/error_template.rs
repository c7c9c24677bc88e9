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

use crate::errors::SiteError;
use leptos::*;
#[cfg(feature = "ssr")]
use leptos_axum::ResponseOptions;

/// Full-page error view; also sets the HTTP status during SSR.
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match (outside_errors, errors) {
        (Some(outside), _) => outside,
        (None, Some(errors)) => errors.get_untracked(),
        (None, None) => Errors::default(),
    };

    let mut errors: Vec<SiteError> = errors
        .into_iter()
        .filter_map(|(_key, err)| err.downcast_ref::<SiteError>().cloned())
        .collect();
    if errors.is_empty() {
        errors.push(SiteError::InternalServerError);
    }

    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<ResponseOptions>() {
            response.set_status(errors[0].status_code());
        }
    }

    view! {
        <div class="min-h-[100dvh] bg-black text-white flex flex-col items-center justify-center px-6 text-center">
            <img src="/icon.png" alt="SWS Logo" class="w-14 h-14 mb-8 object-contain"/>
            {errors
                .into_iter()
                .map(|error| {
                    view! {
                        <h1 class="text-6xl font-bold text-[#FF4D00] mb-4">
                            {error.status_code().as_u16().to_string()}
                        </h1>
                        <p class="text-lg text-neutral-400 mb-10">{error.to_string()}</p>
                    }
                })
                .collect_view()}
            <a
                href="/"
                class="inline-flex items-center justify-center px-6 py-3 rounded-lg border border-[#FF4D00] text-[#FF4D00] hover:bg-[#FF4D00] hover:text-black transition-colors"
            >
                "Back to the studio"
            </a>
        </div>
    }
}
