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

use cfg_if::cfg_if;

cfg_if! {
if #[cfg(feature = "ssr")] {
    use axum::{
        body::{boxed, Body, BoxBody},
        extract::State,
        response::IntoResponse,
        http::{HeaderValue, Request, Response, StatusCode, Uri, header::CACHE_CONTROL},
    };
    use axum::response::Response as AxumResponse;
    use tower::ServiceExt;
    use tower_http::services::ServeDir;
    use leptos::{LeptosOptions, Errors, view};
    use crate::error_template::ErrorTemplate;
    use crate::errors::SiteError;

    /// Serves files from the site root; anything else renders the 404 page.
    pub async fn file_and_error_handler(uri: Uri, State(options): State<LeptosOptions>, req: Request<Body>) -> AxumResponse {
        let root = options.site_root.clone();
        match get_static_file(uri.clone(), &root).await {
            Ok(res) if res.status() == StatusCode::OK => res.into_response(),
            Ok(_) => {
                log::debug!("no route or file for {uri}");
                let mut errors = Errors::default();
                errors.insert_with_default_key(SiteError::NotFound);
                let handler = leptos_axum::render_app_to_stream(options.to_owned(), move || view!{<ErrorTemplate outside_errors=errors.clone()/>});
                handler(req).await.into_response()
            }
            Err((status, message)) => {
                log::error!("serving {uri} failed: {message}");
                (status, message).into_response()
            }
        }
    }

    /// `cargo-leptos` hashes everything under `/pkg`, so those files never
    /// change under the same name.
    pub fn cache_control_for(path: &str) -> &'static str {
        if path.starts_with("/pkg/") {
            "public, max-age=31536000, immutable"
        } else {
            "no-cache"
        }
    }

    async fn get_static_file(uri: Uri, root: &str) -> Result<Response<BoxBody>, (StatusCode, String)> {
        let cache_control = cache_control_for(uri.path());
        let req = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .map_err(|err| (StatusCode::BAD_REQUEST, format!("Invalid request: {err}")))?;
        // `ServeDir` implements `tower::Service` so we can call it with `tower::ServiceExt::oneshot`
        match ServeDir::new(root).oneshot(req).await {
            Ok(mut res) => {
                res.headers_mut()
                    .insert(CACHE_CONTROL, HeaderValue::from_static(cache_control));
                Ok(res.map(boxed))
            },
            Err(err) => Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Something went wrong: {err}"),
            )),
        }
    }
}
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::cache_control_for;

    #[test]
    fn hashed_bundles_are_immutable() {
        assert_eq!(
            cache_control_for("/pkg/sws_website.3f2a.wasm"),
            "public, max-age=31536000, immutable"
        );
    }

    #[test]
    fn other_assets_revalidate() {
        assert_eq!(cache_control_for("/icon.png"), "no-cache");
        assert_eq!(cache_control_for("/images/pkg/x.png"), "no-cache");
    }
}
