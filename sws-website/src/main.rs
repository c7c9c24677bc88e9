use cfg_if::cfg_if;

// boilerplate to run in different modes
cfg_if! {
    if #[cfg(feature = "ssr")] {
        use leptos::*;
        use axum::{
            body::Body as AxumBody,
            extract::{Path, RawQuery, State},
            http::{HeaderMap, Request},
            response::IntoResponse,
            routing::get,
            Router,
        };
        use sws_mailer::{ContactMailer, MailerConfig};
        use sws_website::app::*;
        use sws_website::fallback::file_and_error_handler;
        use sws_website::state::AppState;
        use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
        use tower_http::compression::CompressionLayer;

        fn log_level() -> log::Level {
            std::env::var("LOG_LEVEL")
                .ok()
                .and_then(|level| level.parse().ok())
                .unwrap_or(log::Level::Warn)
        }

        async fn server_fn_handler(
            State(state): State<AppState>,
            path: Path<String>,
            headers: HeaderMap,
            raw_query: RawQuery,
            request: Request<AxumBody>,
        ) -> impl IntoResponse {
            handle_server_fns_with_context(
                path,
                headers,
                raw_query,
                move || {
                    if let Some(mailer) = state.mailer.clone() {
                        provide_context(mailer);
                    }
                },
                request,
            )
            .await
        }

        #[tokio::main]
        async fn main() {
            simple_logger::init_with_level(log_level()).expect("couldn't initialize logging");
            let conf = get_configuration(None).await.expect("couldn't read leptos configuration");
            let leptos_options = conf.leptos_options;
            let addr = leptos_options.site_addr;
            let routes = generate_route_list(App);

            let mailer = match MailerConfig::from_env() {
                Ok(config) => Some(ContactMailer::resend(&config)),
                Err(err) => {
                    log::warn!("contact form disabled: {err}");
                    None
                }
            };
            let state = AppState { leptos_options, mailer };

            let app = Router::new()
                .route("/api/*fn_name", get(server_fn_handler).post(server_fn_handler))
                .leptos_routes(&state, routes, App)
                .fallback(file_and_error_handler)
                .with_state(state)
                .layer(CompressionLayer::new());

            // run our app with hyper
            // `axum::Server` is a re-export of `hyper::Server`
            log::info!("listening on http://{}", &addr);
            if let Err(err) = axum::Server::bind(&addr)
                .serve(app.into_make_service())
                .await
            {
                log::error!("server stopped: {err}");
            }
        }
    } else {
        pub fn main() {
            // no client-side main function; the bundle hydrates through `lib.rs`
        }
    }
}
