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


use crate::components::CTAButton::CTAButton;
use crate::components::Reveal::Reveal;
use crate::icons::{CheckIcon, SpinnerIcon};
use leptos::*;
use leptos_router::ActionForm;
use std::time::Duration;
use sws_types::ContactResponse;

const FIELD_CLASS: &str = "w-full bg-neutral-800/50 border border-neutral-700 rounded-lg px-4 py-3 text-white placeholder:text-neutral-500 focus:outline-none focus:border-[#FF4D00] transition-colors";

/// How long the thank-you panel stays up before the form comes back.
const THANK_YOU_DURATION: Duration = Duration::from_secs(3);

#[server(SendContactEmail, "/api")]
pub async fn send_contact_email(
    name: String,
    email: String,
    company: String,
    message: String,
) -> Result<ContactResponse, ServerFnError> {
    let Some(mailer) = use_context::<sws_mailer::ContactMailer>() else {
        log::error!("contact form submitted but no mailer is configured");
        return Err(ServerFnError::ServerError(
            sws_types::contact::DELIVERY_FAILED_MESSAGE.to_string(),
        ));
    };
    Ok(mailer
        .submit(sws_types::ContactSubmission::new(name, email, company, message))
        .await)
}

fn failure_text(result: &Option<Result<ContactResponse, ServerFnError>>) -> Option<String> {
    match result {
        Some(Ok(response)) => response.error().map(str::to_string),
        Some(Err(_)) => Some(sws_types::contact::DELIVERY_FAILED_MESSAGE.to_string()),
        None => None,
    }
}

#[component]
pub fn ContactSection(
    #[prop(into)] active: Signal<bool>,
    /// Shared with the estimator and pricing cards so they can prefill it.
    message: RwSignal<String>,
) -> impl IntoView {
    let send = create_server_action::<SendContactEmail>();
    let result = send.value();
    let pending = send.pending();
    let submitted = create_rw_signal(false);

    create_effect(move |_| {
        let sent = result.with(|r| matches!(r, Some(Ok(response)) if response.is_sent()));
        if sent {
            submitted.set(true);
            message.set(String::new());
            set_timeout(move || submitted.set(false), THANK_YOU_DURATION);
        }
    });

    let form = move || {
        view! {
            <ActionForm action=send class="space-y-5 sm:space-y-6">
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-5 sm:gap-6">
                    <div class="space-y-2">
                        <label for="contact-name" class="text-sm font-medium text-neutral-300">
                            "Name"
                        </label>
                        <input
                            id="contact-name"
                            type="text"
                            name="name"
                            placeholder="John Doe"
                            class=FIELD_CLASS
                            required
                        />
                    </div>
                    <div class="space-y-2">
                        <label for="contact-email" class="text-sm font-medium text-neutral-300">
                            "Email"
                        </label>
                        <input
                            id="contact-email"
                            type="email"
                            name="email"
                            placeholder="john@example.com"
                            class=FIELD_CLASS
                            required
                        />
                    </div>
                </div>
                <div class="space-y-2">
                    <label for="contact-company" class="text-sm font-medium text-neutral-300">
                        "Company"
                    </label>
                    <input
                        id="contact-company"
                        type="text"
                        name="company"
                        placeholder="Your Company (optional)"
                        class=FIELD_CLASS
                    />
                </div>
                <div class="space-y-2">
                    <label for="contact-message" class="text-sm font-medium text-neutral-300">
                        "Message"
                    </label>
                    <textarea
                        id="contact-message"
                        name="message"
                        rows="5"
                        placeholder="Tell us about your project..."
                        class=format!("{FIELD_CLASS} resize-none")
                        required
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    >
                        {message.get_untracked()}
                    </textarea>
                </div>
                {move || {
                    result
                        .with(failure_text)
                        .map(|text| view! { <p class="text-sm text-red-400">{text}</p> })
                }}
                <CTAButton button_type="submit" class="w-full" disabled=pending>
                    <Show
                        when=move || pending.get()
                        fallback=|| "Send Message"
                    >
                        <SpinnerIcon/>
                        <span class="ml-2">"Sending..."</span>
                    </Show>
                </CTAButton>
            </ActionForm>
        }
    };

    view! {
        <section
            id="contact"
            class="relative min-h-screen w-full snap-start flex items-center py-12 sm:py-16 md:py-20 lg:py-24"
        >
            <div class="max-w-6xl mx-auto w-full px-4 sm:px-6 md:px-12 lg:px-20">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 sm:gap-12 lg:gap-16 items-center">
                    <Reveal active=active class="space-y-4 sm:space-y-6">
                        <span class="text-sm font-semibold text-[#FF4D00] uppercase tracking-wider">
                            "Contact"
                        </span>
                        <h2 class="text-2xl sm:text-3xl md:text-4xl lg:text-5xl font-bold leading-tight">
                            "Let's Talk About Your Project"
                        </h2>
                        <p class="text-base sm:text-lg text-neutral-400 leading-relaxed">
                            "Have a project in mind? Fill out the form and we'll get back to you within 24 hours."
                        </p>
                    </Reveal>

                    <Reveal active=active order=1 class="w-full">
                        <div class="bg-neutral-900/50 border border-neutral-700 rounded-xl p-4 sm:p-6 md:p-8 shadow-2xl backdrop-blur-sm">
                            <Show when=move || submitted.get() fallback=form>
                                <div class="flex flex-col items-center justify-center text-center py-12 space-y-4">
                                    <div class="w-16 h-16 rounded-full bg-[#FF4D00]/10 flex items-center justify-center text-[#FF4D00]">
                                        <CheckIcon class="w-8 h-8"/>
                                    </div>
                                    <h3 class="text-2xl font-bold">"Thank You!"</h3>
                                    <p class="text-neutral-400">"We'll get back to you within 24 hours."</p>
                                </div>
                            </Show>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos_router::{Router, RouterIntegrationContext, ServerIntegration};

    fn render(prefill: &'static str) -> String {
        leptos::ssr::render_to_string(move || {
            provide_context(RouterIntegrationContext::new(ServerIntegration {
                path: "http://localhost/".to_string(),
            }));
            let message = create_rw_signal(prefill.to_string());
            view! {
                <Router>
                    <ContactSection active=Signal::derive(|| true) message=message/>
                </Router>
            }
        })
        .to_string()
    }

    #[test]
    fn renders_form_fields() {
        let html = render("");
        for field in ["name=\"name\"", "name=\"email\"", "name=\"company\"", "name=\"message\""] {
            assert!(html.contains(field), "missing {field}");
        }
        assert!(html.contains("Send Message"));
        assert!(!html.contains("Thank You!"));
    }

    #[test]
    fn prefilled_message_is_rendered() {
        let html = render("Hi! I'm interested in the Starter plan");
        assert!(html.contains("interested in the Starter plan"));
    }

    #[test]
    fn failure_text_prefers_provider_message() {
        let failed = Some(Ok(ContactResponse::failed("Missing required fields")));
        assert_eq!(failure_text(&failed).as_deref(), Some("Missing required fields"));

        let sent = Some(Ok(ContactResponse::Sent { ids: vec![] }));
        assert_eq!(failure_text(&sent), None);

        let transport = Some(Err(ServerFnError::ServerError("boom".into())));
        assert_eq!(failure_text(&transport).as_deref(), Some("Failed to send email"));
        assert_eq!(failure_text(&None), None);
    }

    mod server_fn {
        use super::*;
        use async_trait::async_trait;
        use std::sync::{Arc, Mutex};
        use sws_mailer::{ContactMailer, EmailTransport, MailerConfig, MailerError, OutboundEmail};

        #[derive(Default)]
        struct RecordingTransport {
            batches: Mutex<Vec<Vec<OutboundEmail>>>,
        }

        #[async_trait]
        impl EmailTransport for RecordingTransport {
            async fn send_batch(&self, batch: &[OutboundEmail]) -> Result<Vec<String>, MailerError> {
                self.batches.lock().unwrap().push(batch.to_vec());
                Ok(vec!["op".to_string(), "user".to_string()])
            }
        }

        fn mailer(transport: Arc<RecordingTransport>) -> ContactMailer {
            let config = MailerConfig::from_lookup(|key| match key {
                "RESEND_API_KEY" => Some("re_test".to_string()),
                "CONTACT_OPERATOR_EMAIL" => Some("ops@example.com".to_string()),
                _ => None,
            })
            .unwrap();
            ContactMailer::new(&config, transport)
        }

        async fn submit() -> Result<ContactResponse, ServerFnError> {
            send_contact_email(
                "Ada".to_string(),
                "ada@example.com".to_string(),
                String::new(),
                "We need a new storefront.".to_string(),
            )
            .await
        }

        #[tokio::test]
        async fn without_a_mailer_delivery_fails() {
            let runtime = create_runtime();
            let result = submit().await;
            runtime.dispose();

            match result {
                Err(ServerFnError::ServerError(message)) => {
                    assert_eq!(message, "Failed to send email");
                    assert_eq!(
                        failure_text(&Some(Err(ServerFnError::ServerError(message)))).as_deref(),
                        Some("Failed to send email")
                    );
                }
                other => panic!("expected a server error, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn with_a_mailer_both_emails_go_out_together() {
            let runtime = create_runtime();
            let transport = Arc::new(RecordingTransport::default());
            provide_context(mailer(transport.clone()));
            let result = submit().await;
            runtime.dispose();

            match result {
                Ok(response) => assert_eq!(
                    response,
                    ContactResponse::Sent {
                        ids: vec!["op".to_string(), "user".to_string()]
                    }
                ),
                Err(err) => panic!("expected delivery, got {err:?}"),
            }
            let batches = transport.batches.lock().unwrap();
            assert_eq!(batches.len(), 1);
            assert_eq!(batches[0][0].to, vec!["ops@example.com".to_string()]);
            assert_eq!(batches[0][1].to, vec!["ada@example.com".to_string()]);
        }

        #[tokio::test]
        async fn invalid_input_is_reported_without_sending() {
            let runtime = create_runtime();
            let transport = Arc::new(RecordingTransport::default());
            provide_context(mailer(transport.clone()));
            let result = send_contact_email(
                "Ada".to_string(),
                "   ".to_string(),
                String::new(),
                "hello".to_string(),
            )
            .await;
            runtime.dispose();

            let response = result.unwrap();
            assert_eq!(response.error(), Some("Missing required fields"));
            assert!(transport.batches.lock().unwrap().is_empty());
        }
    }
}
