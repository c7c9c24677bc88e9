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

use crate::error_template::ErrorTemplate;
use crate::errors::SiteError;
use crate::pages::Home::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

const DESCRIPTION: &str = "Sous Web Studio designs and builds websites, e-commerce stores and brand identities. Estimate your project online and talk to the team.";

#[component]
pub fn App() -> impl IntoView {
    let formatter = |text| format!("{text} - Sous Web Studio");
    provide_meta_context();

    let json_ld = r#"
    {
        "@context": "https://schema.org",
        "@type": "ProfessionalService",
        "name": "Sous Web Studio",
        "alternateName": "SWS",
        "url": "https://souswebstudi.com/",
        "logo": "https://souswebstudi.com/icon.png",
        "description": "Web design & development, branding, e-commerce, UI/UX design and SEO.",
        "email": "support@support.souswebstudi.com",
        "priceRange": "$$"
    }
    "#;

    view! {
        <Html lang="en" class="dark"/>
        <Body class="bg-black text-white antialiased"/>
        <Stylesheet id="leptos" href="/pkg/sws_website.css"/>
        <Link rel="icon" type_="image/png" href="/icon.png"/>
        <Link rel="apple-touch-icon" href="/icon.png"/>
        <Title formatter/>
        <Meta name="description" content=DESCRIPTION/>
        <Meta
            name="keywords"
            content="web design agency, web development, e-commerce websites, branding, ui ux design, seo, website price estimate"
        />

        // Open Graph
        <Meta property="og:type" content="website"/>
        <Meta property="og:site_name" content="Sous Web Studio"/>
        <Meta property="og:url" content="https://souswebstudi.com/"/>
        <Meta property="og:title" content="Sous Web Studio - Transform Your Ideas Into Digital Experiences"/>
        <Meta property="og:description" content=DESCRIPTION/>
        <Meta property="og:image" content="https://souswebstudi.com/icon.png"/>

        // Twitter
        <Meta property="twitter:card" content="summary"/>
        <Meta property="twitter:title" content="Sous Web Studio"/>
        <Meta property="twitter:description" content=DESCRIPTION/>

        <Router fallback=|| {
            let mut outside_errors = Errors::default();
            outside_errors.insert_with_default_key(SiteError::NotFound);
            view! { <ErrorTemplate outside_errors/> }.into_view()
        }>
            <Routes>
                <Route path="" view=Home/>
            </Routes>
        </Router>
        <script type="application/ld+json">
            {json_ld}
        </script>
    }
}
