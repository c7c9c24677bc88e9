use crate::components::LandingPage::*;
use crate::components::Layout::*;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Title text="Web Design & Development"/>
        <Layout>
            <LandingPage/>
        </Layout>
    }
}
