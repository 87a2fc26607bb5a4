//! Main application entry point for Green Threads.
//! Provides config, toaster and analyzer through context, then routes to the landing page.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::analyzer::{AnalyzerHandle, MockAnalyzer};
use crate::components::toaster::ToastViewport;
use crate::config::AppConfig;
use crate::pages::{index::Index, not_found::NotFound};
use crate::toast::Toaster;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::default();
    provide_context(Toaster::new(&config));
    provide_context(AnalyzerHandle::new(MockAnalyzer::from_config(&config)));
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/green-threads.css" />
        <Link rel="icon" type_="image/svg+xml" href="/favicon.svg" />
        <Title text="Green Threads - Sustainable Fashion Alternatives" />
        <Meta name="description" content="Find eco-friendly alternatives to fast fashion." />

        <Router>
            <Routes>
                <Route path="" view=Index />
                <Route path="/*any" view=NotFound />
            </Routes>
        </Router>

        <ToastViewport />
    }
}
