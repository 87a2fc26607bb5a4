use leptos::*;

#[component]
pub fn NotFound() -> impl IntoView {
    // Set the status code for server-rendered 404s
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_actix::ResponseOptions>();
        resp.set_status(actix_web::http::StatusCode::NOT_FOUND);
    }

    view! {
        <main class="container mx-auto px-4 py-16 text-center">
            <h1 class="text-2xl font-bold">"Page not found"</h1>
            <a class="btn bg-gradient-eco" href="/">"Back to Green Threads"</a>
        </main>
    }
}
