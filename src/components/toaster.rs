use leptos::*;

use crate::toast::{Toaster, ToastVariant};

/// Renders the toasts held by the `Toaster` in context.
#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = Toaster::current();
    let queue = toaster.queue();

    view! {
        <ol class="toast-viewport" aria-live="polite">
            {move || queue.with(|queue| queue.toasts().to_vec()).into_iter().map(|toast| {
                let id = toast.id;
                let variant_class = match toast.variant {
                    ToastVariant::Default => "toast",
                    ToastVariant::Destructive => "toast toast-destructive",
                };
                view! {
                    <li class=variant_class role="status">
                        <div class="toast-body">
                            <p class="toast-title">{toast.title}</p>
                            <p class="toast-description">{toast.description}</p>
                        </div>
                        <button class="toast-close" aria-label="Dismiss" on:click=move |_| toaster.dismiss(id)>
                            "×"
                        </button>
                    </li>
                }
            }).collect_view()}
        </ol>
    }
}
