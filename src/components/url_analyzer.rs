use leptos::logging::{log, warn};
use leptos::*;
use leptos::ev::SubmitEvent;

use crate::analyzer::{validate_item_url, AnalyzerHandle};
use crate::models::analyzed_item::AnalyzedItem;
use crate::toast::Toaster;
use crate::utils::leptos_owner::with_owner_safe;

/// URL form that validates input, runs the analyzer and reports the result.
/// Only one analysis can be in flight; the form is disabled until it completes.
#[component]
pub fn UrlAnalyzer(
    on_analysis_complete: Callback<AnalyzedItem>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let toaster = Toaster::current();
    let analyzer = AnalyzerHandle::current();
    let owner = Owner::current();

    let (url, set_url) = create_signal(String::new());
    let (is_analyzing, set_is_analyzing) = create_signal(false);

    let analyze = Callback::new(move |_: ()| {
        if is_analyzing.get_untracked() {
            log!("[ANALYZER] Analysis already running, ignoring submit");
            return;
        }

        let parsed = match validate_item_url(&url.get_untracked()) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("[ANALYZER] Rejected input: {}", err);
                toaster.error(&err);
                return;
            }
        };

        set_is_analyzing.set(true);
        let pending = analyzer.0.analyze(parsed);
        spawn_local(async move {
            let item = pending.await;
            with_owner_safe(owner, "analysis completion", move || {
                log!("[ANALYZER] Analysis complete: {} by {}", item.name, item.brand);
                on_analysis_complete.call(item);
                set_is_analyzing.set(false);
                toaster.success("Analysis Complete!", "Found sustainable alternatives for your item");
            });
        });
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        analyze.call(());
    };

    view! {
        <div class=format!("card url-analyzer p-6 border-eco/20 {class}")>
            <div class="flex items-center gap-3 mb-4">
                <div class="p-2 rounded-full bg-eco/20"><span class="icon text-eco">"🌿"</span></div>
                <div>
                    <h2 class="text-xl font-semibold text-foreground">"Analyze Clothing Item"</h2>
                    <p class="text-sm text-muted-foreground">
                        "Paste a URL from any fashion retailer to find sustainable alternatives"
                    </p>
                </div>
            </div>

            <div class="space-y-4">
                <form class="flex gap-2" on:submit=handle_submit>
                    <div class="flex-1 relative">
                        <input
                            class="input url-input pr-10"
                            type="text"
                            inputmode="url"
                            placeholder="https://www.zara.com/... or https://www2.hm.com/..."
                            prop:value=url
                            on:input=move |ev| set_url.set(event_target_value(&ev))
                            disabled=move || is_analyzing.get()
                        />
                    </div>
                    <button
                        type="submit"
                        class="btn analyze-button bg-gradient-eco min-w-[100px]"
                        disabled=move || is_analyzing.get()
                    >
                        {move || if is_analyzing.get() { "⟳ Analyzing..." } else { "🔍 Analyze" }}
                    </button>
                </form>

                <div class="flex flex-wrap gap-2">
                    <span class="badge badge-outline text-xs">
                        "Supported: Zara, H&M, Forever21, Shein, Myntra & more"
                    </span>
                </div>

                <Show when=move || is_analyzing.get()>
                    <div class="analyzing-panel p-4 rounded-lg bg-eco/5 border border-eco/20">
                        <div class="flex items-center gap-3">
                            <span class="spinner text-eco">"⟳"</span>
                            <div class="space-y-1">
                                <p class="text-sm font-medium text-foreground">"Analyzing your item..."</p>
                                <p class="text-xs text-muted-foreground">
                                    "Our AI is identifying style, material, and finding eco-friendly alternatives"
                                </p>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
