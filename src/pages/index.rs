//! Landing page. Shows the hero until an analysis completes, then the results.
use leptos::*;

use crate::components::carbon_footprint::CarbonFootprint;
use crate::components::community_section::CommunitySection;
use crate::components::sustainable_alternative::SustainableAlternativeCard;
use crate::components::url_analyzer::UrlAnalyzer;
use crate::config::AppConfig;
use crate::data::seeded_alternatives;
use crate::models::alternative::SustainableAlternative;
use crate::models::analyzed_item::AnalyzedItem;
use crate::utils::format::format_inr;

#[component]
pub fn Index() -> impl IntoView {
    let config = AppConfig::current();
    let sustainable_co2 = config.sustainable_co2_kg;
    let alternatives = store_value(seeded_alternatives());

    // None until the analyzer reports back; Some flips the page into results view
    let (analyzed_item, set_analyzed_item) = create_signal(None::<AnalyzedItem>);
    let show_results = move || analyzed_item.with(Option::is_some);

    let on_analysis_complete = Callback::new(move |item: AnalyzedItem| {
        set_analyzed_item.set(Some(item));
    });

    view! {
        <div class="page min-h-screen bg-background">
            <Header />

            <Show when=move || !show_results()>
                <Hero />
            </Show>

            <main class="container mx-auto px-4 py-8 space-y-8">
                <UrlAnalyzer on_analysis_complete=on_analysis_complete />

                {move || analyzed_item.get().map(|item| view! {
                    <AnalysisResults
                        item=item
                        sustainable_co2=sustainable_co2
                        alternatives=alternatives.get_value()
                    />
                })}

                <CommunitySection />
            </main>

            <footer class="border-t bg-muted/50 mt-16">
                <div class="container mx-auto px-4 py-8 flex items-center justify-center gap-2">
                    <span class="icon text-eco">"🌿"</span>
                    <span class="text-sm text-muted-foreground">
                        "Making fashion sustainable, one choice at a time."
                    </span>
                </div>
            </footer>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="site-header border-b sticky top-0 z-50">
            <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class="p-2 rounded-full bg-gradient-eco"><span class="icon text-white">"🌿"</span></div>
                    <div>
                        <h1 class="text-2xl font-bold text-foreground">"Green Threads"</h1>
                        <p class="text-sm text-muted-foreground">"Sustainable Fashion Alternative"</p>
                    </div>
                </div>
                <div class="flex items-center gap-2">
                    <button class="btn btn-outline btn-sm">"👥 Community"</button>
                    <button class="btn btn-sm bg-gradient-eco">"♡ Wishlist"</button>
                </div>
            </div>
        </header>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero relative py-16 md:py-24 overflow-hidden">
            <div class="container mx-auto px-4 relative grid lg:grid-cols-2 gap-12 items-center">
                <div class="space-y-8">
                    <div class="space-y-4">
                        <span class="badge bg-eco/20 text-eco">"🌿 Making Fashion Sustainable"</span>
                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold text-foreground leading-tight">
                            "Find Eco-Friendly"
                            <span class="text-gradient-eco">" Alternatives "</span>
                            "to Fast Fashion"
                        </h1>
                        <p class="text-xl text-muted-foreground max-w-lg">
                            "Paste any clothing item URL and discover sustainable, affordable alternatives that are better for you and the planet."
                        </p>
                    </div>

                    <div class="flex flex-wrap gap-4">
                        <span class="text-sm font-medium">"↘ Reduce CO₂ Impact"</span>
                        <span class="text-sm font-medium">"♡ Support Local Brands"</span>
                        <span class="text-sm font-medium">"👥 Join Community"</span>
                    </div>
                </div>

                <div class="relative">
                    <img
                        src="https://images.unsplash.com/photo-1523381210434-271e8be1f52b?w=800&fit=crop"
                        alt="Sustainable fashion with natural elements"
                        class="rounded-2xl shadow-eco w-full max-w-md mx-auto"
                    />
                    <div class="hero-stat absolute p-4 bg-card rounded-xl">
                        <p class="text-2xl font-bold text-success">"75%"</p>
                        <p class="text-sm text-muted-foreground">"Less CO₂ Impact"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AnalysisResults(
    item: AnalyzedItem,
    sustainable_co2: f64,
    alternatives: Vec<SustainableAlternative>,
) -> impl IntoView {
    view! {
        <div class="analysis-results space-y-8">
            <div class="card analyzed-item p-6 border-warning/20">
                <div class="flex items-start gap-4">
                    <img src=item.image.clone() alt=item.name.clone() class="w-24 h-24 object-cover rounded-lg" />
                    <div class="flex-1">
                        <h3 class="analyzed-name text-lg font-semibold text-foreground">{item.name.clone()}</h3>
                        <p class="text-muted-foreground">{item.brand.clone()}</p>
                        <div class="flex items-center gap-4 mt-2">
                            <span class="text-xl font-bold">{format_inr(item.price)}</span>
                            <span class="badge badge-outline">{item.category.clone()}</span>
                            <span class="badge badge-outline">{item.material.clone()}</span>
                        </div>
                    </div>
                </div>
            </div>

            <CarbonFootprint fast_fashion_co2=item.co2_footprint sustainable_co2=sustainable_co2 />

            <div class="space-y-4">
                <div class="flex items-center gap-3">
                    <div class="p-2 rounded-full bg-success/20"><span class="icon text-success">"🔍"</span></div>
                    <h2 class="text-2xl font-semibold text-foreground">"Sustainable Alternatives"</h2>
                </div>
                <div class="alternatives-grid grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    {alternatives.into_iter().map(|alternative| view! {
                        <SustainableAlternativeCard alternative=alternative />
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
