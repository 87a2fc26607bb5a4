use leptos::*;

use crate::components::eco_rating::{EcoRating, RatingSize};
use crate::models::alternative::SustainableAlternative;
use crate::utils::format::format_inr;

/// Product card for one suggested alternative.
#[component]
pub fn SustainableAlternativeCard(
    alternative: SustainableAlternative,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let savings_badge = alternative.savings_badge();
    let savings_percentage = alternative.savings_percentage();
    let categories = alternative.visible_categories().to_vec();

    view! {
        <div class=format!("card alternative-card group overflow-hidden {class}") data-id=alternative.id.clone()>
            <div class="relative overflow-hidden">
                <img src=alternative.image.clone() alt=alternative.name.clone() class="w-full h-48 object-cover" />
                <div class="absolute top-2 left-2 flex gap-1">
                    {alternative.is_local.then(|| view! {
                        <span class="badge badge-local bg-success/90">"📍 Local"</span>
                    })}
                    {savings_badge.map(|badge| view! {
                        <span class="badge badge-savings bg-eco/90 text-white">{badge}</span>
                    })}
                </div>
                <button class="btn btn-secondary absolute top-2 right-2 p-2" aria-label="Add to wishlist">"♡"</button>
            </div>

            <div class="p-4 space-y-3">
                <div>
                    <p class="text-sm text-muted-foreground font-medium">{alternative.brand.clone()}</p>
                    <h3 class="font-semibold text-foreground line-clamp-2">{alternative.name.clone()}</h3>
                </div>

                <EcoRating rating=alternative.eco_rating size=RatingSize::Sm />

                <div class="flex flex-wrap gap-1">
                    {categories.into_iter().map(|category| view! {
                        <span class="badge badge-outline text-xs">{category}</span>
                    }).collect_view()}
                </div>

                <div class="flex items-center justify-between">
                    <div class="space-y-1">
                        <div class="flex items-center gap-2">
                            <span class="price text-lg font-bold">{format_inr(alternative.price)}</span>
                            {alternative.original_price.map(|original| view! {
                                <span class="original-price text-sm text-muted-foreground line-through">
                                    {format_inr(original)}
                                </span>
                            })}
                        </div>
                        {(savings_percentage > 0).then(|| view! {
                            <p class="savings-percentage text-sm text-success font-medium">
                                {format!("{savings_percentage}% cheaper")}
                            </p>
                        })}
                        {alternative.location.clone().map(|location| view! {
                            <p class="location text-xs text-muted-foreground">{format!("📍 {location}")}</p>
                        })}
                    </div>

                    <a
                        class="btn bg-gradient-eco"
                        href=alternative.url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "↗ View"
                    </a>
                </div>
            </div>
        </div>
    }
}
