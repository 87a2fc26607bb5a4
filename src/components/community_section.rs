//! Community feed: seeded posts with like toggling, plus the "Share Find" dialog.
use leptos::*;

use crate::components::eco_rating::{EcoRating, RatingSize};
use crate::data::seeded_posts;
use crate::models::community_post::{toggle_like_by_id, CommunityPost};
use crate::utils::format::format_inr;

#[component]
pub fn CommunitySection(
    /// Posts to start from; the seeded feed when omitted.
    #[prop(optional)]
    initial_posts: Option<Vec<CommunityPost>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let (posts, set_posts) = create_signal(initial_posts.unwrap_or_else(seeded_posts));
    let (share_open, set_share_open) = create_signal(false);

    let on_like = Callback::new(move |post_id: String| {
        set_posts.update(|posts| {
            if !toggle_like_by_id(posts, &post_id) {
                leptos::logging::warn!("[COMMUNITY] Like for unknown post {}", post_id);
            }
        });
    });

    view! {
        <section class=format!("community-section space-y-6 {class}")>
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class="p-2 rounded-full bg-eco/20"><span class="icon text-eco">"💬"</span></div>
                    <div>
                        <h2 class="text-xl font-semibold text-foreground">"Community Finds"</h2>
                        <p class="text-sm text-muted-foreground">
                            "Discover and share sustainable fashion finds from the community"
                        </p>
                    </div>
                </div>
                <button class="btn share-find bg-gradient-eco" on:click=move |_| set_share_open.set(true)>
                    "+ Share Find"
                </button>
            </div>

            <Show when=move || share_open.get()>
                <ShareFindDialog on_close=Callback::new(move |_| set_share_open.set(false)) />
            </Show>

            <div class="post-grid grid gap-4 md:grid-cols-2">
                {move || posts.get().into_iter().map(|post| view! {
                    <PostCard post=post on_like=on_like />
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PostCard(post: CommunityPost, on_like: Callback<String>) -> impl IntoView {
    let post_id = post.id.clone();
    let heart_class = if post.is_liked {
        "heart liked fill-eco text-eco"
    } else {
        "heart text-muted-foreground"
    };

    view! {
        <div class="card post-card overflow-hidden" data-post-id=post.id.clone()>
            <div class="relative">
                <img src=post.image.clone() alt=post.title.clone() class="w-full h-48 object-cover" />
                <div class="absolute top-2 right-2">
                    <span class="badge bg-eco/90 text-white">{format_inr(post.price)}</span>
                </div>
            </div>

            <div class="p-4 space-y-3">
                <div class="flex items-center gap-2">
                    <img class="avatar w-8 h-8 rounded-full" src=post.user.avatar.clone() alt=post.user.name.clone() />
                    <div class="flex-1">
                        <div class="flex items-center gap-1">
                            <span class="author text-sm font-medium">{post.user.name.clone()}</span>
                            {post.user.is_verified.then(|| view! {
                                <span class="verified w-4 h-4 rounded-full bg-eco" title="Verified">"🌿"</span>
                            })}
                        </div>
                        <span class="text-xs text-muted-foreground">{post.time_ago.clone()}</span>
                    </div>
                </div>

                <div>
                    <h3 class="font-semibold text-foreground line-clamp-1">{post.title.clone()}</h3>
                    <p class="text-sm text-muted-foreground line-clamp-2 mt-1">{post.description.clone()}</p>
                </div>

                <div class="flex items-center justify-between">
                    <EcoRating rating=post.eco_rating size=RatingSize::Sm show_label=false />
                    <span class="text-sm font-medium text-eco">{post.brand.clone()}</span>
                </div>

                <div class="flex flex-wrap gap-1">
                    {post.tags.iter().map(|tag| view! {
                        <span class="badge badge-outline text-xs">{tag.clone()}</span>
                    }).collect_view()}
                </div>

                <div class="flex items-center justify-between pt-2 border-t">
                    <div class="flex items-center gap-4">
                        <button
                            class="like-button flex items-center gap-1 text-sm"
                            aria-pressed=post.is_liked.to_string()
                            on:click=move |_| on_like.call(post_id.clone())
                        >
                            <span class=heart_class>"♥"</span>
                            <span class="like-count">{post.likes}</span>
                        </button>
                        <button class="comment-button flex items-center gap-1 text-sm text-muted-foreground">
                            "💬 "{post.comments}
                        </button>
                    </div>
                    <button class="share-button text-sm text-muted-foreground" aria-label="Share">"↗"</button>
                </div>
            </div>
        </div>
    }
}

/// Static share form. Submitting only closes the dialog; nothing is stored.
#[component]
fn ShareFindDialog(on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.call(())>
            <div class="dialog share-dialog sm:max-w-md" role="dialog" on:click=|ev| ev.stop_propagation()>
                <div class="dialog-header flex items-center justify-between">
                    <h3 class="dialog-title flex items-center gap-2">"🌿 Share Your Sustainable Find"</h3>
                    <button class="dialog-close" aria-label="Close" on:click=move |_| on_close.call(())>"×"</button>
                </div>
                <form
                    class="space-y-4"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        on_close.call(());
                    }
                >
                    <input class="input" type="text" placeholder="Item name..." />
                    <input class="input" type="text" placeholder="Brand..." />
                    <input class="input" type="number" min="0" placeholder="Price (₹)..." />
                    <input class="input" type="text" placeholder="Where did you find it?" />
                    <textarea class="textarea" rows="3" placeholder="Tell us about this find..."></textarea>
                    <button type="submit" class="btn w-full bg-gradient-eco">"Share with Community"</button>
                </form>
            </div>
        </div>
    }
}
