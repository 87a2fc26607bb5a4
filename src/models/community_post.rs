use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub is_verified: bool,
}

/// A sustainable-fashion find shared in the community feed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    pub id: String,
    pub user: PostAuthor,
    pub image: String,
    pub title: String,
    pub description: String,
    pub brand: String,
    pub price: u32,
    pub eco_rating: f64,
    pub tags: Vec<String>,
    pub likes: u32,
    pub comments: u32,
    pub is_liked: bool,
    pub time_ago: String,
}

impl CommunityPost {
    /// Flips the like state and moves the count by one in the matching direction.
    pub fn toggle_like(&mut self) {
        if self.is_liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes += 1;
        }
        self.is_liked = !self.is_liked;
    }
}

/// Toggles the like on the post with `post_id`. Returns false when no post matches.
pub fn toggle_like_by_id(posts: &mut [CommunityPost], post_id: &str) -> bool {
    match posts.iter_mut().find(|post| post.id == post_id) {
        Some(post) => {
            post.toggle_like();
            true
        }
        None => false,
    }
}
