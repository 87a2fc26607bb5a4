pub mod alternative;
pub mod analyzed_item;
pub mod community_post;
