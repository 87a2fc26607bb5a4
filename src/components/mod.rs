pub mod carbon_footprint;
pub mod community_section;
pub mod eco_rating;
pub mod sustainable_alternative;
pub mod toaster;
pub mod url_analyzer;
