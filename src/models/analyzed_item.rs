use serde::{Deserialize, Serialize};

/// Result of analyzing a submitted clothing URL.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedItem {
    pub name: String,
    pub brand: String,
    pub price: u32,          // Price in rupees
    pub image: String,       // Product image URL
    pub category: String,    // e.g. "T-Shirt"
    pub style: String,       // e.g. "Casual"
    pub color: String,
    pub material: String,
    pub co2_footprint: f64,  // Estimated kg CO₂ for the item
}
