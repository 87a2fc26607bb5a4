// src/models/alternative.rs
use serde::{Deserialize, Serialize};

use crate::utils::format::round_half_up;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SustainableAlternative {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u32>,
    pub image: String,
    pub eco_rating: f64,
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub is_local: bool,
    pub url: String,
}

impl SustainableAlternative {
    /// Rupees saved against the original price. Zero when there is no
    /// original price; negative when the alternative costs more.
    pub fn savings(&self) -> i64 {
        self.original_price
            .map(|original| i64::from(original) - i64::from(self.price))
            .unwrap_or(0)
    }

    /// Savings as a rounded percentage of the original price.
    pub fn savings_percentage(&self) -> i64 {
        match self.original_price {
            Some(original) if original > 0 => {
                round_half_up(self.savings() as f64 / f64::from(original) * 100.0) as i64
            }
            _ => 0,
        }
    }

    /// Text of the "Save" badge; None unless the alternative is cheaper.
    /// The amount is shown as a plain number, without separators.
    pub fn savings_badge(&self) -> Option<String> {
        let savings = self.savings();
        (savings > 0).then(|| format!("Save ₹{savings}"))
    }

    /// Categories shown on the card; the rest are hidden.
    pub fn visible_categories(&self) -> &[String] {
        let shown = self.categories.len().min(3);
        &self.categories[..shown]
    }
}
