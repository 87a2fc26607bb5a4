use leptos::*;

use crate::utils::format::{format_co2, round_half_up};

/// Savings of the sustainable option over the fast-fashion one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbonSavings {
    pub savings_kg: f64,
    pub percentage: i64,
}

impl CarbonSavings {
    pub fn compute(fast_fashion_co2: f64, sustainable_co2: f64) -> Self {
        let savings_kg = fast_fashion_co2 - sustainable_co2;
        // nothing to compare against: report no reduction rather than NaN/inf
        let percentage = if fast_fashion_co2 > 0.0 {
            round_half_up(savings_kg / fast_fashion_co2 * 100.0) as i64
        } else {
            0
        };
        Self { savings_kg, percentage }
    }
}

#[component]
pub fn CarbonFootprint(
    fast_fashion_co2: f64,
    sustainable_co2: f64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let savings = CarbonSavings::compute(fast_fashion_co2, sustainable_co2);

    view! {
        <div class=format!("card carbon-footprint p-6 border-eco/20 {class}")>
            <div class="flex items-center gap-3 mb-4">
                <div class="p-2 rounded-full bg-eco/20"><span class="icon text-eco">"🌿"</span></div>
                <h3 class="text-lg font-semibold text-foreground">"Carbon Footprint Impact"</h3>
            </div>

            <div class="space-y-4">
                <div class="flex justify-between items-center p-3 rounded-lg bg-destructive/5">
                    <span class="text-sm text-foreground">"Fast Fashion Option"</span>
                    <span class="fast-co2 font-semibold text-destructive">
                        {format_co2(fast_fashion_co2)}
                    </span>
                </div>

                <div class="flex justify-between items-center p-3 rounded-lg bg-success/5">
                    <span class="text-sm text-foreground">"Sustainable Option"</span>
                    <span class="sustainable-co2 font-semibold text-success">
                        {format_co2(sustainable_co2)}
                    </span>
                </div>

                <div class="flex items-center gap-2 p-3 rounded-lg bg-gradient-eco text-white">
                    <span class="icon">"↘"</span>
                    <div>
                        <span class="text-sm">"You save "</span>
                        <span class="co2-savings font-bold">{format_co2(savings.savings_kg)}</span>
                        <span class="co2-percentage text-sm">
                            {format!(" ({}% reduction)", savings.percentage)}
                        </span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_item_against_baseline() {
        let result = CarbonSavings::compute(20.0, 5.0);
        assert_eq!(result.savings_kg, 15.0);
        assert_eq!(result.percentage, 75);
    }

    #[test]
    fn test_percentage_is_rounded() {
        // 2 / 3 = 66.67%
        assert_eq!(CarbonSavings::compute(3.0, 1.0).percentage, 67);
        // 1 / 3 = 33.33%
        assert_eq!(CarbonSavings::compute(3.0, 2.0).percentage, 33);
        assert_eq!(CarbonSavings::compute(8.0, 7.0).percentage, 13);
    }

    #[test]
    fn test_zero_sustainable_saves_everything() {
        let result = CarbonSavings::compute(12.5, 0.0);
        assert_eq!(result.savings_kg, 12.5);
        assert_eq!(result.percentage, 100);
    }

    #[test]
    fn test_negative_half_percentage_rounds_up() {
        // sustainable option is worse: -1 / 8 = -12.5%
        let result = CarbonSavings::compute(8.0, 9.0);
        assert_eq!(result.savings_kg, -1.0);
        assert_eq!(result.percentage, -12);
    }

    #[test]
    fn test_zero_fast_fashion_reports_no_percentage() {
        assert_eq!(CarbonSavings::compute(0.0, 0.0).percentage, 0);
    }
}
