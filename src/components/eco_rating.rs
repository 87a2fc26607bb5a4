use leptos::*;

pub const MAX_STARS: u8 = 5;

/// Label band for a 0-5 sustainability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingBand {
    Excellent,
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl RatingBand {
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 4.5 {
            RatingBand::Excellent
        } else if rating >= 3.5 {
            RatingBand::VeryGood
        } else if rating >= 2.5 {
            RatingBand::Good
        } else if rating >= 1.5 {
            RatingBand::Fair
        } else {
            RatingBand::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RatingBand::Excellent => "Excellent",
            RatingBand::VeryGood => "Very Good",
            RatingBand::Good => "Good",
            RatingBand::Fair => "Fair",
            RatingBand::Poor => "Poor",
        }
    }
}

/// Colour band; its thresholds are whole numbers, unlike the label's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTone {
    Success,
    Eco,
    Warning,
    Destructive,
}

impl RatingTone {
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 4.0 {
            RatingTone::Success
        } else if rating >= 3.0 {
            RatingTone::Eco
        } else if rating >= 2.0 {
            RatingTone::Warning
        } else {
            RatingTone::Destructive
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            RatingTone::Success => "text-success",
            RatingTone::Eco => "text-eco",
            RatingTone::Warning => "text-warning",
            RatingTone::Destructive => "text-destructive",
        }
    }
}

/// Number of filled stars: the rating rounded and clamped to 0..=5.
pub fn filled_stars(rating: f64) -> u8 {
    if rating.is_nan() {
        return 0;
    }
    rating.round().clamp(0.0, f64::from(MAX_STARS)) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl RatingSize {
    fn class(self) -> &'static str {
        match self {
            RatingSize::Sm => "w-4 h-4",
            RatingSize::Md => "w-5 h-5",
            RatingSize::Lg => "w-6 h-6",
        }
    }
}

#[component]
pub fn EcoRating(
    rating: f64,
    #[prop(optional)] size: RatingSize,
    #[prop(default = true)] show_label: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let filled = filled_stars(rating);
    let tone = RatingTone::from_rating(rating).class();

    view! {
        <div class=format!("eco-rating flex items-center gap-2 {class}")>
            <div class="flex items-center gap-1" aria-label=format!("{filled} out of {MAX_STARS} stars")>
                {(1..=MAX_STARS).map(|star| {
                    let state = if star <= filled {
                        format!("star star-filled fill-current {tone}")
                    } else {
                        "star star-empty text-muted-foreground/30".to_string()
                    };
                    view! { <span class=format!("{} {state}", size.class())>"★"</span> }
                }).collect_view()}
            </div>
            {show_label.then(|| view! {
                <span class=format!("eco-rating-label text-sm font-medium {tone}")>
                    {RatingBand::from_rating(rating).label()}
                </span>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_bands() {
        assert_eq!(RatingBand::from_rating(5.0).label(), "Excellent");
        assert_eq!(RatingBand::from_rating(4.5).label(), "Excellent");
        assert_eq!(RatingBand::from_rating(4.49).label(), "Very Good");
        assert_eq!(RatingBand::from_rating(3.5).label(), "Very Good");
        assert_eq!(RatingBand::from_rating(2.5).label(), "Good");
        assert_eq!(RatingBand::from_rating(1.5).label(), "Fair");
        assert_eq!(RatingBand::from_rating(1.49).label(), "Poor");
        assert_eq!(RatingBand::from_rating(0.0).label(), "Poor");
    }

    #[test]
    fn test_tone_bands() {
        assert_eq!(RatingTone::from_rating(4.0), RatingTone::Success);
        assert_eq!(RatingTone::from_rating(3.9), RatingTone::Eco);
        assert_eq!(RatingTone::from_rating(2.0), RatingTone::Warning);
        assert_eq!(RatingTone::from_rating(1.99), RatingTone::Destructive);
        // 4.2 is "Very Good" but already in the success colour
        assert_eq!(RatingBand::from_rating(4.2), RatingBand::VeryGood);
        assert_eq!(RatingTone::from_rating(4.2).class(), "text-success");
    }

    #[test]
    fn test_filled_stars_rounds() {
        assert_eq!(filled_stars(4.5), 5);
        assert_eq!(filled_stars(4.8), 5);
        assert_eq!(filled_stars(4.49), 4);
        assert_eq!(filled_stars(2.5), 3);
        assert_eq!(filled_stars(0.4), 0);
    }

    #[test]
    fn test_filled_stars_clamped() {
        assert_eq!(filled_stars(7.0), 5);
        assert_eq!(filled_stars(-2.0), 0);
        assert_eq!(filled_stars(f64::NAN), 0);
        assert_eq!(filled_stars(f64::INFINITY), 5);
    }
}
