/// Formats a rupee amount with thousands separators, e.g. `₹2,499`.
pub fn format_inr(amount: u32) -> String {
    format!("₹{}", group_thousands(u64::from(amount)))
}

/// Rounds halves towards +∞, matching how browsers round displayed percentages.
/// `f64::round` would send -12.5 to -13; this gives -12.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Kilograms of CO₂ without trailing zeros, e.g. `20kg CO₂`, `2.5kg CO₂`.
pub fn format_co2(kg: f64) -> String {
    format!("{kg}kg CO₂")
}
