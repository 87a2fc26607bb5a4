use std::time::Duration;

/// Tunables for the client. `App` provides one through context.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// How long the mock analyzer "thinks" before answering.
    pub analysis_delay: Duration,
    /// CO₂ of the sustainable option the analyzed item is compared against, in kg.
    pub sustainable_co2_kg: f64,
    /// Maximum toasts on screen at once.
    pub toast_limit: usize,
    pub toast_duration: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis_delay: Duration::from_millis(2000),
            sustainable_co2_kg: 5.0,
            toast_limit: 1,
            toast_duration: Duration::from_secs(5),
        }
    }
}

impl AppConfig {
    /// Reads the config from context, or the defaults when none was provided.
    pub fn current() -> Self {
        leptos::use_context::<AppConfig>().unwrap_or_default()
    }
}
