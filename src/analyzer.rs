//! Item analysis: URL validation and the seam to the (not yet built) analysis service.

use std::rc::Rc;
use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};
use leptos::logging::log;
use url::Url;

use crate::config::AppConfig;
use crate::data::mock_analysis;
use crate::error::AnalyzeError;
use crate::models::analyzed_item::AnalyzedItem;

/// Checks a user-entered URL the way the browser's `URL` constructor would.
pub fn validate_item_url(input: &str) -> Result<Url, AnalyzeError> {
    if input.trim().is_empty() {
        return Err(AnalyzeError::EmptyUrl);
    }
    Ok(Url::parse(input)?)
}

/// Something that can turn a product URL into an `AnalyzedItem`.
pub trait ItemAnalyzer {
    fn analyze(&self, url: Url) -> LocalBoxFuture<'static, AnalyzedItem>;
}

/// Waits a fixed delay, then answers with the same canned item for every URL.
#[derive(Debug, Clone)]
pub struct MockAnalyzer {
    delay: Duration,
}

impl MockAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.analysis_delay)
    }
}

impl ItemAnalyzer for MockAnalyzer {
    fn analyze(&self, url: Url) -> LocalBoxFuture<'static, AnalyzedItem> {
        let delay = self.delay;
        async move {
            log!("[ANALYZER] Analyzing {} (mock, {}ms)", url, delay.as_millis());
            if !delay.is_zero() {
                gloo_timers::future::sleep(delay).await;
            }
            mock_analysis()
        }
        .boxed_local()
    }
}

/// Shared analyzer handle, provided through context to swap the implementation.
#[derive(Clone)]
pub struct AnalyzerHandle(pub Rc<dyn ItemAnalyzer>);

impl AnalyzerHandle {
    pub fn new(analyzer: impl ItemAnalyzer + 'static) -> Self {
        Self(Rc::new(analyzer))
    }

    /// The analyzer from context, or a mock built from the current config.
    pub fn current() -> Self {
        leptos::use_context::<AnalyzerHandle>()
            .unwrap_or_else(|| Self::new(MockAnalyzer::from_config(&AppConfig::current())))
    }
}
