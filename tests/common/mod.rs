use std::time::Duration;

use green_threads::analyzer::{AnalyzerHandle, MockAnalyzer};
use green_threads::config::AppConfig;
use green_threads::toast::Toaster;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};

/// Appends a fresh container to the document body and returns it.
pub fn create_container(id: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container.unchecked_into::<HtmlElement>()
}

/// Provides config, toaster and a mock analyzer with the given delay.
/// Must be called inside the mount closure so the contexts land under the test root.
pub fn provide_test_context(analysis_delay: Duration) {
    provide_test_config(AppConfig {
        analysis_delay,
        // keep toasts on screen long enough to assert on them
        toast_duration: Duration::from_secs(30),
        ..AppConfig::default()
    });
}

/// Provides contexts built from an explicit config.
pub fn provide_test_config(config: AppConfig) {
    provide_context(Toaster::new(&config));
    provide_context(AnalyzerHandle::new(MockAnalyzer::from_config(&config)));
    provide_context(config);
}

pub fn query(container: &HtmlElement, selector: &str) -> Option<Element> {
    container.query_selector(selector).unwrap()
}

pub fn query_all(container: &HtmlElement, selector: &str) -> Vec<Element> {
    let nodes = container.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn text_of(container: &HtmlElement, selector: &str) -> String {
    query(container, selector)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

pub fn click(container: &HtmlElement, selector: &str) {
    query(container, selector)
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .unchecked_into::<HtmlElement>()
        .click();
}

/// Sets an input's value and fires a bubbling `input` event so delegated handlers see it.
pub fn type_into(container: &HtmlElement, selector: &str, value: &str) {
    let input = query(container, selector)
        .unwrap_or_else(|| panic!("no input matches {selector}"))
        .unchecked_into::<HtmlInputElement>();
    input.set_value(value);

    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

/// Fires a bubbling, cancelable `submit` event at the first form matching `selector`.
/// Unlike clicking the submit button, this still reaches the handler while the button is disabled.
pub fn submit_form(container: &HtmlElement, selector: &str) {
    let form = query(container, selector).unwrap_or_else(|| panic!("no form matches {selector}"));

    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = web_sys::Event::new_with_event_init_dict("submit", &init).unwrap();
    form.dispatch_event(&event).unwrap();
}

pub async fn settle(ms: u64) {
    gloo_timers::future::sleep(Duration::from_millis(ms)).await;
}
