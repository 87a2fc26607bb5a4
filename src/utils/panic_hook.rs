use std::panic;
use leptos::logging::{error, log};

/// Forwards panics to the browser console and adds context for reactive owner disposal panics.
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        console_error_panic_hook::hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("OwnerDisposed") || message.contains("disposed") {
            error!("[PANIC] A signal was touched after its component unmounted.");
            error!("[PANIC] Most likely the analysis finished after leaving the page; use with_owner_safe for delayed work.");
        }
    }));
}

/// Call once from the WASM entry points.
pub fn init() {
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up successfully");
}
