use leptos::logging::log;
use leptos::Owner;

/// Runs `f` under `owner`, the reactive owner captured before an await point.
/// If the owner is gone (component unmounted) the work is skipped, logged, and None returned.
pub fn with_owner_safe<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R + 'static,
    R: 'static,
{
    match owner {
        Some(owner) => match leptos::try_with_owner(owner, f) {
            Ok(result) => Some(result),
            Err(err) => {
                log!("[OWNER] Owner disposed before {}: {:?}", log_context, err);
                None
            }
        },
        None => {
            log!("[OWNER] No Leptos owner captured for {}", log_context);
            None
        }
    }
}
