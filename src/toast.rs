//! Transient notifications.

use std::time::Duration;

use leptos::logging::log;
use leptos::*;

use crate::config::AppConfig;
use crate::error::AnalyzeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Bounded list of visible toasts, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    limit: usize,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            next_id: 1,
            limit: limit.max(1),
            toasts: Vec::new(),
        }
    }

    /// Adds a toast, evicting the oldest beyond the limit. Returns its id.
    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>, variant: ToastVariant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.insert(
            0,
            Toast {
                id,
                title: title.into(),
                description: description.into(),
                variant,
            },
        );
        self.toasts.truncate(self.limit);
        id
    }

    /// Removes the toast with `id`; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Context handle components use to raise toasts.
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
    duration: StoredValue<Duration>,
}

impl Toaster {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            queue: create_rw_signal(ToastQueue::new(config.toast_limit)),
            duration: store_value(config.toast_duration),
        }
    }

    /// The toaster from context; a detached one when `App` has not provided one.
    pub fn current() -> Self {
        use_context::<Toaster>().unwrap_or_else(|| Self::new(&AppConfig::current()))
    }

    pub fn queue(&self) -> RwSignal<ToastQueue> {
        self.queue
    }

    pub fn show(&self, title: &str, description: &str, variant: ToastVariant) {
        log!("[TOAST] {}: {}", title, description);
        let mut id = 0;
        self.queue.update(|queue| id = queue.push(title, description, variant));

        let queue = self.queue;
        set_timeout(
            move || {
                let _ = queue.try_update(|queue| queue.dismiss(id));
            },
            self.duration.get_value(),
        );
    }

    pub fn success(&self, title: &str, description: &str) {
        self.show(title, description, ToastVariant::Default);
    }

    pub fn error(&self, err: &AnalyzeError) {
        self.show(err.title(), err.description(), ToastVariant::Destructive);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| queue.dismiss(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_toast_first_and_limit_enforced() {
        let mut queue = ToastQueue::new(2);
        queue.push("one", "", ToastVariant::Default);
        queue.push("two", "", ToastVariant::Default);
        queue.push("three", "", ToastVariant::Destructive);

        let titles: Vec<_> = queue.toasts().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["three", "two"]);
    }

    #[test]
    fn test_single_slot_replaces_previous() {
        let mut queue = ToastQueue::new(1);
        queue.push("URL Required", "Please enter a clothing item URL to analyze", ToastVariant::Destructive);
        queue.push("Invalid URL", "Please enter a valid URL", ToastVariant::Destructive);

        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].title, "Invalid URL");
    }

    #[test]
    fn test_ids_are_unique_and_dismissable() {
        let mut queue = ToastQueue::new(5);
        let a = queue.push("a", "", ToastVariant::Default);
        let b = queue.push("b", "", ToastVariant::Default);
        assert_ne!(a, b);

        queue.dismiss(a);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, b);

        // dismissing twice is harmless
        queue.dismiss(a);
        queue.dismiss(b);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_zero_limit_still_shows_one() {
        let mut queue = ToastQueue::new(0);
        queue.push("only", "", ToastVariant::Default);
        assert_eq!(queue.toasts().len(), 1);
    }
}
