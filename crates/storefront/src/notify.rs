//! Transient notification (toast) seam.
//!
//! The storefront core never renders toasts itself; it hands the message to
//! whatever [`Notifier`] the embedding UI provided.

use std::sync::{Arc, Mutex};

/// Collaborator that surfaces short-lived, user-visible messages.
pub trait Notifier {
    /// Surface one transient message.
    fn notify(&self, message: &str);
}

/// Notifier that logs through `tracing`; the default for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(toast = message, "notification");
    }
}

/// Notifier that records messages for later inspection.
///
/// Used by tests and by embedders that drain messages into their own toast
/// element. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    /// A notifier with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages surfaced so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    /// The most recent message, if any.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.messages().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_notifier_keeps_messages_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify("first");
        notifier.notify("second");

        assert_eq!(notifier.messages(), ["first", "second"]);
        assert_eq!(notifier.last().as_deref(), Some("second"));
    }

    #[test]
    fn clones_share_the_buffer() {
        let notifier = RecordingNotifier::new();
        let handle = notifier.clone();
        handle.notify("shared");

        assert_eq!(notifier.messages(), ["shared"]);
    }
}
