//! Mail handoff capability
//!
//! The pipeline never talks to a mail client directly. It hands the composed
//! message to a [`MessageComposer`] and assumes the handoff worked.

use crate::core::message::ComposedMessage;
use std::sync::{Arc, Mutex};

/// Fire-and-forget handoff of a composed message
pub trait MessageComposer: Send + Sync {
    fn compose(&self, message: &ComposedMessage);
}

impl<T: MessageComposer + ?Sized> MessageComposer for Arc<T> {
    fn compose(&self, message: &ComposedMessage) {
        (**self).compose(message)
    }
}

/// Callback that opens a `mailto:` link on the host platform
pub type LinkOpener = Box<dyn Fn(&str) + Send + Sync>;

/// Hands the message's `mailto:` link to an opener
pub struct MailtoComposer {
    opener: LinkOpener,
}

impl MailtoComposer {
    /// Composer whose opener only logs the link
    pub fn new() -> Self {
        Self::with_opener(|link: &str| {
            tracing::info!(link = %link, "Mail handoff link generated");
        })
    }

    pub fn with_opener(opener: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            opener: Box::new(opener),
        }
    }
}

impl Default for MailtoComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MailtoComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailtoComposer").finish_non_exhaustive()
    }
}

impl MessageComposer for MailtoComposer {
    fn compose(&self, message: &ComposedMessage) {
        (self.opener)(&message.link);
    }
}

/// Keeps every message it is handed
#[derive(Debug, Default)]
pub struct RecordingComposer {
    messages: Mutex<Vec<ComposedMessage>>,
}

impl RecordingComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages composed so far, oldest first
    pub fn messages(&self) -> Vec<ComposedMessage> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.messages.lock().map(|m| m.len()).unwrap_or(0)
    }
}

impl MessageComposer for RecordingComposer {
    fn compose(&self, message: &ComposedMessage) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ComposedMessage {
        ComposedMessage {
            subject: "s".to_string(),
            body: "b".to_string(),
            link: "mailto:x@example.com?subject=s&body=b".to_string(),
        }
    }

    #[test]
    fn test_mailto_composer_passes_link_to_opener() {
        let opened = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&opened);
        let composer = MailtoComposer::with_opener(move |link| {
            sink.lock().unwrap().push(link.to_string());
        });

        composer.compose(&message());

        assert_eq!(
            *opened.lock().unwrap(),
            vec!["mailto:x@example.com?subject=s&body=b".to_string()]
        );
    }

    #[test]
    fn test_recording_composer_keeps_messages() {
        let composer = RecordingComposer::new();
        assert_eq!(composer.count(), 0);
        composer.compose(&message());
        composer.compose(&message());
        assert_eq!(composer.count(), 2);
        assert_eq!(composer.messages()[0], message());
    }

    #[test]
    fn test_arc_composer_delegates() {
        let inner = Arc::new(RecordingComposer::new());
        let shared: Arc<RecordingComposer> = Arc::clone(&inner);
        shared.compose(&message());
        assert_eq!(inner.count(), 1);
    }
}
