//! Copy the order summary to the clipboard
//!
//! Standalone action, not part of the submission pipeline. A primary
//! clipboard is tried first, then a fallback; the user always gets the same
//! confirmation notice and never sees a clipboard error.

use crate::core::feedback::OrderSummary;
use serde::Serialize;
use std::sync::Mutex;

/// Confirmation shown after a copy attempt
pub const COPIED_NOTICE: &str = "Order details copied to clipboard!";

/// Why a clipboard write failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

/// Somewhere text can be copied to
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Shows a short notice to the user
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Which path the copy took
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyOutcome {
    Primary,
    Fallback,
    /// Both paths failed; the notice was still shown
    Unconfirmed,
}

/// Copy `summary` as text, falling back to `fallback` if `primary` fails
pub fn copy_order_summary(
    summary: &OrderSummary,
    primary: &dyn Clipboard,
    fallback: &dyn Clipboard,
    notifier: &dyn Notifier,
) -> CopyOutcome {
    copy_text(&summary.to_text(), primary, fallback, notifier)
}

/// Copy arbitrary text with the same fallback and notice
pub fn copy_text(
    text: &str,
    primary: &dyn Clipboard,
    fallback: &dyn Clipboard,
    notifier: &dyn Notifier,
) -> CopyOutcome {
    let outcome = match primary.write_text(text) {
        Ok(()) => CopyOutcome::Primary,
        Err(primary_err) => {
            tracing::debug!(error = %primary_err, "Primary clipboard failed, using fallback");
            match fallback.write_text(text) {
                Ok(()) => CopyOutcome::Fallback,
                Err(fallback_err) => {
                    tracing::debug!(error = %fallback_err, "Fallback clipboard failed");
                    CopyOutcome::Unconfirmed
                }
            }
        }
    };
    notifier.notify(COPIED_NOTICE);
    outcome
}

/// In-memory clipboard holding the last copied text
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|e| ClipboardError(e.to_string()))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard that is never available
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError("clipboard unavailable".to_string()))
    }
}

/// Notifier that logs the notice
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Notices(Mutex<Vec<String>>);

    impl Notifier for Notices {
        fn notify(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn test_primary_success_skips_fallback() {
        let primary = MemoryClipboard::new();
        let fallback = MemoryClipboard::new();
        let notices = Notices::default();

        let outcome = copy_text("hello", &primary, &fallback, &notices);

        assert_eq!(outcome, CopyOutcome::Primary);
        assert_eq!(primary.contents().as_deref(), Some("hello"));
        assert_eq!(fallback.contents(), None);
        assert_eq!(*notices.0.lock().unwrap(), vec![COPIED_NOTICE.to_string()]);
    }

    #[test]
    fn test_primary_failure_uses_fallback() {
        let fallback = MemoryClipboard::new();
        let notices = Notices::default();

        let outcome = copy_text("hello", &UnavailableClipboard, &fallback, &notices);

        assert_eq!(outcome, CopyOutcome::Fallback);
        assert_eq!(fallback.contents().as_deref(), Some("hello"));
        assert_eq!(notices.0.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_both_failing_is_silent_but_notified() {
        let notices = Notices::default();
        let outcome = copy_text("hello", &UnavailableClipboard, &UnavailableClipboard, &notices);
        assert_eq!(outcome, CopyOutcome::Unconfirmed);
        assert_eq!(*notices.0.lock().unwrap(), vec![COPIED_NOTICE.to_string()]);
    }
}
