//! Core module containing the form's building blocks

pub mod clipboard;
pub mod clock;
pub mod composer;
pub mod error;
pub mod feedback;
pub mod field;
pub mod form;
pub mod message;
pub mod order;
pub mod state;
pub mod validation;

pub use clipboard::{Clipboard, ClipboardError, CopyOutcome, Notifier, copy_order_summary};
pub use clock::{ImmediateScheduler, Scheduler, TokioScheduler};
pub use composer::{MailtoComposer, MessageComposer, RecordingComposer};
pub use error::{
    ConfigError, ErrorResponse, FormError, FormResult, ValidationError, ValidationIssue,
};
pub use feedback::{Banner, FeedbackRegion, FieldState, OrderSummary};
pub use field::{FormField, Pattern};
pub use form::FormValues;
pub use message::{ComposedMessage, MessageTemplates, mailto_link};
pub use order::OrderRequest;
pub use state::{Phase, SubmissionState, SubmitControl};
pub use validation::{ValidationResult, validate};
