//! # Order Form
//!
//! Validation, message composition and feedback state for a printing quote
//! order request.
//!
//! ## Features
//!
//! - **Field Validation**: per-field patterns checked on blur and on submit
//! - **Submission Pipeline**: `Idle → Validating → (Invalid | Sending → Sent)`
//! - **Mail Handoff**: subject/body rendered into a `mailto:` link and handed to a [`MessageComposer`](core::MessageComposer)
//! - **Explicit State**: every visible change lives in a [`SubmissionState`](core::SubmissionState) value
//! - **Injectable Clock**: the send delay goes through a [`Scheduler`](core::Scheduler), so tests run instantly
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_form::prelude::*;
//!
//! let pipeline = SubmissionPipeline::new(
//!     FormConfig::default_config(),
//!     MailtoComposer::new(),
//!     TokioScheduler,
//! )?;
//!
//! let mut state = pipeline.new_state();
//! state.form.set(FormField::FullName, "Jane Doe");
//! state.form.set(FormField::Phone, "0726565457");
//! state.form.set(FormField::ProductType, "Business Cards");
//! state.form.set(FormField::Quantity, "50");
//! state.form.set(FormField::Description, "Glossy finish");
//!
//! let outcome = pipeline.submit(&mut state).await?;
//! assert!(outcome.is_sent());
//! ```

pub mod config;
pub mod core;
pub mod pipeline;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        clipboard::{Clipboard, Notifier},
        clock::Scheduler,
        composer::MessageComposer,
    };

    // === Form Model ===
    pub use crate::core::{
        feedback::{Banner, FeedbackRegion, FieldState, OrderSummary},
        field::{FormField, Pattern},
        form::FormValues,
        order::OrderRequest,
        state::{Phase, SubmissionState, SubmitControl},
    };

    // === Validation ===
    pub use crate::core::validation::{ValidationResult, validate, validate_field};

    // === Implementations ===
    pub use crate::core::{
        clipboard::{
            CopyOutcome, LogNotifier, MemoryClipboard, UnavailableClipboard, copy_order_summary,
        },
        clock::{ImmediateScheduler, TokioScheduler},
        composer::{MailtoComposer, RecordingComposer},
        message::{ComposedMessage, mailto_link},
    };

    // === Errors ===
    pub use crate::core::error::{
        ConfigError, ErrorResponse, FormError, FormResult, ValidationError, ValidationIssue,
    };

    // === Config ===
    pub use crate::config::FormConfig;

    // === Pipeline ===
    pub use crate::pipeline::{
        PreparedOrder, SentOrder, SubmissionOutcome, SubmissionPipeline, SubmissionStep,
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Local};
}
