//! Submission pipeline
//!
//! Drives one submission attempt through `Idle → Validating → (Invalid |
//! Sending → Sent)`, and handles per-field checks when a field loses focus.
//!
//! # Usage
//!
//! ```rust,ignore
//! let pipeline = SubmissionPipeline::new(
//!     FormConfig::default_config(),
//!     MailtoComposer::new(),
//!     TokioScheduler,
//! )?;
//! let mut state = pipeline.new_state();
//! state.form.set(FormField::FullName, "Jane Doe");
//! // ...
//! match pipeline.submit(&mut state).await? {
//!     SubmissionOutcome::Sent(sent) => println!("{}", sent.message.subject),
//!     SubmissionOutcome::Invalid { issues } => println!("{} problems", issues.len()),
//! }
//! ```

use crate::config::FormConfig;
use crate::core::clock::Scheduler;
use crate::core::composer::MessageComposer;
use crate::core::error::{FormError, FormResult, ValidationError, ValidationIssue};
use crate::core::feedback::{Banner, FeedbackRegion, OrderSummary};
use crate::core::field::FormField;
use crate::core::message::{ComposedMessage, MessageTemplates};
use crate::core::order::OrderRequest;
use crate::core::state::{Phase, SubmissionState};
use crate::core::validation::{self, ValidationResult};
use serde::Serialize;

/// A request that made it through to the mail handoff
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentOrder {
    pub request: OrderRequest,
    pub message: ComposedMessage,
    pub summary: OrderSummary,
}

/// How a submission attempt ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// Validation failed; nothing was sent
    Invalid { issues: Vec<ValidationIssue> },

    /// The message was handed to the composer
    Sent(SentOrder),
}

impl SubmissionOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmissionOutcome::Sent(_))
    }

    /// Issues of a rejected submission (empty when sent)
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            SubmissionOutcome::Invalid { issues } => issues,
            SubmissionOutcome::Sent(_) => &[],
        }
    }

    /// Turn a rejected submission into an `Err`
    pub fn into_result(self) -> FormResult<SentOrder> {
        match self {
            SubmissionOutcome::Sent(sent) => Ok(sent),
            SubmissionOutcome::Invalid { issues } => {
                Err(ValidationError::FieldErrors(issues).into())
            }
        }
    }
}

/// A validated, composed request waiting for its send delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedOrder {
    pub request: OrderRequest,
    pub message: ComposedMessage,
}

/// Where [`SubmissionPipeline::begin`] left a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStep {
    /// Validation failed; the state is `Invalid`
    Invalid { issues: Vec<ValidationIssue> },

    /// The state is `Sending`; pass this to `complete`
    Sending(PreparedOrder),
}

/// Validates, composes and hands off order requests
pub struct SubmissionPipeline<C, S> {
    config: FormConfig,
    templates: MessageTemplates,
    composer: C,
    scheduler: S,
}

impl<C, S> SubmissionPipeline<C, S>
where
    C: MessageComposer,
    S: Scheduler,
{
    pub fn new(config: FormConfig, composer: C, scheduler: S) -> FormResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            templates: MessageTemplates::new()?,
            composer,
            scheduler,
        })
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn composer(&self) -> &C {
        &self.composer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Fresh, empty form state for this pipeline's configuration
    pub fn new_state(&self) -> SubmissionState {
        SubmissionState::new(&self.config)
    }

    /// Check one field after it loses focus
    ///
    /// Empty values leave the field neutral. Otherwise the field is marked
    /// as success or error, with a single inline message on error.
    pub fn blur(&self, field: FormField, state: &mut SubmissionState) -> ValidationResult {
        let result = validation::validate_field(field, state.form.get(field));

        state.clear_field(field);
        if !result.valid {
            state.mark_error(field, result.message.clone());
        } else if state.form.non_empty(field).is_some() {
            state.mark_success(field);
        }

        tracing::debug!(field = %field, valid = result.valid, "Field validated on blur");
        result
    }

    /// Run one submission attempt against the current form values
    ///
    /// Returns `Ok(Invalid)` when validation fails; `Err` only when the
    /// message cannot be composed, in which case the submit control is restored.
    pub async fn submit(&self, state: &mut SubmissionState) -> FormResult<SubmissionOutcome> {
        match self.begin(state)? {
            SubmissionStep::Invalid { issues } => Ok(SubmissionOutcome::Invalid { issues }),
            SubmissionStep::Sending(prepared) => {
                Ok(SubmissionOutcome::Sent(self.complete(prepared, state).await))
            }
        }
    }

    /// Validate and compose, leaving the state in `Invalid` or `Sending`
    ///
    /// In `Sending` the submit control is disabled and shows the busy label
    /// until [`complete`](Self::complete) runs.
    pub fn begin(&self, state: &mut SubmissionState) -> FormResult<SubmissionStep> {
        // The default form submission never navigates away.
        state.navigated = false;

        state.phase = Phase::Validating;
        state.clear_messages();

        let issues = validation::validate_submission(
            &state.form,
            self.config.quantity_min,
            self.config.quantity_max,
        );

        if !issues.is_empty() {
            for issue in &issues {
                if let ValidationIssue::Required { field } = issue {
                    state.mark_error(*field, None);
                }
            }
            state.banner = Some(Banner::from_issues(&issues));
            state.scroll_target = Some(FeedbackRegion::ErrorBanner);
            state.phase = Phase::Invalid;
            tracing::warn!(errors = issues.len(), "Submission rejected");
            return Ok(SubmissionStep::Invalid { issues });
        }

        state.phase = Phase::Sending;
        state.submit.busy(&self.config.busy_label);

        let prepared = match self.prepare(state) {
            Ok(prepared) => prepared,
            Err(e) => {
                state.submit.restore();
                state.phase = Phase::Idle;
                tracing::error!(error = %e, "Failed to compose quote request");
                return Err(e);
            }
        };
        tracing::info!(customer = %prepared.request.full_name, "Sending quote request");

        Ok(SubmissionStep::Sending(prepared))
    }

    /// Wait the send delay, hand the message off and move to `Sent`
    pub async fn complete(
        &self,
        prepared: PreparedOrder,
        state: &mut SubmissionState,
    ) -> SentOrder {
        let PreparedOrder { request, message } = prepared;

        self.scheduler.delay(self.config.send_delay()).await;

        self.composer.compose(&message);

        let summary = OrderSummary::from_order(&request);
        state.banner =
            Some(Banner::success(&self.config.contact_number).with_summary(summary.clone()));
        state.form.reset();
        state.clear_field_styles();
        state.submit.restore();
        state.scroll_target = Some(FeedbackRegion::SuccessBanner);
        state.phase = Phase::Sent;
        tracing::info!(customer = %request.full_name, "Quote request handed off");

        SentOrder {
            request,
            message,
            summary,
        }
    }

    fn prepare(&self, state: &SubmissionState) -> FormResult<PreparedOrder> {
        let request = OrderRequest::from_form(&state.form, self.scheduler.now())
            .map_err(FormError::from)?;
        let message = self.templates.compose(
            &request,
            &self.config.recipient,
            &self.config.timestamp_format,
        )?;
        Ok(PreparedOrder { request, message })
    }
}

impl<C, S> std::fmt::Debug for SubmissionPipeline<C, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionPipeline")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ImmediateScheduler;
    use crate::core::composer::RecordingComposer;
    use crate::core::feedback::FieldState;
    use chrono::{Local, TimeZone};
    use std::time::Duration;

    fn pipeline() -> SubmissionPipeline<RecordingComposer, ImmediateScheduler> {
        let now = Local.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        SubmissionPipeline::new(
            FormConfig::default_config(),
            RecordingComposer::new(),
            ImmediateScheduler::new(now),
        )
        .unwrap()
    }

    // === blur ===

    #[test]
    fn test_blur_invalid_marks_error_with_inline_message() {
        let p = pipeline();
        let mut state = p.new_state();
        state.form.set(FormField::Email, "not-an-email");

        let result = p.blur(FormField::Email, &mut state);

        assert!(!result.valid);
        assert_eq!(state.field_state(FormField::Email), FieldState::Error);
        assert_eq!(
            state.inline_error(FormField::Email),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_blur_valid_marks_success() {
        let p = pipeline();
        let mut state = p.new_state();
        state.form.set(FormField::Phone, "+27 72 656 5457");

        assert!(p.blur(FormField::Phone, &mut state).valid);
        assert_eq!(state.field_state(FormField::Phone), FieldState::Success);
        assert_eq!(state.inline_error(FormField::Phone), None);
    }

    #[test]
    fn test_blur_empty_stays_neutral_and_clears_previous_error() {
        let p = pipeline();
        let mut state = p.new_state();
        state.form.set(FormField::FullName, "J");
        p.blur(FormField::FullName, &mut state);
        assert_eq!(state.field_state(FormField::FullName), FieldState::Error);

        state.form.set(FormField::FullName, "");
        assert!(p.blur(FormField::FullName, &mut state).valid);
        assert_eq!(state.field_state(FormField::FullName), FieldState::Neutral);
        assert!(state.inline_errors.is_empty());
    }

    #[test]
    fn test_blur_field_without_rule_accepts_any_value() {
        let p = pipeline();
        let mut state = p.new_state();
        state.form.set(FormField::Description, "anything");
        assert!(p.blur(FormField::Description, &mut state).valid);
        assert_eq!(state.field_state(FormField::Description), FieldState::Success);
    }

    // === submit ===

    #[tokio::test]
    async fn test_empty_form_is_invalid_and_never_sends() {
        let p = pipeline();
        let mut state = p.new_state();

        let outcome = p.submit(&mut state).await.unwrap();

        assert_eq!(outcome.issues().len(), 5);
        assert_eq!(state.phase, Phase::Invalid);
        assert!(state.submit.enabled);
        assert_eq!(state.scroll_target, Some(FeedbackRegion::ErrorBanner));
        assert_eq!(p.composer().count(), 0);
        assert!(p.scheduler().delays().is_empty());
        assert_eq!(state.errored_fields(), FormField::REQUIRED.to_vec());
    }

    #[tokio::test]
    async fn test_sent_waits_configured_delay() {
        let p = pipeline();
        let mut state = p.new_state();
        for (field, value) in [
            (FormField::FullName, "Jane Doe"),
            (FormField::Phone, "0726565457"),
            (FormField::ProductType, "Flyers"),
            (FormField::Quantity, "10"),
            (FormField::Description, "A5"),
        ] {
            state.form.set(field, value);
        }

        let outcome = p.submit(&mut state).await.unwrap();

        assert!(outcome.is_sent());
        assert_eq!(p.scheduler().delays(), vec![Duration::from_millis(1000)]);
        assert_eq!(state.phase, Phase::Sent);
        assert!(state.form.is_blank());
    }

    #[tokio::test]
    async fn test_begin_leaves_state_sending_until_complete() {
        let p = pipeline();
        let mut state = p.new_state();
        state.form = crate::core::form::FormValues::from_pairs([
            (FormField::FullName, "Jane Doe"),
            (FormField::Phone, "0726565457"),
            (FormField::ProductType, "Flyers"),
            (FormField::Quantity, "10"),
            (FormField::Description, "A5"),
        ]);

        let prepared = match p.begin(&mut state).unwrap() {
            SubmissionStep::Sending(prepared) => prepared,
            SubmissionStep::Invalid { issues } => panic!("unexpected issues: {:?}", issues),
        };

        assert_eq!(state.phase, Phase::Sending);
        assert!(state.submit.is_busy());
        assert_eq!(p.composer().count(), 0);
        assert!(p.scheduler().delays().is_empty());

        let sent = p.complete(prepared, &mut state).await;

        assert_eq!(sent.request.full_name, "Jane Doe");
        assert_eq!(state.phase, Phase::Sent);
        assert_eq!(p.composer().count(), 1);
        assert!(!state.submit.is_busy());
    }

    #[test]
    fn test_invalid_outcome_into_result_is_validation_error() {
        let outcome = SubmissionOutcome::Invalid {
            issues: vec![ValidationIssue::OutOfRange { min: 1, max: 10000 }],
        };
        let err = outcome.into_result().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
