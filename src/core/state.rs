//! Submission state threaded through the pipeline
//!
//! This is the whole mutable view of the form: values, per-field visual
//! state, inline messages, the banner and the submit control. The pipeline
//! takes it by `&mut` at every step instead of touching shared view state.

use crate::config::FormConfig;
use crate::core::feedback::{Banner, FeedbackRegion, FieldState};
use crate::core::field::FormField;
use crate::core::form::FormValues;
use indexmap::IndexMap;
use serde::Serialize;

/// Where a submission attempt currently stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Sending,
    Sent,
}

/// The submit button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: String,
    idle_label: String,
}

impl SubmitControl {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            enabled: true,
            idle_label: label.clone(),
            label,
        }
    }

    /// Disable and show the busy label
    pub fn busy(&mut self, busy_label: &str) {
        self.enabled = false;
        self.label = busy_label.to_string();
    }

    /// Re-enable and restore the original label
    pub fn restore(&mut self) {
        self.enabled = true;
        self.label = self.idle_label.clone();
    }

    pub fn is_busy(&self) -> bool {
        !self.enabled
    }
}

/// Everything the form shows, as a plain value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionState {
    pub form: FormValues,
    pub fields: IndexMap<FormField, FieldState>,
    /// At most one inline message per field
    pub inline_errors: IndexMap<FormField, String>,
    pub banner: Option<Banner>,
    pub submit: SubmitControl,
    pub phase: Phase,
    pub scroll_target: Option<FeedbackRegion>,
    /// Stays false: default form submission is always suppressed
    pub navigated: bool,
}

impl SubmissionState {
    pub fn new(config: &FormConfig) -> Self {
        Self::with_form(config, FormValues::default())
    }

    pub fn with_form(config: &FormConfig, form: FormValues) -> Self {
        Self {
            form,
            fields: FormField::ALL
                .into_iter()
                .map(|field| (field, FieldState::Neutral))
                .collect(),
            inline_errors: IndexMap::new(),
            banner: None,
            submit: SubmitControl::new(config.submit_label.clone()),
            phase: Phase::Idle,
            scroll_target: None,
            navigated: false,
        }
    }

    pub fn field_state(&self, field: FormField) -> FieldState {
        self.fields.get(&field).copied().unwrap_or_default()
    }

    pub fn inline_error(&self, field: FormField) -> Option<&str> {
        self.inline_errors.get(&field).map(String::as_str)
    }

    /// Clear a field's visual state and inline message
    pub fn clear_field(&mut self, field: FormField) {
        self.fields.insert(field, FieldState::Neutral);
        self.inline_errors.shift_remove(&field);
    }

    /// Mark a field errored, replacing any previous inline message
    pub fn mark_error(&mut self, field: FormField, message: Option<String>) {
        self.fields.insert(field, FieldState::Error);
        match message {
            Some(message) => {
                self.inline_errors.insert(field, message);
            }
            None => {
                self.inline_errors.shift_remove(&field);
            }
        }
    }

    pub fn mark_success(&mut self, field: FormField) {
        self.fields.insert(field, FieldState::Success);
        self.inline_errors.shift_remove(&field);
    }

    /// Remove banners, the summary and every inline message
    pub fn clear_messages(&mut self) {
        self.banner = None;
        self.inline_errors.clear();
        self.scroll_target = None;
    }

    /// Reset every field to neutral
    pub fn clear_field_styles(&mut self) {
        for state in self.fields.values_mut() {
            *state = FieldState::Neutral;
        }
    }

    /// Fields currently shown as errored, in form order
    pub fn errored_fields(&self) -> Vec<FormField> {
        self.fields
            .iter()
            .filter(|(_, state)| **state == FieldState::Error)
            .map(|(field, _)| *field)
            .collect()
    }
}
