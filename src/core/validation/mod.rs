//! Validation and filtering system
//!
//! Single-value checks used when a field loses focus, plus the composable
//! validators the submission pipeline runs over the whole form.

pub mod filters;
pub mod validators;

use crate::core::error::ValidationIssue;
use crate::core::field::{FormField, Pattern};
use crate::core::form::FormValues;
use serde::Serialize;

/// Outcome of checking one field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn invalid(message: Option<String>) -> Self {
        Self {
            valid: false,
            message,
        }
    }
}

/// Check a value against an optional rule
///
/// An empty value is always valid: required-ness is enforced at submit time.
/// Without a rule any non-empty value is valid.
pub fn validate(value: &str, rule: Option<&Pattern>) -> ValidationResult {
    validate_with_message(value, rule, None)
}

/// Like [`validate`], attaching `message` when the rule fails
pub fn validate_with_message(
    value: &str,
    rule: Option<&Pattern>,
    message: Option<&str>,
) -> ValidationResult {
    match rule {
        Some(pattern) if !value.is_empty() && !pattern.is_match(value) => {
            ValidationResult::invalid(message.map(str::to_string))
        }
        _ => ValidationResult::valid(),
    }
}

/// Check a field the way the blur handler does: trim, then apply its rule
pub fn validate_field(field: FormField, raw: &str) -> ValidationResult {
    let value = filters::trim()(raw);
    validate_with_message(&value, field.blur_rule(), field.format_message())
}

/// Run every submit-time check over the form, in reporting order
///
/// Required fields come first (in form order), then phone format, email
/// format and the quantity range. Format and range checks only run on
/// non-empty values.
pub fn validate_submission(
    form: &FormValues,
    quantity_min: u32,
    quantity_max: u32,
) -> Vec<ValidationIssue> {
    let required = validators::required();
    let phone = validators::matches(Pattern::phone());
    let email = validators::matches(Pattern::email());
    let quantity = validators::integer_range(quantity_min, quantity_max);

    let mut issues: Vec<ValidationIssue> = FormField::REQUIRED
        .into_iter()
        .filter_map(|field| required(field, &form.trimmed(field)).err())
        .collect();

    let checks: [(FormField, &dyn Fn(FormField, &str) -> Result<(), ValidationIssue>); 3] = [
        (FormField::Phone, &phone),
        (FormField::Email, &email),
        (FormField::Quantity, &quantity),
    ];
    for (field, check) in checks {
        if let Err(issue) = check(field, &form.trimmed(field)) {
            issues.push(issue);
        }
    }

    issues
}
