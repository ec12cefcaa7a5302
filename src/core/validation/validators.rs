//! Reusable field validators
//!
//! These validators are composed by the submission pipeline to check a whole form

use crate::core::error::ValidationIssue;
use crate::core::field::{FormField, Pattern};

/// Validator: field must not be empty (whitespace counts as empty)
pub fn required() -> impl Fn(FormField, &str) -> Result<(), ValidationIssue> + Send + Sync + Clone {
    |field: FormField, value: &str| {
        if value.trim().is_empty() {
            Err(ValidationIssue::Required { field })
        } else {
            Ok(())
        }
    }
}

/// Validator: non-empty value must match the pattern
pub fn matches(
    pattern: &'static Pattern,
) -> impl Fn(FormField, &str) -> Result<(), ValidationIssue> + Send + Sync + Clone {
    move |field: FormField, value: &str| {
        if value.is_empty() || pattern.is_match(value) {
            Ok(())
        } else {
            Err(ValidationIssue::InvalidFormat { field })
        }
    }
}

/// Validator: non-empty value must be an integer within `[min, max]`
pub fn integer_range(
    min: u32,
    max: u32,
) -> impl Fn(FormField, &str) -> Result<(), ValidationIssue> + Send + Sync + Clone {
    move |_: FormField, value: &str| {
        if value.is_empty() {
            return Ok(()); // Emptiness is the job of required()
        }
        match parse_quantity(value) {
            Some(n) if n >= i64::from(min) && n <= i64::from(max) => Ok(()),
            _ => Err(ValidationIssue::OutOfRange { min, max }),
        }
    }
}

/// Parse a quantity the way the form does: trimmed, base-10, no fraction
pub fn parse_quantity(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}
