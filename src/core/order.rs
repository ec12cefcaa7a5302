//! The order request built from one valid submission

use crate::core::error::{ValidationError, ValidationIssue};
use crate::core::field::FormField;
use crate::core::form::FormValues;
use crate::core::validation::validators::parse_quantity;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Shown in place of a missing email address
pub const EMAIL_NOT_PROVIDED: &str = "Not provided";

/// A validated order request
///
/// Built fresh for every successful submission and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub full_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub product_type: String,
    pub quantity: u32,
    /// Quantity as the customer typed it, trimmed (`050` stays `050`)
    pub quantity_text: String,
    pub description: String,
    pub submitted_at: DateTime<Local>,
}

impl OrderRequest {
    /// Build a request from form values that already passed validation
    ///
    /// Values are trimmed. Returns an error if a required value is blank or
    /// the quantity is not a positive integer, which only happens when the
    /// form was not validated first.
    pub fn from_form(
        form: &FormValues,
        submitted_at: DateTime<Local>,
    ) -> Result<Self, ValidationError> {
        let required = |field: FormField| {
            form.non_empty(field)
                .ok_or(ValidationIssue::Required { field })
        };

        let quantity_raw = required(FormField::Quantity).map_err(single)?;
        let quantity = parse_quantity(&quantity_raw)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| ValidationError::FieldError {
                field: FormField::Quantity,
                message: format!("'{}' is not a positive integer", quantity_raw),
            })?;

        Ok(Self {
            full_name: required(FormField::FullName).map_err(single)?,
            phone: required(FormField::Phone).map_err(single)?,
            email: form.non_empty(FormField::Email),
            product_type: required(FormField::ProductType).map_err(single)?,
            quantity,
            quantity_text: quantity_raw,
            description: required(FormField::Description).map_err(single)?,
            submitted_at,
        })
    }

    /// Email address, or "Not provided"
    pub fn email_or_sentinel(&self) -> &str {
        self.email.as_deref().unwrap_or(EMAIL_NOT_PROVIDED)
    }
}

fn single(issue: ValidationIssue) -> ValidationError {
    ValidationError::FieldErrors(vec![issue])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    fn form() -> FormValues {
        FormValues::from_pairs([
            (FormField::FullName, " Jane Doe "),
            (FormField::Phone, "0726565457"),
            (FormField::ProductType, "Business Cards"),
            (FormField::Quantity, "50"),
            (FormField::Description, "Glossy finish"),
        ])
    }

    #[test]
    fn test_from_form_trims_and_parses() {
        let order = OrderRequest::from_form(&form(), at()).unwrap();
        assert_eq!(order.full_name, "Jane Doe");
        assert_eq!(order.quantity, 50);
        assert_eq!(order.quantity_text, "50");
        assert_eq!(order.email, None);
        assert_eq!(order.submitted_at, at());
    }

    #[test]
    fn test_missing_email_uses_sentinel() {
        let order = OrderRequest::from_form(&form(), at()).unwrap();
        assert_eq!(order.email_or_sentinel(), "Not provided");
    }

    #[test]
    fn test_present_email_is_kept() {
        let mut values = form();
        values.set(FormField::Email, "jane@example.com");
        let order = OrderRequest::from_form(&values, at()).unwrap();
        assert_eq!(order.email_or_sentinel(), "jane@example.com");
    }

    #[test]
    fn test_blank_required_field_is_rejected() {
        let mut values = form();
        values.set(FormField::Description, "  ");
        let err = OrderRequest::from_form(&values, at()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::FieldErrors(ref issues)
                if issues == &[ValidationIssue::Required { field: FormField::Description }]
        ));
    }

    #[test]
    fn test_quantity_text_keeps_typed_digits() {
        for typed in ["050", "+50", " 050 "] {
            let mut values = form();
            values.set(FormField::Quantity, typed);
            let order = OrderRequest::from_form(&values, at()).unwrap();
            assert_eq!(order.quantity, 50);
            assert_eq!(order.quantity_text, typed.trim());
        }
    }

    #[test]
    fn test_negative_quantity_is_rejected() {
        let mut values = form();
        values.set(FormField::Quantity, "-3");
        assert!(matches!(
            OrderRequest::from_form(&values, at()),
            Err(ValidationError::FieldError {
                field: FormField::Quantity,
                ..
            })
        ));
    }
}
