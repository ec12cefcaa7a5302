//! Typed error handling for the order form
//!
//! Two families of errors live here:
//!
//! - [`ValidationIssue`]: a single user-facing problem with the submitted form.
//!   Its `Display` output is exactly the message shown in the error banner.
//! - [`FormError`]: failures of the crate itself (configuration, templates),
//!   with [`ValidationError`] for callers that want a rejected submission as
//!   an `Err`.
//!
//! # Example
//!
//! ```rust,ignore
//! match outcome.into_result() {
//!     Ok(sent) => println!("Sent: {}", sent.message.subject),
//!     Err(FormError::Validation(ValidationError::FieldErrors(issues))) => {
//!         for issue in issues {
//!             println!("{}", issue);
//!         }
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use crate::core::field::FormField;
use serde::Serialize;
use std::fmt;

/// The main error type for the order form
#[derive(Debug)]
pub enum FormError {
    /// Configuration errors
    Config(ConfigError),

    /// A submission was rejected
    Validation(ValidationError),

    /// The message template failed to render
    Template(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Config(e) => write!(f, "{}", e),
            FormError::Validation(e) => write!(f, "{}", e),
            FormError::Template(msg) => write!(f, "Template error: {}", msg),
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::Config(e) => Some(e),
            FormError::Validation(e) => Some(e),
            FormError::Template(_) => None,
        }
    }
}

impl FormError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            FormError::Config(_) => "CONFIG_ERROR",
            FormError::Validation(_) => "VALIDATION_ERROR",
            FormError::Template(_) => "TEMPLATE_ERROR",
        }
    }

    /// Convert to a serializable error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            FormError::Validation(ValidationError::FieldErrors(issues)) => {
                let messages: Vec<String> = issues.iter().map(ToString::to_string).collect();
                Some(serde_json::json!({ "issues": issues, "messages": messages }))
            }
            FormError::Validation(ValidationError::FieldError { field, .. }) => {
                Some(serde_json::json!({ "field": field }))
            }
            _ => None,
        }
    }
}

/// Error payload a host can show or log
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<tera::Error> for FormError {
    fn from(err: tera::Error) -> Self {
        // tera keeps the useful part of the message in the source chain
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        FormError::Template(message)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors raised while loading or checking a [`FormConfig`](crate::config::FormConfig)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config: {message}")]
    ParseError { message: String },

    /// Configuration file could not be read
    #[error("Failed to read config file '{path}': {message}")]
    IoError { path: String, message: String },

    /// Invalid value in configuration
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<ConfigError> for FormError {
    fn from(err: ConfigError) -> Self {
        FormError::Config(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// One problem found while validating a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// A required field was left empty
    Required { field: FormField },

    /// A non-empty value does not match its field pattern
    InvalidFormat { field: FormField },

    /// Quantity is not an integer within the allowed range
    OutOfRange { min: u32, max: u32 },
}

impl ValidationIssue {
    /// The field this issue is about
    pub fn field(&self) -> FormField {
        match self {
            ValidationIssue::Required { field } | ValidationIssue::InvalidFormat { field } => {
                *field
            }
            ValidationIssue::OutOfRange { .. } => FormField::Quantity,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::Required { field } => write!(f, "{} is required", field.label()),
            ValidationIssue::InvalidFormat { field } => match field.format_message() {
                Some(message) => f.write_str(message),
                None => write!(f, "Please enter a valid {}", field.label().to_lowercase()),
            },
            ValidationIssue::OutOfRange { min, max } => write!(
                f,
                "Quantity must be between {} and {}",
                group_thousands(*min),
                group_thousands(*max)
            ),
        }
    }
}

/// Errors related to input validation
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Single field validation error
    FieldError { field: FormField, message: String },

    /// Every issue found in one submission attempt
    FieldErrors(Vec<ValidationIssue>),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldError { field, message } => {
                write!(f, "Validation error for field '{}': {}", field, message)
            }
            ValidationError::FieldErrors(issues) => {
                let msgs: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for FormError {
    fn from(err: ValidationError) -> Self {
        FormError::Validation(err)
    }
}

/// Result alias for operations that can fail with a [`FormError`]
pub type FormResult<T> = Result<T, FormError>;

/// Format an integer with comma thousand separators (10000 -> "10,000")
fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
