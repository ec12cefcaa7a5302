//! Form fields and their format patterns

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// The inputs of the order form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FullName,
    Phone,
    Email,
    ProductType,
    Quantity,
    Description,
}

impl FormField {
    /// Every field, in the order they appear on the form
    pub const ALL: [FormField; 6] = [
        FormField::FullName,
        FormField::Phone,
        FormField::Email,
        FormField::ProductType,
        FormField::Quantity,
        FormField::Description,
    ];

    /// Required fields, in the order their "is required" errors are reported
    pub const REQUIRED: [FormField; 5] = [
        FormField::FullName,
        FormField::Phone,
        FormField::ProductType,
        FormField::Quantity,
        FormField::Description,
    ];

    /// The form control id (e.g. "fullName")
    pub fn id(&self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Phone => "phone",
            FormField::Email => "email",
            FormField::ProductType => "productType",
            FormField::Quantity => "quantity",
            FormField::Description => "description",
        }
    }

    /// Human label used in "<label> is required" messages
    pub fn label(&self) -> &'static str {
        match self {
            FormField::FullName => "Your Name",
            FormField::Phone => "Phone Number",
            FormField::Email => "Email",
            FormField::ProductType => "Product Type",
            FormField::Quantity => "Quantity",
            FormField::Description => "Description",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::Email)
    }

    /// Look up a field by its form control id
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.id() == id)
    }

    /// Pattern checked when the field loses focus, if any
    pub fn blur_rule(&self) -> Option<&'static Pattern> {
        match self {
            FormField::FullName => Some(Pattern::full_name()),
            FormField::Phone => Some(Pattern::phone()),
            FormField::Email => Some(Pattern::email()),
            _ => None,
        }
    }

    /// Inline message shown next to the field when its blur rule fails
    pub fn format_message(&self) -> Option<&'static str> {
        match self {
            FormField::FullName => {
                Some("Please enter a valid full name (at least 2 characters, letters only)")
            }
            FormField::Phone => Some("Please enter a valid phone number"),
            FormField::Email => Some("Please enter a valid email address"),
            _ => None,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A compiled format rule for a field value
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    /// Build a pattern from an arbitrary regex
    pub fn custom(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }

    /// Letters and whitespace, at least two characters
    pub fn full_name() -> &'static Pattern {
        static FULL_NAME: OnceLock<Pattern> = OnceLock::new();
        FULL_NAME.get_or_init(|| Self::builtin(r"^[a-zA-Z\s]{2,}$"))
    }

    /// Basic `local@domain.tld`
    pub fn email() -> &'static Pattern {
        static EMAIL: OnceLock<Pattern> = OnceLock::new();
        EMAIL.get_or_init(|| Self::builtin(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"))
    }

    /// Optional leading `+`, then at least 10 digits, spaces, hyphens or parentheses
    pub fn phone() -> &'static Pattern {
        static PHONE: OnceLock<Pattern> = OnceLock::new();
        PHONE.get_or_init(|| Self::builtin(r"^[+]?[0-9\s\-()]{10,}$"))
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.0.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    // Only called with the literal patterns above.
    fn builtin(pattern: &str) -> Self {
        Self(Regex::new(pattern).expect("built-in field pattern must compile"))
    }
}
