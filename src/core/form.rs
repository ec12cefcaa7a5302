//! Raw form input values

use crate::core::field::FormField;
use crate::core::validation::filters;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Current values of the form controls, keyed by field
///
/// Missing entries read as empty strings, like an untouched input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    values: IndexMap<FormField, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(field, value)` pairs
    pub fn from_pairs<I, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (FormField, V)>,
        V: Into<String>,
    {
        let mut form = Self::new();
        for (field, value) in pairs {
            form.set(field, value);
        }
        form
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Raw value as typed, or "" if never set
    pub fn get(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Value with surrounding whitespace removed
    pub fn trimmed(&self, field: FormField) -> String {
        filters::trim()(self.get(field))
    }

    /// Trimmed value, or `None` when blank
    pub fn non_empty(&self, field: FormField) -> Option<String> {
        filters::non_empty()(self.get(field))
    }

    /// Clear every value, like a form reset
    pub fn reset(&mut self) {
        self.values.clear();
    }

    pub fn is_blank(&self) -> bool {
        FormField::ALL
            .into_iter()
            .all(|field| self.non_empty(field).is_none())
    }
}
