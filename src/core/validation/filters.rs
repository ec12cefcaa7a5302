//! Reusable field filters
//!
//! These filters normalise raw input before it is validated

/// Filter: trim surrounding whitespace
pub fn trim() -> impl Fn(&str) -> String + Send + Sync + Clone {
    |value: &str| value.trim().to_string()
}

/// Filter: empty (after trimming) becomes `None`
pub fn non_empty() -> impl Fn(&str) -> Option<String> + Send + Sync + Clone {
    |value: &str| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}
