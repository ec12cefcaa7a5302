//! Feedback shown to the user after blur and submit
//!
//! Nothing here touches a UI. Hosts render these values however they like;
//! `render_text` gives a plain-text version.

use crate::core::error::ValidationIssue;
use crate::core::order::OrderRequest;
use serde::Serialize;

/// Heading of the aggregated error banner
pub const ERROR_HEADING: &str = "Please correct the following errors:";

/// Closing line of the order summary
pub const RESPONSE_NOTE: &str = "We'll contact you within 24 hours with a quote!";

const BULLET: &str = "\n• ";

/// Visual validation state of one field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldState {
    #[default]
    Neutral,
    Error,
    Success,
}

/// Region of the feedback area a host should bring into view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackRegion {
    ErrorBanner,
    SuccessBanner,
}

/// Summary of a sent order request, shown under the success banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub customer: String,
    pub phone: String,
    pub item: String,
    /// Quantity as typed
    pub quantity: String,
    pub details: String,
    pub note: String,
}

impl OrderSummary {
    pub fn from_order(order: &OrderRequest) -> Self {
        Self {
            customer: order.full_name.clone(),
            phone: order.phone.clone(),
            item: order.product_type.clone(),
            quantity: order.quantity_text.clone(),
            details: order.description.clone(),
            note: RESPONSE_NOTE.to_string(),
        }
    }

    /// Plain text used for copying the summary
    pub fn to_text(&self) -> String {
        format!(
            "Your Order Request\n\
             Customer: {}\n\
             Phone: {}\n\
             Item: {}\n\
             Quantity: {}\n\
             Details: {}\n\
             {}",
            self.customer, self.phone, self.item, self.quantity, self.details, self.note
        )
    }
}

/// The banner at the top of the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Banner {
    /// Every problem found by one submission attempt
    Error { messages: Vec<String> },

    /// The request was handed off
    Success {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        summary: Option<OrderSummary>,
    },
}

impl Banner {
    pub fn from_issues(issues: &[ValidationIssue]) -> Self {
        Banner::Error {
            messages: issues.iter().map(ToString::to_string).collect(),
        }
    }

    /// Success banner pointing at the phone/WhatsApp fallback
    pub fn success(contact_number: &str) -> Self {
        Banner::Success {
            message: format!(
                "Your email client should open with the quote request. \
                 If it doesn't open, please call or WhatsApp us at {}.",
                contact_number
            ),
            summary: None,
        }
    }

    pub fn with_summary(self, order_summary: OrderSummary) -> Self {
        match self {
            Banner::Success { message, .. } => Banner::Success {
                message,
                summary: Some(order_summary),
            },
            error => error,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Banner::Error { .. })
    }

    pub fn summary(&self) -> Option<&OrderSummary> {
        match self {
            Banner::Success { summary, .. } => summary.as_ref(),
            Banner::Error { .. } => None,
        }
    }

    /// Bullet-joined error text: heading, then one "• " line per message
    pub fn error_text(messages: &[String]) -> String {
        format!("{}{}{}", ERROR_HEADING, BULLET, messages.join(BULLET))
    }

    pub fn render_text(&self) -> String {
        match self {
            Banner::Error { messages } => format!("Error:\n{}", Self::error_text(messages)),
            Banner::Success { message, summary } => match summary {
                Some(summary) => format!("Success:\n{}\n\n{}", message, summary.to_text()),
                None => format!("Success:\n{}", message),
            },
        }
    }
}
