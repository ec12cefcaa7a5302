//! Quote request email composition
//!
//! Subject and body are rendered from tera templates; the result is packed
//! into a `mailto:` link for the mail handoff.

use crate::core::error::{FormError, FormResult};
use crate::core::order::OrderRequest;
use chrono::{DateTime, TimeZone};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use std::fmt::{self, Write};
use tera::{Context, Tera};

const SUBJECT_TEMPLATE: &str = "subject";
const BODY_TEMPLATE: &str = "body";

const SUBJECT: &str = "New Printing Quote Request - {{ full_name }}";

const BODY: &str = "
QUOTE REQUEST DETAILS:

Customer Name: {{ full_name }}
Phone: {{ phone }}
Email: {{ email }}

PRINTING ORDER:
Item: {{ product_type }}
Quantity: {{ quantity }}

DESCRIPTION:
{{ description }}

Submitted: {{ submitted }}

Please contact this customer within 24 hours with a quote.
";

/// Characters left as-is by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A composed email ready for handoff
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedMessage {
    pub subject: String,
    pub body: String,
    /// `mailto:` link carrying subject and body
    pub link: String,
}

/// Compiled subject and body templates
#[derive(Debug)]
pub struct MessageTemplates {
    tera: Tera,
}

impl MessageTemplates {
    pub fn new() -> FormResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![(SUBJECT_TEMPLATE, SUBJECT), (BODY_TEMPLATE, BODY)])?;
        Ok(Self { tera })
    }

    /// Render subject, body and mailto link for `order`
    pub fn compose(
        &self,
        order: &OrderRequest,
        recipient: &str,
        timestamp_format: &str,
    ) -> FormResult<ComposedMessage> {
        let mut context = Context::new();
        context.insert("full_name", &order.full_name);
        context.insert("phone", &order.phone);
        context.insert("email", order.email_or_sentinel());
        context.insert("product_type", &order.product_type);
        context.insert("quantity", &order.quantity_text);
        context.insert("description", &order.description);
        let submitted = format_timestamp(&order.submitted_at, timestamp_format).map_err(|_| {
            FormError::Template(format!("cannot format timestamp with '{}'", timestamp_format))
        })?;
        context.insert("submitted", &submitted);

        let subject = self.tera.render(SUBJECT_TEMPLATE, &context)?;
        let body = self.tera.render(BODY_TEMPLATE, &context)?.trim().to_string();
        let link = mailto_link(recipient, &subject, &body);

        Ok(ComposedMessage {
            subject,
            body,
            link,
        })
    }
}

/// Render `at` with a chrono format string
///
/// Some specifiers parse but cannot be formatted (`%#z`); those come back as
/// `fmt::Error` here instead of panicking in `to_string()`.
pub fn format_timestamp<Tz>(at: &DateTime<Tz>, format: &str) -> Result<String, fmt::Error>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    write!(out, "{}", at.format(format))?;
    Ok(out)
}

/// Percent-encode like `encodeURIComponent`
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// `mailto:<recipient>?subject=<enc>&body=<enc>`
///
/// The recipient is used verbatim.
pub fn mailto_link(recipient: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        encode_uri_component(subject),
        encode_uri_component(body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn order(email: Option<&str>) -> OrderRequest {
        OrderRequest {
            full_name: "Jane Doe".to_string(),
            phone: "0726565457".to_string(),
            email: email.map(str::to_string),
            product_type: "Business Cards".to_string(),
            quantity: 50,
            quantity_text: "50".to_string(),
            description: "Glossy finish".to_string(),
            submitted_at: Local.with_ymd_and_hms(2025, 3, 4, 15, 6, 7).unwrap(),
        }
    }

    fn compose(order: &OrderRequest) -> ComposedMessage {
        MessageTemplates::new()
            .unwrap()
            .compose(order, "orders@example.com", "%-m/%-d/%Y, %-I:%M:%S %p")
            .unwrap()
    }

    #[test]
    fn test_subject_embeds_customer_name() {
        let message = compose(&order(None));
        assert_eq!(message.subject, "New Printing Quote Request - Jane Doe");
    }

    #[test]
    fn test_body_layout() {
        let message = compose(&order(None));
        let expected = "QUOTE REQUEST DETAILS:\n\
            \n\
            Customer Name: Jane Doe\n\
            Phone: 0726565457\n\
            Email: Not provided\n\
            \n\
            PRINTING ORDER:\n\
            Item: Business Cards\n\
            Quantity: 50\n\
            \n\
            DESCRIPTION:\n\
            Glossy finish\n\
            \n\
            Submitted: 3/4/2025, 3:06:07 PM\n\
            \n\
            Please contact this customer within 24 hours with a quote.";
        assert_eq!(message.body, expected);
    }

    #[test]
    fn test_body_uses_given_email() {
        let message = compose(&order(Some("jane@example.com")));
        assert!(message.body.contains("Email: jane@example.com"));
    }

    #[test]
    fn test_values_are_not_html_escaped() {
        let mut o = order(None);
        o.description = "<b>Bold</b> & \"quoted\"".to_string();
        let message = compose(&o);
        assert!(message.body.contains("<b>Bold</b> & \"quoted\""));
    }

    #[test]
    fn test_link_starts_with_recipient_and_encoded_subject() {
        let message = compose(&order(None));
        assert!(message.link.starts_with(
            "mailto:orders@example.com?subject=New%20Printing%20Quote%20Request%20-%20Jane%20Doe&body="
        ));
        assert!(message.link.contains("QUOTE%20REQUEST%20DETAILS%3A%0A%0A"));
    }

    #[test]
    fn test_quantity_is_echoed_as_typed() {
        let mut o = order(None);
        o.quantity_text = "050".to_string();
        let message = compose(&o);
        assert!(message.body.contains("Quantity: 050\n"));
    }

    #[test]
    fn test_unformattable_timestamp_is_template_error() {
        let err = MessageTemplates::new()
            .unwrap()
            .compose(&order(None), "orders@example.com", "%#z")
            .unwrap_err();
        assert_eq!(err.error_code(), "TEMPLATE_ERROR");
        assert!(err.to_string().contains("%#z"));
    }

    // === format_timestamp() ===

    #[test]
    fn test_format_timestamp() {
        let at = Local.with_ymd_and_hms(2025, 3, 4, 15, 6, 7).unwrap();
        assert_eq!(
            format_timestamp(&at, "%-m/%-d/%Y, %-I:%M:%S %p").unwrap(),
            "3/4/2025, 3:06:07 PM"
        );
        assert!(format_timestamp(&at, "%#z").is_err());
        assert!(format_timestamp(&at, "%H:%").is_err());
    }

    // === encode_uri_component() ===

    #[test]
    fn test_encode_uri_component_matches_javascript() {
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("+27 72"), "%2B27%2072");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
        assert_eq!(encode_uri_component("line\nbreak"), "line%0Abreak");
    }

    #[test]
    fn test_mailto_keeps_recipient_verbatim() {
        let link = mailto_link("a@gmail.com.com", "s", "b");
        assert_eq!(link, "mailto:a@gmail.com.com?subject=s&body=b");
    }
}
