//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::core::message::format_timestamp;
use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Settings for the order form
///
/// Every key is optional when loading from YAML; missing keys take the
/// values of [`FormConfig::default_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Address the composed quote request is sent to
    pub recipient: String,

    /// Phone/WhatsApp number shown in the success banner
    pub contact_number: String,

    /// Pause between "Sending" and "Sent", in milliseconds
    pub send_delay_ms: u64,

    /// Smallest accepted quantity (inclusive)
    pub quantity_min: u32,

    /// Largest accepted quantity (inclusive)
    pub quantity_max: u32,

    /// Label of the idle submit control
    pub submit_label: String,

    /// Label of the submit control while sending
    pub busy_label: String,

    /// chrono format string for the "Submitted:" line
    pub timestamp_format: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl FormConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the pipeline cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recipient.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "recipient".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.quantity_min > self.quantity_max {
            return Err(ConfigError::InvalidValue {
                field: "quantity_min".to_string(),
                message: format!(
                    "{} is greater than quantity_max ({})",
                    self.quantity_min, self.quantity_max
                ),
            });
        }
        // Some specifiers parse cleanly and only fail once formatted
        let unusable = StrftimeItems::new(&self.timestamp_format)
            .any(|item| matches!(item, Item::Error))
            || format_timestamp(&Local::now(), &self.timestamp_format).is_err();
        if unusable {
            return Err(ConfigError::InvalidValue {
                field: "timestamp_format".to_string(),
                message: format!("'{}' is not a valid format string", self.timestamp_format),
            });
        }
        Ok(())
    }

    pub fn send_delay(&self) -> Duration {
        Duration::from_millis(self.send_delay_ms)
    }

    /// The built-in form settings
    ///
    /// The recipient keeps its doubled `.com` suffix exactly as configured.
    pub fn default_config() -> Self {
        Self {
            recipient: "motloungnthabiseng421@gmail.com.com".to_string(),
            contact_number: "+27 72 656 5457".to_string(),
            send_delay_ms: 1000,
            quantity_min: 1,
            quantity_max: 10000,
            submit_label: "Request Quote".to_string(),
            busy_label: "Sending...".to_string(),
            timestamp_format: "%-m/%-d/%Y, %-I:%M:%S %p".to_string(),
        }
    }
}
