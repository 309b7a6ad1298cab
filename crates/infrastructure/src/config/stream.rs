//! Stream consumer configuration.

use domain::alert::entity::StartPosition;
use serde::{Deserialize, Serialize};

use super::common::{ConfigError, parse_start_position};
use crate::constants::DEFAULT_GROUP_ID;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Broker bootstrap addresses, e.g. `["localhost:9092"]`.
    pub brokers: Vec<String>,

    /// Topic carrying the alert events.
    pub topic: String,

    #[serde(default = "default_group_id")]
    pub group_id: String,

    /// Where a freshly started consumer begins: `latest` (only records
    /// arriving after start) or `earliest` (oldest retained record).
    #[serde(default = "default_start_position")]
    pub start_position: String,
}

fn default_group_id() -> String {
    DEFAULT_GROUP_ID.to_string()
}

fn default_start_position() -> String {
    "latest".to_string()
}

impl StreamConfig {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.brokers.is_empty() {
            return Err(ConfigError::Validation {
                field: "stream.brokers".to_string(),
                message: "at least one broker address is required".to_string(),
            });
        }
        if self.brokers.iter().any(|b| b.trim().is_empty()) {
            return Err(ConfigError::Validation {
                field: "stream.brokers".to_string(),
                message: "broker addresses must not be empty".to_string(),
            });
        }
        if self.topic.is_empty() {
            return Err(ConfigError::Validation {
                field: "stream.topic".to_string(),
                message: "topic must not be empty".to_string(),
            });
        }
        if self.group_id.is_empty() {
            return Err(ConfigError::Validation {
                field: "stream.group_id".to_string(),
                message: "group_id must not be empty".to_string(),
            });
        }
        self.start_position()?;
        Ok(())
    }

    /// Parse the configured start position to the domain enum.
    pub fn start_position(&self) -> Result<StartPosition, ConfigError> {
        parse_start_position(&self.start_position).map_err(|()| ConfigError::InvalidValue {
            field: "stream.start_position".to_string(),
            value: self.start_position.clone(),
            expected: "latest, earliest".to_string(),
        })
    }
}
