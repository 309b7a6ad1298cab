//! Topic retention configuration for the one-shot admin command.

use serde::{Deserialize, Serialize};

use super::common::ConfigError;
use crate::constants::{DEFAULT_RETENTION_DAYS, DEFAULT_RETENTION_GIGABYTES};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetentionConfig {
    /// Time-based limit in days (`retention.ms` on the broker).
    #[serde(default = "default_days")]
    pub days: u64,

    /// Size-based limit in gigabytes (`retention.bytes` on the broker).
    #[serde(default = "default_gigabytes")]
    pub gigabytes: u64,
}

fn default_days() -> u64 {
    DEFAULT_RETENTION_DAYS
}

fn default_gigabytes() -> u64 {
    DEFAULT_RETENTION_GIGABYTES
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            gigabytes: default_gigabytes(),
        }
    }
}

impl RetentionConfig {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.days == 0 {
            return Err(ConfigError::Validation {
                field: "retention.days".to_string(),
                message: "retention must be at least one day".to_string(),
            });
        }
        if self.gigabytes == 0 {
            return Err(ConfigError::Validation {
                field: "retention.gigabytes".to_string(),
                message: "retention must be at least one gigabyte".to_string(),
            });
        }
        Ok(())
    }
}
