//! Inference endpoint configuration.

use serde::{Deserialize, Serialize};

use super::common::ConfigError;
use crate::constants::{DEFAULT_INFERENCE_ENDPOINT, DEFAULT_INFERENCE_TIMEOUT_SECS, DEFAULT_MODEL};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Generate endpoint URL of the locally hosted inference service.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier passed with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Hard per-call budget in seconds; a call past this is reported as
    /// a timeout and the loop moves on.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_INFERENCE_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_INFERENCE_TIMEOUT_SECS
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl InferenceConfig {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ConfigError::Validation {
                field: "inference.endpoint".to_string(),
                message: format!("'{}' is not an http(s) URL", self.endpoint),
            });
        }
        if self.model.is_empty() {
            return Err(ConfigError::Validation {
                field: "inference.model".to_string(),
                message: "model must not be empty".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation {
                field: "inference.timeout_secs".to_string(),
                message: "timeout must be at least 1 second".to_string(),
            });
        }
        Ok(())
    }
}
