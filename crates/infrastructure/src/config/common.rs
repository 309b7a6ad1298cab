//! Shared parsing helpers and error type for the config modules.

use domain::alert::entity::StartPosition;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(String),

    #[error("validation error: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("invalid value '{value}' for field '{field}': expected one of {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },
}

impl From<serde_yaml_ng::Error> for ConfigError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        Self::Yaml(e.to_string())
    }
}

/// Parse a start-position string to the domain enum.
pub fn parse_start_position(s: &str) -> Result<StartPosition, ()> {
    match s.to_lowercase().as_str() {
        "latest" | "new" | "end" => Ok(StartPosition::Latest),
        "earliest" | "oldest" | "beginning" => Ok(StartPosition::Earliest),
        _ => Err(()),
    }
}
