use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A security alert consumed from the event stream.
///
/// Upstream producers are loosely typed: every modeled field is optional,
/// and fields the model does not know about are preserved verbatim in
/// `extra`. A record carrying none of the modeled fields is still a valid
/// event — missing data degrades the assessment, it never fails the
/// pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertEvent {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Unmodeled fields, kept as-is for downstream consumers.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AlertEvent {
    /// Identifying summary for operator-facing output,
    /// e.g. `"motion in Lobby"`.
    pub fn summary(&self) -> String {
        format!(
            "{} in {}",
            self.alert_type.as_deref().unwrap_or("unknown"),
            self.location.as_deref().unwrap_or("unknown location"),
        )
    }
}

/// Where a freshly started consumer begins reading the stream.
///
/// `Latest` (the default) delivers only records published after the
/// consumer starts: live triage favors freshness over completeness, so
/// alerts that arrived while the consumer was offline are never replayed.
/// `Earliest` starts from the oldest retained record, for backfill runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartPosition {
    #[default]
    Latest,
    Earliest,
}

impl StartPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Earliest => "earliest",
        }
    }
}

impl std::fmt::Display for StartPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
