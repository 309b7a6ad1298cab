//! Operator-facing report channel configuration.

use serde::{Deserialize, Serialize};

/// Where triage outcomes are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportDestination {
    /// Line-oriented text on stdout.
    Console,
    /// Structured events through the agent's log stream.
    Log,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_destination")]
    pub destination: ReportDestination,
}

fn default_destination() -> ReportDestination {
    ReportDestination::Console
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            destination: default_destination(),
        }
    }
}
