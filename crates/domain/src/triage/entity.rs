use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::common::entity::Priority;

/// A single request to the inference service, derived 1:1 from an alert.
///
/// Serializes directly to the generate-endpoint wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InferenceRequest {
    /// Target model identifier, e.g. `gemma:2b`.
    pub model: String,
    /// Rendered prompt text.
    pub prompt: String,
    /// Always `false`: the caller wants one complete response, not an
    /// incremental token stream.
    pub stream: bool,
}

/// Classified cause of a failed inference call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Endpoint unreachable (connection refused, DNS failure).
    ServiceUnavailable,
    /// The call exceeded its caller-supplied time budget.
    Timeout,
    /// The endpoint answered with a non-success status.
    UpstreamError,
    /// Any other transport or decoding fault.
    Unknown,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ServiceUnavailable => "service_unavailable",
            Self::Timeout => "timeout",
            Self::UpstreamError => "upstream_error",
            Self::Unknown => "unknown",
        }
    }

    /// Short operator-facing hint naming the likely cause.
    pub fn hint(self) -> &'static str {
        match self {
            Self::ServiceUnavailable => "inference service unreachable — is it running?",
            Self::Timeout => "inference call exceeded its time budget",
            Self::UpstreamError => "inference service returned an error response",
            Self::Unknown => "inference call failed",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one inference call.
///
/// Every alert accepted from the stream produces exactly one of these —
/// a successful assessment with its wall-clock latency, or a classified
/// failure. Faults never surface as errors to the consume loop.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceOutcome {
    Success { text: String, elapsed: Duration },
    Failure { kind: FailureKind, detail: String },
}

impl InferenceOutcome {
    pub fn failure(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            detail: detail.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Best-effort decomposition of a response into its three labeled
/// sections: priority, one-sentence analysis, one-sentence recommended
/// action.
///
/// The service is asked for this shape but adherence is not a contract.
/// `parse` returns `None` whenever the text deviates, and callers fall
/// back to presenting the raw response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub priority: Priority,
    pub analysis: String,
    pub action: String,
}

impl Assessment {
    pub fn parse(text: &str) -> Option<Self> {
        let mut priority = None;
        let mut analysis = None;
        let mut action = None;

        for line in text.lines() {
            let Some((index, rest)) = split_numbered(line.trim()) else {
                continue;
            };
            let rest = rest.trim();
            match index {
                1 if priority.is_none() => priority = priority_in(rest),
                2 if analysis.is_none() && !rest.is_empty() => {
                    analysis = Some(rest.to_string());
                }
                3 if action.is_none() && !rest.is_empty() => {
                    action = Some(rest.to_string());
                }
                _ => {}
            }
        }

        Some(Self {
            priority: priority?,
            analysis: analysis?,
            action: action?,
        })
    }
}

/// Split a `"2. some text"` line into its section index and remainder.
fn split_numbered(line: &str) -> Option<(u8, &str)> {
    let (num, rest) = line.split_once('.')?;
    let index = num.trim().parse::<u8>().ok()?;
    (1..=3).contains(&index).then_some((index, rest))
}

/// Find the first priority token in a section, tolerating label echoes
/// like `"PRIORITY LEVEL: High"`.
fn priority_in(text: &str) -> Option<Priority> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .find_map(Priority::parse)
}
