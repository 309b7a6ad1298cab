use domain::alert::entity::AlertEvent;
use domain::triage::entity::InferenceOutcome;
use ports::secondary::outcome_reporter::OutcomeReporter;

/// Reporter that emits outcomes as structured log events.
///
/// Used when the agent's stdout is already claimed by a log aggregator
/// and operator text should travel through the same channel.
pub struct LogReporter;

impl OutcomeReporter for LogReporter {
    fn report(&self, alert: &AlertEvent, outcome: &InferenceOutcome) {
        let alert_type = alert.alert_type.as_deref().unwrap_or("unknown");
        let location = alert.location.as_deref().unwrap_or("unknown");
        let severity = alert.severity.as_deref().unwrap_or("unspecified");

        match outcome {
            InferenceOutcome::Success { text, elapsed } => {
                tracing::info!(
                    alert_type,
                    location,
                    severity,
                    elapsed_ms = elapsed.as_millis() as u64,
                    assessment = %text,
                    "alert triaged"
                );
            }
            InferenceOutcome::Failure { kind, detail } => {
                tracing::warn!(
                    alert_type,
                    location,
                    severity,
                    kind = kind.as_str(),
                    detail = %detail,
                    hint = kind.hint(),
                    "alert triage failed"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::triage::entity::FailureKind;
    use std::time::Duration;

    #[test]
    fn log_reporter_handles_both_outcomes() {
        let reporter = LogReporter;
        let alert = AlertEvent {
            alert_type: Some("motion".to_string()),
            ..AlertEvent::default()
        };

        reporter.report(
            &alert,
            &InferenceOutcome::Success {
                text: "ok".to_string(),
                elapsed: Duration::from_millis(5),
            },
        );
        reporter.report(
            &alert,
            &InferenceOutcome::failure(FailureKind::Timeout, "120s elapsed"),
        );
    }

    #[test]
    fn log_reporter_is_send_sync() {
        fn _assert<T: Send + Sync>() {}
        _assert::<LogReporter>();
    }
}
