use std::io::Write;
use std::sync::Mutex;

use domain::alert::entity::AlertEvent;
use domain::triage::entity::{Assessment, InferenceOutcome};
use ports::secondary::outcome_reporter::OutcomeReporter;

const RULE: &str = "==================================================";
const DIVIDER: &str = "--------------------";

/// Operator-facing reporter that writes line-oriented text, one block
/// per alert.
///
/// Defaults to stdout; the writer is injectable for tests. Write errors
/// are swallowed: reporting must never be able to stop the consume
/// loop.
pub struct ConsoleReporter {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }

    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    fn render(alert: &AlertEvent, outcome: &InferenceOutcome) -> String {
        let alert_type = alert.alert_type.as_deref().unwrap_or("unknown");
        let location = alert.location.as_deref().unwrap_or("unknown location");
        let severity = alert.severity.as_deref().unwrap_or("unspecified");

        let mut out = String::new();
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&format!(
            "alert: {alert_type} in {location} (severity {severity})\n"
        ));

        match outcome {
            InferenceOutcome::Success { text, elapsed } => {
                out.push_str(&format!(
                    "analysis latency: {:.2}s\n",
                    elapsed.as_secs_f64()
                ));
                if let Some(assessment) = Assessment::parse(text) {
                    out.push_str(&format!("triage priority: {}\n", assessment.priority));
                }
                out.push_str(DIVIDER);
                out.push('\n');
                out.push_str(text.trim());
                out.push('\n');
            }
            InferenceOutcome::Failure { kind, detail } => {
                out.push_str(&format!("triage failed ({kind}): {}\n", kind.hint()));
                out.push_str(&format!("detail: {detail}\n"));
            }
        }

        out.push_str(RULE);
        out.push_str("\n\n");
        out
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeReporter for ConsoleReporter {
    fn report(&self, alert: &AlertEvent, outcome: &InferenceOutcome) {
        let block = Self::render(alert, outcome);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(block.as_bytes());
            let _ = writer.flush();
        }
    }
}
