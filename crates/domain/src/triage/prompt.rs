use crate::alert::entity::AlertEvent;
use crate::triage::entity::InferenceRequest;

/// Template revision. Bump whenever the wording changes so downstream
/// consumers can tell assessments produced by different instructions
/// apart.
pub const PROMPT_VERSION: &str = "v1";

/// Placeholder rendered for alert fields the producer did not set.
pub const MISSING_FIELD: &str = "(not provided)";

/// Renders the fixed triage instruction for an alert.
///
/// Pure and stateless: the same event always yields byte-identical
/// prompt text, which keeps prompts testable and cacheable. Missing
/// alert fields render as [`MISSING_FIELD`]; building a prompt never
/// fails.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    model: String,
}

impl PromptBuilder {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the inference request for one alert.
    pub fn build(&self, alert: &AlertEvent) -> InferenceRequest {
        let field = |value: &Option<String>| -> String {
            value
                .as_deref()
                .unwrap_or(MISSING_FIELD)
                .to_string()
        };

        let prompt = format!(
            "You are the security triage assistant for a video management system.\n\
             Analyze the following security alert and provide a brief, professional assessment.\n\
             \n\
             Alert details:\n\
             - Type: {alert_type}\n\
             - Severity: {severity}\n\
             - Location: {location}\n\
             - Description: {description}\n\
             \n\
             Format your response as:\n\
             1. PRIORITY LEVEL (Low/Medium/High/Critical)\n\
             2. ANALYSIS (1 sentence)\n\
             3. RECOMMENDED ACTION (1 sentence)\n",
            alert_type = field(&alert.alert_type),
            severity = field(&alert.severity),
            location = field(&alert.location),
            description = field(&alert.description),
        );

        InferenceRequest {
            model: self.model.clone(),
            prompt,
            stream: false,
        }
    }
}
