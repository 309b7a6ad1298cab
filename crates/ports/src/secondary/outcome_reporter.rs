use domain::alert::entity::AlertEvent;
use domain::triage::entity::InferenceOutcome;

/// Secondary port for the operator-facing result channel.
pub trait OutcomeReporter: Send + Sync {
    /// Present one alert's outcome to the operator.
    ///
    /// Side-effect only and infallible: reporting problems are swallowed
    /// by the implementation, never surfaced to the processing loop.
    fn report(&self, alert: &AlertEvent, outcome: &InferenceOutcome);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DummyReporter;

    impl OutcomeReporter for DummyReporter {
        fn report(&self, _alert: &AlertEvent, _outcome: &InferenceOutcome) {}
    }

    #[test]
    fn outcome_reporter_is_dyn_compatible() {
        let reporter: Box<dyn OutcomeReporter> = Box::new(DummyReporter);
        let _ = reporter;
    }
}
