use std::sync::Arc;
use std::time::Duration;

use domain::alert::entity::AlertEvent;
use domain::triage::entity::InferenceOutcome;
use domain::triage::prompt::PromptBuilder;
use ports::secondary::alert_source::AlertSource;
use ports::secondary::inference_client::InferenceClient;
use ports::secondary::outcome_reporter::OutcomeReporter;
use tokio_util::sync::CancellationToken;

/// Triage application service.
///
/// Drives the sequential enrichment loop: one alert is read, prompted,
/// sent to inference and reported before the next read. The blocking
/// inference call is the only backpressure mechanism, so alerts are
/// always reported in arrival order and at most one inference is in
/// flight.
pub struct TriagePipeline {
    prompt_builder: PromptBuilder,
    inference: Arc<dyn InferenceClient>,
    reporter: Arc<dyn OutcomeReporter>,
    inference_timeout: Duration,
}

impl TriagePipeline {
    pub fn new(
        prompt_builder: PromptBuilder,
        inference: Arc<dyn InferenceClient>,
        reporter: Arc<dyn OutcomeReporter>,
        inference_timeout: Duration,
    ) -> Self {
        Self {
            prompt_builder,
            inference,
            reporter,
            inference_timeout,
        }
    }

    /// Process a single alert: build the prompt, run inference, report.
    ///
    /// Exactly one outcome reaches the reporter per call, success or
    /// classified failure.
    pub async fn process_event(&self, alert: &AlertEvent) {
        tracing::info!(alert = %alert.summary(), "alert received");

        let request = self.prompt_builder.build(alert);
        let outcome = self.inference.infer(&request, self.inference_timeout).await;

        match &outcome {
            InferenceOutcome::Success { elapsed, .. } => {
                tracing::info!(
                    alert = %alert.summary(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "triage assessment produced"
                );
            }
            InferenceOutcome::Failure { kind, detail } => {
                tracing::warn!(
                    alert = %alert.summary(),
                    kind = kind.as_str(),
                    detail = %detail,
                    "triage inference failed"
                );
            }
        }

        self.reporter.report(alert, &outcome);
    }

    /// Async run loop: consumes alerts until cancellation or a fatal
    /// stream error.
    ///
    /// Cancellation is honored between iterations only — the select
    /// covers the stream read, so an in-flight inference call always
    /// completes and its outcome is reported before the loop exits.
    /// Malformed records are skipped with a warning; only a failure of
    /// the stream connection itself terminates the loop early.
    pub async fn run(self, source: Arc<dyn AlertSource>, cancel_token: CancellationToken) {
        let mut processed: u64 = 0;
        let mut skipped: u64 = 0;

        loop {
            let next = tokio::select! {
                () = cancel_token.cancelled() => break,
                event = source.next_event() => event,
            };

            match next {
                Ok(alert) => {
                    processed += 1;
                    self.process_event(&alert).await;
                }
                Err(e) if e.is_fatal() => {
                    tracing::error!(error = %e, "alert stream failed, stopping");
                    break;
                }
                Err(e) => {
                    skipped += 1;
                    tracing::warn!(error = %e, "skipping malformed alert record");
                }
            }
        }

        tracing::info!(processed, skipped, "triage pipeline stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::alert::error::SourceError;
    use domain::triage::entity::FailureKind;
    use std::collections::VecDeque;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn make_alert(alert_type: &str, location: &str) -> AlertEvent {
        AlertEvent {
            alert_type: Some(alert_type.to_string()),
            severity: Some("High".to_string()),
            location: Some(location.to_string()),
            description: Some("Unattended bag".to_string()),
            ..AlertEvent::default()
        }
    }

    // ── Test doubles ──────────────────────────────────────────────

    /// Source that yields queued results, then a fatal stream error so
    /// the run loop terminates deterministically.
    struct QueueSource {
        items: Mutex<VecDeque<Result<AlertEvent, SourceError>>>,
    }

    impl QueueSource {
        fn new(items: Vec<Result<AlertEvent, SourceError>>) -> Self {
            Self {
                items: Mutex::new(items.into()),
            }
        }
    }

    impl AlertSource for QueueSource {
        fn next_event<'a>(
            &'a self,
        ) -> Pin<Box<dyn Future<Output = Result<AlertEvent, SourceError>> + Send + 'a>> {
            Box::pin(async move {
                self.items
                    .lock()
                    .unwrap()
                    .pop_front()
                    .unwrap_or_else(|| Err(SourceError::Stream("end of test input".to_string())))
            })
        }
    }

    /// Source that never yields, for cancellation tests.
    struct PendingSource;

    impl AlertSource for PendingSource {
        fn next_event<'a>(
            &'a self,
        ) -> Pin<Box<dyn Future<Output = Result<AlertEvent, SourceError>> + Send + 'a>> {
            Box::pin(std::future::pending())
        }
    }

    struct StubInference {
        outcome: InferenceOutcome,
        calls: AtomicU32,
    }

    impl StubInference {
        fn success(text: &str) -> Self {
            Self {
                outcome: InferenceOutcome::Success {
                    text: text.to_string(),
                    elapsed: Duration::from_millis(42),
                },
                calls: AtomicU32::new(0),
            }
        }

        fn failure(kind: FailureKind) -> Self {
            Self {
                outcome: InferenceOutcome::failure(kind, "stubbed"),
                calls: AtomicU32::new(0),
            }
        }
    }

    impl InferenceClient for StubInference {
        fn infer<'a>(
            &'a self,
            _request: &'a domain::triage::entity::InferenceRequest,
            _timeout: Duration,
        ) -> Pin<Box<dyn Future<Output = InferenceOutcome> + Send + 'a>> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            let outcome = self.outcome.clone();
            Box::pin(async move { outcome })
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        reports: Mutex<Vec<(String, bool)>>,
    }

    impl OutcomeReporter for RecordingReporter {
        fn report(&self, alert: &AlertEvent, outcome: &InferenceOutcome) {
            self.reports
                .lock()
                .unwrap()
                .push((alert.summary(), outcome.is_success()));
        }
    }

    fn make_pipeline(
        inference: Arc<StubInference>,
        reporter: Arc<RecordingReporter>,
    ) -> TriagePipeline {
        TriagePipeline::new(
            PromptBuilder::new("gemma:2b"),
            inference as Arc<dyn InferenceClient>,
            reporter as Arc<dyn OutcomeReporter>,
            Duration::from_secs(5),
        )
    }

    // ── process_event ─────────────────────────────────────────────

    #[tokio::test]
    async fn one_event_yields_one_report() {
        let inference = Arc::new(StubInference::success("1. HIGH\n2. Bad.\n3. Act."));
        let reporter = Arc::new(RecordingReporter::default());
        let pipeline = make_pipeline(Arc::clone(&inference), Arc::clone(&reporter));

        pipeline.process_event(&make_alert("motion", "Lobby")).await;

        assert_eq!(inference.calls.load(Ordering::Relaxed), 1);
        let reports = reporter.reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0], ("motion in Lobby".to_string(), true));
    }

    #[tokio::test]
    async fn failed_inference_is_still_reported() {
        let inference = Arc::new(StubInference::failure(FailureKind::ServiceUnavailable));
        let reporter = Arc::new(RecordingReporter::default());
        let pipeline = make_pipeline(inference, Arc::clone(&reporter));

        pipeline.process_event(&make_alert("motion", "Lobby")).await;

        let reports = reporter.reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert!(!reports[0].1);
    }

    // ── run loop ──────────────────────────────────────────────────

    #[tokio::test]
    async fn every_consumed_event_produces_exactly_one_outcome() {
        let inference = Arc::new(StubInference::success("ok"));
        let reporter = Arc::new(RecordingReporter::default());
        let pipeline = make_pipeline(Arc::clone(&inference), Arc::clone(&reporter));

        let source = Arc::new(QueueSource::new(vec![
            Ok(make_alert("motion", "Lobby")),
            Ok(make_alert("tamper", "Garage")),
            Ok(make_alert("intrusion", "Roof")),
        ]));

        pipeline.run(source, CancellationToken::new()).await;

        assert_eq!(inference.calls.load(Ordering::Relaxed), 3);
        assert_eq!(reporter.reports.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn alerts_are_reported_in_arrival_order() {
        let inference = Arc::new(StubInference::success("ok"));
        let reporter = Arc::new(RecordingReporter::default());
        let pipeline = make_pipeline(inference, Arc::clone(&reporter));

        let source = Arc::new(QueueSource::new(vec![
            Ok(make_alert("motion", "Lobby")),
            Ok(make_alert("tamper", "Garage")),
        ]));

        pipeline.run(source, CancellationToken::new()).await;

        let reports = reporter.reports.lock().unwrap();
        assert_eq!(reports[0].0, "motion in Lobby");
        assert_eq!(reports[1].0, "tamper in Garage");
    }

    #[tokio::test]
    async fn malformed_record_is_skipped_and_loop_continues() {
        let inference = Arc::new(StubInference::success("ok"));
        let reporter = Arc::new(RecordingReporter::default());
        let pipeline = make_pipeline(Arc::clone(&inference), Arc::clone(&reporter));

        let source = Arc::new(QueueSource::new(vec![
            Err(SourceError::Deserialization("bad json".to_string())),
            Ok(make_alert("motion", "Lobby")),
        ]));

        pipeline.run(source, CancellationToken::new()).await;

        // The malformed record produced no outcome; the valid one did.
        assert_eq!(inference.calls.load(Ordering::Relaxed), 1);
        assert_eq!(reporter.reports.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unreachable_inference_does_not_stop_the_loop() {
        let inference = Arc::new(StubInference::failure(FailureKind::ServiceUnavailable));
        let reporter = Arc::new(RecordingReporter::default());
        let pipeline = make_pipeline(Arc::clone(&inference), Arc::clone(&reporter));

        let source = Arc::new(QueueSource::new(vec![
            Ok(make_alert("motion", "Lobby")),
            Ok(make_alert("tamper", "Garage")),
        ]));

        pipeline.run(source, CancellationToken::new()).await;

        // Both alerts got a (failure) outcome; the loop read past the first.
        assert_eq!(inference.calls.load(Ordering::Relaxed), 2);
        assert_eq!(reporter.reports.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn fatal_stream_error_stops_the_loop() {
        let inference = Arc::new(StubInference::success("ok"));
        let reporter = Arc::new(RecordingReporter::default());
        let pipeline = make_pipeline(inference, Arc::clone(&reporter));

        let source = Arc::new(QueueSource::new(vec![Ok(make_alert("motion", "Lobby"))]));

        // QueueSource ends with a fatal Stream error; run returns.
        pipeline.run(source, CancellationToken::new()).await;
        assert_eq!(reporter.reports.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn cancellation_stops_an_idle_loop() {
        let inference = Arc::new(StubInference::success("ok"));
        let reporter = Arc::new(RecordingReporter::default());
        let pipeline = make_pipeline(inference, Arc::clone(&reporter));

        let cancel = CancellationToken::new();
        cancel.cancel();

        pipeline.run(Arc::new(PendingSource), cancel).await;
        assert!(reporter.reports.lock().unwrap().is_empty());
    }
}
