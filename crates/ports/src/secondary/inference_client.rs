use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use domain::triage::entity::{InferenceOutcome, InferenceRequest};

/// Secondary port for the model-serving endpoint.
///
/// Isolates the synchronous call so a concurrent or pooled variant can
/// be substituted without touching the rest of the pipeline.
pub trait InferenceClient: Send + Sync {
    /// Run one inference call under a hard per-call time budget.
    ///
    /// Infallible by design: connection faults, bad statuses, timeouts
    /// and decode errors are all classified into the returned outcome,
    /// so a single bad call can never abort the caller's loop.
    fn infer<'a>(
        &'a self,
        request: &'a InferenceRequest,
        timeout: Duration,
    ) -> Pin<Box<dyn Future<Output = InferenceOutcome> + Send + 'a>>;
}
