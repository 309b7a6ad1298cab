use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

use domain::common::error::DomainError;
use domain::triage::entity::{FailureKind, InferenceOutcome, InferenceRequest};
use ports::secondary::inference_client::InferenceClient;
use serde::Deserialize;

/// Cap on the response-body excerpt quoted in failure details.
const BODY_EXCERPT_LIMIT: usize = 256;

/// HTTP client for an Ollama-style generate endpoint.
///
/// POSTs `{model, prompt, stream: false}` and expects a JSON body with a
/// `response` text field. Every fault is classified into the returned
/// `InferenceOutcome`: the caller's loop never sees an error. The time
/// budget is supplied per call and enforced around the whole request.
pub struct OllamaClient {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent("alerttriage-agent/0.1")
            .build()
            .map_err(|e| DomainError::Transport(format!("HTTP client init failed: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Create with a custom reqwest client (for testing or advanced config).
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    async fn do_infer(&self, request: &InferenceRequest) -> Result<String, InferenceOutcome> {
        let response = match self.client.post(&self.endpoint).json(request).send().await {
            Ok(response) => response,
            Err(e) if e.is_connect() => {
                return Err(InferenceOutcome::failure(
                    FailureKind::ServiceUnavailable,
                    format!("cannot reach {}: {e}", self.endpoint),
                ));
            }
            Err(e) => {
                return Err(InferenceOutcome::failure(
                    FailureKind::Unknown,
                    format!("request failed: {e}"),
                ));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceOutcome::failure(
                FailureKind::UpstreamError,
                format!("HTTP {status}: {}", excerpt(&body)),
            ));
        }

        match response.json::<GenerateResponse>().await {
            Ok(body) => Ok(body.response),
            Err(e) => Err(InferenceOutcome::failure(
                FailureKind::Unknown,
                format!("malformed response body: {e}"),
            )),
        }
    }
}

impl InferenceClient for OllamaClient {
    fn infer<'a>(
        &'a self,
        request: &'a InferenceRequest,
        timeout: Duration,
    ) -> Pin<Box<dyn Future<Output = InferenceOutcome> + Send + 'a>> {
        Box::pin(async move {
            let started = Instant::now();
            match tokio::time::timeout(timeout, self.do_infer(request)).await {
                Ok(Ok(text)) => InferenceOutcome::Success {
                    text,
                    elapsed: started.elapsed(),
                },
                Ok(Err(failure)) => failure,
                Err(_) => InferenceOutcome::failure(
                    FailureKind::Timeout,
                    format!("no response within {}ms", timeout.as_millis()),
                ),
            }
        })
    }
}

/// Truncate a body for inclusion in a failure detail.
fn excerpt(body: &str) -> &str {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(BODY_EXCERPT_LIMIT) {
        Some((idx, _)) => &trimmed[..idx],
        None => trimmed,
    }
}
