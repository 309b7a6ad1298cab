use std::sync::Arc;

use domain::common::error::DomainError;
use domain::retention::entity::RetentionPolicy;
use ports::secondary::retention_admin::RetentionAdmin;

/// Apply retention limits to a topic, once.
///
/// Fire-and-forget administration: the computed limits and the outcome
/// are logged for the operator and the result is returned, but the call
/// is never retried and has no effect on a running consumption loop.
pub async fn apply_retention(
    admin: Arc<dyn RetentionAdmin>,
    topic: &str,
    policy: RetentionPolicy,
) -> Result<(), DomainError> {
    tracing::info!(
        topic,
        days = policy.days,
        gigabytes = policy.gigabytes,
        retention_ms = policy.retention_ms(),
        retention_bytes = policy.retention_bytes(),
        "applying retention policy"
    );

    match admin.apply_retention(topic, policy).await {
        Ok(()) => {
            tracing::info!(topic, "retention policy updated");
            Ok(())
        }
        Err(e) => {
            tracing::error!(topic, error = %e, "retention policy update failed");
            Err(e)
        }
    }
}
