use std::future::Future;
use std::pin::Pin;

use domain::common::error::DomainError;
use domain::retention::entity::RetentionPolicy;
use ports::secondary::retention_admin::RetentionAdmin;
use rdkafka::ClientConfig;
use rdkafka::admin::{AdminClient, AdminOptions, AlterConfig, ResourceSpecifier};
use rdkafka::client::DefaultClientContext;

/// Broker control-plane adapter that applies per-topic retention limits
/// via `AlterConfigs`.
pub struct KafkaRetentionAdmin {
    admin: AdminClient<DefaultClientContext>,
}

impl KafkaRetentionAdmin {
    pub fn new(brokers: &[String]) -> Result<Self, DomainError> {
        let admin: AdminClient<DefaultClientContext> = ClientConfig::new()
            .set("bootstrap.servers", brokers.join(","))
            .create()
            .map_err(|e| DomainError::Broker(format!("admin client init failed: {e}")))?;
        Ok(Self { admin })
    }
}

impl RetentionAdmin for KafkaRetentionAdmin {
    fn apply_retention<'a>(
        &'a self,
        topic: &'a str,
        policy: RetentionPolicy,
    ) -> Pin<Box<dyn Future<Output = Result<(), DomainError>> + Send + 'a>> {
        Box::pin(async move {
            let retention_ms = policy.retention_ms().to_string();
            let retention_bytes = policy.retention_bytes().to_string();

            let config = AlterConfig::new(ResourceSpecifier::Topic(topic))
                .set("retention.ms", &retention_ms)
                .set("retention.bytes", &retention_bytes);

            let results = self
                .admin
                .alter_configs([&config], &AdminOptions::new())
                .await
                .map_err(|e| DomainError::Broker(format!("alter_configs failed: {e}")))?;

            for result in results {
                match result {
                    Ok(resource) => {
                        tracing::debug!(resource = ?resource, "retention config accepted");
                    }
                    Err((resource, code)) => {
                        return Err(DomainError::Broker(format!(
                            "retention update rejected for {resource:?}: {code}"
                        )));
                    }
                }
            }

            Ok(())
        })
    }
}
