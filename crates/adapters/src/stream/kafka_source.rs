use std::future::Future;
use std::pin::Pin;

use domain::alert::entity::{AlertEvent, StartPosition};
use domain::alert::error::SourceError;
use domain::common::error::DomainError;
use ports::secondary::alert_source::AlertSource;
use rdkafka::ClientConfig;
use rdkafka::Message;
use rdkafka::consumer::{Consumer, StreamConsumer};

/// Kafka-backed alert source.
///
/// Subscribes to a single topic and yields records in arrival order.
/// Offsets are committed automatically once a record has been handed to
/// the caller — not after enrichment — so a crash mid-enrichment does
/// not re-deliver the record (at-most-once for the enrichment step).
pub struct KafkaAlertSource {
    consumer: StreamConsumer,
}

impl KafkaAlertSource {
    pub fn new(
        brokers: &[String],
        topic: &str,
        group_id: &str,
        start: StartPosition,
    ) -> Result<Self, DomainError> {
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", brokers.join(","))
            .set("group.id", group_id)
            .set("enable.auto.commit", "true")
            .set("auto.offset.reset", offset_reset(start))
            .set("enable.partition.eof", "false")
            .create()
            .map_err(|e| DomainError::Broker(format!("consumer init failed: {e}")))?;

        consumer
            .subscribe(&[topic])
            .map_err(|e| DomainError::Broker(format!("subscribe to '{topic}' failed: {e}")))?;

        Ok(Self { consumer })
    }

    fn decode(payload: &[u8]) -> Result<AlertEvent, SourceError> {
        serde_json::from_slice(payload)
            .map_err(|e| SourceError::Deserialization(format!("invalid alert JSON: {e}")))
    }
}

/// Map a start position to the librdkafka `auto.offset.reset` value.
fn offset_reset(start: StartPosition) -> &'static str {
    match start {
        StartPosition::Latest => "latest",
        StartPosition::Earliest => "earliest",
    }
}

impl AlertSource for KafkaAlertSource {
    fn next_event<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<AlertEvent, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            let message = self
                .consumer
                .recv()
                .await
                .map_err(|e| SourceError::Stream(e.to_string()))?;
            let payload = message
                .payload()
                .ok_or_else(|| SourceError::Deserialization("empty record payload".to_string()))?;
            Self::decode(payload)
        })
    }
}
