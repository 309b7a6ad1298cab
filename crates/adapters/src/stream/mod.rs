mod kafka_admin;
mod kafka_source;

pub use kafka_admin::KafkaRetentionAdmin;
pub use kafka_source::KafkaAlertSource;
