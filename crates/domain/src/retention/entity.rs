use serde::{Deserialize, Serialize};

const MS_PER_DAY: u64 = 24 * 60 * 60 * 1000;
const BYTES_PER_GIB: u64 = 1024 * 1024 * 1024;

/// Broker-side retention limits for a topic, in operator units.
///
/// Converted to the broker's native units (`retention.ms`,
/// `retention.bytes`) when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionPolicy {
    pub days: u64,
    pub gigabytes: u64,
}

impl RetentionPolicy {
    pub fn new(days: u64, gigabytes: u64) -> Self {
        Self { days, gigabytes }
    }

    /// Time limit in milliseconds (`retention.ms`).
    pub fn retention_ms(&self) -> u64 {
        self.days * MS_PER_DAY
    }

    /// Size limit in bytes (`retention.bytes`).
    pub fn retention_bytes(&self) -> u64 {
        self.gigabytes * BYTES_PER_GIB
    }
}
