use thiserror::Error;

/// Failure while reading from the alert stream.
#[derive(Debug, Error)]
pub enum SourceError {
    /// A record was consumed but its payload could not be decoded.
    /// The record is skipped; the stream position has already moved
    /// past it.
    #[error("malformed alert record: {0}")]
    Deserialization(String),

    /// The stream connection itself failed. The consume loop cannot
    /// continue.
    #[error("stream failure: {0}")]
    Stream(String),
}

impl SourceError {
    /// `true` for failures that terminate the consume loop.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Stream(_))
    }
}
