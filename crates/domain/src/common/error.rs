use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("broker error: {0}")]
    Broker(String),

    #[error("transport error: {0}")]
    Transport(String),
}
