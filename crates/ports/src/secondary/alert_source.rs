use std::future::Future;
use std::pin::Pin;

use domain::alert::entity::AlertEvent;
use domain::alert::error::SourceError;

/// Secondary port for the alert event stream.
///
/// Uses `Pin<Box<dyn Future>>` return type (instead of RPITIT) so the
/// trait is dyn-compatible and can be used as `Arc<dyn AlertSource>`.
pub trait AlertSource: Send + Sync {
    /// Wait for the next alert on the stream.
    ///
    /// The stream never ends on its own: the future resolves only when a
    /// record arrives or the connection fails. A record whose payload
    /// cannot be decoded yields [`SourceError::Deserialization`]; the
    /// record is consumed and the next call moves past it.
    fn next_event<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<AlertEvent, SourceError>> + Send + 'a>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DummySource;

    impl AlertSource for DummySource {
        fn next_event<'a>(
            &'a self,
        ) -> Pin<Box<dyn Future<Output = Result<AlertEvent, SourceError>> + Send + 'a>> {
            Box::pin(async { Ok(AlertEvent::default()) })
        }
    }

    #[test]
    fn alert_source_is_dyn_compatible() {
        let source: Box<dyn AlertSource> = Box::new(DummySource);
        let _ = source;
    }

    #[test]
    fn alert_source_is_send_sync() {
        fn _assert<T: Send + Sync>() {}
        _assert::<DummySource>();
    }
}
