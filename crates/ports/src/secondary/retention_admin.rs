use std::future::Future;
use std::pin::Pin;

use domain::common::error::DomainError;
use domain::retention::entity::RetentionPolicy;

/// Secondary port for the broker's configuration control plane.
pub trait RetentionAdmin: Send + Sync {
    /// Apply time- and size-based retention limits to a topic.
    ///
    /// One-shot: callers invoke this once and report the result; the
    /// call is never retried.
    fn apply_retention<'a>(
        &'a self,
        topic: &'a str,
        policy: RetentionPolicy,
    ) -> Pin<Box<dyn Future<Output = Result<(), DomainError>> + Send + 'a>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DummyAdmin;

    impl RetentionAdmin for DummyAdmin {
        fn apply_retention<'a>(
            &'a self,
            _topic: &'a str,
            _policy: RetentionPolicy,
        ) -> Pin<Box<dyn Future<Output = Result<(), DomainError>> + Send + 'a>> {
            Box::pin(async { Ok(()) })
        }
    }

    #[test]
    fn retention_admin_is_dyn_compatible() {
        let admin: Box<dyn RetentionAdmin> = Box::new(DummyAdmin);
        let _ = admin;
    }
}
