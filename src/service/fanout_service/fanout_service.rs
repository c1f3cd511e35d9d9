use crate::domain::DomainEvent;
use axum::async_trait;

///
/// Service used to propagate ticket lifecycle facts to any intrested party
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FanoutService: Send + Sync {
    ///
    /// Publishes an event raised by a state transition. Callers
    /// must persist the transition first so a failed persist never
    /// publishes.
    ///
    async fn send_event(&self, event: DomainEvent);
}
