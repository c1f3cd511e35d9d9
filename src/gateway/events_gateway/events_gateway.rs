use super::EventSnapshot;
use crate::gateway;
use axum::async_trait;
use uuid::Uuid;

///
/// Port towards the events service. Fetches a read-only snapshot
/// of an event's publication status and section declarations;
/// the admission decision itself is made by the caller.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventsGateway: Send + Sync {
    ///
    /// ### Errors
    /// - [gateway::Error::EventNotExist] when the events service
    ///   does not know the event id
    /// - [gateway::Error::Request] on any transport failure
    ///
    async fn event_snapshot(&self, event_id: Uuid) -> Result<EventSnapshot, gateway::Error>;
}
