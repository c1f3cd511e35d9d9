use crate::{domain::Ticket, repository};
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Persists a newly created ticket.
    ///
    /// ### Errors
    /// - [repository::Error::InsertUniqueViolation]
    /// when the qr code value is already stored
    ///
    async fn insert(&self, ticket: &Ticket) -> Result<(), repository::Error>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, repository::Error>;

    async fn find_by_qr_code(&self, qr_code: &str) -> Result<Option<Ticket>, repository::Error>;

    ///
    /// Persists the full current state of an already stored ticket.
    ///
    /// ### Errors
    /// - [repository::Error::NoDocumentUpdated]
    /// when the ticket id is unknown to the store
    ///
    async fn update(&self, ticket: &Ticket) -> Result<(), repository::Error>;

    ///
    /// Counts tickets in pending or confirmed state for the event,
    /// optionally scoped to a section.
    ///
    async fn count_active(
        &self,
        event_id: Uuid,
        section_name: Option<String>,
    ) -> Result<u64, repository::Error>;

    ///
    /// Finds the most recently issued ticket in confirmed or used
    /// state for the (event, attendee) pair.
    ///
    async fn find_for_access(
        &self,
        event_id: Uuid,
        attendee_id: Uuid,
    ) -> Result<Option<Ticket>, repository::Error>;
}
