use crate::error::Error;
use axum::async_trait;
use uuid::Uuid;

///
/// One requested ticket line, evaluated against event capacity.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapacityRequest {
    pub section_name: Option<String>,
    pub seat_id: Option<Uuid>,
    pub quantity: u32,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdmissionService: Send + Sync {
    ///
    /// Decides whether the requested ticket lines may be admitted
    /// for the event. Requests are evaluated left to right, the
    /// first failure aborts the whole call.
    ///
    /// ### Errors
    /// - [Error::EventNotPublished] when the event is not published
    /// - [Error::UnknownSection] when a named section does not exist
    ///   on the event
    /// - [Error::SectionRequired] when the event declares sections
    ///   and a request names none
    /// - [Error::CapacityExceeded] when active tickets plus the
    ///   requested quantity exceed the section capacity
    /// - [Error::AvailabilityCheckFailed] when the events service
    ///   cannot be consulted
    ///
    async fn ensure_can_admit(
        &self,
        event_id: Uuid,
        requests: &[CapacityRequest],
    ) -> Result<(), Error>;
}
