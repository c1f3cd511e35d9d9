use time::OffsetDateTime;
use uuid::Uuid;

///
/// Facts raised by ticket state transitions, intended for
/// downstream notification. They are returned by the transition
/// methods and never persisted as a source of truth.
///
#[derive(Clone, Debug)]
pub enum DomainEvent {
    TicketsGenerated(TicketsGenerated),
    TicketsConfirmed(TicketsConfirmed),
    TicketValidated(TicketValidated),
    TicketCancelled(TicketCancelled),
}

#[derive(Clone, Debug)]
pub struct TicketsGenerated {
    pub reservation_id: Uuid,
    pub event_id: Uuid,
    pub ticket_ids: Vec<Uuid>,
    pub count: usize,
    pub occurred_at: OffsetDateTime,
}

#[derive(Clone, Debug)]
pub struct TicketsConfirmed {
    pub reservation_id: Uuid,
    pub attendee_id: Uuid,
    pub payment_id: Uuid,
    pub ticket_ids: Vec<Uuid>,
    pub occurred_at: OffsetDateTime,
}

#[derive(Clone, Debug)]
pub struct TicketValidated {
    pub ticket_id: Uuid,
    pub event_id: Uuid,
    pub location: String,
    pub validator_id: Uuid,
    pub occurred_at: OffsetDateTime,
}

#[derive(Clone, Debug)]
pub struct TicketCancelled {
    pub ticket_id: Uuid,
    pub seat_id: Option<Uuid>,
    pub reason: String,
    pub occurred_at: OffsetDateTime,
}

impl From<TicketsGenerated> for DomainEvent {
    fn from(event: TicketsGenerated) -> Self {
        DomainEvent::TicketsGenerated(event)
    }
}

impl From<TicketsConfirmed> for DomainEvent {
    fn from(event: TicketsConfirmed) -> Self {
        DomainEvent::TicketsConfirmed(event)
    }
}

impl From<TicketValidated> for DomainEvent {
    fn from(event: TicketValidated) -> Self {
        DomainEvent::TicketValidated(event)
    }
}

impl From<TicketCancelled> for DomainEvent {
    fn from(event: TicketCancelled) -> Self {
        DomainEvent::TicketCancelled(event)
    }
}
