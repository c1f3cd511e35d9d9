use super::FanoutService;
use crate::domain::DomainEvent;
use axum::async_trait;

///
/// Fanout implementation that reports events to the structured
/// log stream.
///
pub struct TracingFanoutService;

#[async_trait]
impl FanoutService for TracingFanoutService {
    async fn send_event(&self, event: DomainEvent) {
        match event {
            DomainEvent::TicketsGenerated(event) => tracing::info!(
                reservation_id = %event.reservation_id,
                event_id = %event.event_id,
                ticket_ids = ?event.ticket_ids,
                count = event.count,
                "tickets generated",
            ),
            DomainEvent::TicketsConfirmed(event) => tracing::info!(
                reservation_id = %event.reservation_id,
                attendee_id = %event.attendee_id,
                payment_id = %event.payment_id,
                ticket_ids = ?event.ticket_ids,
                "tickets confirmed",
            ),
            DomainEvent::TicketValidated(event) => tracing::info!(
                ticket_id = %event.ticket_id,
                event_id = %event.event_id,
                location = event.location,
                validator_id = %event.validator_id,
                "ticket validated",
            ),
            DomainEvent::TicketCancelled(event) => tracing::info!(
                ticket_id = %event.ticket_id,
                seat_id = ?event.seat_id,
                reason = event.reason,
                "ticket cancelled",
            ),
        }
    }
}
