use crate::domain::Ticket;
use bson::{spec::BinarySubtype, Binary, DateTime, Uuid};
use serde::Serialize;

#[derive(Serialize)]
pub struct TicketInsertEntity<'a> {
    pub _id: Uuid,

    pub event_id: Uuid,
    pub reservation_id: Uuid,
    pub attendee_id: Uuid,

    pub ticket_type: i32,
    pub qr_code_value: &'a str,
    pub qr_code_image: Binary,
    pub price_paid: f64,
    pub seat_id: Option<Uuid>,
    pub section_name: Option<&'a str>,

    pub status: i32,
    pub issued_at: DateTime,
    pub payment_id: Option<Uuid>,
    pub validated_at: Option<DateTime>,
    pub validation_location: Option<&'a str>,
    pub validator_id: Option<Uuid>,
}

impl<'a> From<&'a Ticket> for TicketInsertEntity<'a> {
    fn from(ticket: &'a Ticket) -> Self {
        Self {
            _id: ticket.id().into(),
            event_id: ticket.event_id().into(),
            reservation_id: ticket.reservation_id().into(),
            attendee_id: ticket.attendee_id().into(),
            ticket_type: ticket.ticket_type() as i32,
            qr_code_value: ticket.qr_code().value(),
            qr_code_image: Binary {
                subtype: BinarySubtype::Generic,
                bytes: ticket.qr_code().image().to_vec(),
            },
            price_paid: ticket.price_paid(),
            seat_id: ticket.seat_id().map(Uuid::from),
            section_name: ticket.section_name(),
            status: ticket.status() as i32,
            issued_at: ticket.issued_at().into(),
            payment_id: ticket.payment_id().map(Uuid::from),
            validated_at: ticket.validated_at().map(DateTime::from),
            validation_location: ticket.validation_location(),
            validator_id: ticket.validator_id().map(Uuid::from),
        }
    }
}
