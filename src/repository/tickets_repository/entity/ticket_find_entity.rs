use crate::{
    domain::{QrCode, Ticket, TicketSnapshot, TicketStatus, TicketType},
    repository::Error,
};
use bson::{Binary, DateTime, Uuid};
use serde::Deserialize;
use time::OffsetDateTime;

#[derive(Deserialize)]
pub struct TicketFindEntity {
    pub _id: Uuid,

    pub event_id: Uuid,
    pub reservation_id: Uuid,
    pub attendee_id: Uuid,

    pub ticket_type: i32,
    pub qr_code_value: String,
    pub qr_code_image: Binary,
    pub price_paid: f64,
    pub seat_id: Option<Uuid>,
    pub section_name: Option<String>,

    pub status: i32,
    pub issued_at: DateTime,
    pub payment_id: Option<Uuid>,
    pub validated_at: Option<DateTime>,
    pub validation_location: Option<String>,
    pub validator_id: Option<Uuid>,
}

impl TryFrom<TicketFindEntity> for Ticket {
    type Error = Error;

    fn try_from(entity: TicketFindEntity) -> Result<Self, Self::Error> {
        let ticket_type = TicketType::from_repr(entity.ticket_type)
            .ok_or(Error::InvalidRecord("unknown ticket type"))?;
        let status = TicketStatus::from_repr(entity.status)
            .ok_or(Error::InvalidRecord("unknown ticket status"))?;
        let qr_code = QrCode::new(entity.qr_code_value, entity.qr_code_image.bytes)
            .map_err(|_| Error::InvalidRecord("empty qr code"))?;

        Ok(Ticket::restore(TicketSnapshot {
            id: entity._id.into(),
            event_id: entity.event_id.into(),
            reservation_id: entity.reservation_id.into(),
            attendee_id: entity.attendee_id.into(),
            ticket_type,
            qr_code,
            price_paid: entity.price_paid,
            seat_id: entity.seat_id.map(Into::into),
            section_name: entity.section_name,
            status,
            issued_at: entity.issued_at.into(),
            payment_id: entity.payment_id.map(Into::into),
            validated_at: entity.validated_at.map(OffsetDateTime::from),
            validation_location: entity.validation_location,
            validator_id: entity.validator_id.map(Into::into),
        }))
    }
}
