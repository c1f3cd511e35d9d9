use crate::{domain::TicketError, gateway, repository};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ticket {0} not exist")]
    TicketNotExist(Uuid),

    #[error("ticket with scanned qr code not exist")]
    TicketQrCodeNotExist,

    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("qr code already registered")]
    QrCodeAlreadyRegistered,

    #[error("ticket error: {0}")]
    Ticket(#[from] TicketError),

    #[error("event {event_id} not published (status: {status})")]
    EventNotPublished { event_id: Uuid, status: String },

    #[error("section '{section_name}' not exist in event {event_id}")]
    UnknownSection {
        event_id: Uuid,
        section_name: String,
    },

    #[error("event {event_id} declares sections, a section is required")]
    SectionRequired { event_id: Uuid },

    #[error("no capacity left in section '{section}': remaining {remaining}, requested {requested}")]
    CapacityExceeded {
        section: String,
        remaining: u64,
        requested: u32,
    },

    #[error("availability check failed: {0}")]
    AvailabilityCheckFailed(#[from] gateway::Error),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        let status_code = match &self {
            Error::TicketNotExist(_) => StatusCode::NOT_FOUND,
            Error::TicketQrCodeNotExist => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::QrCodeAlreadyRegistered => StatusCode::CONFLICT,
            Error::Ticket(TicketError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Error::Ticket(TicketError::InvariantViolation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Ticket(TicketError::IllegalTransition(_)) => StatusCode::CONFLICT,
            Error::EventNotPublished { .. } => StatusCode::CONFLICT,
            Error::UnknownSection { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Error::SectionRequired { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Error::CapacityExceeded { .. } => StatusCode::CONFLICT,
            Error::AvailabilityCheckFailed(gateway::Error::EventNotExist(_)) => {
                StatusCode::NOT_FOUND
            }
            Error::AvailabilityCheckFailed(_) => StatusCode::BAD_GATEWAY,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status_code, self.to_string()).into_response()
    }
}
