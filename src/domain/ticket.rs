use super::{
    QrCode, TicketCancelled, TicketError, TicketStatus, TicketType, TicketValidated,
    TicketsConfirmed, TicketsGenerated,
};
use time::OffsetDateTime;
use uuid::Uuid;

///
/// Aggregate modelling the lifecycle of one event ticket.
///
/// Constructed only through [Ticket::create] (validating) or
/// [Ticket::restore] (trusted rehydration from persistence).
/// State transitions return the domain event they raise; callers
/// are expected to persist the ticket before acting on the event.
///
#[derive(Clone, Debug)]
pub struct Ticket {
    id: Uuid,
    event_id: Uuid,
    reservation_id: Uuid,
    attendee_id: Uuid,
    ticket_type: TicketType,
    qr_code: QrCode,
    price_paid: f64,
    seat_id: Option<Uuid>,
    section_name: Option<String>,
    status: TicketStatus,
    issued_at: OffsetDateTime,
    payment_id: Option<Uuid>,
    validated_at: Option<OffsetDateTime>,
    validation_location: Option<String>,
    validator_id: Option<Uuid>,
}

///
/// Persisted field values of a ticket, used by store adapters
/// to rehydrate the aggregate without re-running creation rules.
///
pub struct TicketSnapshot {
    pub id: Uuid,
    pub event_id: Uuid,
    pub reservation_id: Uuid,
    pub attendee_id: Uuid,
    pub ticket_type: TicketType,
    pub qr_code: QrCode,
    pub price_paid: f64,
    pub seat_id: Option<Uuid>,
    pub section_name: Option<String>,
    pub status: TicketStatus,
    pub issued_at: OffsetDateTime,
    pub payment_id: Option<Uuid>,
    pub validated_at: Option<OffsetDateTime>,
    pub validation_location: Option<String>,
    pub validator_id: Option<Uuid>,
}

impl Ticket {
    ///
    /// Creates a ticket in [TicketStatus::Pending] state.
    ///
    /// ### Returns
    /// The ticket together with the raised [TicketsGenerated] event
    ///
    /// ### Errors
    /// - [TicketError::InvalidInput] when
    ///     - any of event/reservation/attendee id is nil
    ///     - price is not strictly positive
    /// - [TicketError::InvariantViolation] when
    ///     - a seat id is given without a section name
    ///
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        event_id: Uuid,
        reservation_id: Uuid,
        attendee_id: Uuid,
        ticket_type: TicketType,
        qr_code: QrCode,
        price_paid: f64,
        seat_id: Option<Uuid>,
        section_name: Option<String>,
        issued_at: OffsetDateTime,
    ) -> Result<(Self, TicketsGenerated), TicketError> {
        if event_id.is_nil() {
            return Err(TicketError::InvalidInput("event id is required"));
        }
        if reservation_id.is_nil() {
            return Err(TicketError::InvalidInput("reservation id is required"));
        }
        if attendee_id.is_nil() {
            return Err(TicketError::InvalidInput("attendee id is required"));
        }
        if price_paid <= 0.0 {
            return Err(TicketError::InvalidInput("price must be greater than zero"));
        }
        if seat_id.is_some() && section_name.as_deref().map_or(true, |name| name.trim().is_empty()) {
            return Err(TicketError::InvariantViolation(
                "a numbered seat requires a section",
            ));
        }

        let ticket = Self {
            id: Uuid::new_v4(),
            event_id,
            reservation_id,
            attendee_id,
            ticket_type,
            qr_code,
            price_paid,
            seat_id,
            section_name,
            status: TicketStatus::Pending,
            issued_at,
            payment_id: None,
            validated_at: None,
            validation_location: None,
            validator_id: None,
        };

        let event = TicketsGenerated {
            reservation_id,
            event_id,
            ticket_ids: vec![ticket.id],
            count: 1,
            occurred_at: issued_at,
        };

        Ok((ticket, event))
    }

    ///
    /// Rehydrates a ticket from persisted values without raising
    /// events. Input is trusted, nothing is rejected.
    ///
    pub fn restore(snapshot: TicketSnapshot) -> Self {
        Self {
            id: snapshot.id,
            event_id: snapshot.event_id,
            reservation_id: snapshot.reservation_id,
            attendee_id: snapshot.attendee_id,
            ticket_type: snapshot.ticket_type,
            qr_code: snapshot.qr_code,
            price_paid: snapshot.price_paid,
            seat_id: snapshot.seat_id,
            section_name: snapshot.section_name,
            status: snapshot.status,
            issued_at: snapshot.issued_at,
            payment_id: snapshot.payment_id,
            validated_at: snapshot.validated_at,
            validation_location: snapshot.validation_location,
            validator_id: snapshot.validator_id,
        }
    }

    ///
    /// Confirms the ticket after a successful payment.
    ///
    /// ### Errors
    /// - [TicketError::InvalidInput] when payment id is nil
    /// - [TicketError::IllegalTransition] unless the ticket is pending
    ///
    pub fn confirm(
        &mut self,
        payment_id: Uuid,
        confirmed_at: OffsetDateTime,
    ) -> Result<TicketsConfirmed, TicketError> {
        if payment_id.is_nil() {
            return Err(TicketError::InvalidInput("payment id is required"));
        }
        if self.status != TicketStatus::Pending {
            return Err(TicketError::IllegalTransition(
                "only pending tickets can be confirmed",
            ));
        }

        self.status = TicketStatus::Confirmed;
        self.payment_id = Some(payment_id);

        Ok(TicketsConfirmed {
            reservation_id: self.reservation_id,
            attendee_id: self.attendee_id,
            payment_id,
            ticket_ids: vec![self.id],
            occurred_at: confirmed_at,
        })
    }

    ///
    /// Marks the ticket as used during check-in. Used is terminal,
    /// re-validation is rejected.
    ///
    /// ### Errors
    /// - [TicketError::IllegalTransition] unless the ticket is confirmed
    /// - [TicketError::InvalidInput] when location is blank
    ///   or validator id is nil
    ///
    pub fn validate(
        &mut self,
        location: &str,
        validator_id: Uuid,
        validated_at: OffsetDateTime,
    ) -> Result<TicketValidated, TicketError> {
        if self.status != TicketStatus::Confirmed {
            return Err(TicketError::IllegalTransition(
                "only confirmed tickets can be validated",
            ));
        }
        if location.trim().is_empty() {
            return Err(TicketError::InvalidInput("validation location is required"));
        }
        if validator_id.is_nil() {
            return Err(TicketError::InvalidInput("validator id is required"));
        }

        self.status = TicketStatus::Used;
        self.validated_at = Some(validated_at);
        self.validation_location = Some(location.to_string());
        self.validator_id = Some(validator_id);

        Ok(TicketValidated {
            ticket_id: self.id,
            event_id: self.event_id,
            location: location.to_string(),
            validator_id,
            occurred_at: validated_at,
        })
    }

    ///
    /// Cancels a pending or confirmed ticket. There is no reversal
    /// from cancelled.
    ///
    /// ### Errors
    /// - [TicketError::IllegalTransition] when the ticket is used
    ///   or already cancelled
    /// - [TicketError::InvalidInput] when reason is blank
    ///
    pub fn cancel(
        &mut self,
        reason: &str,
        cancelled_at: OffsetDateTime,
    ) -> Result<TicketCancelled, TicketError> {
        if self.status == TicketStatus::Used {
            return Err(TicketError::IllegalTransition(
                "used tickets cannot be cancelled",
            ));
        }
        if self.status == TicketStatus::Cancelled {
            return Err(TicketError::IllegalTransition("ticket is already cancelled"));
        }
        if reason.trim().is_empty() {
            return Err(TicketError::InvalidInput("cancellation reason is required"));
        }

        self.status = TicketStatus::Cancelled;

        Ok(TicketCancelled {
            ticket_id: self.id,
            seat_id: self.seat_id,
            reason: reason.to_string(),
            occurred_at: cancelled_at,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn reservation_id(&self) -> Uuid {
        self.reservation_id
    }

    pub fn attendee_id(&self) -> Uuid {
        self.attendee_id
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn qr_code(&self) -> &QrCode {
        &self.qr_code
    }

    pub fn price_paid(&self) -> f64 {
        self.price_paid
    }

    pub fn seat_id(&self) -> Option<Uuid> {
        self.seat_id
    }

    pub fn section_name(&self) -> Option<&str> {
        self.section_name.as_deref()
    }

    pub fn status(&self) -> TicketStatus {
        self.status
    }

    pub fn issued_at(&self) -> OffsetDateTime {
        self.issued_at
    }

    pub fn payment_id(&self) -> Option<Uuid> {
        self.payment_id
    }

    pub fn validated_at(&self) -> Option<OffsetDateTime> {
        self.validated_at
    }

    pub fn validation_location(&self) -> Option<&str> {
        self.validation_location.as_deref()
    }

    pub fn validator_id(&self) -> Option<Uuid> {
        self.validator_id
    }
}
