use super::TicketsService;
use crate::{
    domain::{QrCode, Ticket},
    dto::{input, output},
    error::Error,
    repository::{self, TicketsRepository},
    service::{
        admission_service::{AdmissionService, CapacityRequest},
        fanout_service::FanoutService,
    },
};
use axum::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;

pub struct TicketsServiceImpl {
    tickets_repository: Arc<dyn TicketsRepository>,
    admission_service: Arc<dyn AdmissionService>,
    fanout_service: Arc<dyn FanoutService>,
}

impl TicketsServiceImpl {
    pub fn new(
        tickets_repository: Arc<dyn TicketsRepository>,
        admission_service: Arc<dyn AdmissionService>,
        fanout_service: Arc<dyn FanoutService>,
    ) -> Self {
        Self {
            tickets_repository,
            admission_service,
            fanout_service,
        }
    }

    async fn update_ticket(&self, ticket: &Ticket) -> Result<(), Error> {
        self.tickets_repository
            .update(ticket)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::TicketNotExist(ticket.id()),
                err => Error::Database(err),
            })
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn generate_tickets(
        &self,
        request: input::GenerateTickets,
    ) -> Result<output::GeneratedTickets, Error> {
        tracing::info!(
            event_id = %request.event_id,
            reservation_id = %request.reservation_id,
            items = request.items.len(),
            "generating tickets"
        );

        if request.items.is_empty() {
            return Err(Error::Validation("at least one ticket item is required"));
        }

        let issued_at = request.issued_at.unwrap_or_else(OffsetDateTime::now_utc);

        let capacity_requests = request
            .items
            .iter()
            .map(|item| CapacityRequest {
                section_name: item.section_name.clone(),
                seat_id: item.seat_id,
                quantity: 1,
            })
            .collect::<Vec<_>>();
        self.admission_service
            .ensure_can_admit(request.event_id, &capacity_requests)
            .await?;

        let mut ticket_ids = Vec::with_capacity(request.items.len());
        for item in request.items {
            let qr_code = QrCode::new(item.qr_code_value, item.qr_code_image)?;
            let (ticket, event) = Ticket::create(
                request.event_id,
                request.reservation_id,
                request.attendee_id,
                item.ticket_type,
                qr_code,
                item.price,
                item.seat_id,
                item.section_name,
                issued_at,
            )?;

            self.tickets_repository
                .insert(&ticket)
                .await
                .map_err(|err| match err {
                    repository::Error::InsertUniqueViolation => Error::QrCodeAlreadyRegistered,
                    err => Error::Database(err),
                })?;
            self.fanout_service.send_event(event.into()).await;

            ticket_ids.push(ticket.id());
        }

        tracing::info!(?ticket_ids, "generated tickets");

        Ok(output::GeneratedTickets { ticket_ids })
    }

    async fn confirm_tickets(&self, request: input::ConfirmTickets) -> Result<(), Error> {
        tracing::info!(
            payment_id = %request.payment_id,
            tickets = request.ticket_ids.len(),
            "confirming tickets"
        );

        if request.ticket_ids.is_empty() {
            return Err(Error::Validation("at least one ticket id is required"));
        }

        for ticket_id in request.ticket_ids {
            let mut ticket = self
                .tickets_repository
                .find_by_id(ticket_id)
                .await?
                .ok_or(Error::TicketNotExist(ticket_id))?;

            let event = ticket.confirm(request.payment_id, request.confirmed_at)?;
            self.update_ticket(&ticket).await?;
            self.fanout_service.send_event(event.into()).await;

            tracing::info!(%ticket_id, "confirmed ticket");
        }

        Ok(())
    }

    async fn validate_ticket(&self, request: input::ValidateTicket) -> Result<(), Error> {
        tracing::info!("validating ticket");

        if request.qr_code.trim().is_empty() {
            return Err(Error::Validation("qr code is required"));
        }

        let mut ticket = self
            .tickets_repository
            .find_by_qr_code(&request.qr_code)
            .await?
            .ok_or(Error::TicketQrCodeNotExist)?;

        let event = ticket.validate(&request.location, request.validator_id, request.validated_at)?;
        self.update_ticket(&ticket).await?;
        self.fanout_service.send_event(event.into()).await;

        tracing::info!(ticket_id = %ticket.id(), "validated ticket");

        Ok(())
    }

    async fn cancel_ticket(&self, request: input::CancelTicket) -> Result<(), Error> {
        tracing::info!(ticket_id = %request.ticket_id, "cancelling ticket");

        let mut ticket = self
            .tickets_repository
            .find_by_id(request.ticket_id)
            .await?
            .ok_or(Error::TicketNotExist(request.ticket_id))?;

        let event = ticket.cancel(&request.reason, request.cancelled_at)?;
        self.update_ticket(&ticket).await?;
        self.fanout_service.send_event(event.into()).await;

        tracing::info!(ticket_id = %ticket.id(), "cancelled ticket");

        Ok(())
    }

    async fn check_access(
        &self,
        request: input::CheckAccess,
    ) -> Result<output::CheckAccess, Error> {
        tracing::info!(
            event_id = %request.event_id,
            user_id = %request.user_id,
            "checking access"
        );

        let ticket = self
            .tickets_repository
            .find_for_access(request.event_id, request.user_id)
            .await?;

        let check_access = match ticket {
            Some(ticket) => output::CheckAccess {
                has_access: true,
                ticket_id: Some(ticket.id()),
                ticket_type: Some(ticket.ticket_type().to_string()),
                status: ticket.status().to_string(),
            },
            None => output::CheckAccess {
                has_access: false,
                ticket_id: None,
                ticket_type: None,
                status: "None".to_string(),
            },
        };

        Ok(check_access)
    }
}
