use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Generates pending tickets for a reservation after the
    /// admission check passed.
    ///
    /// ### Returns
    /// [output::GeneratedTickets] with the ids of created tickets
    ///
    /// ### Errors
    /// - [Error::Validation] when the item list is empty
    /// - admission errors, see
    ///   [AdmissionService](crate::service::admission_service::AdmissionService)
    /// - [Error::Ticket] when a ticket item violates creation rules
    /// - [Error::QrCodeAlreadyRegistered] when a qr code value is
    ///   already stored
    ///
    /// Items persist independently. When an item fails mid-batch,
    /// tickets created by earlier items remain stored.
    ///
    async fn generate_tickets(
        &self,
        request: input::GenerateTickets,
    ) -> Result<output::GeneratedTickets, Error>;

    ///
    /// Confirms the listed tickets against a payment, one by one.
    ///
    /// ### Errors
    /// - [Error::Validation] when the id list is empty
    /// - [Error::TicketNotExist] when an id is unknown
    /// - [Error::Ticket] when a ticket is not pending
    ///
    async fn confirm_tickets(&self, request: input::ConfirmTickets) -> Result<(), Error>;

    ///
    /// Marks a ticket as used during check-in, looked up by its
    /// scanned qr code value.
    ///
    /// ### Errors
    /// - [Error::Validation] when the qr code is blank
    /// - [Error::TicketQrCodeNotExist] when the qr code is unknown
    /// - [Error::Ticket] when the ticket is not confirmed
    ///
    async fn validate_ticket(&self, request: input::ValidateTicket) -> Result<(), Error>;

    ///
    /// Cancels a pending or confirmed ticket.
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when the id is unknown
    /// - [Error::Ticket] when the ticket is used or already cancelled
    ///
    async fn cancel_ticket(&self, request: input::CancelTicket) -> Result<(), Error>;

    ///
    /// Reports whether the user currently holds valid access to
    /// the event. Never fails when no ticket is found.
    ///
    async fn check_access(&self, request: input::CheckAccess)
        -> Result<output::CheckAccess, Error>;
}
