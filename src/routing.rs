use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::tickets_service::TicketsService,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/api/tickets/generar", post(generate_tickets))
        .route("/api/tickets/confirmar", post(confirm_tickets))
        .route("/api/tickets/validar", post(validate_ticket))
        .route("/api/tickets/cancelar", post(cancel_ticket))
        .route("/api/tickets/check-access", get(check_access))
}

async fn generate_tickets(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Json(request): Json<input::GenerateTickets>,
) -> Result<(StatusCode, Json<output::GeneratedTickets>), Error> {
    let generated = tickets_service.generate_tickets(request).await?;

    Ok((StatusCode::CREATED, Json(generated)))
}

async fn confirm_tickets(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Json(request): Json<input::ConfirmTickets>,
) -> Result<StatusCode, Error> {
    tickets_service.confirm_tickets(request).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn validate_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Json(request): Json<input::ValidateTicket>,
) -> Result<StatusCode, Error> {
    tickets_service.validate_ticket(request).await?;

    Ok(StatusCode::OK)
}

async fn cancel_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Json(request): Json<input::CancelTicket>,
) -> Result<StatusCode, Error> {
    tickets_service.cancel_ticket(request).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn check_access(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Query(request): Query<input::CheckAccess>,
) -> Result<Json<output::CheckAccess>, Error> {
    let check_access = tickets_service.check_access(request).await?;

    Ok(Json(check_access))
}
