use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct GeneratedTickets {
    pub ticket_ids: Vec<Uuid>,
}
