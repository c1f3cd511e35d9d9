use super::TicketsRepository;
use crate::{
    domain::{Ticket, TicketStatus},
    repository::{self, Error},
};
use axum::async_trait;
use std::{collections::HashMap, sync::RwLock};
use uuid::Uuid;

///
/// Store adapter backed by process memory. Honors the same
/// contract as the database adapter, including the qr code
/// uniqueness rule.
///
#[derive(Default)]
pub struct InMemoryTicketsRepository {
    tickets: RwLock<HashMap<Uuid, Ticket>>,
}

impl InMemoryTicketsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TicketsRepository for InMemoryTicketsRepository {
    async fn insert(&self, ticket: &Ticket) -> Result<(), repository::Error> {
        let mut tickets = self.tickets.write().expect("tickets lock poisoned");

        let qr_code_taken = tickets
            .values()
            .any(|stored| stored.qr_code().value() == ticket.qr_code().value());
        if qr_code_taken || tickets.contains_key(&ticket.id()) {
            return Err(Error::InsertUniqueViolation);
        }

        tickets.insert(ticket.id(), ticket.clone());

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, repository::Error> {
        let tickets = self.tickets.read().expect("tickets lock poisoned");

        Ok(tickets.get(&id).cloned())
    }

    async fn find_by_qr_code(&self, qr_code: &str) -> Result<Option<Ticket>, repository::Error> {
        let tickets = self.tickets.read().expect("tickets lock poisoned");

        Ok(tickets
            .values()
            .find(|ticket| ticket.qr_code().value() == qr_code)
            .cloned())
    }

    async fn update(&self, ticket: &Ticket) -> Result<(), repository::Error> {
        let mut tickets = self.tickets.write().expect("tickets lock poisoned");

        match tickets.contains_key(&ticket.id()) {
            true => {
                tickets.insert(ticket.id(), ticket.clone());
                Ok(())
            }
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn count_active(
        &self,
        event_id: Uuid,
        section_name: Option<String>,
    ) -> Result<u64, repository::Error> {
        let tickets = self.tickets.read().expect("tickets lock poisoned");

        let count = tickets
            .values()
            .filter(|ticket| ticket.event_id() == event_id && ticket.status().is_active())
            .filter(|ticket| match &section_name {
                Some(section_name) => ticket.section_name() == Some(section_name.as_str()),
                None => true,
            })
            .count();

        Ok(count as u64)
    }

    async fn find_for_access(
        &self,
        event_id: Uuid,
        attendee_id: Uuid,
    ) -> Result<Option<Ticket>, repository::Error> {
        let tickets = self.tickets.read().expect("tickets lock poisoned");

        Ok(tickets
            .values()
            .filter(|ticket| {
                ticket.event_id() == event_id
                    && ticket.attendee_id() == attendee_id
                    && matches!(
                        ticket.status(),
                        TicketStatus::Confirmed | TicketStatus::Used
                    )
            })
            .max_by_key(|ticket| ticket.issued_at())
            .cloned())
    }
}
