use super::{AdmissionService, CapacityRequest};
use crate::{error::Error, gateway::EventsGateway, repository::TicketsRepository};
use axum::async_trait;
use std::sync::Arc;
use uuid::Uuid;

///
/// Status the events service reports for an event that may issue
/// tickets. Compared case-insensitively.
///
const PUBLISHED_STATUS: &str = "Publicado";

pub struct AdmissionServiceImpl {
    events_gateway: Arc<dyn EventsGateway>,
    tickets_repository: Arc<dyn TicketsRepository>,
}

impl AdmissionServiceImpl {
    pub fn new(
        events_gateway: Arc<dyn EventsGateway>,
        tickets_repository: Arc<dyn TicketsRepository>,
    ) -> Self {
        Self {
            events_gateway,
            tickets_repository,
        }
    }
}

#[async_trait]
impl AdmissionService for AdmissionServiceImpl {
    async fn ensure_can_admit(
        &self,
        event_id: Uuid,
        requests: &[CapacityRequest],
    ) -> Result<(), Error> {
        tracing::info!(%event_id, requests = requests.len(), "checking admission");

        let event = self.events_gateway.event_snapshot(event_id).await?;

        if !event.status.eq_ignore_ascii_case(PUBLISHED_STATUS) {
            return Err(Error::EventNotPublished {
                event_id,
                status: event.status,
            });
        }

        for request in requests {
            let capacity = match &request.section_name {
                Some(section_name) => {
                    let section = event
                        .sections
                        .iter()
                        .find(|section| section.name.eq_ignore_ascii_case(section_name))
                        .ok_or_else(|| Error::UnknownSection {
                            event_id,
                            section_name: section_name.clone(),
                        })?;

                    section.capacity
                }
                // Events without declared sections are unbounded
                None if event.sections.is_empty() => continue,
                None => return Err(Error::SectionRequired { event_id }),
            };

            let active_count = self
                .tickets_repository
                .count_active(event_id, request.section_name.clone())
                .await?;

            if active_count + u64::from(request.quantity) > u64::from(capacity) {
                return Err(Error::CapacityExceeded {
                    section: request
                        .section_name
                        .clone()
                        .unwrap_or_else(|| "General".to_string()),
                    remaining: u64::from(capacity).saturating_sub(active_count),
                    requested: request.quantity,
                });
            }
        }

        tracing::info!(%event_id, "admission granted");

        Ok(())
    }
}
