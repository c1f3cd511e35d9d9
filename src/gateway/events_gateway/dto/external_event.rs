use super::{EventSection, EventSnapshot};
use serde::Deserialize;
use uuid::Uuid;

///
/// Wire representation of GET /api/eventos/{id}. Field names
/// are fixed by the events service contract.
///
#[derive(Debug, Deserialize)]
pub struct ExternalEvent {
    pub id: Uuid,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "secciones", default)]
    pub sections: Vec<ExternalSection>,
}

#[derive(Debug, Deserialize)]
pub struct ExternalSection {
    pub id: Uuid,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "capacidad")]
    pub capacity: u32,
}

impl From<ExternalEvent> for EventSnapshot {
    fn from(event: ExternalEvent) -> Self {
        Self {
            id: event.id,
            status: event.status,
            sections: event
                .sections
                .into_iter()
                .map(|section| EventSection {
                    id: section.id,
                    name: section.name,
                    capacity: section.capacity,
                })
                .collect(),
        }
    }
}
