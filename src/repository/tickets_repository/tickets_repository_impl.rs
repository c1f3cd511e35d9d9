use super::{
    entity::{TicketFindEntity, TicketInsertEntity},
    TicketsRepository,
};
use crate::{
    domain::{Ticket, TicketStatus},
    repository::{self, Error},
};
use axum::async_trait;
use bson::{doc, Document};
use mongodb::{
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Database, IndexModel,
};
use uuid::Uuid;

const TICKETS: &str = "tickets";
const INDEX_NAME_UNIQUE_QR_CODE: &str = "unique_qr_code_value";

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!(collection = TICKETS, "creating collection");
        database.create_collection(TICKETS).await?;

        let collection = database.collection::<Document>(TICKETS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_UNIQUE_QR_CODE.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "qr_code_value": 1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_UNIQUE_QR_CODE.to_string())
                                .unique(true)
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = TICKETS,
                index = INDEX_NAME_UNIQUE_QR_CODE,
                "created index"
            );
        }

        Ok(Self { database })
    }

    fn active_statuses() -> Vec<i32> {
        vec![TicketStatus::Pending as i32, TicketStatus::Confirmed as i32]
    }

    fn access_statuses() -> Vec<i32> {
        vec![TicketStatus::Confirmed as i32, TicketStatus::Used as i32]
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(&self, ticket: &Ticket) -> Result<(), repository::Error> {
        let insert_entity = TicketInsertEntity::from(ticket);

        self.database
            .collection::<TicketInsertEntity>(TICKETS)
            .insert_one(insert_entity)
            .await
            .map_err(|err| {
                let ErrorKind::Write(ref write_failure) = *err.kind else {
                    return Error::Mongo(err);
                };

                let WriteFailure::WriteError(write_error) = write_failure else {
                    return Error::Mongo(err);
                };

                const DUPLICATE_KEY_CODE: i32 = 11000;
                match write_error.code == DUPLICATE_KEY_CODE {
                    true => Error::InsertUniqueViolation,
                    false => Error::Mongo(err),
                }
            })?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, repository::Error> {
        let entity = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one(doc! {
                "_id": bson::Uuid::from(id),
            })
            .await?;

        entity.map(Ticket::try_from).transpose()
    }

    async fn find_by_qr_code(&self, qr_code: &str) -> Result<Option<Ticket>, repository::Error> {
        let entity = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one(doc! {
                "qr_code_value": qr_code,
            })
            .await?;

        entity.map(Ticket::try_from).transpose()
    }

    async fn update(&self, ticket: &Ticket) -> Result<(), repository::Error> {
        let update_result = self
            .database
            .collection::<Document>(TICKETS)
            .update_one(
                doc! {
                    "_id": bson::Uuid::from(ticket.id()),
                },
                doc! {
                    "$set": {
                        "status": ticket.status() as i32,
                        "payment_id": ticket.payment_id().map(bson::Uuid::from),
                        "validated_at": ticket.validated_at().map(bson::DateTime::from),
                        "validation_location": ticket.validation_location(),
                        "validator_id": ticket.validator_id().map(bson::Uuid::from),
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn count_active(
        &self,
        event_id: Uuid,
        section_name: Option<String>,
    ) -> Result<u64, repository::Error> {
        let mut filter = doc! {
            "event_id": bson::Uuid::from(event_id),
            "status": { "$in": Self::active_statuses() },
        };
        if let Some(section_name) = section_name {
            filter.insert("section_name", section_name);
        }

        let count = self
            .database
            .collection::<Document>(TICKETS)
            .count_documents(filter)
            .await?;

        Ok(count)
    }

    async fn find_for_access(
        &self,
        event_id: Uuid,
        attendee_id: Uuid,
    ) -> Result<Option<Ticket>, repository::Error> {
        let entity = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one(doc! {
                "event_id": bson::Uuid::from(event_id),
                "attendee_id": bson::Uuid::from(attendee_id),
                "status": { "$in": Self::access_statuses() },
            })
            .sort(doc! {
                "issued_at": -1,
            })
            .await?;

        entity.map(Ticket::try_from).transpose()
    }
}
