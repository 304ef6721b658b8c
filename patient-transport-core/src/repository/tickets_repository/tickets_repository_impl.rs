use super::{
    entity::{TicketFindEntity, TicketInsertEntity},
    NewTicket, Ticket, TicketsRepository,
};
use crate::{
    model::TicketStatus,
    repository::{ensure_collection, Error},
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime};
use futures_util::TryStreamExt;
use mongodb::{
    error::ErrorKind,
    options::{IndexOptions, ReturnDocument},
    Database, IndexModel,
};
use std::sync::Arc;

const TICKETS: &str = "tickets";
const INDEX_NAME_CREATED_AT: &str = "index_created_at";

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        ensure_collection(&database, TICKETS).await?;

        let collection = database.collection::<TicketFindEntity>(TICKETS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_CREATED_AT.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "created_at": -1,
                            "_id": -1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_CREATED_AT.to_string())
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = TICKETS,
                index = INDEX_NAME_CREATED_AT,
                "created index"
            );
        }

        Ok(Self { database })
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(&self, mut ticket: NewTicket) -> Result<Ticket, Error> {
        let created_at = DateTime::from(ticket.created_at);

        let insert_entity = TicketInsertEntity {
            patient_name: &ticket.patient_name,
            origin_location: &ticket.origin_location,
            destination_location: &ticket.destination_location,
            bed_label: &ticket.bed_label,
            transport_mode: ticket.transport_mode,
            precaution_required: ticket.precaution_required,
            precaution_type: &ticket.precaution_type,
            notes: &ticket.notes,
            status: ticket.status,
            created_at,
            requester_identifier: &ticket.requester_identifier,
        };

        let insert_result = self
            .database
            .collection::<TicketInsertEntity>(TICKETS)
            .insert_one(&insert_entity)
            .await
            .map_err(Error::from_insert_error)?;

        let Bson::ObjectId(id) = insert_result.inserted_id else {
            tracing::error!("invalid type of inserted '_id'");
            return Err(Error::Mongo(
                ErrorKind::Custom(Arc::new("invalid type of inserted '_id'")).into(),
            ));
        };

        ticket.created_at = created_at.into();

        Ok(Ticket::from_new_ticket(id, ticket))
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Ticket>, Error> {
        let ticket = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one(doc! { "_id": id })
            .await?
            .map(Ticket::from);

        Ok(ticket)
    }

    async fn find_all(&self) -> Result<Vec<Ticket>, Error> {
        let tickets: Vec<Ticket> = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find(doc! {})
            .sort(doc! {
                "created_at": -1,
                "_id": -1,
            })
            .await?
            .map_ok(Ticket::from)
            .try_collect()
            .await?;

        Ok(tickets)
    }

    async fn update_status(
        &self,
        id: ObjectId,
        current_status: TicketStatus,
        new_status: TicketStatus,
    ) -> Result<Ticket, Error> {
        let ticket = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one_and_update(
                doc! {
                    "_id": id,
                    "status": current_status.as_ref(),
                },
                doc! {
                    "$set": {
                        "status": new_status.as_ref(),
                    }
                },
            )
            .return_document(ReturnDocument::After)
            .await?
            .ok_or(Error::NoDocumentUpdated)?;

        Ok(ticket.into())
    }
}
