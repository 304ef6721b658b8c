use super::{NewTicket, Ticket};
use crate::{model::TicketStatus, repository::Error};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Inserts new ticket.
    /// `created_at` of returned ticket is truncated to the precision of the storage.
    ///
    async fn insert(&self, ticket: NewTicket) -> Result<Ticket, Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<Ticket>, Error>;

    ///
    /// Finds all tickets.
    /// Tickets are sorted descending by creation date, then by id.
    ///
    async fn find_all(&self) -> Result<Vec<Ticket>, Error>;

    ///
    /// Changes ticket status as long as it still equals `current_status`
    ///
    /// ### Returns
    /// Updated ticket
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when
    ///     - ticket does not exist
    ///     - ticket status is different than `current_status`
    ///
    async fn update_status(
        &self,
        id: ObjectId,
        current_status: TicketStatus,
        new_status: TicketStatus,
    ) -> Result<Ticket, Error>;
}
