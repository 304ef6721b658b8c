use super::{NewTicket, Ticket, TicketsRepository};
use crate::{model::TicketStatus, repository::Error};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Mutex;

///
/// Tickets kept in process memory, lost on restart.
/// Used in place of database in tests.
///
#[derive(Default)]
pub struct TicketsRepositoryMemory {
    tickets: Mutex<Vec<Ticket>>,
}

impl TicketsRepositoryMemory {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Ticket>> {
        // a panic while holding the lock leaves the list intact
        self.tickets
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryMemory {
    async fn insert(&self, ticket: NewTicket) -> Result<Ticket, Error> {
        let ticket = Ticket::from_new_ticket(ObjectId::new(), ticket);
        self.lock().push(ticket.clone());

        Ok(ticket)
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Ticket>, Error> {
        let ticket = self.lock().iter().find(|ticket| ticket.id == id).cloned();

        Ok(ticket)
    }

    async fn find_all(&self) -> Result<Vec<Ticket>, Error> {
        let mut tickets = self.lock().clone();
        tickets.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(tickets)
    }

    async fn update_status(
        &self,
        id: ObjectId,
        current_status: TicketStatus,
        new_status: TicketStatus,
    ) -> Result<Ticket, Error> {
        let mut tickets = self.lock();
        let ticket = tickets
            .iter_mut()
            .find(|ticket| ticket.id == id && ticket.status == current_status)
            .ok_or(Error::NoDocumentUpdated)?;

        ticket.status = new_status;

        Ok(ticket.clone())
    }
}
