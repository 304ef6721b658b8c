use super::{
    check_transition,
    ticket_filter::{matches_search, paginate},
    TicketsService, TransitionActor,
};
use crate::{
    auth::{self, Role, User},
    dto::{input, output},
    error::Error,
    model::{PrecautionRequired, TicketStatus},
    repository::{self, NewTicket, TicketsRepository},
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use time::OffsetDateTime;

/// Compare-and-set attempts before a concurrent status change is reported as conflict
const STATUS_UPDATE_ATTEMPTS: usize = 2;

pub struct TicketsServiceImpl {
    repository: Arc<dyn TicketsRepository>,
}

impl TicketsServiceImpl {
    pub fn new(repository: Arc<dyn TicketsRepository>) -> Self {
        Self { repository }
    }

    fn parse_id(id: &str) -> Result<ObjectId, Error> {
        ObjectId::parse_str(id).map_err(|_| Error::TicketNotExist)
    }

    fn required(value: String, message: &'static str) -> Result<String, Error> {
        let value = value.trim();
        if value.is_empty() {
            return Err(Error::Validation(message));
        }

        Ok(value.to_string())
    }

    fn validate_new_ticket(
        requester_identifier: &str,
        ticket: input::Ticket,
    ) -> Result<NewTicket, Error> {
        let patient_name = Self::required(ticket.patient_name, "patientName is required")?;
        let origin_location =
            Self::required(ticket.origin_location, "originLocation is required")?;
        let destination_location =
            Self::required(ticket.destination_location, "destinationLocation is required")?;
        let bed_label = Self::required(ticket.bed_label, "bedLabel is required")?;
        let transport_mode = ticket
            .transport_mode
            .ok_or(Error::Validation("transportMode is required"))?;

        let precaution_type = match ticket.precaution_required {
            PrecautionRequired::Yes => Self::required(
                ticket.precaution_type.unwrap_or_default(),
                "precautionType is required when precaution is required",
            )?,
            PrecautionRequired::No => String::new(),
        };

        Ok(NewTicket {
            patient_name,
            origin_location,
            destination_location,
            bed_label,
            transport_mode,
            precaution_required: ticket.precaution_required,
            precaution_type,
            notes: ticket.notes.trim().to_string(),
            status: TicketStatus::Pending,
            created_at: OffsetDateTime::now_utc(),
            requester_identifier: requester_identifier.to_string(),
        })
    }

    async fn change_status(
        &self,
        id: &str,
        user: &User,
        requested: TicketStatus,
    ) -> Result<output::Ticket, Error> {
        let id = Self::parse_id(id)?;
        let role = auth::user_role(user)?;

        let mut attempts_left = STATUS_UPDATE_ATTEMPTS;
        loop {
            let ticket = self
                .repository
                .find(id)
                .await?
                .ok_or(Error::TicketNotExist)?;

            let actor = TransitionActor {
                role,
                is_owner: ticket.requester_identifier == user.identifier,
            };
            check_transition(ticket.status, requested, actor)?;

            let update_result = self
                .repository
                .update_status(id, ticket.status, requested)
                .await;
            attempts_left -= 1;

            match update_result {
                Ok(ticket) => {
                    tracing::info!(status = %ticket.status, "changed ticket status");
                    return Ok(ticket.into());
                }
                Err(repository::Error::NoDocumentUpdated) if attempts_left > 0 => {
                    // status changed since it was read, decide again on the fresh one
                    tracing::info!(
                        read_status = %ticket.status,
                        "ticket status changed concurrently"
                    );
                }
                Err(repository::Error::NoDocumentUpdated) => {
                    return Err(Error::InvalidTransition {
                        from: ticket.status,
                        to: requested,
                    });
                }
                Err(err) => return Err(Error::Database(err)),
            }
        }
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn list_tickets(
        &self,
        filters: input::TicketFilters,
        pagination: input::Pagination,
    ) -> Result<Vec<output::Ticket>, Error> {
        tracing::info!("finding tickets");
        tracing::trace!(?filters, ?pagination);

        let tickets = self.repository.find_all().await?;

        let search = filters
            .search
            .map(|search| search.trim().to_lowercase())
            .filter(|search| !search.is_empty());
        let tickets = match search {
            Some(search) => tickets
                .into_iter()
                .filter(|ticket| matches_search(ticket, &search))
                .collect(),
            None => tickets,
        };

        let tickets = paginate(tickets, &pagination);
        tracing::info!(count = tickets.len(), "found tickets");

        let tickets = tickets.into_iter().map(output::Ticket::from).collect();

        Ok(tickets)
    }

    async fn tickets_summary(&self) -> Result<output::TicketsSummary, Error> {
        tracing::info!("counting tickets");

        let tickets = self.repository.find_all().await?;
        let summary = tickets.iter().collect::<output::TicketsSummary>();

        tracing::info!(total = summary.total, "counted tickets");

        Ok(summary)
    }

    async fn create_ticket(
        &self,
        user: &User,
        ticket: input::Ticket,
    ) -> Result<output::Ticket, Error> {
        tracing::info!("creating ticket");
        tracing::trace!(?ticket);

        auth::require_role(user, Role::Requester)?;
        let new_ticket = Self::validate_new_ticket(&user.identifier, ticket)?;

        let ticket = self.repository.insert(new_ticket).await?;
        tracing::info!(id = %ticket.id, "created ticket");

        Ok(ticket.into())
    }

    async fn update_ticket_status(
        &self,
        id: &str,
        user: &User,
        update: input::TicketStatusUpdate,
    ) -> Result<output::Ticket, Error> {
        tracing::info!(id, status = %update.status, "updating ticket status");

        self.change_status(id, user, update.status).await
    }

    async fn cancel_ticket(&self, id: &str, user: &User) -> Result<output::Ticket, Error> {
        tracing::info!(id, "cancelling ticket");

        self.change_status(id, user, TicketStatus::Cancelled).await
    }
}
