use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Find tickets matching filters, newest first
    ///
    async fn list_tickets(
        &self,
        filters: input::TicketFilters,
        pagination: input::Pagination,
    ) -> Result<Vec<output::Ticket>, Error>;

    ///
    /// Count tickets in each status
    ///
    async fn tickets_summary(&self) -> Result<output::TicketsSummary, Error>;

    ///
    /// Create new pending ticket on behalf of the requester
    ///
    /// ### Errors
    /// - [Error::Auth] when user is not a requester
    /// - [Error::Validation] when
    ///     - any of required fields is empty
    ///     - precaution is required but its type is empty
    ///
    async fn create_ticket(
        &self,
        user: &User,
        ticket: input::Ticket,
    ) -> Result<output::Ticket, Error>;

    ///
    /// Move ticket to requested status
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when id is malformed or ticket does not exist
    /// - [Error::NotPermitted] when user may not perform the transition
    /// - [Error::AlreadyTerminal] when ticket is cancelled or completed
    /// - [Error::InvalidTransition] when
    ///     - transition is not allowed
    ///     - ticket status kept changing concurrently
    ///
    async fn update_ticket_status(
        &self,
        id: &str,
        user: &User,
        update: input::TicketStatusUpdate,
    ) -> Result<output::Ticket, Error>;

    ///
    /// Cancel ticket created by the user
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when id is malformed or ticket does not exist
    /// - [Error::NotPermitted] when ticket was created by someone else
    /// - [Error::AlreadyTerminal] when ticket is cancelled or completed
    ///
    async fn cancel_ticket(&self, id: &str, user: &User) -> Result<output::Ticket, Error>;
}
