use crate::{auth::Role, error::Error, model::TicketStatus};

///
/// User trying to change ticket status
///
#[derive(Debug, Clone, Copy)]
pub struct TransitionActor {
    pub role: Role,
    /// Actor is the requester who created the ticket
    pub is_owner: bool,
}

///
/// Decides whether actor may move ticket from `current` to `requested` status.
///
/// ### Errors
/// - [Error::NotPermitted] when
///     - cancelling ticket created by someone else
///     - moving ticket through transport without executor role
/// - [Error::AlreadyTerminal] when ticket is cancelled or completed
/// - [Error::InvalidTransition] when transition skips or reverts a step
///
pub fn check_transition(
    current: TicketStatus,
    requested: TicketStatus,
    actor: TransitionActor,
) -> Result<(), Error> {
    match requested {
        TicketStatus::Cancelled if !actor.is_owner => {
            return Err(Error::NotPermitted(
                "only requester of the ticket may cancel it",
            ));
        }
        TicketStatus::InTransit | TicketStatus::Completed if actor.role != Role::Executor => {
            return Err(Error::NotPermitted(
                "only executor may move ticket through transport",
            ));
        }
        _ => {}
    }

    if current.is_terminal() {
        return Err(Error::AlreadyTerminal(current));
    }

    match (current, requested) {
        (TicketStatus::Pending, TicketStatus::InTransit)
        | (TicketStatus::InTransit, TicketStatus::Completed)
        | (TicketStatus::Pending | TicketStatus::InTransit, TicketStatus::Cancelled) => Ok(()),
        (from, to) => Err(Error::InvalidTransition { from, to }),
    }
}
