use crate::{model::TicketStatus, repository};
use serde::Serialize;

///
/// Number of tickets in each status
///
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketsSummary {
    pub total: usize,
    pub pending: usize,
    pub in_transit: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl<'a> FromIterator<&'a repository::Ticket> for TicketsSummary {
    fn from_iter<T: IntoIterator<Item = &'a repository::Ticket>>(iter: T) -> Self {
        let mut summary = Self::default();

        for ticket in iter {
            summary.total += 1;
            match ticket.status {
                TicketStatus::Pending => summary.pending += 1,
                TicketStatus::InTransit => summary.in_transit += 1,
                TicketStatus::Completed => summary.completed += 1,
                TicketStatus::Cancelled => summary.cancelled += 1,
            }
        }

        summary
    }
}
