use crate::model::TicketStatus;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TicketStatusUpdate {
    pub status: TicketStatus,
}
