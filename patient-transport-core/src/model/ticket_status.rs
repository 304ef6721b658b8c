use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display)]
pub enum TicketStatus {
    #[serde(rename = "Pendente")]
    #[strum(serialize = "Pendente")]
    Pending,

    #[serde(rename = "Em Transporte")]
    #[strum(serialize = "Em Transporte")]
    InTransit,

    #[serde(rename = "Concluído")]
    #[strum(serialize = "Concluído")]
    Completed,

    #[serde(rename = "Cancelado")]
    #[strum(serialize = "Cancelado")]
    Cancelled,
}

impl TicketStatus {
    ///
    /// Terminal tickets never change status again
    ///
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}
