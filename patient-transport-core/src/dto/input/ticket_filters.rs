use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct TicketFilters {
    ///
    /// Case-insensitive text looked up in patient name, locations, bed,
    /// transport mode, requester, status and id
    ///
    pub search: Option<String>,
}
