use crate::model::{PrecautionRequired, TicketStatus, TransportMode};
use time::OffsetDateTime;

///
/// Already validated and normalized ticket that is about to be stored
///
#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub patient_name: String,
    pub origin_location: String,
    pub destination_location: String,
    pub bed_label: String,
    pub transport_mode: TransportMode,
    pub precaution_required: PrecautionRequired,
    pub precaution_type: String,
    pub notes: String,
    pub status: TicketStatus,
    pub created_at: OffsetDateTime,
    pub requester_identifier: String,
}
