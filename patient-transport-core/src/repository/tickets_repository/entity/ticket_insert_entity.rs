use crate::model::{PrecautionRequired, TicketStatus, TransportMode};
use bson::DateTime;
use serde::Serialize;

#[derive(Serialize)]
pub struct TicketInsertEntity<'a> {
    pub patient_name: &'a str,
    pub origin_location: &'a str,
    pub destination_location: &'a str,
    pub bed_label: &'a str,
    pub transport_mode: TransportMode,
    pub precaution_required: PrecautionRequired,
    pub precaution_type: &'a str,
    pub notes: &'a str,

    pub status: TicketStatus,
    pub created_at: DateTime,
    pub requester_identifier: &'a str,
}
