use crate::{
    model::{PrecautionRequired, TicketStatus, TransportMode},
    repository,
};
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub patient_name: String,
    pub origin_location: String,
    pub destination_location: String,
    pub bed_label: String,
    pub transport_mode: TransportMode,
    pub precaution_required: PrecautionRequired,
    pub precaution_type: String,
    pub notes: String,
    pub status: TicketStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub requester_identifier: String,
}

impl From<repository::Ticket> for Ticket {
    fn from(value: repository::Ticket) -> Self {
        Self {
            id: value.id.to_hex(),
            patient_name: value.patient_name,
            origin_location: value.origin_location,
            destination_location: value.destination_location,
            bed_label: value.bed_label,
            transport_mode: value.transport_mode,
            precaution_required: value.precaution_required,
            precaution_type: value.precaution_type,
            notes: value.notes,
            status: value.status,
            created_at: value.created_at,
            requester_identifier: value.requester_identifier,
        }
    }
}
