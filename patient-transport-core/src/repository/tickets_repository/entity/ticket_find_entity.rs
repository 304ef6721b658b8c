use crate::model::{PrecautionRequired, TicketStatus, TransportMode};
use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TicketFindEntity {
    pub _id: ObjectId,

    pub patient_name: String,
    pub origin_location: String,
    pub destination_location: String,
    pub bed_label: String,
    pub transport_mode: TransportMode,
    pub precaution_required: PrecautionRequired,
    pub precaution_type: String,
    pub notes: String,

    pub status: TicketStatus,
    pub created_at: DateTime,
    pub requester_identifier: String,
}
