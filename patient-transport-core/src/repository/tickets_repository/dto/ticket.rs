use super::NewTicket;
use crate::{
    model::{PrecautionRequired, TicketStatus, TransportMode},
    repository::tickets_repository::entity::TicketFindEntity,
};
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: ObjectId,
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

impl Ticket {
    pub fn from_new_ticket(id: ObjectId, ticket: NewTicket) -> Self {
        Self {
            id,
            patient_name: ticket.patient_name,
            origin_location: ticket.origin_location,
            destination_location: ticket.destination_location,
            bed_label: ticket.bed_label,
            transport_mode: ticket.transport_mode,
            precaution_required: ticket.precaution_required,
            precaution_type: ticket.precaution_type,
            notes: ticket.notes,
            status: ticket.status,
            created_at: ticket.created_at,
            requester_identifier: ticket.requester_identifier,
        }
    }
}

impl From<TicketFindEntity> for Ticket {
    fn from(value: TicketFindEntity) -> Self {
        Self {
            id: value._id,
            patient_name: value.patient_name,
            origin_location: value.origin_location,
            destination_location: value.destination_location,
            bed_label: value.bed_label,
            transport_mode: value.transport_mode,
            precaution_required: value.precaution_required,
            precaution_type: value.precaution_type,
            notes: value.notes,
            status: value.status,
            created_at: value.created_at.into(),
            requester_identifier: value.requester_identifier,
        }
    }
}
