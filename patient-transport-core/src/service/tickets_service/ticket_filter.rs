use crate::{dto::input, repository::Ticket};

///
/// Checks whether lowercase `search` is contained in any of searchable ticket fields
///
pub fn matches_search(ticket: &Ticket, search: &str) -> bool {
    let id = ticket.id.to_hex();
    let fields = [
        ticket.patient_name.as_str(),
        ticket.origin_location.as_str(),
        ticket.destination_location.as_str(),
        ticket.bed_label.as_str(),
        ticket.transport_mode.as_ref(),
        ticket.requester_identifier.as_str(),
        ticket.status.as_ref(),
        id.as_str(),
    ];

    fields
        .iter()
        .any(|field| field.to_lowercase().contains(search))
}

pub fn paginate<T>(items: Vec<T>, pagination: &input::Pagination) -> Vec<T> {
    let Some(page_size) = pagination.page_size else {
        return items;
    };

    let page_size = page_size as usize;
    let page_idx = pagination.page_idx.unwrap_or(0) as usize;

    items
        .into_iter()
        .skip(page_idx.saturating_mul(page_size))
        .take(page_size)
        .collect()
}
