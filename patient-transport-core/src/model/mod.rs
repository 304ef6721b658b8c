//!
//! Ticket value types shared by all layers.
//! Serialized values are the ones stored in database and exchanged with clients.
//!

mod precaution_required;
mod ticket_status;
mod transport_mode;

pub use precaution_required::*;
pub use ticket_status::*;
pub use transport_mode::*;
