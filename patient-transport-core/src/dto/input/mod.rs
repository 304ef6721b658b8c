mod credentials;
mod pagination;
mod password_change;
mod ticket;
mod ticket_filters;
mod ticket_status_update;

pub use credentials::*;
pub use pagination::*;
pub use password_change::*;
pub use ticket::*;
pub use ticket_filters::*;
pub use ticket_status_update::*;
