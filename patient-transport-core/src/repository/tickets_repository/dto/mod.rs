mod new_ticket;
mod ticket;

pub use new_ticket::*;
pub use ticket::*;
