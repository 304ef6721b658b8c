mod session;
mod ticket;
mod tickets_summary;

pub use session::*;
pub use ticket::*;
pub use tickets_summary::*;
