mod ticket_filter;
mod ticket_transition;
mod tickets_service;
mod tickets_service_impl;

pub use ticket_transition::*;
pub use tickets_service::*;
pub use tickets_service_impl::*;
