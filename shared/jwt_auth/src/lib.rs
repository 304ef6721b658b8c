//!
//! JWT session handling shared by services.
//!
//! Tokens carry the user identifier, role, display name and expiry.
//! [JwtAuthLayer] validates them on every request and inserts [User]
//! into request extensions.
//!

mod dto;
pub mod error;
mod functions;
mod middleware;
pub mod util;

pub use dto::*;
pub use functions::*;
pub use middleware::*;
