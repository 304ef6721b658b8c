mod auth_service_config;
mod authenticated_user;
mod demo_user;

pub use auth_service_config::*;
pub use authenticated_user::*;
pub use demo_user::*;
