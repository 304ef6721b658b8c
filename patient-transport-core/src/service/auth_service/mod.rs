mod auth_service;
mod auth_service_impl;
mod dto;
mod password;

pub use auth_service::*;
pub use auth_service_impl::*;
pub use dto::*;
