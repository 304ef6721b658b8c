mod sessions_service;
mod sessions_service_config;
mod sessions_service_impl;

pub use sessions_service::*;
pub use sessions_service_config::*;
pub use sessions_service_impl::*;
