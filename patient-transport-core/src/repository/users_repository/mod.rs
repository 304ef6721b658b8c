mod dto;
mod entity;
mod users_repository;
mod users_repository_impl;
#[cfg(any(test, feature = "test_utils"))]
mod users_repository_memory;

pub use dto::*;
pub use users_repository::*;
pub use users_repository_impl::*;
#[cfg(any(test, feature = "test_utils"))]
pub use users_repository_memory::*;
