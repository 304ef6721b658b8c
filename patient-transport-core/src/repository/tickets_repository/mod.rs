mod dto;
mod entity;
mod tickets_repository;
mod tickets_repository_impl;
#[cfg(any(test, feature = "test_utils"))]
mod tickets_repository_memory;

pub use dto::*;
pub use tickets_repository::*;
pub use tickets_repository_impl::*;
#[cfg(any(test, feature = "test_utils"))]
pub use tickets_repository_memory::*;
