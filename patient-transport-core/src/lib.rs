pub mod application;
pub mod auth;
pub mod dto;
pub mod error;
pub mod model;
pub mod repository;
mod routing;
pub mod service;
