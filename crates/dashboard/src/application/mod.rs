//! Application layer - Use cases and orchestration

pub mod api;
pub mod controllers;
pub mod dto;
pub mod error;
pub mod route_guard;
pub mod services;

// Re-export common types
pub use api::Api;
pub use error::ServiceError;
