//! Data transfer objects
//!
//! Wire shapes of the REST API. Services convert them into domain types so
//! presentation never sees an envelope.

pub mod auth;
pub mod players;

pub use auth::{AuthData, AuthResponse, LoginRequest, RegisterRequest};
pub use players::{PlayerEnvelope, PlayerListResponse};
