//! Application services
//!
//! Gateways over the REST API plus the session store that owns the
//! authentication state.

pub mod auth_service;
pub mod player_service;
pub mod session_store;

pub use auth_service::{AuthService, Credentials};
pub use player_service::PlayerService;
pub use session_store::SessionStore;
