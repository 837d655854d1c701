//! Service Providers for UI
//!
//! Bundles the application services handed to Dioxus context by the
//! composition root.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::{PlayerService, SessionStore};
use crate::state::Platform;

/// All services the views need
#[derive(Clone)]
pub struct Services {
    pub players: Arc<PlayerService>,
    pub session: SessionStore<Platform>,
    /// Rows per dashboard page
    pub page_size: usize,
}

impl Services {
    pub fn new(players: PlayerService, session: SessionStore<Platform>, page_size: usize) -> Self {
        Self {
            players: Arc::new(players),
            session,
            page_size,
        }
    }
}

/// Hook to access the services from context
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Hook to access the PlayerService from context
pub fn use_player_service() -> Arc<PlayerService> {
    use_context::<Services>().players
}
