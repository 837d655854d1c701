//! Player Service - Typed gateway over the players REST API
//!
//! No caching, no retry. Every failure surfaces as a `ServiceError` and the
//! caller decides what to do with it. Ratings are checked in both
//! directions: out-of-range records are never sent, and are dropped from
//! list results or rejected when fetched alone.

use scoutdesk_domain::{Player, PlayerFilters, PlayerListResult};

use crate::application::dto::{PlayerEnvelope, PlayerListResponse};
use crate::application::{Api, ServiceError};

const PLAYERS: &str = "/api/players";

/// Append `filters` to `base` as an encoded query string.
///
/// Absent filter fields never appear; no `?` is added when none are present.
pub fn with_filter_query(base: &str, filters: &PlayerFilters) -> String {
    let pairs = filters.query_pairs();
    if pairs.is_empty() {
        return base.to_string();
    }
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("{base}?{query}")
}

#[derive(Clone)]
pub struct PlayerService {
    api: Api,
}

impl PlayerService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub async fn list_all(&self) -> Result<PlayerListResult, ServiceError> {
        let response: PlayerListResponse = self.api.get(PLAYERS).await?;
        Ok(valid_only(response.into()))
    }

    /// Search with the present filter fields only.
    ///
    /// An empty filter object is sent as a bare search; routing it to
    /// `list_all` is the caller's job.
    pub async fn search(&self, filters: &PlayerFilters) -> Result<PlayerListResult, ServiceError> {
        let path = with_filter_query(&format!("{PLAYERS}/search"), filters);
        let response: PlayerListResponse = self.api.get(&path).await?;
        Ok(valid_only(response.into()))
    }

    /// CSV of every player matching `filters`, not limited to any page.
    pub async fn export_csv(&self, filters: &PlayerFilters) -> Result<Vec<u8>, ServiceError> {
        let path = with_filter_query(&format!("{PLAYERS}/export"), filters);
        Ok(self.api.get_bytes(&path).await?)
    }

    pub async fn get(&self, id: u64) -> Result<Player, ServiceError> {
        let envelope: PlayerEnvelope = self.api.get(&format!("{PLAYERS}/{id}")).await?;
        match envelope {
            PlayerEnvelope::Wrapped { success: false, .. } => {
                Err(ServiceError::Rejected(format!("player {id} not available")))
            }
            other => {
                let player = other.into_player();
                player.validate_ratings()?;
                Ok(player)
            }
        }
    }

    /// Persist a new player; the server assigns the id.
    pub async fn create(&self, player: &Player) -> Result<Player, ServiceError> {
        player.validate_ratings()?;
        let mut body = player.clone();
        body.id = None;
        let envelope: PlayerEnvelope = self.api.post(PLAYERS, &body).await?;
        Ok(envelope.into_player())
    }

    pub async fn update(&self, id: u64, player: &Player) -> Result<Player, ServiceError> {
        player.validate_ratings()?;
        let envelope: PlayerEnvelope = self.api.put(&format!("{PLAYERS}/{id}"), player).await?;
        Ok(envelope.into_player())
    }

    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        self.api.delete(&format!("{PLAYERS}/{id}")).await?;
        Ok(())
    }
}

fn valid_only(mut result: PlayerListResult) -> PlayerListResult {
    let dropped = result.retain_valid_ratings();
    if dropped > 0 {
        tracing::warn!(dropped, "Dropped players with out-of-range ratings");
    }
    result
}
