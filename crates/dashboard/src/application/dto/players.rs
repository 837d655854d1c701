//! Player endpoint payloads

use serde::{Deserialize, Serialize};

use scoutdesk_domain::{Player, PlayerListResult};

/// List/search response.
///
/// The server normally wraps results in `{success, count, data}`, but some
/// deployments answer the plain listing with a bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PlayerListResponse {
    Envelope(PlayerListResult),
    Bare(Vec<Player>),
}

impl From<PlayerListResponse> for PlayerListResult {
    fn from(response: PlayerListResponse) -> Self {
        match response {
            PlayerListResponse::Envelope(result) => result,
            PlayerListResponse::Bare(players) => PlayerListResult::from_players(players),
        }
    }
}

/// `{success, data}` wrapper around a single record.
///
/// Create and update may also answer with the bare record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayerEnvelope {
    Wrapped {
        #[serde(default = "default_success")]
        success: bool,
        data: Player,
    },
    Bare(Player),
}

fn default_success() -> bool {
    true
}

impl PlayerEnvelope {
    pub fn into_player(self) -> Player {
        match self {
            Self::Wrapped { data, .. } | Self::Bare(data) => data,
        }
    }
}
