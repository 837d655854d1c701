//! Player management: list, create and delete records.

use scoutdesk_domain::{FieldErrors, Player, PlayerDraft, PlayerFormInput, PlayerListResult};

use crate::application::services::PlayerService;
use crate::application::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerField {
    Name,
    Age,
    Nationality,
    Club,
    Positions,
    Overall,
}

fn blank_form() -> PlayerFormInput {
    PlayerFormInput {
        overall: "50".into(),
        ..PlayerFormInput::default()
    }
}

#[derive(Debug, Clone)]
pub struct PlayersController {
    players: Vec<Player>,
    form: PlayerFormInput,
    field_errors: FieldErrors,
    error: Option<String>,
}

impl Default for PlayersController {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            form: blank_form(),
            field_errors: FieldErrors::default(),
            error: None,
        }
    }
}

impl PlayersController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn form(&self) -> &PlayerFormInput {
        &self.form
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_field(&mut self, field: PlayerField, value: &str) {
        let slot = match field {
            PlayerField::Name => &mut self.form.name,
            PlayerField::Age => &mut self.form.age,
            PlayerField::Nationality => &mut self.form.nationality,
            PlayerField::Club => &mut self.form.club,
            PlayerField::Positions => &mut self.form.positions,
            PlayerField::Overall => &mut self.form.overall,
        };
        *slot = value.to_string();
    }

    pub fn complete_reload(&mut self, result: Result<PlayerListResult, ServiceError>) {
        match result {
            Ok(list) => {
                self.players = list.data;
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Error loading players: {}", e);
                self.error = Some(
                    e.user_message()
                        .unwrap_or_else(|| "Could not load players".into()),
                );
            }
        }
    }

    /// Validate the form into a new player. Nothing is sent while invalid.
    pub fn begin_create(&mut self) -> Result<Player, FieldErrors> {
        match PlayerDraft::parse(&self.form) {
            Ok(player) => {
                self.field_errors = FieldErrors::default();
                Ok(player)
            }
            Err(errors) => {
                self.field_errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Returns true when the list should be reloaded.
    pub fn complete_create(&mut self, result: Result<Player, ServiceError>) -> bool {
        match result {
            Ok(player) => {
                tracing::info!(id = ?player.id, "Created player");
                self.form = blank_form();
                self.error = None;
                true
            }
            Err(e) => {
                tracing::error!("Error creating player: {}", e);
                self.error = Some(
                    e.user_message()
                        .unwrap_or_else(|| "Could not create the player".into()),
                );
                false
            }
        }
    }

    /// Returns true when the list should be reloaded.
    pub fn complete_delete(&mut self, id: u64, result: Result<(), ServiceError>) -> bool {
        match result {
            Ok(()) => {
                tracing::info!(id, "Deleted player");
                self.error = None;
                true
            }
            Err(e) => {
                tracing::error!("Error deleting player {}: {}", id, e);
                self.error = Some(
                    e.user_message()
                        .unwrap_or_else(|| "Could not delete the player".into()),
                );
                false
            }
        }
    }

    pub async fn reload(&mut self, players: &PlayerService) {
        let result = players.list_all().await;
        self.complete_reload(result);
    }

    pub async fn create(&mut self, players: &PlayerService) -> bool {
        let Ok(draft) = self.begin_create() else {
            return false;
        };
        let result = players.create(&draft).await;
        if self.complete_create(result) {
            self.reload(players).await;
            return true;
        }
        false
    }

    pub async fn delete(&mut self, players: &PlayerService, id: u64) -> bool {
        let result = players.delete(id).await;
        if self.complete_delete(id, result) {
            self.reload(players).await;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Api;
    use crate::infrastructure::testing::fixtures::{
        api_request_failed, list_envelope, numbered_players, player_envelope,
    };
    use crate::ports::outbound::testing::MockRawApi;
    use serde_json::json;
    use std::sync::Arc;

    fn service() -> (MockRawApi, PlayerService) {
        let raw = MockRawApi::new();
        let svc = PlayerService::new(Api::new(Arc::new(raw.clone())));
        (raw, svc)
    }

    fn fill(ctl: &mut PlayersController, age: &str, overall: &str) {
        ctl.set_field(PlayerField::Name, "Lamine Yamal");
        ctl.set_field(PlayerField::Age, age);
        ctl.set_field(PlayerField::Nationality, "Spain");
        ctl.set_field(PlayerField::Club, "FC Barcelona");
        ctl.set_field(PlayerField::Positions, "RW");
        ctl.set_field(PlayerField::Overall, overall);
    }

    #[tokio::test]
    async fn create_resets_form_and_reloads() {
        let (raw, svc) = service();
        let saved = numbered_players(1).remove(0);
        raw.push_json(player_envelope(&saved));
        raw.push_json(list_envelope(&[saved.clone()]));
        let mut ctl = PlayersController::new();
        fill(&mut ctl, "17", "81");

        assert!(ctl.create(&svc).await);

        let requests = raw.requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].body.as_ref().unwrap()["long_name"], "Lamine Yamal");
        assert_eq!(requests[1].path, "/api/players");
        assert_eq!(ctl.players(), &[saved]);
        assert_eq!(ctl.form().name, "");
        assert_eq!(ctl.form().overall, "50");
    }

    #[tokio::test]
    async fn invalid_overall_or_age_blocks_create() {
        let (raw, svc) = service();
        let mut ctl = PlayersController::new();
        fill(&mut ctl, "seventeen", "101");

        assert!(!ctl.create(&svc).await);

        assert_eq!(raw.request_count(), 0);
        assert!(ctl.field_error("age").is_some());
        assert!(ctl.field_error("overall").is_some());
        assert_eq!(ctl.form().name, "Lamine Yamal");
    }

    #[tokio::test]
    async fn delete_reloads_on_success_only() {
        let (raw, svc) = service();
        raw.push_json(json!({"success": true}));
        raw.push_json(list_envelope(&numbered_players(2)));
        raw.push_error(api_request_failed("offline"));
        let mut ctl = PlayersController::new();

        assert!(ctl.delete(&svc, 3).await);
        assert_eq!(ctl.players().len(), 2);

        assert!(!ctl.delete(&svc, 1).await);
        assert_eq!(ctl.players().len(), 2);
        assert_eq!(ctl.error(), Some("Could not delete the player"));
        assert_eq!(raw.request_count(), 3);
    }
}
