//! Player Detail Controller
//!
//! Loads one player by the id taken from the route and keeps a radar chart
//! of the selected skill category alive while the player is shown.
//!
//! The chart is never updated in place: every rebuild disposes the previous
//! handle before the renderer is asked for a new one, and dropping the
//! controller disposes whatever is still live.

use scoutdesk_domain::{Player, RadarChartSpec, SkillCategory};

use crate::application::services::PlayerService;
use crate::application::ServiceError;
use crate::ports::outbound::{ChartHandle, ChartRenderer};

pub const INVALID_ID_MESSAGE: &str = "Invalid player id";
pub const LOAD_FAILED_MESSAGE: &str = "Could not load the player";

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(Player),
    /// Terminal: the route carried no usable id, nothing was fetched
    InvalidId,
    Failed(String),
}

/// Route ids must be present and numeric.
pub fn parse_player_id(raw: Option<&str>) -> Option<u64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

pub struct PlayerDetailController<R: ChartRenderer> {
    renderer: R,
    player_id: Option<u64>,
    state: DetailState,
    category: SkillCategory,
    chart: Option<Box<dyn ChartHandle>>,
}

impl<R: ChartRenderer> PlayerDetailController<R> {
    /// Open the detail view for the raw route id.
    pub fn open(renderer: R, route_id: Option<&str>) -> Self {
        let player_id = parse_player_id(route_id);
        let state = match player_id {
            Some(_) => DetailState::Loading,
            None => {
                tracing::warn!(?route_id, "Player detail opened without a valid id");
                DetailState::InvalidId
            }
        };
        Self {
            renderer,
            player_id,
            state,
            category: SkillCategory::MainSkills,
            chart: None,
        }
    }

    /// The id to fetch; `None` once the view is in its invalid-id state.
    pub fn player_id(&self) -> Option<u64> {
        match self.state {
            DetailState::InvalidId => None,
            _ => self.player_id,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn player(&self) -> Option<&Player> {
        match &self.state {
            DetailState::Loaded(player) => Some(player),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DetailState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            DetailState::InvalidId => Some(INVALID_ID_MESSAGE),
            DetailState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn category(&self) -> SkillCategory {
        self.category
    }

    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }

    /// Chart description for the loaded player and selected category.
    pub fn chart_spec(&self) -> Option<RadarChartSpec> {
        self.player()
            .map(|player| RadarChartSpec::for_player(player, self.category))
    }

    pub fn complete_load(&mut self, result: Result<Player, ServiceError>) {
        if self.state == DetailState::InvalidId {
            return;
        }
        match result {
            Ok(player) => {
                tracing::debug!(id = ?player.id, "Loaded player");
                self.state = DetailState::Loaded(player);
                self.rebuild_chart();
            }
            Err(e) => {
                tracing::error!("Error loading player: {}", e);
                self.dispose_chart();
                self.state = DetailState::Failed(LOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Switch category by its display name. Rebuilds the chart only when a
    /// player is loaded. Unknown names are ignored.
    pub fn select_category(&mut self, name: &str) -> bool {
        let Some(category) = SkillCategory::from_name(name) else {
            tracing::warn!(name, "Unknown skill category");
            return false;
        };
        self.category = category;
        if self.player().is_some() {
            self.rebuild_chart();
        }
        true
    }

    fn rebuild_chart(&mut self) {
        self.dispose_chart();
        if let Some(spec) = self.chart_spec() {
            self.chart = Some(self.renderer.render(&spec));
        }
    }

    fn dispose_chart(&mut self) {
        if let Some(mut chart) = self.chart.take() {
            chart.dispose();
        }
    }

    pub async fn load(&mut self, players: &PlayerService) {
        let Some(id) = self.player_id() else {
            return;
        };
        let result = players.get(id).await;
        self.complete_load(result);
    }
}

impl<R: ChartRenderer> Drop for PlayerDetailController<R> {
    fn drop(&mut self) {
        self.dispose_chart();
    }
}
