//! Player records as served by the players API.

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Highest rating a player attribute can carry.
pub const MAX_RATING: u8 = 100;

/// A football player record.
///
/// Identity fields follow the FIFA dataset naming used by the API. The
/// six-skill set is optional: records coming from the FIFA export usually
/// carry none of it, so callers must not assume both sets are populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Absent until the server persists the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(alias = "name")]
    pub long_name: String,
    pub age: u32,
    #[serde(alias = "nationality")]
    pub nationality_name: String,
    #[serde(default, alias = "club")]
    pub club_name: String,
    /// Comma separated position labels, e.g. "ST, LW"
    #[serde(default, alias = "position")]
    pub player_positions: String,
    pub overall: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potential: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_eur: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wage_eur: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_foot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_rate: Option<String>,

    // Six-skill set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shooting: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passing: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dribbling: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defending: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical: Option<u8>,
}

impl Player {
    pub fn new(
        long_name: impl Into<String>,
        age: u32,
        nationality_name: impl Into<String>,
        overall: u8,
    ) -> Self {
        Self {
            id: None,
            long_name: long_name.into(),
            age,
            nationality_name: nationality_name.into(),
            club_name: String::new(),
            player_positions: String::new(),
            overall,
            potential: None,
            value_eur: None,
            wage_eur: None,
            height_cm: None,
            weight_kg: None,
            preferred_foot: None,
            work_rate: None,
            pace: None,
            shooting: None,
            passing: None,
            dribbling: None,
            defending: None,
            physical: None,
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_club(mut self, club: impl Into<String>) -> Self {
        self.club_name = club.into();
        self
    }

    pub fn with_positions(mut self, positions: impl Into<String>) -> Self {
        self.player_positions = positions.into();
        self
    }

    /// The individual position labels, trimmed, empty entries skipped.
    pub fn positions(&self) -> Vec<&str> {
        self.player_positions
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Check that overall and potential lie in `[0, 100]`.
    pub fn validate_ratings(&self) -> Result<(), DomainError> {
        if self.overall > MAX_RATING {
            return Err(DomainError::validation(format!(
                "overall must lie in [0, {MAX_RATING}], got {}",
                self.overall
            )));
        }
        if let Some(potential) = self.potential {
            if potential > MAX_RATING {
                return Err(DomainError::validation(format!(
                    "potential must lie in [0, {MAX_RATING}], got {potential}"
                )));
            }
        }
        Ok(())
    }

    pub fn overall_tier(&self) -> OverallTier {
        OverallTier::from_overall(self.overall)
    }
}

/// Result of a list or search call.
///
/// `count` is the server-side match count for the filters, independent of
/// any client-side page window.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerListResult {
    pub success: bool,
    pub count: u64,
    #[serde(default)]
    pub data: Vec<Player>,
}

impl PlayerListResult {
    /// Build a successful result whose count matches the data length.
    pub fn from_players(data: Vec<Player>) -> Self {
        Self {
            success: true,
            count: data.len() as u64,
            data,
        }
    }

    /// Drop records whose ratings are out of range, lowering `count` to
    /// match. Returns how many were dropped.
    pub fn retain_valid_ratings(&mut self) -> usize {
        let before = self.data.len();
        self.data.retain(|player| player.validate_ratings().is_ok());
        let dropped = before - self.data.len();
        self.count = self.count.saturating_sub(dropped as u64);
        dropped
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Rating bands used to colour the overall badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverallTier {
    Legendary,
    WorldClass,
    Excellent,
    VeryGood,
    Good,
    Average,
}

impl OverallTier {
    pub fn from_overall(overall: u8) -> Self {
        match overall {
            90.. => Self::Legendary,
            85..=89 => Self::WorldClass,
            80..=84 => Self::Excellent,
            75..=79 => Self::VeryGood,
            70..=74 => Self::Good,
            _ => Self::Average,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Legendary => "overall-legendary",
            Self::WorldClass => "overall-world-class",
            Self::Excellent => "overall-excellent",
            Self::VeryGood => "overall-very-good",
            Self::Good => "overall-good",
            Self::Average => "overall-average",
        }
    }
}

/// Positions offered by the dashboard's position filter.
pub const POSITION_OPTIONS: &[&str] = &[
    "Goalkeeper",
    "Defender",
    "Midfielder",
    "Forward",
    "Right Back",
    "Left Back",
    "Centre Back",
    "Defensive Midfielder",
    "Winger",
    "Striker",
];

/// CSS class for a position badge.
pub fn position_class(position: &str) -> &'static str {
    match position.trim() {
        "Goalkeeper" | "GK" => "position-goalkeeper",
        "Defender" => "position-defender",
        "Midfielder" | "Defensive Midfielder" | "CM" | "CDM" | "CAM" => "position-midfielder",
        "Forward" | "CF" => "position-forward",
        "Right Back" | "Left Back" | "RB" | "LB" | "RWB" | "LWB" => "position-fullback",
        "Centre Back" | "CB" => "position-center",
        "Winger" | "RW" | "LW" | "RM" | "LM" => "position-winger",
        "Striker" | "ST" => "position-striker",
        _ => "position-default",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_fifa_shape() {
        let json = r#"{
            "id": 7,
            "long_name": "Lionel Andrés Messi Cuccittini",
            "age": 34,
            "nationality_name": "Argentina",
            "club_name": "Paris Saint-Germain",
            "player_positions": "RW, ST, CF",
            "overall": 93,
            "potential": 93,
            "value_eur": 78000000.0,
            "preferred_foot": "Left"
        }"#;
        let player: Player = serde_json::from_str(json).unwrap();

        assert_eq!(player.id, Some(7));
        assert_eq!(player.positions(), vec!["RW", "ST", "CF"]);
        assert_eq!(player.potential, Some(93));
        assert_eq!(player.pace, None);
        assert_eq!(player.overall_tier(), OverallTier::Legendary);
    }

    #[test]
    fn deserializes_six_skill_shape_through_aliases() {
        let json = r#"{
            "id": 3,
            "name": "Vinícius Júnior",
            "age": 23,
            "nationality": "Brazil",
            "club": "Real Madrid",
            "position": "Winger",
            "overall": 89,
            "pace": 95,
            "shooting": 83,
            "passing": 80,
            "dribbling": 92,
            "defending": 29,
            "physical": 68
        }"#;
        let player: Player = serde_json::from_str(json).unwrap();

        assert_eq!(player.long_name, "Vinícius Júnior");
        assert_eq!(player.club_name, "Real Madrid");
        assert_eq!(player.pace, Some(95));
        assert_eq!(player.value_eur, None);
    }

    #[test]
    fn new_player_serializes_without_id() {
        let player = Player::new("Test Player", 20, "Spain", 70);
        let value = serde_json::to_value(&player).unwrap();

        assert!(value.get("id").is_none());
        assert!(value.get("pace").is_none());
        assert_eq!(value["long_name"], "Test Player");
    }

    #[test]
    fn validate_ratings_rejects_out_of_range() {
        let mut player = Player::new("A", 20, "B", 101);
        assert!(player.validate_ratings().is_err());

        player.overall = 100;
        player.potential = Some(120);
        assert!(player.validate_ratings().is_err());

        player.potential = Some(0);
        assert!(player.validate_ratings().is_ok());
    }

    #[test]
    fn overall_tier_boundaries() {
        assert_eq!(OverallTier::from_overall(90), OverallTier::Legendary);
        assert_eq!(OverallTier::from_overall(89), OverallTier::WorldClass);
        assert_eq!(OverallTier::from_overall(80), OverallTier::Excellent);
        assert_eq!(OverallTier::from_overall(75), OverallTier::VeryGood);
        assert_eq!(OverallTier::from_overall(70), OverallTier::Good);
        assert_eq!(OverallTier::from_overall(69), OverallTier::Average);
        assert_eq!(OverallTier::from_overall(0).css_class(), "overall-average");
    }

    #[test]
    fn position_class_falls_back_to_default() {
        assert_eq!(position_class("Goalkeeper"), "position-goalkeeper");
        assert_eq!(position_class(" ST "), "position-striker");
        assert_eq!(position_class("Sweeper"), "position-default");
    }

    #[test]
    fn list_result_from_players_counts_data() {
        let result = PlayerListResult::from_players(vec![
            Player::new("A", 20, "X", 50),
            Player::new("B", 21, "Y", 60),
        ]);
        assert!(result.success);
        assert_eq!(result.count, 2);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn out_of_range_records_are_dropped_from_results() {
        let mut too_high = Player::new("Broken", 30, "Nowhere", 70).with_id(2);
        too_high.overall = 150;
        let mut bad_potential = Player::new("Also Broken", 30, "Nowhere", 70).with_id(3);
        bad_potential.potential = Some(250);
        let mut result = PlayerListResult {
            success: true,
            count: 40,
            data: vec![
                Player::new("Fine", 25, "Spain", 80).with_id(1),
                too_high,
                bad_potential,
            ],
        };

        assert_eq!(result.retain_valid_ratings(), 2);
        assert_eq!(result.len(), 1);
        assert_eq!(result.count, 38);
        assert_eq!(result.data[0].id, Some(1));
    }
}
