//! Search constraints for the player list.

use serde::{Deserialize, Serialize};

/// The set of currently active search constraints.
///
/// An absent field means "no constraint", never "match the empty string".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl PlayerFilters {
    /// Build a filter object from raw form values, dropping blank ones.
    pub fn from_form(name: &str, club: &str, position: &str) -> Self {
        Self {
            name: non_empty(name),
            club: non_empty(club),
            position: non_empty(position),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = non_empty(name);
        self
    }

    pub fn with_club(mut self, club: &str) -> Self {
        self.club = non_empty(club);
        self
    }

    pub fn with_position(mut self, position: &str) -> Self {
        self.position = non_empty(position);
        self
    }

    /// True when the filter object has zero keys.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.club.is_none() && self.position.is_none()
    }

    /// Query pairs for the present fields only, in name, club, position order.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", self.name.as_deref()),
            ("club", self.club.as_deref()),
            ("position", self.position.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

// Whitespace-only values are dropped; the rest are sent trimmed.
fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_empty_form_has_no_keys() {
        let filters = PlayerFilters::from_form("", "  ", "");
        assert!(filters.is_empty());
        assert!(filters.query_pairs().is_empty());
    }

    #[test]
    fn values_are_sent_trimmed() {
        let filters = PlayerFilters::from_form("  ", "Real ", " ST");
        assert_eq!(
            filters.query_pairs(),
            vec![("club", "Real"), ("position", "ST")]
        );
    }

    #[test]
    fn only_club_is_sent() {
        let filters = PlayerFilters::from_form("", "Real Madrid", "");
        assert!(!filters.is_empty());
        assert_eq!(filters.query_pairs(), vec![("club", "Real Madrid")]);
    }

    #[test]
    fn pairs_keep_field_order() {
        let filters = PlayerFilters::default()
            .with_position("Striker")
            .with_name("Ben");
        assert_eq!(
            filters.query_pairs(),
            vec![("name", "Ben"), ("position", "Striker")]
        );
    }

    #[test]
    fn serializes_only_present_fields() {
        let filters = PlayerFilters::from_form("Mo", "", "");
        let value = serde_json::to_value(&filters).unwrap();
        assert_eq!(value, serde_json::json!({ "name": "Mo" }));
    }
}
