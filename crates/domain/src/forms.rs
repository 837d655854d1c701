//! Form models with client-side validation.
//!
//! Validation runs before any submission; a form with errors is never sent.
//! Errors are reported per field so views can show them next to inputs.

use std::collections::BTreeMap;

use serde::Serialize;
use validator::{Validate, ValidationErrors};

use crate::Player;

/// Per-field validation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Run `validator` rules on `value`.
    pub fn check<T: Validate>(value: &T) -> Result<(), FieldErrors> {
        value.validate().map_err(FieldErrors::from)
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keep existing messages, add the ones from `other` for new fields.
    fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.0.entry(field).or_insert(message);
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        for (field, errs) in errors.field_errors() {
            // First failing rule wins, in declaration order.
            if let Some(err) = errs.first() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                out.insert(field.to_string(), message);
            }
        }
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Validate)]
pub struct LoginForm {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email")
    )]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email")
    )]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Raw text of the player creation form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFormInput {
    pub name: String,
    pub age: String,
    pub nationality: String,
    pub club: String,
    pub positions: String,
    pub overall: String,
}

/// Parsed player form, validated before it becomes a `Player`.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct PlayerDraft {
    #[validate(length(min = 1, message = "Name is required"))]
    pub long_name: String,
    #[validate(range(min = 1, max = 150, message = "Age must be between 1 and 150"))]
    pub age: i64,
    #[validate(length(min = 1, message = "Nationality is required"))]
    pub nationality_name: String,
    pub club_name: String,
    pub player_positions: String,
    #[validate(range(min = 0, max = 100, message = "Overall must be between 0 and 100"))]
    pub overall: i64,
}

impl PlayerDraft {
    /// Parse and validate the raw form into a new (unsaved) player.
    pub fn parse(input: &PlayerFormInput) -> Result<Player, FieldErrors> {
        let mut errors = FieldErrors::default();

        let age = parse_number(&input.age, "age", "Age", &mut errors);
        let overall = parse_number(&input.overall, "overall", "Overall", &mut errors);

        let draft = PlayerDraft {
            long_name: input.name.trim().to_string(),
            age: age.unwrap_or(1),
            nationality_name: input.nationality.trim().to_string(),
            club_name: input.club.trim().to_string(),
            player_positions: input.positions.trim().to_string(),
            overall: overall.unwrap_or(0),
        };

        if let Err(rule_errors) = FieldErrors::check(&draft) {
            errors.merge(rule_errors);
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(draft.into_player())
    }

    // Only called once the range rules passed.
    fn into_player(self) -> Player {
        let age = u32::try_from(self.age).unwrap_or_default();
        let overall = u8::try_from(self.overall).unwrap_or_default();
        Player::new(self.long_name, age, self.nationality_name, overall)
            .with_club(self.club_name)
            .with_positions(self.player_positions)
    }
}

fn parse_number(raw: &str, field: &str, label: &str, errors: &mut FieldErrors) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.insert(field, format!("{label} is required"));
        return None;
    }
    match raw.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.insert(field, format!("{label} must be a whole number"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> PlayerFormInput {
        PlayerFormInput {
            name: "Jude Bellingham".into(),
            age: "20".into(),
            nationality: "England".into(),
            club: "Real Madrid".into(),
            positions: "CM, CAM".into(),
            overall: "86".into(),
        }
    }

    #[test]
    fn valid_form_becomes_player() {
        let player = PlayerDraft::parse(&valid_input()).unwrap();
        assert_eq!(player.id, None);
        assert_eq!(player.long_name, "Jude Bellingham");
        assert_eq!(player.age, 20);
        assert_eq!(player.overall, 86);
        assert_eq!(player.club_name, "Real Madrid");
    }

    #[test]
    fn overall_above_range_is_rejected() {
        let mut input = valid_input();
        input.overall = "101".into();
        let errors = PlayerDraft::parse(&input).unwrap_err();
        assert_eq!(
            errors.get("overall"),
            Some("Overall must be between 0 and 100")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn oversized_age_is_rejected_not_truncated() {
        let mut input = valid_input();
        input.age = "99999999999".into();
        let errors = PlayerDraft::parse(&input).unwrap_err();
        assert_eq!(errors.get("age"), Some("Age must be between 1 and 150"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn non_numeric_age_reports_parse_error_only() {
        let mut input = valid_input();
        input.age = "twenty".into();
        let errors = PlayerDraft::parse(&input).unwrap_err();
        assert_eq!(errors.get("age"), Some("Age must be a whole number"));
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let errors = PlayerDraft::parse(&PlayerFormInput::default()).unwrap_err();
        assert!(errors.contains("long_name"));
        assert!(errors.contains("nationality_name"));
        assert!(errors.contains("age"));
        assert!(errors.contains("overall"));
        assert!(!errors.contains("club_name"));
    }

    #[test]
    fn login_form_rules() {
        let form = LoginForm {
            email: "not-an-email".into(),
            password: "123".into(),
        };
        let errors = FieldErrors::check(&form).unwrap_err();
        assert_eq!(errors.get("email"), Some("Invalid email"));
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters")
        );

        let ok = LoginForm {
            email: "coach@club.com".into(),
            password: "secret1".into(),
        };
        assert!(FieldErrors::check(&ok).is_ok());
    }

    #[test]
    fn register_form_requires_username() {
        let form = RegisterForm {
            username: "ab".into(),
            email: "coach@club.com".into(),
            password: "secret1".into(),
        };
        let errors = FieldErrors::check(&form).unwrap_err();
        assert_eq!(
            errors.get("username"),
            Some("Username must be at least 3 characters")
        );
        assert_eq!(errors.len(), 1);
    }
}
