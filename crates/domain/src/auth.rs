//! Authenticated user identity and session state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Account role as reported by the auth API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(DomainError::parse(format!("unknown role: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Current authentication state.
///
/// Fields are private so that `authenticated` holds exactly when both a
/// user and a token are present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthState {
    authenticated: bool,
    user: Option<User>,
    token: Option<String>,
}

impl AuthState {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user: User, token: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            user: Some(user),
            token: Some(token.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// False whenever nobody is signed in.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> User {
        User {
            id: 1,
            username: "root".into(),
            email: "root@example.com".into(),
            role: Role::Admin,
        }
    }

    #[test]
    fn signed_out_has_nothing() {
        let state = AuthState::signed_out();
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
        assert!(state.token().is_none());
        assert!(!state.is_admin());
    }

    #[test]
    fn signed_in_carries_user_and_token() {
        let state = AuthState::signed_in(admin(), "abc");
        assert!(state.is_authenticated());
        assert_eq!(state.token(), Some("abc"));
        assert!(state.is_admin());
    }

    #[test]
    fn role_round_trips_through_wire_names() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
        assert!("guest".parse::<Role>().is_err());
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
    }
}
