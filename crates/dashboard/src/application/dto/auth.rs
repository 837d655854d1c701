//! Auth endpoint payloads

use serde::{Deserialize, Serialize};

use scoutdesk_domain::User;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// `{success, message, data: {user, token}}`
///
/// Shared by login, register, verify and profile. Verify and profile may
/// omit the token.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub data: Option<AuthData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthData {
    pub user: User,
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthResponse {
    /// Why the server refused, in its own words when it gave any.
    pub fn rejection(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoutdesk_domain::Role;
    use serde_json::json;

    #[test]
    fn login_response_parses() {
        let response: AuthResponse = serde_json::from_value(json!({
            "success": true,
            "message": "Login successful",
            "data": {
                "user": {"id": 3, "username": "ana", "email": "ana@club.es", "role": "admin"},
                "token": "jwt"
            }
        }))
        .unwrap();

        let data = response.data.unwrap();
        assert_eq!(data.user.role, Role::Admin);
        assert_eq!(data.token.as_deref(), Some("jwt"));
    }

    #[test]
    fn rejection_prefers_error_then_message() {
        let response: AuthResponse =
            serde_json::from_value(json!({"success": false, "message": "nope"})).unwrap();
        assert_eq!(response.rejection(), "nope");
        assert!(response.data.is_none());
    }
}
