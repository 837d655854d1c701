//! Auth Service - gateway over `/api/auth`
//!
//! Stateless; the session store owns what the responses mean for the
//! signed-in state.

use scoutdesk_domain::User;

use crate::application::dto::{AuthData, AuthResponse, LoginRequest, RegisterRequest};
use crate::application::{Api, ServiceError};

const AUTH: &str = "/api/auth";

/// A signed-in identity as returned by login or registration
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub user: User,
    pub token: String,
}

#[derive(Clone)]
pub struct AuthService {
    api: Api,
}

impl AuthService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Credentials, ServiceError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: AuthResponse = self.api.post(&format!("{AUTH}/login"), &request).await?;
        credentials(response)
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Credentials, ServiceError> {
        let request = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: AuthResponse = self
            .api
            .post(&format!("{AUTH}/register"), &request)
            .await?;
        credentials(response)
    }

    /// Check `token` with the server and return the user it belongs to.
    pub async fn verify(&self, token: &str) -> Result<User, ServiceError> {
        let response: AuthResponse = self
            .api
            .get_with_token(&format!("{AUTH}/verify"), token)
            .await?;
        Ok(accepted(response)?.user)
    }

    pub async fn profile(&self, token: &str) -> Result<User, ServiceError> {
        let response: AuthResponse = self
            .api
            .get_with_token(&format!("{AUTH}/profile"), token)
            .await?;
        Ok(accepted(response)?.user)
    }
}

fn accepted(response: AuthResponse) -> Result<AuthData, ServiceError> {
    if !response.success {
        return Err(ServiceError::Rejected(response.rejection()));
    }
    response.data.ok_or(ServiceError::EmptyResponse)
}

fn credentials(response: AuthResponse) -> Result<Credentials, ServiceError> {
    let data = accepted(response)?;
    let token = data.token.ok_or(ServiceError::EmptyResponse)?;
    Ok(Credentials {
        user: data.user,
        token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures::{admin_user, auth_envelope, scout_user};
    use crate::ports::outbound::testing::MockRawApi;
    use serde_json::json;
    use std::sync::Arc;

    fn service() -> (MockRawApi, AuthService) {
        let raw = MockRawApi::new();
        let svc = AuthService::new(Api::new(Arc::new(raw.clone())));
        (raw, svc)
    }

    #[tokio::test]
    async fn login_posts_credentials() {
        let (raw, svc) = service();
        raw.push_json(auth_envelope(&admin_user(), "tok-1"));

        let creds = svc.login("admin@scoutdesk.io", "secret1").await.unwrap();

        assert_eq!(creds.user, admin_user());
        assert_eq!(creds.token, "tok-1");
        let request = raw.last_request().unwrap();
        assert_eq!(request.path, "/api/auth/login");
        assert_eq!(
            request.body,
            Some(json!({"email": "admin@scoutdesk.io", "password": "secret1"}))
        );
        assert_eq!(request.token, None);
    }

    #[tokio::test]
    async fn register_posts_username() {
        let (raw, svc) = service();
        raw.push_json(auth_envelope(&scout_user(), "tok-2"));

        svc.register("scout", "scout@scoutdesk.io", "secret1")
            .await
            .unwrap();

        let request = raw.last_request().unwrap();
        assert_eq!(request.path, "/api/auth/register");
        assert_eq!(request.body.unwrap()["username"], "scout");
    }

    #[tokio::test]
    async fn unsuccessful_envelope_is_rejected() {
        let (raw, svc) = service();
        raw.push_json(json!({"success": false, "error": "Invalid credentials"}));

        let err = svc.login("a@b.io", "wrongpw").await.unwrap_err();

        assert_eq!(err, ServiceError::Rejected("Invalid credentials".into()));
    }

    #[tokio::test]
    async fn login_without_token_is_empty() {
        let (raw, svc) = service();
        raw.push_json(json!({"success": true, "data": {"user": admin_user()}}));

        let err = svc.login("a@b.io", "secret1").await.unwrap_err();

        assert_eq!(err, ServiceError::EmptyResponse);
    }

    #[tokio::test]
    async fn verify_sends_bearer_token() {
        let (raw, svc) = service();
        raw.push_json(json!({"success": true, "data": {"user": scout_user()}}));

        let user = svc.verify("tok-9").await.unwrap();

        assert_eq!(user, scout_user());
        let request = raw.last_request().unwrap();
        assert_eq!(request.path, "/api/auth/verify");
        assert_eq!(request.token.as_deref(), Some("tok-9"));
    }
}
