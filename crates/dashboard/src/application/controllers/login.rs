//! Login / registration form controller

use scoutdesk_domain::{AuthState, FieldErrors, LoginForm, RegisterForm, User};

use crate::application::services::SessionStore;
use crate::application::ServiceError;
use crate::ports::outbound::StorageProvider;

pub const LOGIN_FAILED_MESSAGE: &str = "Could not sign in";
pub const REGISTER_FAILED_MESSAGE: &str = "Could not register";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// A validated form ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum SubmitTicket {
    Login(LoginForm),
    Register(RegisterForm),
}

#[derive(Debug, Clone, Default)]
pub struct LoginController {
    mode: AuthMode,
    username: String,
    email: String,
    password: String,
    field_errors: FieldErrors,
    loading: bool,
    error: Option<String>,
}

impl LoginController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signed-in users skip the form entirely.
    pub fn should_redirect(state: &AuthState) -> bool {
        state.is_authenticated()
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_username(&mut self, value: &str) {
        self.username = value.to_string();
    }

    pub fn set_email(&mut self, value: &str) {
        self.email = value.to_string();
    }

    pub fn set_password(&mut self, value: &str) {
        self.password = value.to_string();
    }

    /// Flip between login and registration. Clears the error, and the
    /// username when going back to login.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.error = None;
        self.field_errors = FieldErrors::default();
        if self.mode == AuthMode::Login {
            self.username.clear();
        }
    }

    /// Validate the form. Invalid forms record per-field errors and are
    /// never sent.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, FieldErrors> {
        let ticket = match self.mode {
            AuthMode::Login => {
                let form = LoginForm {
                    email: self.email.trim().to_string(),
                    password: self.password.clone(),
                };
                FieldErrors::check(&form).map(|()| SubmitTicket::Login(form))
            }
            AuthMode::Register => {
                let form = RegisterForm {
                    username: self.username.trim().to_string(),
                    email: self.email.trim().to_string(),
                    password: self.password.clone(),
                };
                FieldErrors::check(&form).map(|()| SubmitTicket::Register(form))
            }
        };

        match ticket {
            Ok(ticket) => {
                self.field_errors = FieldErrors::default();
                self.loading = true;
                self.error = None;
                Ok(ticket)
            }
            Err(errors) => {
                self.field_errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Returns true when the user is now signed in.
    pub fn complete_submit(&mut self, result: Result<User, ServiceError>) -> bool {
        self.loading = false;
        match result {
            Ok(_) => true,
            Err(e) => {
                let fallback = match self.mode {
                    AuthMode::Login => LOGIN_FAILED_MESSAGE,
                    AuthMode::Register => REGISTER_FAILED_MESSAGE,
                };
                self.error = Some(e.user_message().unwrap_or_else(|| fallback.to_string()));
                false
            }
        }
    }

    pub async fn submit<S: StorageProvider>(&mut self, session: &SessionStore<S>) -> bool {
        let Ok(ticket) = self.begin_submit() else {
            return false;
        };
        let result = run(ticket, session).await;
        self.complete_submit(result)
    }
}

/// Send a validated form through the session store.
pub async fn run<S: StorageProvider>(
    ticket: SubmitTicket,
    session: &SessionStore<S>,
) -> Result<User, ServiceError> {
    match ticket {
        SubmitTicket::Login(form) => session.login(&form.email, &form.password).await,
        SubmitTicket::Register(form) => {
            session
                .register(&form.username, &form.email, &form.password)
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::AuthService;
    use crate::application::Api;
    use crate::infrastructure::platform::mock::MockPlatform;
    use crate::infrastructure::testing::fixtures::{admin_user, api_http_error, auth_envelope};
    use crate::ports::outbound::testing::MockRawApi;
    use serde_json::json;
    use std::sync::Arc;

    fn session() -> (MockRawApi, SessionStore<MockPlatform>) {
        let raw = MockRawApi::new();
        let auth = AuthService::new(Api::new(Arc::new(raw.clone())));
        (raw, SessionStore::new(MockPlatform::new(), auth))
    }

    #[tokio::test]
    async fn invalid_form_is_not_sent() {
        let (raw, session) = session();
        let mut ctl = LoginController::new();
        ctl.set_email("not-an-email");
        ctl.set_password("123");

        assert!(!ctl.submit(&session).await);

        assert_eq!(raw.request_count(), 0);
        assert_eq!(ctl.field_error("email"), Some("Invalid email"));
        assert_eq!(
            ctl.field_error("password"),
            Some("Password must be at least 6 characters")
        );
        assert!(!ctl.is_loading());
    }

    #[tokio::test]
    async fn valid_login_signs_in() {
        let (raw, session) = session();
        raw.push_json(auth_envelope(&admin_user(), "tok"));
        let mut ctl = LoginController::new();
        ctl.set_email("admin@scoutdesk.io");
        ctl.set_password("secret1");

        assert!(ctl.submit(&session).await);

        assert!(LoginController::should_redirect(&session.current_state()));
        assert_eq!(raw.last_request().unwrap().path, "/api/auth/login");
        assert!(ctl.error().is_none());
    }

    #[tokio::test]
    async fn server_error_is_shown_with_fallback() {
        let (raw, session) = session();
        raw.push_error(api_http_error(401, json!({"error": "Invalid credentials"})));
        raw.push_error(api_http_error(500, json!({})));
        let mut ctl = LoginController::new();
        ctl.set_email("admin@scoutdesk.io");
        ctl.set_password("secret1");

        assert!(!ctl.submit(&session).await);
        assert_eq!(ctl.error(), Some("Invalid credentials"));

        assert!(!ctl.submit(&session).await);
        assert_eq!(ctl.error(), Some(LOGIN_FAILED_MESSAGE));
        assert!(!ctl.is_loading());
    }

    #[test]
    fn register_mode_requires_username() {
        let mut ctl = LoginController::new();
        ctl.toggle_mode();
        ctl.set_username("ab");
        ctl.set_email("ab@scoutdesk.io");
        ctl.set_password("secret1");

        let errors = ctl.begin_submit().unwrap_err();

        assert!(errors.contains("username"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn toggling_back_to_login_clears_username_and_error() {
        let mut ctl = LoginController::new();
        ctl.toggle_mode();
        ctl.set_username("scout");
        let _ = ctl.complete_submit(Err(ServiceError::EmptyResponse));
        assert_eq!(ctl.error(), Some(REGISTER_FAILED_MESSAGE));

        ctl.toggle_mode();

        assert_eq!(ctl.mode(), AuthMode::Login);
        assert_eq!(ctl.username(), "");
        assert!(ctl.error().is_none());
    }
}
