//! Route guard for protected views.
//!
//! Evaluated synchronously against the session store's current state; no
//! server round-trip.

use scoutdesk_domain::AuthState;

use crate::application::services::SessionStore;
use crate::ports::outbound::StorageProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        *self == Self::Allow
    }
}

pub fn evaluate(state: &AuthState) -> GuardDecision {
    if state.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Evaluate against the store itself rather than any mirrored copy of it.
pub fn check<S: StorageProvider>(session: &SessionStore<S>) -> GuardDecision {
    evaluate(&session.current_state())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::AuthService;
    use crate::application::Api;
    use crate::infrastructure::platform::mock::MockPlatform;
    use crate::infrastructure::testing::fixtures::{admin_user, auth_envelope, scout_user};
    use crate::ports::outbound::testing::MockRawApi;
    use std::sync::Arc;

    #[test]
    fn only_authenticated_sessions_pass() {
        assert_eq!(
            evaluate(&AuthState::signed_out()),
            GuardDecision::RedirectToLogin
        );
        assert!(evaluate(&AuthState::signed_in(scout_user(), "t")).is_allowed());
    }

    #[tokio::test]
    async fn login_is_allowed_before_subscribers_catch_up() {
        let raw = MockRawApi::new();
        raw.push_json(auth_envelope(&admin_user(), "tok"));
        let session = SessionStore::new(
            MockPlatform::new(),
            AuthService::new(Api::new(Arc::new(raw.clone()))),
        );
        let _unread = session.state_changes();
        assert_eq!(check(&session), GuardDecision::RedirectToLogin);

        session.login("admin@scoutdesk.io", "secret1").await.unwrap();

        assert!(check(&session).is_allowed());
    }
}
