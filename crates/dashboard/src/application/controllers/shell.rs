//! Header / shell model derived from the session state.

use scoutdesk_domain::AuthState;

use crate::application::services::SessionStore;
use crate::ports::outbound::StorageProvider;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellModel {
    /// Show the login link
    SignedOut,
    /// Show the user menu
    SignedIn { username: String, is_admin: bool },
}

impl ShellModel {
    pub fn from_state(state: &AuthState) -> Self {
        match state.user() {
            Some(user) if state.is_authenticated() => Self::SignedIn {
                username: user.username.clone(),
                is_admin: user.is_admin(),
            },
            _ => Self::SignedOut,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }
}

/// Sign out. The caller navigates to the login view afterwards.
pub fn logout<S: StorageProvider>(session: &SessionStore<S>) {
    session.logout();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures::{admin_user, scout_user};

    #[test]
    fn signed_out_state_shows_login_link() {
        assert_eq!(
            ShellModel::from_state(&AuthState::signed_out()),
            ShellModel::SignedOut
        );
    }

    #[test]
    fn signed_in_state_shows_user_menu() {
        let admin = ShellModel::from_state(&AuthState::signed_in(admin_user(), "t"));
        let scout = ShellModel::from_state(&AuthState::signed_in(scout_user(), "t"));

        assert_eq!(
            admin,
            ShellModel::SignedIn {
                username: "admin".into(),
                is_admin: true
            }
        );
        assert!(scout.is_signed_in());
        assert_eq!(
            scout,
            ShellModel::SignedIn {
                username: "scout".into(),
                is_admin: false
            }
        );
    }
}
