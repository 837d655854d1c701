//! Session state mirrored from the `SessionStore` stream

use dioxus::prelude::*;
use scoutdesk_domain::AuthState;

/// Latest authentication state, updated by the app root whenever the
/// session store publishes a transition.
#[derive(Clone, Copy)]
pub struct SessionState {
    auth: Signal<AuthState>,
}

impl SessionState {
    /// Must be called inside an active Dioxus runtime.
    pub fn new(initial: AuthState) -> Self {
        Self {
            auth: Signal::new(initial),
        }
    }

    pub fn auth(&self) -> Signal<AuthState> {
        self.auth
    }

    pub fn set(&mut self, state: AuthState) {
        self.auth.set(state);
    }
}

/// Hook to access the mirrored session state
pub fn use_session_state() -> SessionState {
    use_context::<SessionState>()
}
