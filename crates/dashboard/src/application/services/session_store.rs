//! Session Store - single owner of the authentication state
//!
//! Holds the current `AuthState` in memory, mirrors it to durable storage
//! and publishes every transition to subscribers. Clones share the same
//! state, so the store can be handed to the UI and to background tasks
//! alike.
//!
//! Durable storage is only touched by `restore_at_startup`, `login`,
//! `register` and `logout`.

use std::sync::{Arc, Mutex, MutexGuard};

use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};

use scoutdesk_domain::{AuthState, User};

use crate::application::services::auth_service::{AuthService, Credentials};
use crate::application::ServiceError;
use crate::ports::outbound::{storage_keys, StorageProvider};

#[derive(Default)]
struct Shared {
    state: AuthState,
    subscribers: Vec<UnboundedSender<AuthState>>,
}

#[derive(Clone)]
pub struct SessionStore<S: StorageProvider> {
    storage: S,
    auth: AuthService,
    shared: Arc<Mutex<Shared>>,
}

impl<S: StorageProvider> SessionStore<S> {
    /// Create a signed-out store. Call `restore_at_startup` to pick up a
    /// persisted session.
    pub fn new(storage: S, auth: AuthService) -> Self {
        Self {
            storage,
            auth,
            shared: Arc::new(Mutex::new(Shared::default())),
        }
    }

    fn shared(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn current_state(&self) -> AuthState {
        self.shared().state.clone()
    }

    /// Stream of states, starting with the current one.
    ///
    /// Dropping the receiver unsubscribes; closed senders are pruned on the
    /// next transition.
    pub fn state_changes(&self) -> UnboundedReceiver<AuthState> {
        let (tx, rx) = unbounded();
        let mut shared = self.shared();
        if tx.unbounded_send(shared.state.clone()).is_ok() {
            shared.subscribers.push(tx);
        }
        rx
    }

    pub fn is_administrator(&self) -> bool {
        self.shared().state.is_admin()
    }

    fn publish(&self, state: AuthState) {
        let mut shared = self.shared();
        shared.state = state.clone();
        shared
            .subscribers
            .retain(|tx| tx.unbounded_send(state.clone()).is_ok());
    }

    fn sign_in(&self, credentials: Credentials) -> Result<User, ServiceError> {
        let user_json = serde_json::to_string(&credentials.user)
            .map_err(|e| ServiceError::ParseError(e.to_string()))?;
        self.storage.save(storage_keys::TOKEN, &credentials.token);
        self.storage.save(storage_keys::USER, &user_json);

        tracing::info!(user = %credentials.user.username, "Signed in");
        let user = credentials.user.clone();
        self.publish(AuthState::signed_in(credentials.user, credentials.token));
        Ok(user)
    }

    /// On failure the state is left as it was and the error returned as is.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ServiceError> {
        match self.auth.login(email, password).await {
            Ok(credentials) => self.sign_in(credentials),
            Err(e) => {
                tracing::error!("Login error: {}", e);
                Err(e)
            }
        }
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ServiceError> {
        match self.auth.register(username, email, password).await {
            Ok(credentials) => self.sign_in(credentials),
            Err(e) => {
                tracing::error!("Register error: {}", e);
                Err(e)
            }
        }
    }

    /// Clear the durable session and publish the signed-out state, even when
    /// already signed out.
    pub fn logout(&self) {
        self.storage.remove(storage_keys::TOKEN);
        self.storage.remove(storage_keys::USER);
        tracing::info!("Signed out");
        self.publish(AuthState::signed_out());
    }

    /// Pick up a persisted session.
    ///
    /// A stored user that no longer deserializes is treated as a logout. If
    /// only one of the two entries exists the store stays signed out.
    pub fn restore_at_startup(&self) {
        let token = self.storage.load(storage_keys::TOKEN);
        let user_json = self.storage.load(storage_keys::USER);

        let (Some(token), Some(user_json)) = (token, user_json) else {
            tracing::debug!("No persisted session");
            return;
        };

        match serde_json::from_str::<User>(&user_json) {
            Ok(user) => {
                tracing::info!(user = %user.username, "Restored session");
                self.publish(AuthState::signed_in(user, token));
            }
            Err(e) => {
                tracing::warn!("Corrupt persisted user, signing out: {}", e);
                self.logout();
            }
        }
    }

    /// Ask the server whether the current token is still good.
    ///
    /// Any failure signs the session out before the error is returned.
    pub async fn verify_session(&self) -> Result<User, ServiceError> {
        let Some(token) = self.current_state().token().map(str::to_string) else {
            return Err(ServiceError::NotAuthenticated);
        };
        match self.auth.verify(&token).await {
            Ok(user) => Ok(user),
            Err(e) => {
                tracing::error!("Token verification error: {}", e);
                self.logout();
                Err(e)
            }
        }
    }

    /// Fetch the signed-in user's profile. Leaves the state untouched.
    pub async fn fetch_profile(&self) -> Result<User, ServiceError> {
        let Some(token) = self.current_state().token().map(str::to_string) else {
            return Err(ServiceError::NotAuthenticated);
        };
        self.auth.profile(&token).await.inspect_err(|e| {
            tracing::error!("Profile error: {}", e);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Api;
    use crate::infrastructure::testing::fixtures::{
        admin_user, api_http_error, api_request_failed, auth_envelope, scout_user,
    };
    use crate::ports::outbound::testing::MockRawApi;
    use futures_util::{FutureExt, StreamExt};
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::RwLock;

    #[derive(Clone, Default)]
    struct MockStorage {
        data: Arc<RwLock<HashMap<String, String>>>,
    }

    impl StorageProvider for MockStorage {
        fn save(&self, key: &str, value: &str) {
            self.data
                .write()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }

        fn load(&self, key: &str) -> Option<String> {
            self.data.read().unwrap().get(key).cloned()
        }

        fn remove(&self, key: &str) {
            self.data.write().unwrap().remove(key);
        }
    }

    fn store(storage: &MockStorage) -> (MockRawApi, SessionStore<MockStorage>) {
        let raw = MockRawApi::new();
        let auth = AuthService::new(Api::new(Arc::new(raw.clone())));
        (raw, SessionStore::new(storage.clone(), auth))
    }

    fn pending(rx: &mut UnboundedReceiver<AuthState>) -> bool {
        rx.next().now_or_never().is_none()
    }

    #[tokio::test]
    async fn starts_signed_out_and_emits_on_subscribe() {
        let (_, store) = store(&MockStorage::default());

        let mut rx = store.state_changes();

        assert_eq!(rx.next().await, Some(AuthState::signed_out()));
        assert!(pending(&mut rx));
        assert!(!store.is_administrator());
    }

    #[tokio::test]
    async fn login_persists_and_publishes() {
        let storage = MockStorage::default();
        let (raw, store) = store(&storage);
        let mut rx = store.state_changes();
        raw.push_json(auth_envelope(&admin_user(), "tok-1"));

        let user = store.login("admin@scoutdesk.io", "secret1").await.unwrap();

        assert_eq!(user, admin_user());
        assert_eq!(rx.next().await, Some(AuthState::signed_out()));
        assert_eq!(
            rx.next().await,
            Some(AuthState::signed_in(admin_user(), "tok-1"))
        );
        assert_eq!(storage.load(storage_keys::TOKEN).as_deref(), Some("tok-1"));
        let stored: User =
            serde_json::from_str(&storage.load(storage_keys::USER).unwrap()).unwrap();
        assert_eq!(stored, admin_user());
        assert!(store.is_administrator());
    }

    #[tokio::test]
    async fn failed_login_leaves_state_alone() {
        let storage = MockStorage::default();
        let (raw, store) = store(&storage);
        raw.push_error(api_http_error(401, json!({"error": "Invalid credentials"})));
        let mut rx = store.state_changes();
        rx.next().await;

        let err = store.login("a@b.io", "wrongpw").await.unwrap_err();

        assert_eq!(err.user_message().as_deref(), Some("Invalid credentials"));
        assert_eq!(store.current_state(), AuthState::signed_out());
        assert!(pending(&mut rx));
        assert_eq!(storage.load(storage_keys::TOKEN), None);
        assert_eq!(raw.request_count(), 1);
    }

    #[tokio::test]
    async fn register_signs_in() {
        let storage = MockStorage::default();
        let (raw, store) = store(&storage);
        raw.push_json(auth_envelope(&scout_user(), "tok-2"));

        store
            .register("scout", "scout@scoutdesk.io", "secret1")
            .await
            .unwrap();

        assert!(store.current_state().is_authenticated());
        assert!(!store.is_administrator());
        assert_eq!(storage.load(storage_keys::TOKEN).as_deref(), Some("tok-2"));
    }

    #[tokio::test]
    async fn logout_clears_storage_and_emits() {
        let storage = MockStorage::default();
        let (raw, store) = store(&storage);
        raw.push_json(auth_envelope(&admin_user(), "tok-1"));
        store.login("admin@scoutdesk.io", "secret1").await.unwrap();
        let mut rx = store.state_changes();
        rx.next().await;

        store.logout();

        let state = rx.next().await.unwrap();
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
        assert!(state.token().is_none());
        assert_eq!(storage.load(storage_keys::TOKEN), None);
        assert_eq!(storage.load(storage_keys::USER), None);
    }

    #[tokio::test]
    async fn logout_when_signed_out_still_emits() {
        let (_, store) = store(&MockStorage::default());
        let mut rx = store.state_changes();
        rx.next().await;

        store.logout();

        assert_eq!(rx.next().await, Some(AuthState::signed_out()));
    }

    #[tokio::test]
    async fn dropped_subscribers_are_pruned() {
        let (_, store) = store(&MockStorage::default());
        let rx = store.state_changes();
        drop(rx);

        store.logout();

        assert!(store.shared().subscribers.is_empty());
    }

    #[test]
    fn restore_with_valid_session() {
        let storage = MockStorage::default();
        storage.save(storage_keys::TOKEN, "tok-1");
        storage.save(
            storage_keys::USER,
            &serde_json::to_string(&admin_user()).unwrap(),
        );
        let (_, store) = store(&storage);

        store.restore_at_startup();

        assert_eq!(
            store.current_state(),
            AuthState::signed_in(admin_user(), "tok-1")
        );
    }

    #[test]
    fn restore_with_corrupt_user_logs_out() {
        let storage = MockStorage::default();
        storage.save(storage_keys::TOKEN, "tok-1");
        storage.save(storage_keys::USER, "{not-json");
        let (_, store) = store(&storage);

        store.restore_at_startup();

        assert_eq!(store.current_state(), AuthState::signed_out());
        assert_eq!(storage.load(storage_keys::TOKEN), None);
        assert_eq!(storage.load(storage_keys::USER), None);
    }

    #[test]
    fn restore_with_only_token_stays_signed_out() {
        let storage = MockStorage::default();
        storage.save(storage_keys::TOKEN, "tok-1");
        let (_, store) = store(&storage);

        store.restore_at_startup();

        assert!(!store.current_state().is_authenticated());
        assert_eq!(storage.load(storage_keys::TOKEN).as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn failed_verification_signs_out() {
        let storage = MockStorage::default();
        let (raw, store) = store(&storage);
        raw.push_json(auth_envelope(&admin_user(), "tok-1"));
        store.login("admin@scoutdesk.io", "secret1").await.unwrap();
        raw.push_error(api_http_error(401, json!({"error": "Token expired"})));

        let err = store.verify_session().await.unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(store.current_state(), AuthState::signed_out());
        assert_eq!(storage.load(storage_keys::TOKEN), None);
        assert_eq!(raw.last_request().unwrap().token.as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn verify_without_session_makes_no_request() {
        let (raw, store) = store(&MockStorage::default());

        let err = store.verify_session().await.unwrap_err();

        assert_eq!(err, ServiceError::NotAuthenticated);
        assert_eq!(raw.request_count(), 0);
    }

    #[tokio::test]
    async fn profile_failure_keeps_session() {
        let (raw, store) = store(&MockStorage::default());
        raw.push_json(auth_envelope(&scout_user(), "tok-3"));
        store
            .register("scout", "scout@scoutdesk.io", "secret1")
            .await
            .unwrap();
        raw.push_error(api_request_failed("offline"));

        assert!(store.fetch_profile().await.is_err());
        assert!(store.current_state().is_authenticated());
    }
}
