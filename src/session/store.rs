//! The session store: who is logged in.
//!
//! Holds the token and current user in one [`Observable`] cell, mirrors them
//! into durable [`SessionStorage`] under [`TOKEN_KEY`] and [`USER_KEY`], and
//! hands out [`SessionWatch`] handles to every reader.

use std::sync::Arc;

use super::observable::Observable;
use super::watch::SessionWatch;
use crate::api::AuthClient;
use crate::error::{AuthError, ClientResult, NetworkError};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, Session, UserSummary};
use crate::traits::SessionStorage;

/// Storage key of the raw token.
pub const TOKEN_KEY: &str = "auth_token";

/// Storage key of the JSON-serialised current user.
pub const USER_KEY: &str = "auth_user";

/// Single source of truth for the logged-in identity.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    state: Observable<Option<Session>>,
    auth: AuthClient,
}

impl SessionStore {
    /// Create the store around an existing cell and seed it from storage.
    ///
    /// The cell is passed in so the API transport can subscribe to it before
    /// the store (which needs an [`AuthClient`]) exists.
    pub fn new(storage: Arc<dyn SessionStorage>, auth: AuthClient, state: Observable<Option<Session>>) -> Self {
        let store = Self {
            storage,
            state,
            auth,
        };
        store.rehydrate();
        store
    }

    /// Reload the session from storage. No network call is made.
    ///
    /// A token with an unreadable user record yields a session whose user is
    /// unknown; an empty token or an unreadable store yields no session.
    pub fn rehydrate(&self) {
        let token = match self.storage.get(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read stored session");
                None
            }
        };

        let session = token
            .filter(|token| !token.is_empty())
            .map(|token| Session::new(token, self.stored_user()));
        tracing::debug!(authenticated = session.is_some(), "Session rehydrated");
        self.state.set(session);
    }

    fn stored_user(&self) -> Option<UserSummary> {
        let raw = match self.storage.get(USER_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read stored user");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable stored user");
                None
            }
        }
    }

    /// Log in with email and password.
    ///
    /// On failure the previous session is left as it was.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Session> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.auth.login(&request).await?;
        let session = self.establish(response)?;
        tracing::info!("Logged in");
        Ok(session)
    }

    /// Create an account; a successful registration is also a login.
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<Session> {
        let response = self.auth.register(request).await?;
        let session = self.establish(response)?;
        tracing::info!("Registered");
        Ok(session)
    }

    /// Persist, then publish, a freshly issued session.
    ///
    /// A reply without a token is rejected and the prior session is kept.
    fn establish(&self, response: AuthResponse) -> ClientResult<Session> {
        if response.token.is_empty() {
            tracing::warn!("Auth response carried an empty token");
            return Err(NetworkError::InvalidResponse {
                message: "missing token".to_string(),
            }
            .into());
        }
        let session = Session::from(response);
        self.persist(&session);
        self.state.set(Some(session.clone()));
        Ok(session)
    }

    fn persist(&self, session: &Session) {
        if let Err(e) = self.storage.set(TOKEN_KEY, &session.token) {
            tracing::error!(error = %e, "Failed to persist session token");
        }

        let user_result = match &session.user {
            Some(user) => match serde_json::to_string(user) {
                Ok(json) => self.storage.set(USER_KEY, &json),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize current user");
                    self.storage.remove(USER_KEY)
                }
            },
            None => self.storage.remove(USER_KEY),
        };
        if let Err(e) = user_result {
            tracing::error!(error = %e, "Failed to persist current user");
        }
    }

    /// Forget the session everywhere. Never fails; safe to call repeatedly.
    pub fn logout(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove(key) {
                tracing::error!(key, error = %e, "Failed to clear stored session");
            }
        }
        self.state.set(None);
        tracing::info!("Logged out");
    }

    /// The current session, if any.
    pub fn current_session(&self) -> Option<Session> {
        self.state.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.get().is_some()
    }

    /// The current session, or `NotAuthenticated`.
    pub fn require_session(&self) -> Result<Session, AuthError> {
        self.current_session().ok_or(AuthError::NotAuthenticated)
    }

    /// A new read handle that follows every change.
    pub fn watch(&self) -> SessionWatch {
        SessionWatch::new(self.state.subscribe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryStorage, MockHttpClient, MockResponse};
    use crate::api::ApiTransport;
    use crate::error::ClientError;
    use serde_json::json;

    const ROOT: &str = "http://api.test/api/v1";

    fn build(storage: InMemoryStorage) -> (SessionStore, MockHttpClient) {
        let mock = MockHttpClient::new();
        let state = Observable::new(None);
        let transport = ApiTransport::new(Arc::new(mock.clone()), ROOT, SessionWatch::new(state.subscribe()));
        let store = SessionStore::new(Arc::new(storage), AuthClient::new(transport), state);
        (store, mock)
    }

    fn ada() -> serde_json::Value {
        json!({"id": "u-1", "name": "Ada Lovelace", "email": "ada@example.com"})
    }

    fn login_ok(mock: &MockHttpClient, token: &str, user: Option<serde_json::Value>) {
        let mut body = json!({ "token": token });
        if let Some(user) = user {
            body["user"] = user;
        }
        mock.set_response("POST", &format!("{}/auth/login", ROOT), MockResponse::json(200, body));
    }

    #[tokio::test]
    async fn test_login_persists_and_publishes() {
        let storage = InMemoryStorage::new();
        let (store, mock) = build(storage.clone());
        let mut watch = store.watch();
        login_ok(&mock, "server-token", Some(ada()));

        let session = store.login("ada@example.com", "pw").await.unwrap();
        assert_eq!(session.token, "server-token");
        assert!(store.is_authenticated());

        let stored = storage.snapshot();
        assert_eq!(stored.get(TOKEN_KEY).map(String::as_str), Some("server-token"));
        let user: UserSummary = serde_json::from_str(&stored[USER_KEY]).unwrap();
        assert_eq!(user.id, "u-1");

        let published = watch.changed().await.unwrap().unwrap();
        assert_eq!(published.user_id(), Some("u-1"));
    }

    #[tokio::test]
    async fn test_login_failure_leaves_prior_state() {
        let storage = InMemoryStorage::with_entries([(TOKEN_KEY, "old")]);
        let (store, mock) = build(storage.clone());
        mock.set_response(
            "POST",
            &format!("{}/auth/login", ROOT),
            MockResponse::json(401, json!({"message": "Invalid credentials"})),
        );

        let err = store.login("ada@example.com", "wrong").await.unwrap_err();
        assert_eq!(err.message_or("Login failed"), "Invalid credentials");
        assert_eq!(store.current_session().unwrap().token, "old");
        assert_eq!(storage.snapshot().get(TOKEN_KEY).map(String::as_str), Some("old"));
    }

    #[tokio::test]
    async fn test_login_without_user_clears_stale_user() {
        let storage = InMemoryStorage::with_entries([(TOKEN_KEY, "old"), (USER_KEY, r#"{"id":"u-9","name":"Old"}"#)]);
        let (store, mock) = build(storage.clone());
        login_ok(&mock, "fresh", None);

        let session = store.login("ada@example.com", "pw").await.unwrap();
        assert!(session.user.is_none());
        assert!(!storage.snapshot().contains_key(USER_KEY));
    }

    #[tokio::test]
    async fn test_storage_failure_still_publishes() {
        let storage = InMemoryStorage::new();
        storage.set_write_should_fail(true);
        let (store, mock) = build(storage.clone());
        login_ok(&mock, "tok", Some(ada()));

        store.login("ada@example.com", "pw").await.unwrap();
        assert!(store.is_authenticated());
        assert!(storage.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_register_authenticates() {
        let (store, mock) = build(InMemoryStorage::new());
        mock.set_response(
            "POST",
            &format!("{}/auth/register", ROOT),
            MockResponse::json(201, json!({"token": "reg", "user": ada()})),
        );

        let session = store
            .register(&RegisterRequest {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                password: "pw".to_string(),
                role: None,
            })
            .await
            .unwrap();
        assert_eq!(session.token, "reg");
        assert_eq!(store.require_session().unwrap().token, "reg");
    }

    #[test]
    fn test_rehydrate_from_storage() {
        let user = serde_json::to_string(&UserSummary::new("u-1", "Ada", "ada@example.com")).unwrap();
        let storage = InMemoryStorage::with_entries([(TOKEN_KEY, "persisted"), (USER_KEY, user.as_str())]);
        let (store, mock) = build(storage);

        let session = store.current_session().unwrap();
        assert_eq!(session.token, "persisted");
        assert_eq!(session.user_id(), Some("u-1"));
        assert!(mock.get_requests().is_empty());
    }

    #[test]
    fn test_rehydrate_with_corrupt_user() {
        let storage = InMemoryStorage::with_entries([(TOKEN_KEY, "persisted"), (USER_KEY, "{broken")]);
        let (store, _) = build(storage);
        let session = store.current_session().unwrap();
        assert_eq!(session.token, "persisted");
        assert!(session.user.is_none());
    }

    #[test]
    fn test_rehydrate_ignores_empty_token() {
        let storage = InMemoryStorage::with_entries([(TOKEN_KEY, "")]);
        let (store, _) = build(storage);
        assert!(!store.is_authenticated());
        assert!(!store.watch().is_authenticated());
    }

    #[tokio::test]
    async fn test_login_with_empty_token_is_rejected() {
        let storage = InMemoryStorage::with_entries([(TOKEN_KEY, "old")]);
        let (store, mock) = build(storage.clone());
        login_ok(&mock, "", Some(ada()));

        let err = store.login("ada@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, ClientError::Network(NetworkError::InvalidResponse { .. })));
        assert_eq!(err.message_or("Login failed"), "Login failed");
        assert_eq!(store.current_session().unwrap().token, "old");
        assert_eq!(storage.snapshot().get(TOKEN_KEY).map(String::as_str), Some("old"));
    }

    #[tokio::test]
    async fn test_register_with_empty_token_is_rejected() {
        let (store, mock) = build(InMemoryStorage::new());
        mock.set_response(
            "POST",
            &format!("{}/auth/register", ROOT),
            MockResponse::json(201, json!({"token": "", "user": ada()})),
        );

        let result = store
            .register(&RegisterRequest {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                password: "pw".to_string(),
                role: None,
            })
            .await;
        assert!(result.is_err());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_rehydrate_with_unreadable_storage() {
        let storage = InMemoryStorage::with_entries([(TOKEN_KEY, "persisted")]);
        storage.set_read_should_fail(true);
        let (store, _) = build(storage);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let storage = InMemoryStorage::with_entries([(TOKEN_KEY, "t"), (USER_KEY, "{}")]);
        let (store, _) = build(storage.clone());
        let watch = store.watch();
        assert!(watch.is_authenticated());

        store.logout();
        assert!(!store.is_authenticated());
        assert!(!watch.is_authenticated());
        assert!(storage.snapshot().is_empty());

        store.logout();
        assert!(store.current_session().is_none());
        assert!(matches!(store.require_session(), Err(AuthError::NotAuthenticated)));
    }

    #[test]
    fn test_logout_with_failing_storage_still_clears_memory() {
        let storage = InMemoryStorage::with_entries([(TOKEN_KEY, "t")]);
        let (store, _) = build(storage.clone());
        storage.set_write_should_fail(true);

        store.logout();
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_transport_error_is_reported() {
        let (store, mock) = build(InMemoryStorage::new());
        mock.set_default_response(MockResponse::Error(crate::traits::HttpError::ConnectionFailed(
            "refused".to_string(),
        )));
        let err = store.login("a@x.io", "pw").await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
        assert_eq!(err.message_or("Login failed"), "Login failed");
    }
}
