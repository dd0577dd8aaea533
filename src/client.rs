//! Wiring of the whole client.
//!
//! [`BlogClient`] builds the session cell, the transport, the session store
//! and every resource client once, and hands out view models bound to them.

use std::sync::Arc;

use crate::adapters::{FileSessionStorage, ReqwestHttpClient};
use crate::api::{ApiTransport, AuthClient, CommentsClient, PostsClient, SubscriptionsClient, UsersClient};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::routes::Router;
use crate::session::{Observable, SessionStore, SessionWatch};
use crate::traits::{HttpClient, SessionStorage};
use crate::view::{CreatePostForm, FeedView, LoginForm, MainLayout, ProfileView, RegisterForm};

/// Entry point of the library.
///
/// # Example
///
/// ```ignore
/// use zoneblog::{BlogClient, ClientConfig};
///
/// let client = BlogClient::new(ClientConfig::from_env())?;
/// let mut feed = client.feed_view();
/// feed.load().await;
/// ```
pub struct BlogClient {
    config: ClientConfig,
    session: Arc<SessionStore>,
    transport: ApiTransport,
    router: Router,
}

impl BlogClient {
    /// Build the production stack: reqwest over HTTP, session in a file.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout)
            .map_err(|e| ClientError::from_http(e, &config.api_root()))?;
        let storage = FileSessionStorage::in_dir(config.resolve_storage_dir()?);
        tracing::debug!(api_root = %config.api_root(), session_file = %storage.path().display(), "Client configured");
        Ok(Self::with_parts(config, Arc::new(http), Arc::new(storage)))
    }

    /// Build the stack over any transport and storage.
    pub fn with_parts(config: ClientConfig, http: Arc<dyn HttpClient>, storage: Arc<dyn SessionStorage>) -> Self {
        let state = Observable::new(None);
        let transport = ApiTransport::new(http, config.api_root(), SessionWatch::new(state.subscribe()));
        let session = Arc::new(SessionStore::new(storage, AuthClient::new(transport.clone()), state));
        let router = Router::new(session.watch());
        Self {
            config,
            session,
            transport,
            router,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn posts(&self) -> PostsClient {
        PostsClient::new(self.transport.clone())
    }

    pub fn users(&self) -> UsersClient {
        UsersClient::new(self.transport.clone())
    }

    pub fn subscriptions(&self) -> SubscriptionsClient {
        SubscriptionsClient::new(self.transport.clone())
    }

    pub fn comments(&self) -> CommentsClient {
        CommentsClient::new(self.transport.clone())
    }

    pub fn login_form(&self) -> LoginForm {
        LoginForm::new(self.session.clone())
    }

    pub fn register_form(&self) -> RegisterForm {
        RegisterForm::new(self.session.clone())
    }

    pub fn feed_view(&self) -> FeedView {
        FeedView::new(self.posts())
    }

    pub fn profile_view(&self, user_id: &str) -> ProfileView {
        ProfileView::new(user_id, self.users(), self.posts(), self.subscriptions())
    }

    pub fn create_post_form(&self) -> CreatePostForm {
        CreatePostForm::new(self.posts())
    }

    pub fn layout(&self) -> MainLayout {
        MainLayout::new(self.session.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryStorage, MockHttpClient, MockResponse};
    use crate::routes::{GuardOutcome, Route};
    use crate::session::TOKEN_KEY;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_flows_into_every_client() {
        let http = MockHttpClient::new();
        let storage = InMemoryStorage::new();
        let config = ClientConfig::default().with_api_base_url("http://api.test");
        let client = BlogClient::with_parts(config, Arc::new(http.clone()), Arc::new(storage.clone()));

        assert_eq!(client.router().resolve(&Route::Home), GuardOutcome::Redirect(Route::Login));

        http.set_response(
            "POST",
            "http://api.test/api/v1/auth/login",
            MockResponse::json(200, json!({"token": "abc", "user": {"id": "u-1", "name": "Ada"}})),
        );
        http.set_response("GET", "http://api.test/api/v1/posts/feed", MockResponse::json(200, json!([])));

        let mut form = client.login_form();
        form.email = "ada@example.com".to_string();
        form.password = "pw".to_string();
        assert_eq!(form.submit().await, Some(Route::Home));
        assert!(client.router().resolve(&Route::Home).is_allowed());
        assert_eq!(storage.snapshot().get(TOKEN_KEY).map(String::as_str), Some("abc"));

        let mut feed = client.feed_view();
        feed.load().await;
        let request = http.get_requests().pop().unwrap();
        assert_eq!(request.headers.get("Authorization").map(String::as_str), Some("Bearer abc"));

        assert_eq!(client.layout().logout(), Route::Login);
        assert_eq!(client.router().resolve(&Route::CreatePost), GuardOutcome::Redirect(Route::Login));
    }
}
