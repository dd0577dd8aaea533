//! Common test utilities for integration tests.
//!
//! Every test talks to a real `wiremock::MockServer` through the production
//! reqwest adapter and keeps its session file in a temporary directory.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zoneblog::adapters::{FileSessionStorage, ReqwestHttpClient};
use zoneblog::session::{TOKEN_KEY, USER_KEY};
use zoneblog::traits::SessionStorage;
use zoneblog::{BlogClient, ClientConfig};

/// A mock API server plus a scratch storage directory.
pub struct TestEnv {
    pub server: MockServer,
    pub dir: TempDir,
}

impl TestEnv {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
            dir: TempDir::new().expect("temp dir"),
        }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_api_base_url(self.server.uri())
            .with_storage_dir(self.dir.path())
    }

    /// A fresh client over the shared storage directory, as if the process
    /// had restarted.
    pub fn client(&self) -> BlogClient {
        BlogClient::with_parts(
            self.config(),
            Arc::new(ReqwestHttpClient::new()),
            Arc::new(self.storage()),
        )
    }

    pub fn storage(&self) -> FileSessionStorage {
        FileSessionStorage::in_dir(self.dir.path())
    }

    /// Write a stored session for user `u-1` with `token`.
    pub fn seed_session(&self, token: &str) {
        let storage = self.storage();
        storage.set(TOKEN_KEY, token).expect("seed token");
        storage
            .set(USER_KEY, &user_json("u-1", "Ada Lovelace").to_string())
            .expect("seed user");
    }

    pub fn session_file(&self) -> std::path::PathBuf {
        self.storage().path().to_path_buf()
    }

    /// Mount a JSON response for `verb` on the API path `api_path`.
    pub async fn respond(&self, verb: &str, api_path: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(format!("/api/v1{}", api_path)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount an empty response for `verb` on the API path `api_path`.
    pub async fn respond_empty(&self, verb: &str, api_path: &str, status: u16) {
        Mock::given(method(verb))
            .and(path(format!("/api/v1{}", api_path)))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// `METHOD /path` of every request the server saw, in order.
    pub async fn request_lines(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| format!("{} {}", r.method, r.url.path()))
            .collect()
    }
}

pub fn user_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", id),
        "role": "USER",
        "createdAt": "2024-03-01T09:30:00",
        "followersCount": 0,
        "followingCount": 0,
        "isFollowedByCurrentUser": false
    })
}

pub fn post_json(id: &str, like_count: u64, liked: bool) -> Value {
    json!({
        "id": id,
        "title": format!("Post {}", id),
        "description": "Body",
        "likeCount": like_count,
        "author": user_json("u-2", "Grace Hopper"),
        "createdAt": "2024-05-01T10:00:00.123456",
        "updatedAt": null,
        "commentCount": 0,
        "likedByCurrentUser": liked,
        "mediaUrl": null,
        "mediaType": null
    })
}

pub fn auth_json(token: &str) -> Value {
    json!({"token": token, "user": user_json("u-1", "Ada Lovelace")})
}
