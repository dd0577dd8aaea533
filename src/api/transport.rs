//! Shared request plumbing for the resource clients.
//!
//! Builds URLs under the API root, attaches the bearer token of the current
//! session, encodes JSON bodies and turns responses into typed results or
//! [`ClientError`]s. Every call is a single attempt.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::error::{extract_server_message, ClientError, ClientResult};
use crate::session::SessionWatch;
use crate::traits::{Headers, HttpClient, MultipartFile, Response};

/// Percent-encode a single path segment (an id taken from user input).
pub fn path_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// HTTP plumbing shared by every resource client.
///
/// Cheap to clone: the HTTP client and the session receiver are shared.
#[derive(Clone)]
pub struct ApiTransport {
    http: Arc<dyn HttpClient>,
    api_root: String,
    session: SessionWatch,
}

impl ApiTransport {
    /// Create a transport rooted at `api_root` (e.g. `http://host/api/v1`).
    pub fn new(http: Arc<dyn HttpClient>, api_root: impl Into<String>, session: SessionWatch) -> Self {
        let api_root = api_root.into().trim_end_matches('/').to_string();
        Self {
            http,
            api_root,
            session,
        }
    }

    /// The API root all paths are appended to.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Full URL for an API path such as `/posts/feed`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }

    /// Headers for a request; adds the bearer token when a session is held.
    fn headers(&self, json_body: bool) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        if json_body {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(token) = self.session.token() {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    /// Fail on non-2xx, keeping the server's message.
    fn check(response: Response, method: &str, url: &str) -> ClientResult<Response> {
        if response.is_success() {
            return Ok(response);
        }
        let server_message = extract_server_message(&response.body);
        tracing::debug!(
            method,
            url,
            status = response.status,
            message = ?server_message,
            "API request failed"
        );
        Err(ClientError::from_status(response.status, server_message))
    }

    fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        Ok(response.json()?)
    }

    fn encode<B: Serialize>(body: &B) -> ClientResult<String> {
        Ok(serde_json::to_string(body)?)
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(url = %url, "GET");
        let response = self
            .http
            .get(&url, &self.headers(false))
            .await
            .map_err(|e| ClientError::from_http(e, &url))?;
        Self::decode(Self::check(response, "GET", &url)?)
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.send_post(path, &Self::encode(body)?, true).await?;
        Self::decode(response)
    }

    /// POST without a body and decode the JSON response.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.send_post(path, "", false).await?;
        Self::decode(response)
    }

    /// POST without a body, ignoring whatever the server returns.
    pub async fn post_unit(&self, path: &str) -> ClientResult<()> {
        self.send_post(path, "", false).await.map(|_| ())
    }

    async fn send_post(&self, path: &str, body: &str, json_body: bool) -> ClientResult<Response> {
        let url = self.url(path);
        tracing::debug!(url = %url, "POST");
        let response = self
            .http
            .post(&url, body, &self.headers(json_body))
            .await
            .map_err(|e| ClientError::from_http(e, &url))?;
        Self::check(response, "POST", &url)
    }

    /// PUT a JSON body and decode the JSON response.
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(url = %url, "PUT");
        let response = self
            .http
            .put(&url, &Self::encode(body)?, &self.headers(true))
            .await
            .map_err(|e| ClientError::from_http(e, &url))?;
        Self::decode(Self::check(response, "PUT", &url)?)
    }

    async fn send_delete(&self, path: &str) -> ClientResult<Response> {
        let url = self.url(path);
        tracing::debug!(url = %url, "DELETE");
        let response = self
            .http
            .delete(&url, &self.headers(false))
            .await
            .map_err(|e| ClientError::from_http(e, &url))?;
        Self::check(response, "DELETE", &url)
    }

    /// DELETE a resource; the body (usually empty, 204) is ignored.
    pub async fn delete_unit(&self, path: &str) -> ClientResult<()> {
        self.send_delete(path).await.map(|_| ())
    }

    /// DELETE and decode the JSON response.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        Self::decode(self.send_delete(path).await?)
    }

    /// POST a single file as `multipart/form-data` and decode the response.
    pub async fn upload<T: DeserializeOwned>(&self, path: &str, file: MultipartFile) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(url = %url, file = %file.file_name, mime = %file.mime_type, "POST multipart");
        let response = self
            .http
            .post_multipart(&url, file, &self.headers(false))
            .await
            .map_err(|e| ClientError::from_http(e, &url))?;
        Self::decode(Self::check(response, "POST", &url)?)
    }
}
