//! Client for `/auth`.

use super::transport::ApiTransport;
use crate::error::ClientResult;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};

/// Client for the authentication endpoints.
///
/// Only issues the requests; persisting the resulting session is the
/// [`SessionStore`](crate::session::SessionStore)'s job.
#[derive(Clone)]
pub struct AuthClient {
    transport: ApiTransport,
}

impl AuthClient {
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    /// POST /auth/login
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse> {
        self.transport.post("/auth/login", request).await
    }

    /// POST /auth/register
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse> {
        self.transport.post("/auth/register", request).await
    }
}
