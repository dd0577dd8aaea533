//! Client for `/users`.

use super::transport::{path_segment, ApiTransport};
use crate::error::ClientResult;
use crate::models::{CreateReportRequest, Report, UserSummary};

/// Client for user lookups and reports.
#[derive(Clone)]
pub struct UsersClient {
    transport: ApiTransport,
}

impl UsersClient {
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    /// GET /users/{id}
    pub async fn get_user(&self, user_id: &str) -> ClientResult<UserSummary> {
        self.transport
            .get(&format!("/users/{}", path_segment(user_id)))
            .await
    }

    /// GET /users/me
    pub async fn get_current_user(&self) -> ClientResult<UserSummary> {
        self.transport.get("/users/me").await
    }

    /// POST /users/{id}/report
    pub async fn report_user(&self, user_id: &str, request: &CreateReportRequest) -> ClientResult<Report> {
        self.transport
            .post(&format!("/users/{}/report", path_segment(user_id)), request)
            .await
    }
}
