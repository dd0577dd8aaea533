//! Client for following users.

use super::transport::{path_segment, ApiTransport};
use crate::error::ClientResult;
use crate::models::UserSummary;

/// Client for the follow/unfollow endpoints.
#[derive(Clone)]
pub struct SubscriptionsClient {
    transport: ApiTransport,
}

impl SubscriptionsClient {
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    fn follow_path(user_id: &str) -> String {
        format!("/users/{}/follow", path_segment(user_id))
    }

    /// POST /users/{id}/follow
    pub async fn follow(&self, user_id: &str) -> ClientResult<()> {
        self.transport.post_unit(&Self::follow_path(user_id)).await
    }

    /// DELETE /users/{id}/follow
    pub async fn unfollow(&self, user_id: &str) -> ClientResult<()> {
        self.transport.delete_unit(&Self::follow_path(user_id)).await
    }

    /// GET /users/{id}/followers
    pub async fn followers(&self, user_id: &str) -> ClientResult<Vec<UserSummary>> {
        self.transport
            .get(&format!("/users/{}/followers", path_segment(user_id)))
            .await
    }

    /// GET /users/{id}/following
    pub async fn following(&self, user_id: &str) -> ClientResult<Vec<UserSummary>> {
        self.transport
            .get(&format!("/users/{}/following", path_segment(user_id)))
            .await
    }
}
