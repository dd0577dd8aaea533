//! Client for `/posts/{id}/comments`.

use super::transport::{path_segment, ApiTransport};
use crate::error::ClientResult;
use crate::models::{Comment, CommentRequest};

/// Client for a post's comments.
#[derive(Clone)]
pub struct CommentsClient {
    transport: ApiTransport,
}

impl CommentsClient {
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    fn base(post_id: &str) -> String {
        format!("/posts/{}/comments", path_segment(post_id))
    }

    /// GET /posts/{id}/comments
    pub async fn list(&self, post_id: &str) -> ClientResult<Vec<Comment>> {
        self.transport.get(&Self::base(post_id)).await
    }

    /// POST /posts/{id}/comments
    pub async fn create(&self, post_id: &str, content: &str) -> ClientResult<Comment> {
        let request = CommentRequest {
            content: content.to_string(),
        };
        self.transport.post(&Self::base(post_id), &request).await
    }

    /// PUT /posts/{id}/comments/{commentId}
    pub async fn update(&self, post_id: &str, comment_id: &str, content: &str) -> ClientResult<Comment> {
        let request = CommentRequest {
            content: content.to_string(),
        };
        let path = format!("{}/{}", Self::base(post_id), path_segment(comment_id));
        self.transport.put(&path, &request).await
    }

    /// DELETE /posts/{id}/comments/{commentId}
    pub async fn delete(&self, post_id: &str, comment_id: &str) -> ClientResult<()> {
        let path = format!("{}/{}", Self::base(post_id), path_segment(comment_id));
        self.transport.delete_unit(&path).await
    }
}
