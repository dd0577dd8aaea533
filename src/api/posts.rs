//! Client for `/posts`.

use super::transport::{path_segment, ApiTransport};
use crate::error::ClientResult;
use crate::media::SelectedFile;
use crate::models::{CreatePostRequest, LikeResult, Post, UpdatePostRequest};

/// Form field the media endpoint reads the file from.
const MEDIA_FIELD: &str = "file";

/// Client for posts, likes and post media.
#[derive(Clone)]
pub struct PostsClient {
    transport: ApiTransport,
}

impl PostsClient {
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    fn post_path(post_id: &str) -> String {
        format!("/posts/{}", path_segment(post_id))
    }

    /// POST /posts
    pub async fn create_post(&self, request: &CreatePostRequest) -> ClientResult<Post> {
        self.transport.post("/posts", request).await
    }

    /// GET /posts/feed
    pub async fn get_feed(&self) -> ClientResult<Vec<Post>> {
        self.transport.get("/posts/feed").await
    }

    /// GET /posts/{id}
    pub async fn get_post(&self, post_id: &str) -> ClientResult<Post> {
        self.transport.get(&Self::post_path(post_id)).await
    }

    /// PUT /posts/{id}
    pub async fn update_post(&self, post_id: &str, request: &UpdatePostRequest) -> ClientResult<Post> {
        self.transport.put(&Self::post_path(post_id), request).await
    }

    /// DELETE /posts/{id}
    pub async fn delete_post(&self, post_id: &str) -> ClientResult<()> {
        self.transport.delete_unit(&Self::post_path(post_id)).await
    }

    /// POST /posts/{id}/like
    ///
    /// Toggles; the result is the server's view after the toggle.
    pub async fn toggle_like(&self, post_id: &str) -> ClientResult<LikeResult> {
        self.transport
            .post_empty(&format!("{}/like", Self::post_path(post_id)))
            .await
    }

    /// POST /posts/{id}/media (multipart, field `file`)
    pub async fn upload_media(&self, post_id: &str, file: &SelectedFile) -> ClientResult<Post> {
        self.transport
            .upload(
                &format!("{}/media", Self::post_path(post_id)),
                file.to_multipart(MEDIA_FIELD),
            )
            .await
    }

    /// DELETE /posts/{id}/media
    pub async fn delete_media(&self, post_id: &str) -> ClientResult<Post> {
        self.transport
            .delete(&format!("{}/media", Self::post_path(post_id)))
            .await
    }

    /// GET /users/{id}/posts
    pub async fn get_user_posts(&self, user_id: &str) -> ClientResult<Vec<Post>> {
        self.transport
            .get(&format!("/users/{}/posts", path_segment(user_id)))
            .await
    }
}
