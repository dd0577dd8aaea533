//! The create-post form.
//!
//! Publishing is two stages: create the post, then attach the media to the
//! new post's id. The second stage only runs after the first succeeded and
//! its failure never undoes the first; the post simply has no media.

use crate::api::PostsClient;
use crate::error::{ClientResult, ValidationError};
use crate::media::{MediaKind, PendingUpload, SelectedFile};
use crate::models::{CreatePostRequest, Post};
use crate::routes::Route;

const REQUIRED_FIELDS: &str = "Title and description are required";
const CREATE_FAILED: &str = "Failed to create post";

/// What happened to the attached file.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaStage {
    /// No file was attached
    Skipped,
    /// Upload succeeded; holds the post as returned with its media
    Uploaded(Post),
    /// Upload failed; holds the error message (logged, not shown)
    Failed(String),
}

/// Result of a successful publish.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishOutcome {
    /// The post as created (before any media was attached)
    pub post: Post,
    pub media: MediaStage,
    /// Where to go next; always the feed once the post exists
    pub route: Route,
}

impl PublishOutcome {
    /// The most recent server copy of the post.
    pub fn latest_post(&self) -> &Post {
        match &self.media {
            MediaStage::Uploaded(post) => post,
            _ => &self.post,
        }
    }
}

/// View model of the create-post screen.
pub struct CreatePostForm {
    posts: PostsClient,
    pub title: String,
    pub description: String,
    upload: Option<PendingUpload>,
    error: Option<String>,
    submitting: bool,
}

impl CreatePostForm {
    pub fn new(posts: PostsClient) -> Self {
        Self {
            posts,
            title: String::new(),
            description: String::new(),
            upload: None,
            error: None,
            submitting: false,
        }
    }

    /// The inline error, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn upload(&self) -> Option<&PendingUpload> {
        self.upload.as_ref()
    }

    /// `data:` URL of the selected file.
    pub fn preview(&self) -> Option<&str> {
        self.upload.as_ref().and_then(|u| u.preview.as_deref())
    }

    pub fn media_kind(&self) -> Option<MediaKind> {
        self.upload.as_ref().map(|u| u.kind)
    }

    /// Pick a file to attach.
    ///
    /// A file that is not an image or video sets the inline error and leaves
    /// any previous selection in place.
    pub async fn select_file(&mut self, file: SelectedFile) -> bool {
        match PendingUpload::select(file).await {
            Ok(upload) => {
                self.upload = Some(upload);
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }

    /// Drop the selected file and its preview.
    pub fn remove_file(&mut self) {
        self.upload = None;
    }

    fn validate(&self) -> Result<CreatePostRequest, ValidationError> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err(ValidationError::MissingFields {
                message: REQUIRED_FIELDS,
            });
        }
        Ok(CreatePostRequest {
            title: self.title.clone(),
            description: self.description.clone(),
        })
    }

    /// Validate and publish.
    ///
    /// Returns `None` (with the inline error set) when validation or post
    /// creation fails; once the post exists the outcome is always returned.
    pub async fn publish(&mut self) -> Option<PublishOutcome> {
        let request = match self.validate() {
            Ok(request) => request,
            Err(e) => {
                self.error = Some(e.to_string());
                return None;
            }
        };

        self.submitting = true;
        self.error = None;

        let post = match self.create_stage(&request).await {
            Ok(post) => post,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create post");
                self.error = Some(e.message_or(CREATE_FAILED));
                self.submitting = false;
                return None;
            }
        };

        let media = self.media_stage(&post).await;
        self.submitting = false;
        Some(PublishOutcome {
            post,
            media,
            route: Route::Home,
        })
    }

    async fn create_stage(&self, request: &CreatePostRequest) -> ClientResult<Post> {
        let post = self.posts.create_post(request).await?;
        tracing::info!(post_id = %post.id, "Post created");
        Ok(post)
    }

    async fn media_stage(&self, post: &Post) -> MediaStage {
        let Some(upload) = &self.upload else {
            return MediaStage::Skipped;
        };
        match self.posts.upload_media(&post.id, &upload.file).await {
            Ok(updated) => MediaStage::Uploaded(updated),
            Err(e) => {
                tracing::warn!(post_id = %post.id, error = %e, "Media upload failed; post kept without media");
                MediaStage::Failed(e.to_string())
            }
        }
    }
}
