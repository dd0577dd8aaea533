//! Post records and the request/response bodies of the posts endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::user::UserSummary;
use super::{deserialize_id, deserialize_nullable_bool, deserialize_nullable_count, deserialize_optional_timestamp, deserialize_timestamp};

/// A post as returned by the feed, profile and post endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_nullable_count")]
    pub like_count: u64,
    pub author: UserSummary,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_nullable_count")]
    pub comment_count: u64,
    #[serde(default, deserialize_with = "deserialize_nullable_bool")]
    pub liked_by_current_user: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

impl Post {
    /// Whether a media file is attached.
    pub fn has_media(&self) -> bool {
        self.media_url.is_some()
    }

    /// Overwrite the like state with what the server reported.
    pub fn apply_like(&mut self, result: &LikeResult) {
        self.liked_by_current_user = result.liked;
        self.like_count = result.like_count;
    }
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub description: String,
}

/// Body of `PUT /posts/{id}`; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response of `POST /posts/{id}/like`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResult {
    pub liked: bool,
    pub like_count: u64,
}
