//! Comment records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::user::UserSummary;
use super::{deserialize_id, deserialize_optional_timestamp, deserialize_timestamp};

/// A comment on a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub content: String,
    pub author: UserSummary,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<NaiveDateTime>,
}

/// Body of the comment create and update endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRequest {
    pub content: String,
}
