//! User records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_nullable_bool, deserialize_nullable_count, deserialize_optional_timestamp};

/// A user as returned by `/users/{id}`, `/users/me` and embedded in posts.
///
/// Counters may be `null` on the wire (the server omits them for embedded
/// authors); they decode as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_count")]
    pub followers_count: u64,
    #[serde(default, deserialize_with = "deserialize_nullable_count")]
    pub following_count: u64,
    #[serde(default, deserialize_with = "deserialize_nullable_bool")]
    pub is_followed_by_current_user: bool,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<NaiveDateTime>,
}

impl UserSummary {
    /// Create a user with zeroed counters.
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: None,
            followers_count: 0,
            following_count: 0,
            is_followed_by_current_user: false,
            created_at: None,
        }
    }

    /// Initials for an avatar: first letters of the first two words of the
    /// name, or of the single word; `?` when the name is blank.
    pub fn initials(&self) -> String {
        let mut words = self.name.split_whitespace();
        let first = words.next().and_then(|w| w.chars().next());
        let second = words.next().and_then(|w| w.chars().next());
        match (first, second) {
            (Some(a), Some(b)) => format!("{}{}", a, b),
            (Some(a), None) => a.to_string(),
            _ => "?".to_string(),
        }
    }

    /// Record that the current user now follows this user.
    ///
    /// Only called after the server confirmed the follow.
    pub fn mark_followed(&mut self) {
        if !self.is_followed_by_current_user {
            self.is_followed_by_current_user = true;
            self.followers_count += 1;
        }
    }

    /// Record that the current user no longer follows this user.
    pub fn mark_unfollowed(&mut self) {
        if self.is_followed_by_current_user {
            self.is_followed_by_current_user = false;
            self.followers_count = self.followers_count.saturating_sub(1);
        }
    }
}
