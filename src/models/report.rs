//! User reports.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::user::UserSummary;
use super::{deserialize_id, deserialize_optional_timestamp, deserialize_timestamp};

/// Body of `POST /users/{id}/report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReportRequest {
    pub reason: String,
}

/// A report as acknowledged by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter: Option<UserSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_user: Option<UserSummary>,
    pub reason: String,
    /// `PENDING` until a moderator resolves it.
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub resolved_at: Option<NaiveDateTime>,
}
