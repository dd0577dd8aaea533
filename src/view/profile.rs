//! A user's profile page: the user, their posts, the follow button and the
//! report dialog.

use super::actions;
use super::post_list::PostList;
use super::state::ViewState;
use crate::api::{PostsClient, SubscriptionsClient, UsersClient};
use crate::error::ValidationError;
use crate::models::{CreateReportRequest, UserSummary};

const LOAD_FAILED: &str = "Failed to load profile";
const REPORT_FAILED: &str = "Failed to submit report";

/// Accepted length of a report reason, in characters, after trimming.
pub const REPORT_REASON_MIN: usize = 5;
pub const REPORT_REASON_MAX: usize = 1000;

/// Check a report reason the way the server will.
pub fn validate_report_reason(reason: &str) -> Result<&str, ValidationError> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(ValidationError::MissingFields {
            message: "Reason is required",
        });
    }
    let len = reason.chars().count();
    if !(REPORT_REASON_MIN..=REPORT_REASON_MAX).contains(&len) {
        return Err(ValidationError::InvalidLength {
            message: "Reason must be between 5 and 1000 characters",
        });
    }
    Ok(reason)
}

/// View model of the profile screen.
pub struct ProfileView {
    users: UsersClient,
    posts_client: PostsClient,
    subscriptions: SubscriptionsClient,
    user_id: String,
    user: ViewState<UserSummary>,
    posts: PostList,
    is_own_profile: bool,
    report_open: bool,
    report_error: Option<String>,
}

impl ProfileView {
    pub fn new(
        user_id: impl Into<String>,
        users: UsersClient,
        posts_client: PostsClient,
        subscriptions: SubscriptionsClient,
    ) -> Self {
        Self {
            users,
            posts_client,
            subscriptions,
            user_id: user_id.into(),
            user: ViewState::Loading,
            posts: PostList::default(),
            is_own_profile: false,
            report_open: false,
            report_error: None,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn user(&self) -> &ViewState<UserSummary> {
        &self.user
    }

    pub fn posts(&self) -> &PostList {
        &self.posts
    }

    /// Whether the viewed profile belongs to the logged-in user.
    pub fn is_own_profile(&self) -> bool {
        self.is_own_profile
    }

    /// Load the user, their posts and the current user at the same time.
    ///
    /// Each part fails on its own: a failed post list shows as empty and a
    /// failed current-user lookup means "not my profile".
    pub async fn load(&mut self) {
        self.user = ViewState::Loading;
        let (user, posts, me) = futures::join!(
            self.users.get_user(&self.user_id),
            self.posts_client.get_user_posts(&self.user_id),
            self.users.get_current_user(),
        );

        self.user = match user {
            Ok(user) => ViewState::Ready(user),
            Err(e) => {
                tracing::error!(user_id = %self.user_id, error = %e, "Failed to load profile");
                ViewState::Error(e.message_or(LOAD_FAILED))
            }
        };

        self.posts = match posts {
            Ok(posts) => PostList::new(posts),
            Err(e) => {
                tracing::error!(user_id = %self.user_id, error = %e, "Failed to load user posts");
                PostList::default()
            }
        };

        self.is_own_profile = match me {
            Ok(me) => me.id == self.user_id,
            Err(e) => {
                tracing::debug!(error = %e, "Could not resolve current user");
                false
            }
        };
    }

    /// Follow or unfollow the viewed user, depending on the current state.
    ///
    /// Counters change only after the server confirms. Returns whether
    /// anything changed.
    pub async fn toggle_follow(&mut self) -> bool {
        let Some(user) = self.user.data_mut() else {
            return false;
        };

        if user.is_followed_by_current_user {
            match self.subscriptions.unfollow(&user.id).await {
                Ok(()) => {
                    user.mark_unfollowed();
                    true
                }
                Err(e) => {
                    tracing::warn!(user_id = %user.id, error = %e, "Failed to unfollow");
                    false
                }
            }
        } else {
            match self.subscriptions.follow(&user.id).await {
                Ok(()) => {
                    user.mark_followed();
                    true
                }
                Err(e) => {
                    tracing::warn!(user_id = %user.id, error = %e, "Failed to follow");
                    false
                }
            }
        }
    }

    pub async fn toggle_like(&mut self, post_id: &str) -> bool {
        actions::toggle_like(&self.posts_client, &mut self.posts, post_id).await
    }

    pub async fn delete_post(&mut self, post_id: &str) -> bool {
        actions::delete_post(&self.posts_client, &mut self.posts, post_id).await
    }

    pub fn is_report_open(&self) -> bool {
        self.report_open
    }

    /// Why the last report attempt was refused, if it was.
    pub fn report_error(&self) -> Option<&str> {
        self.report_error.as_deref()
    }

    pub fn open_report(&mut self) {
        self.report_open = true;
        self.report_error = None;
    }

    pub fn close_report(&mut self) {
        self.report_open = false;
        self.report_error = None;
    }

    /// Report the viewed user to the moderators.
    ///
    /// A bad reason is refused before any request. On success the dialog
    /// closes and `true` is returned; on failure it stays open with the
    /// error recorded.
    pub async fn report(&mut self, reason: &str) -> bool {
        let reason = match validate_report_reason(reason) {
            Ok(reason) => reason.to_string(),
            Err(e) => {
                self.report_error = Some(e.to_string());
                return false;
            }
        };

        let request = CreateReportRequest { reason };
        match self.users.report_user(&self.user_id, &request).await {
            Ok(report) => {
                tracing::info!(user_id = %self.user_id, report_id = %report.id, "Report submitted");
                self.close_report();
                true
            }
            Err(e) => {
                tracing::warn!(user_id = %self.user_id, error = %e, "Failed to report user");
                self.report_error = Some(e.message_or(REPORT_FAILED));
                false
            }
        }
    }

    /// Avatar initials of the viewed user; `?` until the user is loaded.
    pub fn initials(&self) -> String {
        self.user
            .data()
            .map(UserSummary::initials)
            .unwrap_or_else(|| "?".to_string())
    }
}
