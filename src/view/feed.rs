//! The home feed.

use super::actions;
use super::post_list::PostList;
use super::state::ViewState;
use crate::api::PostsClient;

const LOAD_FAILED: &str = "Failed to load posts";

/// View model of the feed screen.
pub struct FeedView {
    posts: PostsClient,
    state: ViewState<PostList>,
}

impl FeedView {
    pub fn new(posts: PostsClient) -> Self {
        Self {
            posts,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState<PostList> {
        &self.state
    }

    /// The loaded posts, if any.
    pub fn posts(&self) -> Option<&PostList> {
        self.state.data()
    }

    /// Fetch the feed, replacing whatever was shown.
    pub async fn load(&mut self) {
        self.state = ViewState::Loading;
        self.state = match self.posts.get_feed().await {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "Feed loaded");
                ViewState::Ready(PostList::new(posts))
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch feed");
                ViewState::Error(e.message_or(LOAD_FAILED))
            }
        };
    }

    /// Like or unlike a post. Failures leave the feed unchanged.
    pub async fn toggle_like(&mut self, post_id: &str) -> bool {
        match self.state.data_mut() {
            Some(list) => actions::toggle_like(&self.posts, list, post_id).await,
            None => false,
        }
    }

    /// Delete a post. Failures leave the feed unchanged.
    pub async fn delete_post(&mut self, post_id: &str) -> bool {
        match self.state.data_mut() {
            Some(list) => actions::delete_post(&self.posts, list, post_id).await,
            None => false,
        }
    }
}
