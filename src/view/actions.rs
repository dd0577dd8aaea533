//! Post actions shared by the feed and the profile.
//!
//! These are silent: a failure is logged and the list is left as it was.

use super::post_list::PostList;
use crate::api::PostsClient;

/// Toggle the like on a post and copy the server's answer into `list`.
///
/// Returns whether the list changed.
pub(crate) async fn toggle_like(client: &PostsClient, list: &mut PostList, post_id: &str) -> bool {
    match client.toggle_like(post_id).await {
        Ok(result) => list.apply_like(post_id, &result),
        Err(e) => {
            tracing::warn!(post_id, error = %e, "Failed to toggle like");
            false
        }
    }
}

/// Delete a post and drop it from `list`.
pub(crate) async fn delete_post(client: &PostsClient, list: &mut PostList, post_id: &str) -> bool {
    match client.delete_post(post_id).await {
        Ok(()) => list.remove(post_id).is_some(),
        Err(e) => {
            tracing::warn!(post_id, error = %e, "Failed to delete post");
            false
        }
    }
}
