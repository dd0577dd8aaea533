//! Result type alias for client operations.

use super::client_error::ClientError;

/// Type alias for Results using ClientError.
///
/// # Example
///
/// ```ignore
/// use zoneblog::error::ClientResult;
///
/// async fn fetch_feed(posts: &PostsClient) -> ClientResult<Vec<Post>> {
///     posts.get_feed().await
/// }
/// ```
pub type ClientResult<T> = Result<T, ClientError>;
