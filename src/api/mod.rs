//! Typed clients for the blog REST API (`/api/v1`).
//!
//! One client per resource, each exposing one method per endpoint. All of
//! them share an [`ApiTransport`] which carries the HTTP seam, the API root
//! and a read handle on the session for the bearer token. Errors are
//! returned to the caller untouched; nothing here retries or caches.

mod auth;
mod comments;
mod posts;
mod subscriptions;
mod transport;
mod users;

pub use auth::AuthClient;
pub use comments::CommentsClient;
pub use posts::PostsClient;
pub use subscriptions::SubscriptionsClient;
pub use transport::{path_segment, ApiTransport};
pub use users::UsersClient;
