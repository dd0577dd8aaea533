//! View models for each screen.
//!
//! A view model owns the transient state of one screen (loading flag,
//! inline error, the data it shows) and calls the API clients. Writes that
//! need to move the user elsewhere return the next [`Route`](crate::routes::Route).

mod actions;
mod create_post;
mod feed;
mod layout;
mod login;
mod post_list;
mod profile;
mod register;
mod state;

pub use create_post::{CreatePostForm, MediaStage, PublishOutcome};
pub use feed::FeedView;
pub use layout::MainLayout;
pub use login::LoginForm;
pub use post_list::PostList;
pub use profile::ProfileView;
pub use register::RegisterForm;
pub use state::ViewState;
