//! Client-side session state.
//!
//! [`SessionStore`] owns the one mutable cell; everything else reads it
//! through a [`SessionWatch`].

mod observable;
mod store;
mod watch;

pub use observable::Observable;
pub use store::{SessionStore, TOKEN_KEY, USER_KEY};
pub use watch::SessionWatch;
