//! The frame around every signed-in screen: who is logged in, and logout.

use std::sync::Arc;

use crate::models::UserSummary;
use crate::routes::Route;
use crate::session::{SessionStore, SessionWatch};

/// View model of the main layout.
pub struct MainLayout {
    store: Arc<SessionStore>,
    session: SessionWatch,
}

impl MainLayout {
    pub fn new(store: Arc<SessionStore>) -> Self {
        let session = store.watch();
        Self { store, session }
    }

    /// The logged-in user, if known. Always reflects the latest session.
    pub fn current_user(&self) -> Option<UserSummary> {
        self.session.current_user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Route to the logged-in user's own profile.
    pub fn own_profile_route(&self) -> Option<Route> {
        self.current_user().map(|user| Route::Profile(user.id))
    }

    /// End the session and go to the login screen.
    pub fn logout(&self) -> Route {
        self.store.logout();
        Route::Login
    }
}
