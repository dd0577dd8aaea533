//! Screens and the guards in front of them.
//!
//! View operations return the [`Route`] to go to next; the front end asks the
//! [`Router`] whether the current session may enter it.

use std::fmt;

use crate::session::SessionWatch;

/// A screen of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    /// The feed
    Home,
    /// A user's profile page
    Profile(String),
    CreatePost,
}

impl Route {
    /// Whether entering this route needs a session.
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Home | Route::Profile(_) | Route::CreatePost)
    }

    /// Whether this route is only for visitors without a session.
    pub fn guest_only(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Home => "/".to_string(),
            Route::Profile(id) => format!("/profile/{}", id),
            Route::CreatePost => "/create-post".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Result of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(Route),
}

impl GuardOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardOutcome::Allow)
    }
}

/// Protected screens: no session sends the visitor to the login screen.
pub fn auth_guard(session: &SessionWatch) -> GuardOutcome {
    if session.is_authenticated() {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Redirect(Route::Login)
    }
}

/// Login and registration: a held session sends the user to the feed.
pub fn guest_guard(session: &SessionWatch) -> GuardOutcome {
    if session.is_authenticated() {
        GuardOutcome::Redirect(Route::Home)
    } else {
        GuardOutcome::Allow
    }
}

/// Applies the right guard for each route.
#[derive(Debug, Clone)]
pub struct Router {
    session: SessionWatch,
}

impl Router {
    pub fn new(session: SessionWatch) -> Self {
        Self { session }
    }

    /// Decide whether `route` may be entered with the current session.
    pub fn resolve(&self, route: &Route) -> GuardOutcome {
        let outcome = if route.requires_session() {
            auth_guard(&self.session)
        } else if route.guest_only() {
            guest_guard(&self.session)
        } else {
            GuardOutcome::Allow
        };
        if let GuardOutcome::Redirect(target) = &outcome {
            tracing::debug!(from = %route, to = %target, "Route redirected");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Session;
    use crate::session::Observable;

    fn watch(session: Option<Session>) -> (Observable<Option<Session>>, SessionWatch) {
        let cell = Observable::new(session);
        let watch = SessionWatch::new(cell.subscribe());
        (cell, watch)
    }

    #[test]
    fn test_auth_guard() {
        let (_cell, anonymous) = watch(None);
        assert_eq!(auth_guard(&anonymous), GuardOutcome::Redirect(Route::Login));

        let (_cell, signed_in) = watch(Some(Session::new("t", None)));
        assert!(auth_guard(&signed_in).is_allowed());
    }

    #[test]
    fn test_guest_guard() {
        let (_cell, anonymous) = watch(None);
        assert!(guest_guard(&anonymous).is_allowed());

        let (_cell, signed_in) = watch(Some(Session::new("t", None)));
        assert_eq!(guest_guard(&signed_in), GuardOutcome::Redirect(Route::Home));
    }

    #[test]
    fn test_router_follows_session_changes() {
        let (cell, session) = watch(None);
        let router = Router::new(session);
        let profile = Route::Profile("u-1".to_string());

        assert_eq!(router.resolve(&profile), GuardOutcome::Redirect(Route::Login));
        assert!(router.resolve(&Route::Register).is_allowed());

        cell.set(Some(Session::new("t", None)));
        assert!(router.resolve(&profile).is_allowed());
        assert!(router.resolve(&Route::CreatePost).is_allowed());
        assert_eq!(router.resolve(&Route::Login), GuardOutcome::Redirect(Route::Home));
    }

    #[test]
    fn test_paths() {
        assert_eq!(Route::Home.to_string(), "/");
        assert_eq!(Route::Profile("42".to_string()).path(), "/profile/42");
        assert_eq!(Route::CreatePost.path(), "/create-post");
    }
}
