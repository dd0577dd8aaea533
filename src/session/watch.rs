//! Read-side handle on the session.

use tokio::sync::watch;

use crate::models::{Session, UserSummary};

/// A subscriber to session changes.
///
/// Every reader (API transport, layout, guards) holds one of these; reads are
/// synchronous and always reflect the latest published session.
#[derive(Debug, Clone)]
pub struct SessionWatch {
    rx: watch::Receiver<Option<Session>>,
}

impl SessionWatch {
    /// Wrap a receiver on the session cell.
    pub fn new(rx: watch::Receiver<Option<Session>>) -> Self {
        Self { rx }
    }

    /// The current session, if any.
    pub fn current(&self) -> Option<Session> {
        self.rx.borrow().clone()
    }

    /// The current token, if any.
    pub fn token(&self) -> Option<String> {
        self.rx.borrow().as_ref().map(|s| s.token.clone())
    }

    /// The current user, if known.
    pub fn current_user(&self) -> Option<UserSummary> {
        self.rx.borrow().as_ref().and_then(|s| s.user.clone())
    }

    /// Whether a session is held.
    pub fn is_authenticated(&self) -> bool {
        self.rx.borrow().is_some()
    }

    /// Whether the session changed since this handle last looked.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Wait for the next change and return the new session.
    ///
    /// Returns `None` immediately if the store has been dropped and the last
    /// value was already seen.
    pub async fn changed(&mut self) -> Option<Option<Session>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
