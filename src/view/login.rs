//! The login form.

use std::sync::Arc;

use crate::error::ValidationError;
use crate::routes::Route;
use crate::session::SessionStore;

const REQUIRED_FIELDS: &str = "Email and password are required";
const LOGIN_FAILED: &str = "Login failed";

/// View model of the login screen.
pub struct LoginForm {
    session: Arc<SessionStore>,
    pub email: String,
    pub password: String,
    error: Option<String>,
    submitting: bool,
}

impl LoginForm {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self {
            session,
            email: String::new(),
            password: String::new(),
            error: None,
            submitting: false,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Submit the form. Returns the route to go to on success.
    pub async fn submit(&mut self) -> Option<Route> {
        if self.email.is_empty() || self.password.is_empty() {
            self.error = Some(
                ValidationError::MissingFields {
                    message: REQUIRED_FIELDS,
                }
                .to_string(),
            );
            return None;
        }

        self.submitting = true;
        self.error = None;
        let result = self.session.login(&self.email, &self.password).await;
        self.submitting = false;

        match result {
            Ok(_) => Some(Route::Home),
            Err(e) => {
                tracing::error!(error = %e, "Login error");
                self.error = Some(e.message_or(LOGIN_FAILED));
                None
            }
        }
    }
}
