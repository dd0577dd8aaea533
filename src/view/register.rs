//! The registration form.

use std::sync::Arc;

use crate::error::ValidationError;
use crate::models::RegisterRequest;
use crate::routes::Route;
use crate::session::SessionStore;

const REQUIRED_FIELDS: &str = "All fields are required";
const REGISTRATION_FAILED: &str = "Registration failed";

/// View model of the registration screen.
pub struct RegisterForm {
    session: Arc<SessionStore>,
    pub name: String,
    pub email: String,
    pub password: String,
    error: Option<String>,
    submitting: bool,
}

impl RegisterForm {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self {
            session,
            name: String::new(),
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

    /// Submit the form; a new account is logged in straight away.
    pub async fn submit(&mut self) -> Option<Route> {
        if self.name.is_empty() || self.email.is_empty() || self.password.is_empty() {
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
        let request = RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: None,
        };
        let result = self.session.register(&request).await;
        self.submitting = false;

        match result {
            Ok(_) => Some(Route::Home),
            Err(e) => {
                tracing::error!(error = %e, "Registration error");
                self.error = Some(e.message_or(REGISTRATION_FAILED));
                None
            }
        }
    }
}
