//! Session records and the bodies of the auth endpoints.

use serde::{Deserialize, Serialize};

use super::user::UserSummary;

/// The authenticated identity held by the client.
///
/// `user` may be unknown while a token is held (e.g. the server did not
/// return one, or the stored record was unreadable).
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: Option<UserSummary>,
}

impl Session {
    /// Create a session from a token and optional user.
    pub fn new(token: impl Into<String>, user: Option<UserSummary>) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// Id of the logged-in user, if known.
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Session::new(response.token, response.user)
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Response of both auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<UserSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_without_user() {
        let response: AuthResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        let session = Session::from(response);
        assert_eq!(session.token, "abc");
        assert!(session.user.is_none());
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn test_auth_response_with_user() {
        let json = r#"{"token":"abc","user":{"id":"u-1","name":"Ada","email":"a@x.io"}}"#;
        let session = Session::from(serde_json::from_str::<AuthResponse>(json).unwrap());
        assert_eq!(session.user_id(), Some("u-1"));
    }

    #[test]
    fn test_register_request_omits_role() {
        let req = RegisterRequest {
            name: "Ada".to_string(),
            email: "a@x.io".to_string(),
            password: "secret".to_string(),
            role: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("role").is_none());
        assert_eq!(json["email"], "a@x.io");
    }
}
