//! Logout request shape and success contract.
//!
//! The server answers a successful logout with `{"message": "Logged out
//! successfully"}`. A response counts as success only when its status is 2xx
//! and its JSON `message` equals the configured success message; a 2xx reply
//! carrying anything else is a failure.

use serde::Deserialize;

use crate::config::SessionConfig;
use crate::error::SessionError;

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A bodiless `POST` to the logout endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl LogoutRequest {
    #[must_use]
    pub fn new(url: &str, csrf_token: &str) -> Self {
        Self {
            url: url.to_owned(),
            headers: vec![
                (CONTENT_TYPE_HEADER.to_owned(), JSON_CONTENT_TYPE.to_owned()),
                (CSRF_HEADER.to_owned(), csrf_token.to_owned()),
            ],
        }
    }

    /// Look up a header value by exact name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutResponse {
    pub status: u16,
    pub body: String,
}

impl LogoutResponse {
    #[must_use]
    pub fn is_success_status(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// What a single logout activation ended in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// Tokens cleared and the page sent to `redirect`.
    LoggedOut { redirect: String },
    /// The user was alerted; storage and location are unchanged.
    Failed(SessionError),
}

#[derive(Debug, Deserialize)]
struct LogoutBody {
    #[serde(default)]
    message: Option<String>,
}

/// Apply the success contract to a raw response.
///
/// # Errors
///
/// - [`SessionError::Status`] for a non-2xx status
/// - [`SessionError::Decode`] when the body is not a JSON object
/// - [`SessionError::UnexpectedMessage`] when `message` is missing or differs
pub fn check_response(response: &LogoutResponse, config: &SessionConfig) -> Result<(), SessionError> {
    if !response.is_success_status() {
        return Err(SessionError::Status(response.status));
    }
    let body: LogoutBody =
        serde_json::from_str(&response.body).map_err(|e| SessionError::Decode(e.to_string()))?;
    match body.message {
        Some(message) if message == config.success_message => Ok(()),
        Some(message) => Err(SessionError::UnexpectedMessage(message)),
        None => Err(SessionError::UnexpectedMessage(String::new())),
    }
}

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;
