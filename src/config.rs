//! Session button configuration.
//!
//! Defaults match the routes and storage keys the server templates use. A
//! page may override any value through `data-session-*` attributes on
//! `<body>`; the browser host passes an attribute lookup to
//! [`SessionConfig::from_source`].

use crate::error::SessionError;

pub const DEFAULT_LOGIN_ID: &str = "login";
pub const DEFAULT_REGISTER_ID: &str = "register";
pub const DEFAULT_ACCESS_TOKEN_KEY: &str = "access_token";
pub const DEFAULT_REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_LOGIN_URL: &str = "/login/";
pub const DEFAULT_REGISTER_URL: &str = "/register/";
pub const DEFAULT_LOGOUT_URL: &str = "/logout/";
pub const DEFAULT_LOGIN_LABEL: &str = "Login";
pub const DEFAULT_LOGOUT_LABEL: &str = "Logout";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Logged out successfully";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Logout failed";

/// Attribute prefix used by the browser host when reading overrides.
pub const ATTRIBUTE_PREFIX: &str = "data-session-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub login_id: String,
    pub register_id: String,
    pub access_token_key: String,
    pub refresh_token_key: String,
    pub csrf_cookie: String,
    pub login_url: String,
    pub register_url: String,
    pub logout_url: String,
    pub login_label: String,
    pub logout_label: String,
    /// Value the logout response's `message` field must carry.
    pub success_message: String,
    /// Text of the alert shown when logout fails for any reason.
    pub failure_message: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_id: DEFAULT_LOGIN_ID.to_owned(),
            register_id: DEFAULT_REGISTER_ID.to_owned(),
            access_token_key: DEFAULT_ACCESS_TOKEN_KEY.to_owned(),
            refresh_token_key: DEFAULT_REFRESH_TOKEN_KEY.to_owned(),
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_owned(),
            login_url: DEFAULT_LOGIN_URL.to_owned(),
            register_url: DEFAULT_REGISTER_URL.to_owned(),
            logout_url: DEFAULT_LOGOUT_URL.to_owned(),
            login_label: DEFAULT_LOGIN_LABEL.to_owned(),
            logout_label: DEFAULT_LOGOUT_LABEL.to_owned(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_owned(),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_owned(),
        }
    }
}

impl SessionConfig {
    /// Build a config from a key lookup, falling back to defaults.
    ///
    /// Keys are the attribute suffixes (`logout-url`, `csrf-cookie`, ...).
    /// Recognized keys:
    /// - `login-id`, `register-id`
    /// - `access-token-key`, `refresh-token-key`, `csrf-cookie`
    /// - `login-url`, `register-url`, `logout-url`
    /// - `login-label`, `logout-label`
    /// - `success-message`, `failure-message`
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Config`] when a present value is blank, or when
    /// a URL override is neither an absolute path nor an `http(s)` URL.
    pub fn from_source<F>(lookup: F) -> Result<Self, SessionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &str, fallback: String| -> Result<String, SessionError> {
            match lookup(key) {
                Some(raw) => non_blank(key, &raw),
                None => Ok(fallback),
            }
        };
        let url = |key: &str, fallback: String| -> Result<String, SessionError> {
            match lookup(key) {
                Some(raw) => parse_url(key, &raw),
                None => Ok(fallback),
            }
        };

        Ok(Self {
            login_id: text("login-id", defaults.login_id)?,
            register_id: text("register-id", defaults.register_id)?,
            access_token_key: text("access-token-key", defaults.access_token_key)?,
            refresh_token_key: text("refresh-token-key", defaults.refresh_token_key)?,
            csrf_cookie: text("csrf-cookie", defaults.csrf_cookie)?,
            login_url: url("login-url", defaults.login_url)?,
            register_url: url("register-url", defaults.register_url)?,
            logout_url: url("logout-url", defaults.logout_url)?,
            login_label: text("login-label", defaults.login_label)?,
            logout_label: text("logout-label", defaults.logout_label)?,
            success_message: text("success-message", defaults.success_message)?,
            failure_message: text("failure-message", defaults.failure_message)?,
        })
    }
}

fn non_blank(key: &str, raw: &str) -> Result<String, SessionError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(SessionError::Config(format!("{ATTRIBUTE_PREFIX}{key} is empty")));
    }
    Ok(value.to_owned())
}

fn parse_url(key: &str, raw: &str) -> Result<String, SessionError> {
    let value = non_blank(key, raw)?;
    if value.starts_with('/') || value.starts_with("http://") || value.starts_with("https://") {
        Ok(value)
    } else {
        Err(SessionError::Config(format!(
            "{ATTRIBUTE_PREFIX}{key} must be an absolute path or http(s) URL, got '{value}'"
        )))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
