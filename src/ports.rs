//! Capabilities the controller needs from its host page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never touches `window`, `document` or `fetch` directly. The
//! browser host implements these traits over web-sys and gloo-net; tests
//! implement them in memory. Futures are `?Send` because everything runs on
//! the single browser event loop.

use async_trait::async_trait;

use crate::error::SessionError;
use crate::logout::{LogoutRequest, LogoutResponse};

/// Key-value token storage (`localStorage` in the browser).
pub trait TokenStore {
    /// Read a stored value. Storage that cannot be read reports `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Remove a stored value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the backing store rejects the call.
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// Read-only access to the page's raw cookie string.
pub trait CookieSource {
    fn cookie_string(&self) -> String;
}

/// Sends the logout request and hands back the raw response.
#[async_trait(?Send)]
pub trait LogoutTransport {
    /// # Errors
    ///
    /// Returns [`SessionError::Transport`] when no response was received.
    async fn send(&self, request: &LogoutRequest) -> Result<LogoutResponse, SessionError>;
}

/// Page-level side effects: full navigation and the blocking alert.
pub trait PageHost {
    fn navigate(&self, url: &str);
    fn alert(&self, message: &str);
}
