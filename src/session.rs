//! Logged-in detection and the button wiring derived from it.
//!
//! DESIGN
//! ======
//! The state is decided once at page-ready. [`ButtonPlan`] is plain data the
//! host applies to the DOM, so the wiring rules are testable without a
//! browser.

use crate::config::SessionConfig;
use crate::ports::TokenStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

impl SessionState {
    /// A non-empty refresh token means logged in. Token contents are never
    /// inspected.
    pub fn detect<S: TokenStore + ?Sized>(store: &S, config: &SessionConfig) -> Self {
        match store.get(&config.refresh_token_key) {
            Some(token) if !token.is_empty() => Self::LoggedIn,
            _ => Self::LoggedOut,
        }
    }
}

/// What a bound button does when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    Navigate(String),
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterPlan {
    Visible(ClickAction),
    Hidden,
}

/// Label and bindings for the login and register buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonPlan {
    pub login_label: String,
    pub login_action: ClickAction,
    pub register: RegisterPlan,
}

impl ButtonPlan {
    #[must_use]
    pub fn for_state(state: SessionState, config: &SessionConfig) -> Self {
        match state {
            SessionState::LoggedIn => Self {
                login_label: config.logout_label.clone(),
                login_action: ClickAction::Logout,
                register: RegisterPlan::Hidden,
            },
            SessionState::LoggedOut => Self {
                login_label: config.login_label.clone(),
                login_action: ClickAction::Navigate(config.login_url.clone()),
                register: RegisterPlan::Visible(ClickAction::Navigate(config.register_url.clone())),
            },
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
