//! The session button controller.
//!
//! Separated from the browser host so the whole page-ready and logout flow
//! can run against in-memory ports. Nothing guards against overlapping
//! logouts; each activation runs to completion on its own.

use crate::config::SessionConfig;
use crate::cookie::{csrf_header_value, get_cookie};
use crate::logout::{LogoutOutcome, LogoutRequest, check_response};
use crate::ports::{CookieSource, LogoutTransport, PageHost, TokenStore};
use crate::session::{ButtonPlan, ClickAction, SessionState};

pub struct SessionController<S, C, T, H> {
    config: SessionConfig,
    store: S,
    cookies: C,
    transport: T,
    host: H,
}

impl<S, C, T, H> SessionController<S, C, T, H>
where
    S: TokenStore,
    C: CookieSource,
    T: LogoutTransport,
    H: PageHost,
{
    pub fn new(config: SessionConfig, store: S, cookies: C, transport: T, host: H) -> Self {
        Self { config, store, cookies, transport, host }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Decide the session state and the button wiring for this page load.
    pub fn initialize(&self) -> (SessionState, ButtonPlan) {
        let state = SessionState::detect(&self.store, &self.config);
        log::info!("session button initialized: {state:?}");
        (state, ButtonPlan::for_state(state, &self.config))
    }

    /// Handle a click on a bound button.
    ///
    /// Returns the logout outcome for [`ClickAction::Logout`], `None` for a
    /// plain navigation.
    pub async fn activate(&self, action: &ClickAction) -> Option<LogoutOutcome> {
        match action {
            ClickAction::Navigate(url) => {
                self.host.navigate(url);
                None
            }
            ClickAction::Logout => Some(self.logout().await),
        }
    }

    /// POST the logout request and apply its outcome.
    ///
    /// Success clears both tokens and navigates to the login page. Any
    /// failure alerts once and leaves storage and location alone.
    pub async fn logout(&self) -> LogoutOutcome {
        let csrf = csrf_header_value(self.csrf_token());
        let request = LogoutRequest::new(&self.config.logout_url, &csrf);
        log::debug!("POST {} (csrf token present: {})", request.url, !csrf.is_empty());

        let result = match self.transport.send(&request).await {
            Ok(response) => check_response(&response, &self.config),
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => {
                self.clear_tokens();
                let redirect = self.config.login_url.clone();
                log::info!("logged out; redirecting to {redirect}");
                self.host.navigate(&redirect);
                LogoutOutcome::LoggedOut { redirect }
            }
            Err(err) => {
                log::warn!("logout failed: {err}");
                self.host.alert(&self.config.failure_message);
                LogoutOutcome::Failed(err)
            }
        }
    }

    /// Read the CSRF cookie configured for this page.
    pub fn csrf_token(&self) -> Option<String> {
        get_cookie(&self.cookies.cookie_string(), &self.config.csrf_cookie)
    }

    fn clear_tokens(&self) {
        for key in [&self.config.access_token_key, &self.config.refresh_token_key] {
            if let Err(err) = self.store.remove(key) {
                log::error!("failed to remove {key} after logout: {err}");
            }
        }
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;
