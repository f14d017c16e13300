//! Error taxonomy for the session button.
//!
//! ERROR HANDLING
//! ==============
//! Only `MissingElement` is fatal (the page cannot be wired). Every logout
//! failure variant collapses to the same user-facing alert; the variants exist
//! so logs can tell a rejected logout from an unreachable server.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("element not found: #{0}")]
    MissingElement(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("logout request failed: {0}")]
    Transport(String),
    #[error("logout rejected with status {0}")]
    Status(u16),
    #[error("logout response was not valid JSON: {0}")]
    Decode(String),
    #[error("unexpected logout message: {0:?}")]
    UnexpectedMessage(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("browser api unavailable: {0}")]
    Browser(String),
}

impl SessionError {
    /// Whether this error came out of a logout attempt (and should be shown
    /// to the user as a failed logout).
    #[must_use]
    pub fn is_logout_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Status(_) | Self::Decode(_) | Self::UnexpectedMessage(_)
        )
    }
}
