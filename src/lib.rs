//! # session-button
//!
//! WASM controller for the site header's login/logout button. On page load
//! it checks `localStorage` for a refresh token and wires the `#login` and
//! `#register` buttons either to the login/register pages or to a logout
//! request carrying the CSRF cookie.
//!
//! The controller talks to the page only through the traits in [`ports`], so
//! everything outside [`browser`] builds and tests natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Element ids, storage keys, routes, labels; page overrides |
//! | [`controller`] | Page-ready wiring and click handling |
//! | [`cookie`] | CSRF cookie extraction |
//! | [`error`] | Error taxonomy |
//! | [`logout`] | Logout request and response contract |
//! | [`ports`] | Storage, cookie, transport and page traits |
//! | [`session`] | Logged-in detection and the button plan |
//! | `browser` | web-sys / gloo-net host and wasm entry point (feature `browser`) |

pub mod config;
pub mod controller;
pub mod cookie;
pub mod error;
pub mod logout;
pub mod ports;
pub mod session;

#[cfg(feature = "browser")]
pub mod browser;

pub use config::SessionConfig;
pub use controller::SessionController;
pub use error::SessionError;
pub use session::{ButtonPlan, ClickAction, SessionState};
