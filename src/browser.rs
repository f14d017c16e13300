//! Browser host: web-sys and gloo-net implementations of the controller's
//! ports, DOM wiring, and the wasm entry point.
//!
//! Everything here is gated behind the `browser` feature since it requires a
//! browser environment. A missing button is surfaced as an uncaught JS error;
//! the page is left unwired.

use std::rc::Rc;

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, HtmlDocument, HtmlElement, Storage, Window};

use crate::config::{ATTRIBUTE_PREFIX, SessionConfig};
use crate::controller::SessionController;
use crate::cookie::get_cookie;
use crate::error::SessionError;
use crate::logout::{LogoutRequest, LogoutResponse};
use crate::ports::{CookieSource, LogoutTransport, PageHost, TokenStore};
use crate::session::{ClickAction, RegisterPlan, SessionState};

pub type BrowserController = SessionController<LocalTokenStore, DocumentCookies, FetchTransport, WindowHost>;

fn js_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn to_js(err: &SessionError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

// =============================================================
// Ports
// =============================================================

/// `window.localStorage`. Reads degrade to "absent" if storage is blocked.
pub struct LocalTokenStore {
    storage: Option<Storage>,
}

impl LocalTokenStore {
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {}", js_text(&err));
                None
            }
        };
        Self { storage }
    }
}

impl TokenStore for LocalTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of {key} failed: {}", js_text(&err));
                None
            }
        }
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| SessionError::Storage("localStorage unavailable".to_owned()))?;
        storage
            .remove_item(key)
            .map_err(|e| SessionError::Storage(js_text(&e)))
    }
}

/// `document.cookie`.
pub struct DocumentCookies {
    document: HtmlDocument,
}

impl DocumentCookies {
    /// # Errors
    ///
    /// Returns [`SessionError::Browser`] if the document is not an HTML document.
    pub fn from_document(document: &Document) -> Result<Self, SessionError> {
        let document = document
            .clone()
            .dyn_into::<HtmlDocument>()
            .map_err(|_| SessionError::Browser("document.cookie requires an HTML document".to_owned()))?;
        Ok(Self { document })
    }
}

impl CookieSource for DocumentCookies {
    fn cookie_string(&self) -> String {
        match self.document.cookie() {
            Ok(cookies) => cookies,
            Err(err) => {
                log::warn!("document.cookie read failed: {}", js_text(&err));
                String::new()
            }
        }
    }
}

/// `fetch` via gloo-net. No timeout is applied.
pub struct FetchTransport;

#[async_trait(?Send)]
impl LogoutTransport for FetchTransport {
    async fn send(&self, request: &LogoutRequest) -> Result<LogoutResponse, SessionError> {
        let mut builder = gloo_net::http::Request::post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let resp = builder
            .send()
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))?;
        Ok(LogoutResponse { status, body })
    }
}

/// `location.href` and `alert()`.
pub struct WindowHost {
    window: Window,
}

impl PageHost for WindowHost {
    fn navigate(&self, url: &str) {
        if let Err(err) = self.window.location().set_href(url) {
            log::error!("navigation to {url} failed: {}", js_text(&err));
        }
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            log::error!("alert failed: {}", js_text(&err));
        }
    }
}

// =============================================================
// Wiring
// =============================================================

/// Read `data-session-*` overrides from `<body>`, or defaults.
#[must_use]
pub fn page_config(document: &Document) -> SessionConfig {
    let Some(body) = document.body() else {
        return SessionConfig::default();
    };
    match SessionConfig::from_source(|key| body.get_attribute(&format!("{ATTRIBUTE_PREFIX}{key}"))) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}; using default session config");
            SessionConfig::default()
        }
    }
}

/// Build a controller over the real browser ports.
///
/// # Errors
///
/// Returns [`SessionError::Browser`] if `document.cookie` is not reachable.
pub fn browser_controller(
    window: &Window,
    document: &Document,
    config: SessionConfig,
) -> Result<BrowserController, SessionError> {
    Ok(SessionController::new(
        config,
        LocalTokenStore::from_window(window),
        DocumentCookies::from_document(document)?,
        FetchTransport,
        WindowHost { window: window.clone() },
    ))
}

fn find_button(document: &Document, id: &str) -> Result<HtmlElement, SessionError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SessionError::MissingElement(id.to_owned()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SessionError::Browser(format!("#{id} is not an HTML element")))
}

fn bind_click(element: &HtmlElement, controller: &Rc<BrowserController>, action: ClickAction) -> Result<(), SessionError> {
    let controller = Rc::clone(controller);
    let handler = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        let controller = Rc::clone(&controller);
        let action = action.clone();
        wasm_bindgen_futures::spawn_local(async move {
            controller.activate(&action).await;
        });
    }) as Box<dyn FnMut(web_sys::Event)>);

    element
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(|e| SessionError::Browser(js_text(&e)))?;
    // Listeners live for the page lifetime.
    handler.forget();
    Ok(())
}

/// Wire the login and register buttons for this page load.
///
/// # Errors
///
/// Returns [`SessionError::MissingElement`] if either button is absent.
pub fn mount(window: &Window, document: &Document, config: SessionConfig) -> Result<SessionState, SessionError> {
    let login = find_button(document, &config.login_id)?;
    let register = find_button(document, &config.register_id)?;

    let controller = Rc::new(browser_controller(window, document, config)?);
    let (state, plan) = controller.initialize();

    login.set_text_content(Some(&plan.login_label));
    bind_click(&login, &controller, plan.login_action)?;
    match plan.register {
        RegisterPlan::Visible(action) => bind_click(&register, &controller, action)?,
        RegisterPlan::Hidden => register
            .style()
            .set_property("display", "none")
            .map_err(|e| SessionError::Browser(js_text(&e)))?,
    }
    Ok(state)
}

fn page_handles() -> Result<(Window, Document), SessionError> {
    let window = web_sys::window().ok_or_else(|| SessionError::Browser("no window".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| SessionError::Browser("no document".to_owned()))?;
    Ok((window, document))
}

fn mount_page(window: &Window, document: &Document) -> Result<(), SessionError> {
    mount(window, document, page_config(document)).map(|_| ())
}

// =============================================================
// JS entry points
// =============================================================

/// Install logging and wire the buttons once the DOM is ready.
///
/// # Errors
///
/// Throws if the page has no window/document or a button is missing.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    }

    let (window, document) = page_handles().map_err(|e| to_js(&e))?;
    if document.ready_state() != "loading" {
        return mount_page(&window, &document).map_err(|e| to_js(&e));
    }

    let target = document.clone();
    let on_ready = Closure::wrap(Box::new(move || {
        if let Err(err) = mount_page(&window, &document) {
            log::error!("session button not wired: {err}");
            wasm_bindgen::throw_str(&err.to_string());
        }
    }) as Box<dyn FnMut()>);
    target.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

/// Run the logout flow from page scripts (e.g. a second logout link).
///
/// # Errors
///
/// Rejects only if the page has no window/document; logout failures are
/// reported to the user by alert and resolve normally.
#[wasm_bindgen]
pub async fn logout() -> Result<(), JsValue> {
    let (window, document) = page_handles().map_err(|e| to_js(&e))?;
    let controller = browser_controller(&window, &document, page_config(&document)).map_err(|e| to_js(&e))?;
    controller.logout().await;
    Ok(())
}

/// Read a cookie by name from `document.cookie`.
#[wasm_bindgen(js_name = getCookie)]
#[must_use]
pub fn cookie_value(name: &str) -> Option<String> {
    let (_, document) = match page_handles() {
        Ok(handles) => handles,
        Err(err) => {
            log::warn!("{err}");
            return None;
        }
    };
    match DocumentCookies::from_document(&document) {
        Ok(cookies) => get_cookie(&cookies.cookie_string(), name),
        Err(err) => {
            log::warn!("{err}");
            None
        }
    }
}
