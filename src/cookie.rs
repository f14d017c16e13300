//! CSRF cookie extraction from a `document.cookie` style string.

/// Find `name` in a `;`-separated cookie string and return its decoded value.
///
/// Matching is exact and case-sensitive; the first pair wins. Values are
/// percent-decoded, and a value that does not decode is returned as-is.
#[must_use]
pub fn get_cookie(cookies: &str, name: &str) -> Option<String> {
    if cookies.is_empty() || name.is_empty() {
        return None;
    }
    cookies.split(';').find_map(|pair| {
        let value = pair.trim().strip_prefix(name)?.strip_prefix('=')?;
        Some(decode(value))
    })
}

/// Header value for `X-CSRFToken`. A missing cookie is sent as `""`.
#[must_use]
pub fn csrf_header_value(cookie: Option<String>) -> String {
    cookie.unwrap_or_default()
}

fn decode(value: &str) -> String {
    match urlencoding::decode(value) {
        Ok(decoded) => decoded.into_owned(),
        Err(err) => {
            log::debug!("cookie value is not valid percent-encoding ({err}); using raw value");
            value.to_owned()
        }
    }
}

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;
