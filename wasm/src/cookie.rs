use crate::error::js_error;
use chrono::{DateTime, TimeDelta, Utc};
use gmp_frontend::Result;
use gmp_frontend::cookie::CookieStore;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument};

const COOKIE_EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Cookies of the page, through `document.cookie`.
pub struct WebCookieStore {
    document: HtmlDocument,
}

impl WebCookieStore {
    /// Cookies are only reachable from an HTML document.
    pub fn from_document(document: &Document) -> Option<Self> {
        document
            .clone()
            .dyn_into::<HtmlDocument>()
            .ok()
            .map(|document| Self { document })
    }
}

impl CookieStore for WebCookieStore {
    fn get(&self, name: &str) -> Option<String> {
        match self.document.cookie() {
            Ok(cookies) => find_cookie(&cookies, name),
            Err(error) => {
                log::error!("Can't read cookies: {error:?}");
                None
            }
        }
    }

    fn set(&self, name: &str, value: &str, max_age: TimeDelta) -> Result<()> {
        let cookie = format_cookie(name, value, max_age, Utc::now());
        log::debug!("Setting cookie `{cookie}`");
        self.document.set_cookie(&cookie).map_err(js_error)
    }
}

/// Find a cookie in a `name=value; other=value` list.
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|cookie| cookie.trim().split_once('='))
        .find(|(cookie_name, _)| *cookie_name == name)
        .map(|(_, value)| value.to_owned())
}

pub fn format_cookie(name: &str, value: &str, max_age: TimeDelta, now: DateTime<Utc>) -> String {
    let mut cookie = format!("{name}={value}; path=/; max-age={}", max_age.num_seconds());
    if let Some(expires) = now.checked_add_signed(max_age) {
        cookie.push_str(&format!(
            "; expires={}",
            expires.format(COOKIE_EXPIRES_FORMAT)
        ));
    }
    cookie
}
