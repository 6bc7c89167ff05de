use crate::error::js_error;
use gmp_frontend::{Error, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Window};

const LOADING_STATE: &str = "loading";
const PAGE_READY_EVENT: &str = "DOMContentLoaded";

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    //
    // For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn get_window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::Js("no global `window` exists".to_owned()))
}

pub fn get_document(window: &Window) -> Result<Document> {
    window
        .document()
        .ok_or_else(|| Error::Js("should have a document on window".to_owned()))
}

pub fn history_back(window: &Window) -> Result<()> {
    window.history().map_err(js_error)?.back().map_err(js_error)
}

/// Run `callback` once the page is parsed: right away if it already is,
/// on `DOMContentLoaded` otherwise.
pub fn on_page_ready<F: FnOnce() + 'static>(document: &Document, callback: F) -> Result<()> {
    if document.ready_state() != LOADING_STATE {
        callback();
        return Ok(());
    }

    log::debug!("Page is still loading, waiting for `{PAGE_READY_EVENT}`");
    let closure = Closure::once_into_js(callback);
    document
        .add_event_listener_with_callback(PAGE_READY_EVENT, closure.unchecked_ref())
        .map_err(js_error)
}
