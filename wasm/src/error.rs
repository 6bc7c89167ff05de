use gmp_frontend::Error;
use wasm_bindgen::JsValue;
use web_sys::Element;

/// Convert an exception thrown by the browser.
pub fn js_error(value: JsValue) -> Error {
    Error::Js(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}

pub fn cast_error(element: Element) -> Error {
    Error::Js(format!("A cast has failed for element: {element:?}"))
}

/// Make an error of this crate throwable to the page scripts.
pub fn to_js(error: Error) -> JsValue {
    JsValue::from_str(&error.to_string())
}
