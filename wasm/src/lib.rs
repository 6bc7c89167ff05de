mod cookie;
mod document;
mod error;
mod utils;

use crate::cookie::WebCookieStore;
use crate::document::WebDocument;
use crate::error::to_js;
use gmp_frontend::form::FormStateInitializer;
use gmp_frontend::form::config::FormConfig;
use gmp_frontend::form::variants;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
fn run() {
    utils::set_panic_hook();
    wasm_logger::init(wasm_logger::Config::default());

    let document = match WebDocument::from_window() {
        Ok(document) => Rc::new(document),
        Err(error) => {
            log::error!("Can't access page: {error}");
            return;
        }
    };
    let page = Rc::clone(&document);
    if let Err(error) = utils::on_page_ready(document.document(), move || enhance(page)) {
        log::error!("Can't wait for page to be ready: {error}");
    }
}

fn enhance(document: Rc<WebDocument>) {
    let cookies = WebCookieStore::from_document(document.document()).map(Rc::new);
    let forms = variants::all().unwrap_or_else(|error| {
        log::error!("Can't load forms: {error}");
        vec![]
    });

    gmp_frontend::enhance_page(document, cookies, forms);
}

/// Initialize a form which is not known by this bundle, once the page is ready.
/// `config` is the JSON form of a [`FormConfig`].
#[wasm_bindgen]
pub fn init_form_state(config: &str) -> Result<(), JsValue> {
    let config = FormConfig::from_json(config).map_err(to_js)?;
    let document = Rc::new(WebDocument::from_window().map_err(to_js)?);
    let page = Rc::clone(&document);
    utils::on_page_ready(document.document(), move || {
        let name = config.name().clone();
        if let Err(error) = FormStateInitializer::new(page, config).init() {
            log::error!("Can't initialize `{name}` form: {error}");
        }
    })
    .map_err(to_js)
}
