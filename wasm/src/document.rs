use crate::error::{cast_error, js_error};
use crate::utils::{get_document, get_window, history_back};
use gmp_frontend::dom::{DocumentHandle, DomEvent, EventType, Listener};
use gmp_frontend::locator::Locator;
use gmp_frontend::{Error, Result};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, Window};

struct WebEvent(Event);

impl DomEvent for WebEvent {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

/// The page the script runs in.
pub struct WebDocument {
    window: Window,
    document: Document,
}

impl WebDocument {
    pub fn from_window() -> Result<Self> {
        let window = get_window()?;
        let document = get_document(&window)?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn elements(&self, locator: &Locator) -> Vec<Element> {
        match locator {
            Locator::Id(id) => self.document.get_element_by_id(id).into_iter().collect(),
            Locator::Class(class) => {
                let collection = self.document.get_elements_by_class_name(class);
                (0..collection.length())
                    .filter_map(|index| collection.item(index))
                    .collect()
            }
        }
    }

    fn element(&self, locator: &Locator) -> Result<Element> {
        self.elements(locator)
            .into_iter()
            .next()
            .ok_or_else(|| Error::ElementNotFound(locator.clone()))
    }

    fn input(&self, locator: &Locator) -> Result<HtmlInputElement> {
        self.element(locator)?
            .dyn_into::<HtmlInputElement>()
            .map_err(cast_error)
    }
}

impl DocumentHandle for WebDocument {
    fn exists(&self, locator: &Locator) -> bool {
        !self.elements(locator).is_empty()
    }

    fn text_content(&self, locator: &Locator) -> Result<String> {
        Ok(self.element(locator)?.text_content().unwrap_or_default())
    }

    fn attribute(&self, locator: &Locator, name: &str) -> Result<Option<String>> {
        Ok(self.element(locator)?.get_attribute(name))
    }

    fn add_class(&self, locator: &Locator, class: &str) -> Result<()> {
        self.element(locator)?
            .class_list()
            .add_1(class)
            .map_err(js_error)
    }

    fn remove_class(&self, locator: &Locator, class: &str) -> Result<()> {
        self.element(locator)?
            .class_list()
            .remove_1(class)
            .map_err(js_error)
    }

    fn is_checked(&self, locator: &Locator) -> Result<bool> {
        Ok(self.input(locator)?.checked())
    }

    fn set_checked(&self, locator: &Locator, checked: bool) -> Result<()> {
        let input = self.input(locator)?;
        input.set_checked(checked);
        if !checked {
            // The attribute is what the browser restores on reload.
            input.remove_attribute("checked").map_err(js_error)?;
        }
        Ok(())
    }

    fn set_value(&self, locator: &Locator, value: &str) -> Result<()> {
        self.input(locator)?.set_value(value);
        Ok(())
    }

    fn click(&self, locator: &Locator) -> Result<()> {
        self.element(locator)?
            .dyn_into::<HtmlElement>()
            .map_err(cast_error)?
            .click();
        Ok(())
    }

    fn add_listener(&self, locator: &Locator, event: EventType, listener: Listener) -> Result<()> {
        let elements = self.elements(locator);
        if elements.is_empty() {
            return Err(Error::ElementNotFound(locator.clone()));
        }

        let listener = Rc::new(listener);
        for element in elements {
            let listener = Rc::clone(&listener);
            let closure = Closure::wrap(
                Box::new(move |e: Event| listener(&WebEvent(e) as &dyn DomEvent)) as Box<dyn Fn(_)>
            );
            element
                .add_event_listener_with_callback(event.as_str(), closure.as_ref().unchecked_ref())
                .map_err(js_error)?;
            // Listeners live as long as the page.
            closure.forget();
        }
        Ok(())
    }

    fn history_back(&self) -> Result<()> {
        history_back(&self.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn page(html: &str) -> WebDocument {
        let document = WebDocument::from_window().unwrap();
        document
            .document()
            .body()
            .unwrap()
            .set_inner_html(html);
        document
    }

    #[wasm_bindgen_test]
    fn should_find_elements_by_class() {
        let document = page(r#"<p class="a"></p><p class="a b"></p><p class="b"></p>"#);
        assert!(document.exists(&Locator::class("a")));
        assert_eq!(2, document.elements(&Locator::class("b")).len());
        assert!(!document.exists(&Locator::class("c")));
    }

    #[wasm_bindgen_test]
    fn should_fire_change_when_clicking_radio() {
        let document = Rc::new(page(
            r#"<input type="radio" name="r" id="yes"><input type="radio" name="r" id="no">
               <input type="text" id="day" value="12">"#,
        ));
        let handle = Rc::clone(&document);
        document
            .add_listener(
                &Locator::id("no"),
                EventType::Change,
                Box::new(move |_: &dyn DomEvent| handle.set_value(&Locator::id("day"), "").unwrap()),
            )
            .unwrap();

        document.click(&Locator::id("yes")).unwrap();
        assert_eq!("12", document.input(&Locator::id("day")).unwrap().value());

        document.click(&Locator::id("no")).unwrap();
        assert!(document.is_checked(&Locator::id("no")).unwrap());
        assert!(!document.is_checked(&Locator::id("yes")).unwrap());
        assert_eq!("", document.input(&Locator::id("day")).unwrap().value());
    }

    #[wasm_bindgen_test]
    fn should_remove_checked_attribute_when_unchecking() {
        let document = page(r#"<input type="radio" name="r" id="yes" checked>"#);

        document.set_checked(&Locator::id("yes"), false).unwrap();

        let input = document.input(&Locator::id("yes")).unwrap();
        assert!(!input.checked());
        assert!(!input.has_attribute("checked"));
    }

    #[wasm_bindgen_test]
    fn should_toggle_class() {
        let document = page(r#"<div id="panel" class="banner"></div>"#);
        let panel = Locator::id("panel");

        document.add_class(&panel, "shown").unwrap();
        assert_eq!("banner shown", document.element(&panel).unwrap().class_name());

        document.remove_class(&panel, "shown").unwrap();
        assert_eq!("banner", document.element(&panel).unwrap().class_name());
    }
}
