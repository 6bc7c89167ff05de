//! In-memory doubles of the browser collaborators, to exercise the behaviors
//! without a real page.

use crate::Result;
use crate::cookie::CookieStore;
use crate::dom::{DocumentHandle, DomEvent, EventType, Listener};
use crate::error::Error;
use crate::locator::Locator;
use chrono::{DateTime, TimeDelta, Utc};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

// region FakeDocument
#[derive(Debug, Clone, Default)]
struct FakeElement {
    id: Option<String>,
    classes: BTreeSet<String>,
    text: String,
    value: String,
    radio_group: Option<String>,
    checked: bool,
    checked_writes: usize,
    attributes: HashMap<String, String>,
}

#[derive(Default)]
pub struct FakeEvent {
    default_prevented: Cell<bool>,
}

impl FakeEvent {
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl DomEvent for FakeEvent {
    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }
}

/// A tiny page made of flat elements.
/// Listeners are kept per element and fired synchronously, as a browser does.
#[derive(Default)]
pub struct FakeDocument {
    elements: RefCell<Vec<FakeElement>>,
    listeners: RefCell<Vec<(usize, EventType, Rc<Listener>)>>,
    history_back_count: Cell<usize>,
    last_default_prevented: Cell<bool>,
}

impl FakeDocument {
    pub fn with_element(self, id: &str) -> Self {
        self.push(FakeElement {
            id: Some(id.to_owned()),
            ..Default::default()
        })
    }

    pub fn with_text(self, id: &str, text: &str) -> Self {
        self.push(FakeElement {
            id: Some(id.to_owned()),
            text: text.to_owned(),
            ..Default::default()
        })
    }

    pub fn with_classes(self, id: Option<&str>, classes: &[&str]) -> Self {
        self.push(FakeElement {
            id: id.map(str::to_owned),
            classes: classes.iter().map(|class| class.to_string()).collect(),
            ..Default::default()
        })
    }

    pub fn with_radio(self, id: &str, group: &str, checked: bool) -> Self {
        self.push(FakeElement {
            id: Some(id.to_owned()),
            radio_group: Some(group.to_owned()),
            checked,
            ..Default::default()
        })
    }

    pub fn with_input(self, id: &str, value: &str) -> Self {
        self.push(FakeElement {
            id: Some(id.to_owned()),
            value: value.to_owned(),
            ..Default::default()
        })
    }

    pub fn with_attribute(self, id: &str, name: &str, value: &str) -> Self {
        for element in self.elements.borrow_mut().iter_mut() {
            if element.id.as_deref() == Some(id) {
                element.attributes.insert(name.to_owned(), value.to_owned());
            }
        }
        self
    }

    fn push(self, element: FakeElement) -> Self {
        self.elements.borrow_mut().push(element);
        self
    }

    pub fn has_class(&self, locator: &Locator, class: &str) -> bool {
        self.first(locator)
            .map(|index| self.elements.borrow()[index].classes.contains(class))
            .unwrap_or(false)
    }

    pub fn value(&self, locator: &Locator) -> Option<String> {
        self.first(locator)
            .ok()
            .map(|index| self.elements.borrow()[index].value.clone())
    }

    pub fn checked(&self, locator: &Locator) -> bool {
        self.is_checked(locator).unwrap_or(false)
    }

    /// How many times the checked state of an element was written.
    pub fn checked_writes(&self, locator: &Locator) -> usize {
        self.first(locator)
            .map(|index| self.elements.borrow()[index].checked_writes)
            .unwrap_or(0)
    }

    pub fn listener_count(&self, locator: &Locator, event: EventType) -> usize {
        let matches = self.matches(locator);
        self.listeners
            .borrow()
            .iter()
            .filter(|(index, listened, _)| *listened == event && matches.contains(index))
            .count()
    }

    pub fn history_back_count(&self) -> usize {
        self.history_back_count.get()
    }

    /// Whether the last dispatched event had its default behavior prevented.
    pub fn last_default_prevented(&self) -> bool {
        self.last_default_prevented.get()
    }

    /// Simulate the user typing into a text input.
    pub fn type_into(&self, locator: &Locator, value: &str) -> Result<()> {
        self.set_value(locator, value)
    }

    fn matches(&self, locator: &Locator) -> Vec<usize> {
        self.elements
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, element)| match locator {
                Locator::Id(id) => element.id.as_deref() == Some(id.as_str()),
                Locator::Class(class) => element.classes.contains(class),
            })
            .map(|(index, _)| index)
            .collect()
    }

    fn first(&self, locator: &Locator) -> Result<usize> {
        self.matches(locator)
            .first()
            .copied()
            .ok_or_else(|| Error::ElementNotFound(locator.clone()))
    }

    fn dispatch(&self, index: usize, event: EventType) {
        // Listeners may access the document, so no borrow is held while they run.
        let listeners = self
            .listeners
            .borrow()
            .iter()
            .filter(|(target, listened, _)| *target == index && *listened == event)
            .map(|(_, _, listener)| Rc::clone(listener))
            .collect::<Vec<_>>();
        let dom_event = FakeEvent::default();
        for listener in listeners {
            listener(&dom_event as &dyn DomEvent);
        }
        self.last_default_prevented.set(dom_event.default_prevented());
    }
}

impl DocumentHandle for FakeDocument {
    fn exists(&self, locator: &Locator) -> bool {
        !self.matches(locator).is_empty()
    }

    fn text_content(&self, locator: &Locator) -> Result<String> {
        let index = self.first(locator)?;
        Ok(self.elements.borrow()[index].text.clone())
    }

    fn attribute(&self, locator: &Locator, name: &str) -> Result<Option<String>> {
        let index = self.first(locator)?;
        Ok(self.elements.borrow()[index].attributes.get(name).cloned())
    }

    fn add_class(&self, locator: &Locator, class: &str) -> Result<()> {
        let index = self.first(locator)?;
        self.elements.borrow_mut()[index]
            .classes
            .insert(class.to_owned());
        Ok(())
    }

    fn remove_class(&self, locator: &Locator, class: &str) -> Result<()> {
        let index = self.first(locator)?;
        self.elements.borrow_mut()[index].classes.remove(class);
        Ok(())
    }

    fn is_checked(&self, locator: &Locator) -> Result<bool> {
        let index = self.first(locator)?;
        Ok(self.elements.borrow()[index].checked)
    }

    fn set_checked(&self, locator: &Locator, checked: bool) -> Result<()> {
        let index = self.first(locator)?;
        let mut elements = self.elements.borrow_mut();
        if checked {
            if let Some(group) = elements[index].radio_group.clone() {
                elements
                    .iter_mut()
                    .filter(|element| element.radio_group.as_ref() == Some(&group))
                    .for_each(|element| element.checked = false);
            }
        }
        elements[index].checked = checked;
        elements[index].checked_writes += 1;
        Ok(())
    }

    fn set_value(&self, locator: &Locator, value: &str) -> Result<()> {
        let index = self.first(locator)?;
        self.elements.borrow_mut()[index].value = value.to_owned();
        Ok(())
    }

    fn click(&self, locator: &Locator) -> Result<()> {
        let index = self.first(locator)?;
        let (is_radio, was_checked) = {
            let elements = self.elements.borrow();
            (elements[index].radio_group.is_some(), elements[index].checked)
        };
        if is_radio {
            self.set_checked(locator, true)?;
        }
        self.dispatch(index, EventType::Click);
        if is_radio && !was_checked {
            self.dispatch(index, EventType::Change);
        }
        Ok(())
    }

    fn add_listener(&self, locator: &Locator, event: EventType, listener: Listener) -> Result<()> {
        let matches = self.matches(locator);
        if matches.is_empty() {
            return Err(Error::ElementNotFound(locator.clone()));
        }
        let listener = Rc::new(listener);
        let mut listeners = self.listeners.borrow_mut();
        for index in matches {
            listeners.push((index, event, Rc::clone(&listener)));
        }
        Ok(())
    }

    fn history_back(&self) -> Result<()> {
        self.history_back_count.set(self.history_back_count.get() + 1);
        Ok(())
    }
}
// endregion

// region MemoryCookieStore
/// Cookies kept in memory, with a clock that tests can move forward.
pub struct MemoryCookieStore {
    now: Cell<DateTime<Utc>>,
    cookies: RefCell<HashMap<String, (String, Option<DateTime<Utc>>)>>,
}

impl Default for MemoryCookieStore {
    fn default() -> Self {
        Self {
            now: Cell::new(Utc::now()),
            cookies: RefCell::new(HashMap::new()),
        }
    }
}

impl MemoryCookieStore {
    pub fn advance(&self, delta: TimeDelta) {
        self.now.set(self.now.get() + delta);
    }
}

impl CookieStore for MemoryCookieStore {
    fn get(&self, name: &str) -> Option<String> {
        let now = self.now.get();
        self.cookies
            .borrow()
            .get(name)
            .filter(|(_, expires_at)| expires_at.is_none_or(|expires_at| now < expires_at))
            .map(|(value, _)| value.clone())
    }

    fn set(&self, name: &str, value: &str, max_age: TimeDelta) -> Result<()> {
        // Past the representable range the cookie simply never expires.
        let expires_at = self.now.get().checked_add_signed(max_age);
        self.cookies
            .borrow_mut()
            .insert(name.to_owned(), (value.to_owned(), expires_at));
        Ok(())
    }
}

/// A cookie store refusing every write, as a browser blocking cookies does.
#[derive(Default)]
pub struct RejectingCookieStore;

impl CookieStore for RejectingCookieStore {
    fn get(&self, _name: &str) -> Option<String> {
        None
    }

    fn set(&self, name: &str, _value: &str, _max_age: TimeDelta) -> Result<()> {
        Err(Error::Cookie(format!("cookies are disabled, can't set `{name}`")))
    }
}
// endregion
