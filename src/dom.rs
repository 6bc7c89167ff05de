use crate::Result;
use crate::locator::Locator;

/// Events the behaviors listen to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    Change,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Click => "click",
            EventType::Change => "change",
        }
    }
}

/// The part of a DOM event a listener may act upon.
pub trait DomEvent {
    fn prevent_default(&self);
}

pub type Listener = Box<dyn Fn(&dyn DomEvent)>;

/// Access to the page the behaviors enhance.
///
/// Locators matching several elements act on the first one, except for
/// [`DocumentHandle::add_listener`] which wires every match.
/// Every method taking a locator fails with [`crate::Error::ElementNotFound`]
/// when nothing matches, so callers check [`DocumentHandle::exists`] first
/// when a missing element is expected.
pub trait DocumentHandle {
    fn exists(&self, locator: &Locator) -> bool;

    fn text_content(&self, locator: &Locator) -> Result<String>;

    fn attribute(&self, locator: &Locator, name: &str) -> Result<Option<String>>;

    fn add_class(&self, locator: &Locator, class: &str) -> Result<()>;

    fn remove_class(&self, locator: &Locator, class: &str) -> Result<()>;

    fn is_checked(&self, locator: &Locator) -> Result<bool>;

    /// Change the checked state without firing any event.
    fn set_checked(&self, locator: &Locator, checked: bool) -> Result<()>;

    fn set_value(&self, locator: &Locator, value: &str) -> Result<()>;

    /// Simulate a user click, firing the element's own listeners and default
    /// behavior (selecting a radio, for instance).
    fn click(&self, locator: &Locator) -> Result<()>;

    fn add_listener(&self, locator: &Locator, event: EventType, listener: Listener) -> Result<()>;

    fn history_back(&self) -> Result<()>;
}
