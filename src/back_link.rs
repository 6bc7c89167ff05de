use crate::Result;
use crate::dom::{DocumentHandle, DomEvent, EventType};
use crate::locator::Locator;
use std::rc::Rc;

pub const BACK_CONTAINER_ID: &str = "back";
pub const BACK_LINK_ID: &str = "back-link";
pub const HIDDEN_WITHOUT_SCRIPT_CLASS: &str = "js-hidden";

/// The "back" link only works with scripts enabled, so it is rendered hidden
/// and revealed here.
pub fn init_back_link<D: DocumentHandle + 'static>(document: &Rc<D>) -> Result<()> {
    let container = Locator::id(BACK_CONTAINER_ID);
    let link = Locator::id(BACK_LINK_ID);
    if !document.exists(&container) || !document.exists(&link) {
        log::debug!("No back link in page, skipping");
        return Ok(());
    }

    document.remove_class(&container, HIDDEN_WITHOUT_SCRIPT_CLASS)?;

    let history = Rc::clone(document);
    document.add_listener(
        &link,
        EventType::Click,
        Box::new(move |event: &dyn DomEvent| {
            event.prevent_default();
            if let Err(error) = history.history_back() {
                log::error!("Can't go back: {error}");
            }
        }),
    )
}
