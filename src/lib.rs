//! Progressive enhancements of the GMP service forms.
//!
//! Every behavior works against the [`dom::DocumentHandle`] and
//! [`cookie::CookieStore`] traits. The `wasm` crate binds them to the browser.

pub mod back_link;
pub mod banner;
pub mod cookie;
pub mod dom;
pub mod error;
pub mod form;
pub mod locator;
#[cfg(any(test, feature = "test"))]
pub mod testing;

pub use error::{Error, Result};

use crate::banner::{BannerConfig, BannerController};
use crate::cookie::CookieStore;
use crate::dom::DocumentHandle;
use crate::form::FormStateInitializer;
use crate::form::config::FormConfig;
use std::rc::Rc;

/// Run every enhancement of a page.
/// A failing enhancement is logged and doesn't prevent the others from running.
pub fn enhance_page<D, C>(document: Rc<D>, cookies: Option<Rc<C>>, forms: Vec<FormConfig>)
where
    D: DocumentHandle + 'static,
    C: CookieStore + 'static,
{
    if let Err(error) = back_link::init_back_link(&document) {
        log::error!("Can't init back link: {error}");
    }

    match cookies {
        Some(cookies) => {
            let banner =
                BannerController::new(Rc::clone(&document), cookies, BannerConfig::default());
            if let Err(error) = banner.init() {
                log::error!("Can't init banner: {error}");
            }
        }
        None => log::debug!("No cookie store, banner left as rendered"),
    }

    for config in forms {
        let name = config.name().clone();
        if let Err(error) = FormStateInitializer::new(Rc::clone(&document), config).init() {
            log::error!("Can't init `{name}` form: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::{BANNER_PANEL_ID, BANNER_VISIBLE_CLASS};
    use crate::form::config::ERROR_REGION_ID;
    use crate::form::variants::{self, LEAVING_YES_AFTER_ID, REVALUATE_YES_ID};
    use crate::locator::Locator;
    use crate::testing::{FakeDocument, MemoryCookieStore};

    #[test]
    fn should_enhance_whole_page() {
        let document = Rc::new(
            FakeDocument::default()
                .with_element(BANNER_PANEL_ID)
                .with_radio(REVALUATE_YES_ID, "revaluate", false)
                .with_radio("revaluate-no", "revaluate", false)
                .with_text(ERROR_REGION_ID, "Enter a revaluation date"),
        );

        enhance_page(
            Rc::clone(&document),
            Some(Rc::new(MemoryCookieStore::default())),
            variants::all().unwrap(),
        );

        assert!(document.has_class(&Locator::id(BANNER_PANEL_ID), BANNER_VISIBLE_CLASS));
        assert!(document.checked(&Locator::id(REVALUATE_YES_ID)));
        assert!(!document.exists(&Locator::id(LEAVING_YES_AFTER_ID)));
    }

    #[test]
    fn should_leave_banner_untouched_without_cookie_store() {
        let document = Rc::new(FakeDocument::default().with_element(BANNER_PANEL_ID));

        enhance_page::<_, MemoryCookieStore>(Rc::clone(&document), None, vec![]);

        assert!(!document.has_class(&Locator::id(BANNER_PANEL_ID), BANNER_VISIBLE_CLASS));
    }
}
