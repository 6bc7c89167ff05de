use crate::Result;
use crate::cookie::{CookieStore, PersistedFlag};
use crate::dom::{DocumentHandle, DomEvent, EventType};
use crate::locator::Locator;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

pub const BANNER_PANEL_ID: &str = "ur-panel";
pub const BANNER_CLOSE_CLASS: &str = "banner-panel__close";
pub const BANNER_VISIBLE_CLASS: &str = "banner-panel--show";
pub const BANNER_HIDE_COOKIE_NAME: &str = "gmpUrBannerHide";
pub const BANNER_HIDE_COOKIE_VALUE: &str = "suppress_for_all_services";
pub const BANNER_HIDE_COOKIE_MAX_AGE_SECONDS: i64 = 99_999_999_999;

#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerConfig {
    panel: Locator,
    close_control: Locator,
    visible_class: String,
    hide_flag: PersistedFlag,
}

impl BannerConfig {
    pub fn new(
        panel: Locator,
        close_control: Locator,
        visible_class: String,
        hide_flag: PersistedFlag,
    ) -> Self {
        Self {
            panel,
            close_control,
            visible_class,
            hide_flag,
        }
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self::new(
            Locator::id(BANNER_PANEL_ID),
            Locator::class(BANNER_CLOSE_CLASS),
            BANNER_VISIBLE_CLASS.to_owned(),
            PersistedFlag::new(
                BANNER_HIDE_COOKIE_NAME.to_owned(),
                BANNER_HIDE_COOKIE_VALUE.to_owned(),
                BANNER_HIDE_COOKIE_MAX_AGE_SECONDS,
            ),
        )
    }
}

/// Show the user research banner until the user dismisses it.
/// Dismissal is remembered with a cookie, so the banner stays hidden on
/// later loads.
pub struct BannerController<D: DocumentHandle, C: CookieStore> {
    document: Rc<D>,
    cookies: Rc<C>,
    config: BannerConfig,
}

impl<D: DocumentHandle, C: CookieStore> Clone for BannerController<D, C> {
    fn clone(&self) -> Self {
        Self {
            document: Rc::clone(&self.document),
            cookies: Rc::clone(&self.cookies),
            config: self.config.clone(),
        }
    }
}

impl<D: DocumentHandle + 'static, C: CookieStore + 'static> BannerController<D, C> {
    pub fn new(document: Rc<D>, cookies: Rc<C>, config: BannerConfig) -> Self {
        Self {
            document,
            cookies,
            config,
        }
    }

    pub fn should_show(&self) -> bool {
        !self.config.hide_flag.is_set(self.cookies.as_ref())
    }

    pub fn show(&self) -> Result<()> {
        self.document
            .add_class(&self.config.panel, &self.config.visible_class)
    }

    /// Remember the dismissal, then hide the banner.
    /// The banner is hidden even when the cookie can't be written.
    pub fn dismiss(&self) -> Result<()> {
        let persisted = self.config.hide_flag.persist(self.cookies.as_ref());
        self.document
            .remove_class(&self.config.panel, &self.config.visible_class)?;
        persisted
    }

    pub fn init(&self) -> Result<()> {
        if !self.document.exists(&self.config.panel) {
            log::debug!("No banner `{}` in page, skipping", self.config.panel);
            return Ok(());
        }

        if self.should_show() {
            self.show()?;
        } else {
            log::debug!("Banner `{}` has been dismissed before", self.config.panel);
        }

        if self.document.exists(&self.config.close_control) {
            let controller = self.clone();
            self.document.add_listener(
                &self.config.close_control,
                EventType::Click,
                Box::new(move |event: &dyn DomEvent| {
                    event.prevent_default();
                    if let Err(error) = controller.dismiss() {
                        log::error!("Can't dismiss banner: {error}");
                    }
                }),
            )?;
        }

        Ok(())
    }
}
