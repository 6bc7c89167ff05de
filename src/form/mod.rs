pub mod config;
pub mod error_signal;
pub mod variants;

use crate::Result;
use crate::dom::{DocumentHandle, DomEvent, EventType};
use crate::form::config::FormConfig;
use crate::form::error_signal::ErrorSignal;
use crate::locator::Locator;
use std::rc::Rc;

/// Set the radio choices of a date form according to the errors the server
/// rendered, and keep the date sub-fields empty when they are hidden.
pub struct FormStateInitializer<D: DocumentHandle> {
    document: Rc<D>,
    config: Rc<FormConfig>,
}

impl<D: DocumentHandle + 'static> FormStateInitializer<D> {
    pub fn new(document: Rc<D>, config: FormConfig) -> Self {
        Self {
            document,
            config: Rc::new(config),
        }
    }

    pub fn init(&self) -> Result<()> {
        if !self
            .config
            .radio_group()
            .iter()
            .any(|radio| self.document.exists(radio))
        {
            log::debug!("No `{}` form in page, skipping", self.config.name());
            return Ok(());
        }

        let signal = ErrorSignal::read(
            self.document.as_ref(),
            self.config.error_region(),
            self.config.error_codes(),
        )?;
        if !signal.has_errors() {
            self.clear_selection()?;
        } else if signal.has_date_error() {
            self.reveal_date()?;
        }

        self.add_clearing_listeners()
    }

    fn clear_selection(&self) -> Result<()> {
        for radio in self.existing(self.config.radio_group()) {
            if *self.config.clear_on_clean_load() || self.document.is_checked(radio)? {
                self.document.set_checked(radio, false)?;
            }
        }
        Ok(())
    }

    /// Click on the revealing choice, so that the page shows the erroneous
    /// date sub-fields as it would for the user.
    fn reveal_date(&self) -> Result<()> {
        let choice = self.config.revealing_choice();
        if self.document.exists(choice) {
            log::info!(
                "Date error in `{}` form, selecting `{choice}`",
                self.config.name()
            );
            self.document.click(choice)?;
        }
        Ok(())
    }

    fn add_clearing_listeners(&self) -> Result<()> {
        for choice in self.existing(self.config.clearing_choices()) {
            let document = Rc::clone(&self.document);
            let config = Rc::clone(&self.config);
            self.document.add_listener(
                choice,
                EventType::Change,
                Box::new(move |_: &dyn DomEvent| {
                    if let Err(error) = clear_dependent_fields(document.as_ref(), &config) {
                        log::error!("Can't clear `{}` date: {error}", config.name());
                    }
                }),
            )?;
        }
        Ok(())
    }

    fn existing<'a>(&'a self, locators: &'a [Locator]) -> impl Iterator<Item = &'a Locator> {
        locators
            .iter()
            .filter(|locator| self.document.exists(locator))
    }
}

pub fn clear_dependent_fields<D: DocumentHandle + ?Sized>(
    document: &D,
    config: &FormConfig,
) -> Result<()> {
    for field in config.dependent_fields() {
        if document.exists(field) {
            document.set_value(field, "")?;
        }
    }
    Ok(())
}
