use crate::Result;
use crate::error::Error;
use crate::form::error_signal::DateErrorCode;
use crate::locator::Locator;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

pub const ERROR_REGION_ID: &str = "errors";

fn default_error_region() -> Locator {
    Locator::id(ERROR_REGION_ID)
}

/// How a form with a date depending on a radio choice is initialized.
///
/// ```json
/// {
///   "name": "revaluation date",
///   "radioGroup": ["#revaluate-yes", "#revaluate-no"],
///   "revealingChoice": "#revaluate-yes",
///   "clearingChoices": ["#revaluate-no"],
///   "dependentFields": ["#revaluationDate_day", "#revaluationDate_month", "#revaluationDate_year"],
///   "errorCodes": ["revaluation-date-missing", "day-out-of-range"],
///   "clearOnCleanLoad": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    name: String,
    #[serde(default = "default_error_region")]
    error_region: Locator,
    radio_group: Vec<Locator>,
    /// The choice making the date sub-fields visible.
    revealing_choice: Locator,
    /// The choices hiding the date sub-fields, which are then emptied.
    clearing_choices: Vec<Locator>,
    dependent_fields: Vec<Locator>,
    error_codes: Vec<DateErrorCode>,
    /// When `true`, a load without errors unchecks the whole group.
    /// Otherwise only the radios found checked are unchecked.
    #[serde(default)]
    clear_on_clean_load: bool,
}

impl FormConfig {
    pub fn new(
        name: String,
        radio_group: Vec<Locator>,
        revealing_choice: Locator,
        clearing_choices: Vec<Locator>,
        dependent_fields: Vec<Locator>,
        error_codes: Vec<DateErrorCode>,
        clear_on_clean_load: bool,
    ) -> Result<Self> {
        Self {
            name,
            error_region: default_error_region(),
            radio_group,
            revealing_choice,
            clearing_choices,
            dependent_fields,
            error_codes,
            clear_on_clean_load,
        }
        .validate()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json_wasm::from_str::<FormConfig>(json)
            .map_err(|error| Error::InvalidConfiguration(error.to_string()))?
            .validate()
    }

    pub fn with_error_region(mut self, error_region: Locator) -> Self {
        self.error_region = error_region;
        self
    }

    fn validate(self) -> Result<Self> {
        if self.radio_group.is_empty() {
            return Err(Error::InvalidConfiguration(format!(
                "form `{}` has no radio",
                self.name
            )));
        }

        if let Some(choice) = std::iter::once(&self.revealing_choice)
            .chain(&self.clearing_choices)
            .find(|choice| !self.radio_group.contains(choice))
        {
            return Err(Error::InvalidConfiguration(format!(
                "choice `{choice}` of form `{}` is not part of its radio group",
                self.name
            )));
        }

        if self.clearing_choices.contains(&self.revealing_choice) {
            return Err(Error::InvalidConfiguration(format!(
                "choice `{}` of form `{}` can't both reveal and clear the date",
                self.revealing_choice, self.name
            )));
        }

        Ok(self)
    }
}
