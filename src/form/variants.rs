//! The date forms of the service.

use crate::Result;
use crate::form::config::FormConfig;
use crate::form::error_signal::DateErrorCode;
use crate::locator::Locator;

// region Leaving date
pub const LEAVING_YES_AFTER_ID: &str = "leaving-yes-after";
pub const LEAVING_YES_BEFORE_ID: &str = "leaving-yes-before";
pub const LEAVING_NO_ID: &str = "leaving-no";
pub const LEAVING_DATE_DAY_ID: &str = "leavingDate_day";
pub const LEAVING_DATE_MONTH_ID: &str = "leavingDate_month";
pub const LEAVING_DATE_YEAR_ID: &str = "leavingDate_year";

pub const LEAVING_DATE_ERRORS: &[DateErrorCode] = &[
    DateErrorCode::LeavingDateMissing,
    DateErrorCode::InvalidDate,
    DateErrorCode::DayOutOfRange,
    DateErrorCode::MonthOutOfRange,
    DateErrorCode::NotNumeric,
    DateErrorCode::YearNotInFull,
];

/// "Has the member left?" with a leaving date after or before a cut-off.
pub fn leaving_date() -> Result<FormConfig> {
    FormConfig::new(
        "leaving date".to_owned(),
        vec![
            Locator::id(LEAVING_YES_AFTER_ID),
            Locator::id(LEAVING_YES_BEFORE_ID),
            Locator::id(LEAVING_NO_ID),
        ],
        Locator::id(LEAVING_YES_AFTER_ID),
        vec![Locator::id(LEAVING_NO_ID), Locator::id(LEAVING_YES_BEFORE_ID)],
        vec![
            Locator::id(LEAVING_DATE_DAY_ID),
            Locator::id(LEAVING_DATE_MONTH_ID),
            Locator::id(LEAVING_DATE_YEAR_ID),
        ],
        LEAVING_DATE_ERRORS.to_vec(),
        true,
    )
}
// endregion

// region Revaluation date
pub const REVALUATE_YES_ID: &str = "revaluate-yes";
pub const REVALUATE_NO_ID: &str = "revaluate-no";
pub const REVALUATION_DATE_DAY_ID: &str = "revaluationDate_day";
pub const REVALUATION_DATE_MONTH_ID: &str = "revaluationDate_month";
pub const REVALUATION_DATE_YEAR_ID: &str = "revaluationDate_year";

pub const REVALUATION_DATE_ERRORS: &[DateErrorCode] = &[
    DateErrorCode::RevaluationDateMissing,
    DateErrorCode::DayOutOfRange,
    DateErrorCode::MonthOutOfRange,
    DateErrorCode::YearNotInFull,
];

/// "Should the pension be revaluated?" with the revaluation date.
/// Unlike the leaving date, a clean load only unchecks what is checked.
pub fn revaluation_date() -> Result<FormConfig> {
    FormConfig::new(
        "revaluation date".to_owned(),
        vec![Locator::id(REVALUATE_YES_ID), Locator::id(REVALUATE_NO_ID)],
        Locator::id(REVALUATE_YES_ID),
        vec![Locator::id(REVALUATE_NO_ID)],
        vec![
            Locator::id(REVALUATION_DATE_DAY_ID),
            Locator::id(REVALUATION_DATE_MONTH_ID),
            Locator::id(REVALUATION_DATE_YEAR_ID),
        ],
        REVALUATION_DATE_ERRORS.to_vec(),
        false,
    )
}
// endregion

pub fn all() -> Result<Vec<FormConfig>> {
    Ok(vec![leaving_date()?, revaluation_date()?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_every_variant() {
        let variants = all().unwrap();
        assert_eq!(2, variants.len());
    }

    #[test]
    fn should_clear_leaving_date_on_clean_load_only() {
        assert!(*leaving_date().unwrap().clear_on_clean_load());
        assert!(!revaluation_date().unwrap().clear_on_clean_load());
    }

    #[test]
    fn should_not_know_every_leaving_message_for_revaluation() {
        let revaluation = revaluation_date().unwrap();
        assert!(!revaluation.error_codes().contains(&DateErrorCode::InvalidDate));
        assert!(!revaluation.error_codes().contains(&DateErrorCode::NotNumeric));
    }
}
