use crate::Result;
use crate::dom::DocumentHandle;
use crate::locator::Locator;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Attribute the server may set on the error region to list the failed
/// validations, e.g. `data-error-codes="day-out-of-range,not-numeric"`.
pub const ERROR_CODES_ATTRIBUTE: &str = "data-error-codes";

// Those messages are rendered by the server: they must stay byte-identical to its copy.
pub const LEAVING_DATE_MISSING_MESSAGE: &str = "Enter a leaving date";
pub const REVALUATION_DATE_MISSING_MESSAGE: &str = "Enter a revaluation date";
pub const INVALID_DATE_MESSAGE: &str = "Enter a valid date";
pub const DAY_OUT_OF_RANGE_MESSAGE: &str = "Enter a day between 1 and 31";
pub const MONTH_OUT_OF_RANGE_MESSAGE: &str = "Enter a month between 1 and 12";
pub const NOT_NUMERIC_MESSAGE: &str = "Enter a date using numbers only";
pub const YEAR_NOT_IN_FULL_MESSAGE: &str = "Enter the year in full (4 numbers)";

/// A date validation failure reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateErrorCode {
    LeavingDateMissing,
    RevaluationDateMissing,
    InvalidDate,
    DayOutOfRange,
    MonthOutOfRange,
    NotNumeric,
    YearNotInFull,
}

impl DateErrorCode {
    pub fn message(&self) -> &'static str {
        match self {
            DateErrorCode::LeavingDateMissing => LEAVING_DATE_MISSING_MESSAGE,
            DateErrorCode::RevaluationDateMissing => REVALUATION_DATE_MISSING_MESSAGE,
            DateErrorCode::InvalidDate => INVALID_DATE_MESSAGE,
            DateErrorCode::DayOutOfRange => DAY_OUT_OF_RANGE_MESSAGE,
            DateErrorCode::MonthOutOfRange => MONTH_OUT_OF_RANGE_MESSAGE,
            DateErrorCode::NotNumeric => NOT_NUMERIC_MESSAGE,
            DateErrorCode::YearNotInFull => YEAR_NOT_IN_FULL_MESSAGE,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DateErrorCode::LeavingDateMissing => "leaving-date-missing",
            DateErrorCode::RevaluationDateMissing => "revaluation-date-missing",
            DateErrorCode::InvalidDate => "invalid-date",
            DateErrorCode::DayOutOfRange => "day-out-of-range",
            DateErrorCode::MonthOutOfRange => "month-out-of-range",
            DateErrorCode::NotNumeric => "not-numeric",
            DateErrorCode::YearNotInFull => "year-not-in-full",
        }
    }

    pub fn all() -> [DateErrorCode; 7] {
        [
            DateErrorCode::LeavingDateMissing,
            DateErrorCode::RevaluationDateMissing,
            DateErrorCode::InvalidDate,
            DateErrorCode::DayOutOfRange,
            DateErrorCode::MonthOutOfRange,
            DateErrorCode::NotNumeric,
            DateErrorCode::YearNotInFull,
        ]
    }
}

impl FromStr for DateErrorCode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        DateErrorCode::all()
            .into_iter()
            .find(|code| code.code() == s)
            .ok_or_else(|| s.to_owned())
    }
}

/// What the error region tells about the current load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorSignal {
    /// No error region, or one whose text is blank once trimmed and that
    /// lists no error code: a region holding only whitespace is clean.
    Clean,
    /// The server rendered errors. `date_error` is set when one of them is
    /// about the date sub-fields.
    Errors { date_error: bool },
}

impl ErrorSignal {
    pub fn read<D: DocumentHandle + ?Sized>(
        document: &D,
        error_region: &Locator,
        known_errors: &[DateErrorCode],
    ) -> Result<Self> {
        if !document.exists(error_region) {
            return Ok(ErrorSignal::Clean);
        }

        let text = document.text_content(error_region)?;
        let codes = document
            .attribute(error_region, ERROR_CODES_ATTRIBUTE)?
            .filter(|codes| !codes.trim().is_empty());
        if text.trim().is_empty() && codes.is_none() {
            return Ok(ErrorSignal::Clean);
        }

        let date_error = match codes {
            Some(codes) => has_known_code(&codes, known_errors),
            None => has_known_message(&text, known_errors),
        };
        Ok(ErrorSignal::Errors { date_error })
    }

    pub fn has_errors(&self) -> bool {
        matches!(self, ErrorSignal::Errors { .. })
    }

    pub fn has_date_error(&self) -> bool {
        matches!(self, ErrorSignal::Errors { date_error: true })
    }
}

/// Compatibility lookup for pages that only render plain text messages.
pub fn has_known_message(text: &str, known_errors: &[DateErrorCode]) -> bool {
    known_errors.iter().any(|code| text.contains(code.message()))
}

pub fn has_known_code(codes: &str, known_errors: &[DateErrorCode]) -> bool {
    codes
        .split(',')
        .filter(|code| !code.trim().is_empty())
        .filter_map(|code| match code.parse::<DateErrorCode>() {
            Ok(code) => Some(code),
            Err(unknown) => {
                log::warn!("Ignoring unknown error code `{unknown}`");
                None
            }
        })
        .any(|code| known_errors.contains(&code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeDocument;
    use parameterized::{ide, parameterized};

    ide!();

    const ERRORS_ID: &str = "errors";

    fn errors() -> Locator {
        Locator::id(ERRORS_ID)
    }

    const KNOWN: &[DateErrorCode] = &[
        DateErrorCode::RevaluationDateMissing,
        DateErrorCode::DayOutOfRange,
        DateErrorCode::MonthOutOfRange,
        DateErrorCode::YearNotInFull,
    ];

    // region read
    #[test]
    fn should_be_clean_without_error_region() {
        let document = FakeDocument::default();
        assert_eq!(
            ErrorSignal::Clean,
            ErrorSignal::read(&document, &errors(), KNOWN).unwrap()
        );
    }

    #[parameterized(
        text = {"", "   ", "\n\t  \n"}
    )]
    fn should_be_clean_with_blank_error_region(text: &str) {
        let document = FakeDocument::default().with_text(ERRORS_ID, text);
        assert_eq!(
            ErrorSignal::Clean,
            ErrorSignal::read(&document, &errors(), KNOWN).unwrap()
        );
    }

    #[parameterized(
        text = {
            "There is a problem\nEnter a day between 1 and 31",
            "Enter a month between 1 and 12",
            "Enter the year in full (4 numbers)",
            "Enter a revaluation date"
        }
    )]
    fn should_detect_date_error_from_message(text: &str) {
        let document = FakeDocument::default().with_text(ERRORS_ID, text);
        let signal = ErrorSignal::read(&document, &errors(), KNOWN).unwrap();
        assert!(signal.has_date_error());
    }

    #[parameterized(
        text = {
            "Enter a date using numbers only",
            "Enter a valid date",
            "Enter a leaving date",
            "enter a day between 1 and 31",
            "Choose an option"
        }
    )]
    fn should_not_detect_date_error_from_unknown_message(text: &str) {
        let document = FakeDocument::default().with_text(ERRORS_ID, text);
        let signal = ErrorSignal::read(&document, &errors(), KNOWN).unwrap();
        assert_eq!(ErrorSignal::Errors { date_error: false }, signal);
    }

    #[test]
    fn should_prefer_error_codes_over_text() {
        let document = FakeDocument::default()
            .with_text(ERRORS_ID, "Un jour entre 1 et 31")
            .with_attribute(ERRORS_ID, ERROR_CODES_ATTRIBUTE, "foo, day-out-of-range");
        let signal = ErrorSignal::read(&document, &errors(), KNOWN).unwrap();
        assert!(signal.has_date_error());
    }

    #[test]
    fn should_ignore_text_when_codes_are_unrelated() {
        let document = FakeDocument::default()
            .with_text(ERRORS_ID, "Enter a day between 1 and 31")
            .with_attribute(ERRORS_ID, ERROR_CODES_ATTRIBUTE, "not-numeric");
        let signal = ErrorSignal::read(&document, &errors(), KNOWN).unwrap();
        assert_eq!(ErrorSignal::Errors { date_error: false }, signal);
    }

    #[test]
    fn should_report_errors_from_codes_alone() {
        let document = FakeDocument::default()
            .with_element(ERRORS_ID)
            .with_attribute(ERRORS_ID, ERROR_CODES_ATTRIBUTE, "year-not-in-full");
        let signal = ErrorSignal::read(&document, &errors(), KNOWN).unwrap();
        assert!(signal.has_date_error());
    }
    // endregion

    // region DateErrorCode
    #[test]
    fn should_parse_every_code() {
        for code in DateErrorCode::all() {
            assert_eq!(Ok(code), code.code().parse::<DateErrorCode>());
        }
    }

    #[test]
    fn should_not_parse_unknown_code() {
        assert_eq!(
            Err("year-missing".to_owned()),
            " year-missing ".parse::<DateErrorCode>()
        );
    }

    #[test]
    fn should_deserialize_code_as_kebab_case() {
        let codes: Vec<DateErrorCode> =
            serde_json_wasm::from_str(r#"["not-numeric","leaving-date-missing"]"#).unwrap();
        assert_eq!(
            vec![DateErrorCode::NotNumeric, DateErrorCode::LeavingDateMissing],
            codes
        );
    }
    // endregion
}
