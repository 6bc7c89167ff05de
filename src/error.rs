use crate::locator::Locator;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("element `{0}` does not exist")]
    ElementNotFound(Locator),
    #[error("`{0}` is not a valid locator, expected `#id` or `.class`")]
    InvalidLocator(String),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("cookie store failure: {0}")]
    Cookie(String),
    #[error("browser call failed: {0}")]
    Js(String),
}
