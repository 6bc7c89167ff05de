use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Where to find an element in the page: either by id (`#back`) or by class
/// (`.banner-panel__close`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locator {
    Id(String),
    Class(String),
}

impl Locator {
    pub fn id(id: &str) -> Self {
        Self::Id(id.to_owned())
    }

    pub fn class(class: &str) -> Self {
        Self::Class(class.to_owned())
    }
}

impl FromStr for Locator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_at_checked(1) {
            Some(("#", id)) if is_valid_name(id) => Ok(Self::id(id)),
            Some((".", class)) if is_valid_name(class) => Ok(Self::class(class)),
            _ => Err(Error::InvalidLocator(s.to_owned())),
        }
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(char::is_whitespace)
}

impl TryFrom<String> for Locator {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locator> for String {
    fn from(locator: Locator) -> Self {
        locator.to_string()
    }
}

impl Display for Locator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Locator::Id(id) => write!(f, "#{id}"),
            Locator::Class(class) => write!(f, ".{class}"),
        }
    }
}
