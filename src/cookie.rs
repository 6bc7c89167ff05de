use crate::Result;
use chrono::TimeDelta;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Access to the browser cookies.
pub trait CookieStore {
    /// Retrieve the value of a cookie, if it exists and has not expired.
    fn get(&self, name: &str) -> Option<String>;

    fn set(&self, name: &str, value: &str, max_age: TimeDelta) -> Result<()>;
}

/// A durable marker stored as a single cookie.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedFlag {
    name: String,
    value: String,
    max_age_seconds: i64,
}

impl PersistedFlag {
    pub fn new(name: String, value: String, max_age_seconds: i64) -> Self {
        Self {
            name,
            value,
            max_age_seconds,
        }
    }

    pub fn is_set<C: CookieStore + ?Sized>(&self, cookies: &C) -> bool {
        cookies.get(&self.name).is_some()
    }

    pub fn persist<C: CookieStore + ?Sized>(&self, cookies: &C) -> Result<()> {
        cookies.set(&self.name, &self.value, self.max_age())
    }

    pub fn max_age(&self) -> TimeDelta {
        TimeDelta::try_seconds(self.max_age_seconds).unwrap_or(TimeDelta::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryCookieStore;

    fn flag() -> PersistedFlag {
        PersistedFlag::new("hide".to_owned(), "yes".to_owned(), 3600)
    }

    #[test]
    fn should_not_be_set_by_default() {
        assert!(!flag().is_set(&MemoryCookieStore::default()));
    }

    #[test]
    fn should_be_set_once_persisted() {
        let cookies = MemoryCookieStore::default();
        flag().persist(&cookies).unwrap();
        assert!(flag().is_set(&cookies));
        assert_eq!(Some("yes".to_owned()), cookies.get("hide"));
    }

    #[test]
    fn should_expire_after_max_age() {
        let cookies = MemoryCookieStore::default();
        flag().persist(&cookies).unwrap();

        cookies.advance(TimeDelta::seconds(3599));
        assert!(flag().is_set(&cookies));

        cookies.advance(TimeDelta::seconds(1));
        assert!(!flag().is_set(&cookies));
    }

    #[test]
    fn should_saturate_max_age() {
        let flag = PersistedFlag::new("hide".to_owned(), "yes".to_owned(), i64::MAX);
        assert_eq!(TimeDelta::MAX, flag.max_age());
    }
}
