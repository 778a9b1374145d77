//! Locale code handling

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// A validated locale code, e.g. "en" or "pt-BR"
///
/// The set of valid codes is whatever the catalog loader discovers on disk;
/// this type only guarantees that the code is a well-formed BCP 47 language
/// tag, so the CLDR-backed formatters can be built from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleCode(String);

impl LocaleCode {
    /// Parse and validate a locale code
    pub fn new(code: impl Into<String>) -> I18nResult<Self> {
        let code = code.into();
        if code.parse::<icu::locale::Locale>().is_err() {
            return Err(I18nError::InvalidLocaleCode { code });
        }
        Ok(Self(code))
    }

    /// The code as written in the locale file name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parsed ICU locale, used to build the CLDR formatters and plural rules
    pub(crate) fn icu_locale(&self) -> I18nResult<icu::locale::Locale> {
        self.0
            .parse()
            .map_err(|_| I18nError::InvalidLocaleCode {
                code: self.0.clone(),
            })
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LocaleCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for LocaleCode {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
