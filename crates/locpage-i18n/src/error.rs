//! Error types for localization operations

use thiserror::Error;

/// Errors that can occur during localization operations
#[derive(Error, Debug)]
pub enum I18nError {
    /// The locale directory could not be read
    #[error("Failed to read locale directory {path}: {source}")]
    LoadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A locale file is malformed
    #[error("Failed to parse locale file {path}: {message}")]
    ParseError { path: String, message: String },

    /// A locale code is not a valid language tag
    #[error("Invalid locale code: {code}")]
    InvalidLocaleCode { code: String },

    /// A locale file parsed but produced no entries
    #[error("Locale catalog for '{locale}' is empty")]
    EmptyCatalog { locale: String },

    /// The configured fallback locale was not discovered during loading
    #[error("Fallback locale '{locale}' is not among the loaded locales")]
    FallbackUnavailable { locale: String },

    /// A formatting adapter was handed a locale outside the supported set
    #[error("Formatter invoked with unsupported locale '{locale}'")]
    FormatError { locale: String },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for localization operations
pub type I18nResult<T> = Result<T, I18nError>;

impl From<I18nError> for locpage_common::LocPageError {
    fn from(err: I18nError) -> Self {
        let locale = match &err {
            I18nError::InvalidLocaleCode { code } => Some(code.clone()),
            I18nError::EmptyCatalog { locale }
            | I18nError::FallbackUnavailable { locale }
            | I18nError::FormatError { locale } => Some(locale.clone()),
            _ => None,
        };
        match locale {
            Some(locale) => {
                locpage_common::LocPageError::localization_with_locale(err.to_string(), locale)
            }
            None => locpage_common::LocPageError::localization(err.to_string()),
        }
    }
}
