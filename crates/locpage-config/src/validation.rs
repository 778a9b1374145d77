//! Validation utilities and regex patterns

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Regex pattern for locale codes (e.g., "en", "fr", "pt-BR")
pub static LOCALE_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,8}(-[A-Za-z0-9]{1,8})*$").expect("Invalid locale code regex pattern")
});

/// Validate a locale code string
pub fn validate_locale_code(code: &str) -> Result<(), ValidationError> {
    if code.is_empty() {
        return Err(ValidationError::new("empty_locale_code"));
    }

    if LOCALE_CODE_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_locale_code"))
    }
}

/// Validate a log level string
///
/// Accepts the plain tracing levels plus `EnvFilter`-style directives
/// containing `=` (e.g., "locpage_server=debug").
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if level.is_empty() {
        return Err(ValidationError::new("empty_log_level"));
    }

    let plain = matches!(
        level.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error" | "off"
    );

    if plain || level.contains('=') {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}
