//! Effective-locale resolution

use crate::locale::LocaleCode;
use std::collections::HashSet;

/// Pick the effective locale for a request
///
/// Returns `requested` when it is among the supported codes, otherwise the
/// fallback. The caller guarantees the fallback is itself supported (the
/// catalog store refuses to build without it), so resolution never yields a
/// code without a catalog.
pub fn resolve_locale<'a>(
    requested: &str,
    supported: &'a HashSet<LocaleCode>,
    fallback: &'a LocaleCode,
) -> &'a LocaleCode {
    supported.get(requested).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supported_set(codes: &[&str]) -> HashSet<LocaleCode> {
        codes
            .iter()
            .map(|c| LocaleCode::new(*c).unwrap())
            .collect()
    }

    #[test]
    fn test_supported_locale_is_returned_unchanged() {
        let supported = supported_set(&["en", "fr"]);
        let fallback = LocaleCode::new("en").unwrap();

        assert_eq!(resolve_locale("fr", &supported, &fallback).as_str(), "fr");
        assert_eq!(resolve_locale("en", &supported, &fallback).as_str(), "en");
    }

    #[test]
    fn test_unsupported_locale_falls_back() {
        let supported = supported_set(&["en", "fr"]);
        let fallback = LocaleCode::new("en").unwrap();

        assert_eq!(resolve_locale("xx", &supported, &fallback).as_str(), "en");
        assert_eq!(resolve_locale("", &supported, &fallback).as_str(), "en");
    }

    #[test]
    fn test_resolution_always_lands_in_supported_set() {
        let supported = supported_set(&["en", "fr", "de"]);
        let fallback = LocaleCode::new("en").unwrap();

        for requested in ["en", "fr", "de", "es", "xx", "pt-BR"] {
            let resolved = resolve_locale(requested, &supported, &fallback);
            assert!(supported.contains(resolved.as_str()));
        }
    }
}
