//! Write-once catalog store shared across requests

use crate::catalog::Catalog;
use crate::error::{I18nError, I18nResult};
use crate::format::LocaleFormatters;
use crate::locale::LocaleCode;
use crate::plural::PluralRule;
use crate::resolver::resolve_locale;
use chrono::{NaiveDate, NaiveTime};
use std::collections::{HashMap, HashSet};
use tracing::{debug, error};

/// Everything loaded for one locale: its catalog, plural rules, and formatters
#[derive(Debug)]
pub struct LocaleBundle {
    catalog: Catalog,
    plural: PluralRule,
    formatters: LocaleFormatters,
}

impl LocaleBundle {
    /// Assemble the bundle for a locale from its parsed catalog
    pub fn new(code: &LocaleCode, catalog: Catalog) -> I18nResult<Self> {
        Ok(Self {
            plural: PluralRule::new(code)?,
            formatters: LocaleFormatters::new(code)?,
            catalog,
        })
    }

    /// The locale's string catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The locale's cardinal plural rules
    pub fn plural_rule(&self) -> &PluralRule {
        &self.plural
    }

    /// The locale's prebuilt formatters
    pub fn formatters(&self) -> &LocaleFormatters {
        &self.formatters
    }
}

/// All loaded locales, built once at startup
///
/// The store is immutable after construction and safe to share behind an
/// `Arc` across concurrent request handlers; reads need no locking.
#[derive(Debug)]
pub struct CatalogStore {
    fallback: LocaleCode,
    supported: HashSet<LocaleCode>,
    bundles: HashMap<LocaleCode, LocaleBundle>,
}

impl CatalogStore {
    /// Build the store, enforcing that the fallback locale was loaded
    pub fn new(
        bundles: HashMap<LocaleCode, LocaleBundle>,
        fallback: LocaleCode,
    ) -> I18nResult<Self> {
        if !bundles.contains_key(fallback.as_str()) {
            return Err(I18nError::FallbackUnavailable {
                locale: fallback.as_str().to_string(),
            });
        }
        let supported = bundles.keys().cloned().collect();
        Ok(Self {
            fallback,
            supported,
            bundles,
        })
    }

    /// The fallback locale; always present in the supported set
    pub fn fallback(&self) -> &LocaleCode {
        &self.fallback
    }

    /// The set of loaded locale codes
    pub fn supported(&self) -> &HashSet<LocaleCode> {
        &self.supported
    }

    /// Whether a locale code has a loaded catalog
    pub fn is_supported(&self, code: &str) -> bool {
        self.supported.contains(code)
    }

    /// Resolve a requested locale to an effective one
    pub fn resolve(&self, requested: &str) -> &LocaleCode {
        let effective = resolve_locale(requested, &self.supported, &self.fallback);
        if effective.as_str() != requested {
            debug!(requested, effective = %effective, "unsupported locale, using fallback");
        }
        effective
    }

    fn bundle(&self, locale: &str) -> I18nResult<&LocaleBundle> {
        self.bundles.get(locale).ok_or_else(|| {
            error!(locale, "formatter called with a locale that has no catalog");
            I18nError::FormatError {
                locale: locale.to_string(),
            }
        })
    }

    /// Plural-aware string lookup
    ///
    /// `canonical` is the fallback-locale display string; it is reverse-mapped
    /// to its catalog key against the fallback catalog (first match in file
    /// order), then forward-mapped into the active locale's catalog. The
    /// active locale's plural rule picks the variant: any category other than
    /// "one" selects the plural string when the entry has one.
    ///
    /// Degrades gracefully instead of failing: an unknown canonical string is
    /// returned unchanged, and a key the active catalog is missing renders
    /// from the fallback catalog under the fallback locale's plural rule.
    pub fn lookup(&self, locale: &str, canonical: &str, count: i64) -> String {
        let Some(default_bundle) = self.bundles.get(self.fallback.as_str()) else {
            // Unreachable: construction requires the fallback bundle
            return canonical.to_string();
        };

        let Some(default_entry) = default_bundle.catalog().find_by_singular(canonical) else {
            debug!(canonical, "no catalog entry, rendering untranslated");
            return canonical.to_string();
        };

        let (bundle, entry) = self
            .bundles
            .get(locale)
            .and_then(|b| b.catalog().get(&default_entry.key).map(|e| (b, e)))
            .unwrap_or((default_bundle, default_entry));

        if bundle.plural_rule().selects_singular(count) {
            return entry.singular.clone();
        }
        match &entry.plural {
            Some(plural) => plural.clone(),
            None => entry.singular.clone(),
        }
    }

    /// Format an integer with the locale's grouping
    pub fn format_integer(&self, value: i64, locale: &str) -> I18nResult<String> {
        Ok(self.bundle(locale)?.formatters().format_integer(value))
    }

    /// Format a decimal number with the locale's grouping and separators
    pub fn format_decimal(&self, value: f64, locale: &str) -> I18nResult<String> {
        Ok(self.bundle(locale)?.formatters().format_decimal(value))
    }

    /// Format a date in the locale's full-length form
    pub fn format_date(&self, date: NaiveDate, locale: &str) -> I18nResult<String> {
        Ok(self.bundle(locale)?.formatters().format_date(date))
    }

    /// Format a time of day in the locale's conventions
    pub fn format_time(&self, time: NaiveTime, locale: &str) -> I18nResult<String> {
        Ok(self.bundle(locale)?.formatters().format_time(time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(code: &str, json: &str) -> (LocaleCode, LocaleBundle) {
        let code = LocaleCode::new(code).unwrap();
        let catalog = Catalog::from_json_str(code.as_str(), json).unwrap();
        let bundle = LocaleBundle::new(&code, catalog).unwrap();
        (code, bundle)
    }

    fn test_store() -> CatalogStore {
        let mut bundles = HashMap::new();
        let (en, en_bundle) = bundle(
            "en",
            r#"{"greeting": "Hello", "greeting_plural": "Hellos", "farewell": "Goodbye"}"#,
        );
        let (fr, fr_bundle) = bundle(
            "fr",
            r#"{"greeting": "Bonjour", "greeting_plural": "Bonjours"}"#,
        );
        bundles.insert(en.clone(), en_bundle);
        bundles.insert(fr, fr_bundle);
        CatalogStore::new(bundles, en).unwrap()
    }

    #[test]
    fn test_store_requires_fallback_bundle() {
        let mut bundles = HashMap::new();
        let (fr, fr_bundle) = bundle("fr", r#"{"greeting": "Bonjour"}"#);
        bundles.insert(fr, fr_bundle);

        let result = CatalogStore::new(bundles, LocaleCode::new("en").unwrap());
        assert!(matches!(
            result,
            Err(I18nError::FallbackUnavailable { .. })
        ));
    }

    #[test]
    fn test_resolve() {
        let store = test_store();
        assert_eq!(store.resolve("fr").as_str(), "fr");
        assert_eq!(store.resolve("xx").as_str(), "en");
    }

    #[test]
    fn test_lookup_singular_and_plural() {
        let store = test_store();
        assert_eq!(store.lookup("en", "Hello", 1), "Hello");
        assert_eq!(store.lookup("en", "Hello", 5), "Hellos");
        assert_eq!(store.lookup("fr", "Hello", 1), "Bonjour");
        assert_eq!(store.lookup("fr", "Hello", 5), "Bonjours");
    }

    #[test]
    fn test_lookup_applies_active_locale_plural_rule() {
        let store = test_store();
        // Zero is plural in English but singular in French
        assert_eq!(store.lookup("en", "Hello", 0), "Hellos");
        assert_eq!(store.lookup("fr", "Hello", 0), "Bonjour");
    }

    #[test]
    fn test_lookup_without_plural_variant_stays_singular() {
        let store = test_store();
        assert_eq!(store.lookup("en", "Goodbye", 5), "Goodbye");
    }

    #[test]
    fn test_lookup_unknown_string_passes_through() {
        let store = test_store();
        assert_eq!(store.lookup("en", "Unknown", 1), "Unknown");
        assert_eq!(store.lookup("fr", "Unknown", 7), "Unknown");
    }

    #[test]
    fn test_lookup_untranslated_key_uses_fallback_catalog() {
        // "farewell" exists only in the English catalog
        let store = test_store();
        assert_eq!(store.lookup("fr", "Goodbye", 1), "Goodbye");
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let store = test_store();
        let first = store.lookup("fr", "Hello", 3);
        let second = store.lookup("fr", "Hello", 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_formatters_reject_unknown_locale() {
        let store = test_store();
        let result = store.format_integer(1234, "xx");
        assert!(matches!(result, Err(I18nError::FormatError { .. })));
    }

    #[test]
    fn test_formatting_through_store() {
        let store = test_store();
        assert_eq!(store.format_integer(1234, "en").unwrap(), "1,234");

        let date = NaiveDate::from_ymd_opt(2021, 12, 4).unwrap();
        let formatted = store.format_date(date, "fr").unwrap();
        assert!(formatted.contains("décembre"));
    }
}
