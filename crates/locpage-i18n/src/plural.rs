//! CLDR plural category resolution
//!
//! Each loaded locale carries its own cardinal plural rules, so counts are
//! categorized by the rules of the locale being rendered rather than one
//! global rule. English maps 1 to "one" and everything else to "other";
//! French also maps 0 to "one"; other languages use up to six categories.

use crate::error::{I18nError, I18nResult};
use crate::locale::LocaleCode;
use icu::plurals::{PluralCategory, PluralRuleType, PluralRules};
use std::fmt;

/// The category tag selecting the singular string variant
const SINGULAR_CATEGORY: &str = "one";

/// Per-locale cardinal plural rules
pub struct PluralRule {
    rules: PluralRules,
}

impl fmt::Debug for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluralRule").finish_non_exhaustive()
    }
}

impl PluralRule {
    /// Build the cardinal rules for a locale
    pub fn new(locale: &LocaleCode) -> I18nResult<Self> {
        let loc = locale.icu_locale()?;
        let rules = PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into()).map_err(
            |_| I18nError::InvalidLocaleCode {
                code: locale.as_str().to_string(),
            },
        )?;
        Ok(Self { rules })
    }

    /// Category tag for a count: "zero", "one", "two", "few", "many" or "other"
    pub fn category(&self, count: i64) -> &'static str {
        match self.rules.category_for(count) {
            PluralCategory::Zero => "zero",
            PluralCategory::One => SINGULAR_CATEGORY,
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    /// Whether the count selects the singular string variant
    pub fn selects_singular(&self, count: i64) -> bool {
        self.category(count) == SINGULAR_CATEGORY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(code: &str) -> PluralRule {
        PluralRule::new(&LocaleCode::new(code).unwrap()).unwrap()
    }

    #[test]
    fn test_english_categories() {
        let en = rule("en");
        assert_eq!(en.category(1), "one");
        assert_eq!(en.category(0), "other");
        assert_eq!(en.category(5), "other");
        assert!(en.selects_singular(1));
        assert!(!en.selects_singular(2));
    }

    #[test]
    fn test_french_treats_zero_as_singular() {
        let fr = rule("fr");
        assert_eq!(fr.category(0), "one");
        assert_eq!(fr.category(1), "one");
        assert_eq!(fr.category(2), "other");
    }

    #[test]
    fn test_locales_disagree_on_zero() {
        // The same count lands in different categories per locale, which is
        // why the rule travels with each catalog.
        assert_eq!(rule("en").category(0), "other");
        assert_eq!(rule("fr").category(0), "one");
    }
}
