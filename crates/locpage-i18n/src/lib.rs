//! Localization core for the locpage server
//!
//! This crate owns everything locale-shaped:
//!
//! - Catalog discovery and loading from a directory of `<code>.json` files
//! - Effective-locale resolution with a guaranteed fallback
//! - Plural-aware string lookup keyed by the default-locale display string
//! - CLDR-backed number, date, and time formatting adapters
//!
//! The [`CatalogStore`] is built once at startup and is read-only from then
//! on; share it behind an `Arc` across concurrent request handlers.
//!
//! # Example
//!
//! ```no_run
//! use locpage_i18n::CatalogLoader;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = CatalogLoader::load("locales", "en")?;
//!
//! let effective = store.resolve("fr");
//! let label = store.lookup(effective.as_str(), "attendee", 5);
//! println!("{label}");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod format;
pub mod loader;
pub mod locale;
pub mod plural;
pub mod resolver;
pub mod store;

pub use catalog::{Catalog, CatalogEntry};
pub use error::{I18nError, I18nResult};
pub use format::LocaleFormatters;
pub use loader::CatalogLoader;
pub use locale::LocaleCode;
pub use plural::PluralRule;
pub use resolver::resolve_locale;
pub use store::{CatalogStore, LocaleBundle};
