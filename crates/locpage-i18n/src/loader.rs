//! Locale catalog discovery and loading

use crate::catalog::Catalog;
use crate::error::{I18nError, I18nResult};
use crate::locale::LocaleCode;
use crate::store::{CatalogStore, LocaleBundle};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Loads every locale catalog from a directory at startup
pub struct CatalogLoader;

impl CatalogLoader {
    /// Scan `dir` for `<code>.json` files and build the complete store
    ///
    /// The file stem is the locale code. Any unreadable directory, invalid
    /// code, or malformed catalog aborts the whole load; the process must
    /// not serve requests from a partially loaded set. The fallback locale
    /// must be among the discovered files.
    pub fn load<P: AsRef<Path>>(dir: P, fallback: &str) -> I18nResult<CatalogStore> {
        let dir = dir.as_ref();
        let fallback = LocaleCode::new(fallback)?;

        let read_dir = fs::read_dir(dir).map_err(|source| I18nError::LoadError {
            path: dir.display().to_string(),
            source,
        })?;

        let mut bundles = HashMap::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry.map_err(|source| I18nError::LoadError {
                path: dir.display().to_string(),
                source,
            })?;
            let path = dir_entry.path();

            if path.extension().and_then(OsStr::to_str) != Some("json") {
                debug!(path = %path.display(), "skipping non-catalog file");
                continue;
            }

            let Some(stem) = path.file_stem().and_then(OsStr::to_str) else {
                return Err(I18nError::InvalidLocaleCode {
                    code: path.display().to_string(),
                });
            };
            let code = LocaleCode::new(stem)?;

            let content = fs::read_to_string(&path).map_err(|source| I18nError::LoadError {
                path: path.display().to_string(),
                source,
            })?;
            let catalog = Catalog::from_json_str(&path.display().to_string(), &content)?;

            if catalog.is_empty() {
                return Err(I18nError::EmptyCatalog {
                    locale: code.as_str().to_string(),
                });
            }

            info!(locale = %code, entries = catalog.len(), "loaded locale catalog");
            let bundle = LocaleBundle::new(&code, catalog)?;
            bundles.insert(code, bundle);
        }

        CatalogStore::new(bundles, fallback)
    }
}
