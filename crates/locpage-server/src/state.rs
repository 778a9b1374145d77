//! Shared application state

use crate::render::TemplateEngine;
use locpage_i18n::CatalogStore;
use std::sync::Arc;

/// State shared across request handlers
///
/// Everything here is built before the server starts accepting requests and
/// is read-only afterwards, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Preloaded locale catalogs, plural rules, and formatters
    pub catalogs: Arc<CatalogStore>,
    /// Template engine with the locale filters registered
    pub templates: Arc<TemplateEngine>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("catalogs", &"<CatalogStore>")
            .field("templates", &"<TemplateEngine>")
            .finish()
    }
}
