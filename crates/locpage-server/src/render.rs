//! Template engine wiring
//!
//! Wraps Tera and registers the four locale-aware filters. Filters receive
//! the active locale explicitly through a `locale=` argument on every call,
//! so concurrent renders for different locales cannot interfere: nothing
//! about the active locale is ever installed globally.

use chrono::{NaiveDate, NaiveTime};
use locpage_common::LocPageError;
use locpage_i18n::{CatalogStore, I18nError};
use std::collections::HashMap;
use std::sync::Arc;
use tera::{Tera, Value};
use tracing::error;

/// Tera wrapper with the locale filters registered
pub struct TemplateEngine {
    tera: Tera,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine").finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Load templates from a directory and register the locale filters
    pub fn new(template_dir: &str, catalogs: Arc<CatalogStore>) -> Result<Self, LocPageError> {
        let glob = format!("{}/**/*.html", template_dir.trim_end_matches('/'));
        let tera = Tera::new(&glob)
            .map_err(|e| LocPageError::template_with_source("failed to load templates", e))?;
        Ok(Self::with_tera(tera, catalogs))
    }

    fn with_tera(mut tera: Tera, catalogs: Arc<CatalogStore>) -> Self {
        tera.register_filter("num_filter", num_filter(catalogs.clone()));
        tera.register_filter("date_filter", date_filter(catalogs.clone()));
        tera.register_filter("time_filter", time_filter(catalogs.clone()));
        tera.register_filter("plural_formatting", plural_formatting(catalogs));
        Self { tera }
    }

    /// Render a template by name with the given context
    pub fn render(&self, name: &str, context: &tera::Context) -> Result<String, LocPageError> {
        self.tera.render(name, context).map_err(|e| {
            LocPageError::template_with_source(format!("failed to render template '{name}'"), e)
        })
    }
}

/// Pull the mandatory `locale=` argument out of a filter call
fn locale_arg(args: &HashMap<String, Value>) -> tera::Result<String> {
    args.get("locale")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| tera::Error::msg("filter requires a `locale` argument"))
}

/// Formatter failures mean a handler skipped locale resolution; log them as
/// the contract violation they are and fail the render.
fn filter_error(err: I18nError) -> tera::Error {
    error!(error = %err, "locale filter failed");
    tera::Error::msg(err.to_string())
}

/// `{{ value | num_filter(locale=locale) }}`: locale-aware number formatting
fn num_filter(
    catalogs: Arc<CatalogStore>,
) -> impl Fn(&Value, &HashMap<String, Value>) -> tera::Result<Value> + Send + Sync {
    move |value, args| {
        let locale = locale_arg(args)?;
        let formatted = if let Some(n) = value.as_i64() {
            catalogs.format_integer(n, &locale)
        } else if let Some(f) = value.as_f64() {
            catalogs.format_decimal(f, &locale)
        } else {
            return Err(tera::Error::msg("num_filter expects a number"));
        };
        formatted.map(Value::String).map_err(filter_error)
    }
}

/// `{{ value | date_filter(locale=locale) }}`: full localized date
fn date_filter(
    catalogs: Arc<CatalogStore>,
) -> impl Fn(&Value, &HashMap<String, Value>) -> tera::Result<Value> + Send + Sync {
    move |value, args| {
        let locale = locale_arg(args)?;
        let raw = value
            .as_str()
            .ok_or_else(|| tera::Error::msg("date_filter expects a date string"))?;
        let date: NaiveDate = raw
            .parse()
            .map_err(|_| tera::Error::msg(format!("date_filter cannot parse '{raw}'")))?;
        catalogs
            .format_date(date, &locale)
            .map(Value::String)
            .map_err(filter_error)
    }
}

/// `{{ value | time_filter(locale=locale) }}`: localized time of day
fn time_filter(
    catalogs: Arc<CatalogStore>,
) -> impl Fn(&Value, &HashMap<String, Value>) -> tera::Result<Value> + Send + Sync {
    move |value, args| {
        let locale = locale_arg(args)?;
        let raw = value
            .as_str()
            .ok_or_else(|| tera::Error::msg("time_filter expects a time string"))?;
        let time: NaiveTime = raw
            .parse()
            .map_err(|_| tera::Error::msg(format!("time_filter cannot parse '{raw}'")))?;
        catalogs
            .format_time(time, &locale)
            .map(Value::String)
            .map_err(filter_error)
    }
}

/// `{{ "canonical string" | plural_formatting(count=n, locale=locale) }}`
///
/// Translates the default-locale display string into the active locale,
/// picking the singular or plural variant for the count. Unknown strings
/// pass through untranslated.
fn plural_formatting(
    catalogs: Arc<CatalogStore>,
) -> impl Fn(&Value, &HashMap<String, Value>) -> tera::Result<Value> + Send + Sync {
    move |value, args| {
        let locale = locale_arg(args)?;
        let canonical = value
            .as_str()
            .ok_or_else(|| tera::Error::msg("plural_formatting expects a string"))?;
        let count = args
            .get("count")
            .and_then(Value::as_i64)
            .ok_or_else(|| tera::Error::msg("plural_formatting requires a `count` argument"))?;
        Ok(Value::String(catalogs.lookup(&locale, canonical, count)))
    }
}
