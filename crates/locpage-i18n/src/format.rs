//! Locale-aware number, date, and time formatting
//!
//! Thin adapters over ICU4X. One set of formatters is built per locale when
//! the catalogs load, so per-request formatting does no construction work.

use crate::error::{I18nError, I18nResult};
use crate::locale::LocaleCode;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use icu::calendar::Date;
use icu::datetime::{fieldsets, DateTimeFormatter, NoCalendarFormatter};
use icu::decimal::input::Decimal;
use icu::decimal::DecimalFormatter;
use icu::time::Time;
use std::fmt;

/// Prebuilt CLDR formatters for one locale
pub struct LocaleFormatters {
    decimal: DecimalFormatter,
    // Full-length date: weekday plus long date, e.g. "Saturday, December 4, 2021"
    date: DateTimeFormatter<fieldsets::YMDE>,
    time: NoCalendarFormatter<fieldsets::T>,
}

impl fmt::Debug for LocaleFormatters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleFormatters").finish_non_exhaustive()
    }
}

impl LocaleFormatters {
    /// Build the decimal, date, and time formatters for a locale
    pub fn new(locale: &LocaleCode) -> I18nResult<Self> {
        let loc = locale.icu_locale()?;
        let invalid = || I18nError::InvalidLocaleCode {
            code: locale.as_str().to_string(),
        };

        let decimal = DecimalFormatter::try_new(loc.clone().into(), Default::default())
            .map_err(|_| invalid())?;
        let date = DateTimeFormatter::try_new(loc.clone().into(), fieldsets::YMDE::long())
            .map_err(|_| invalid())?;
        let time = NoCalendarFormatter::try_new(loc.into(), fieldsets::T::medium())
            .map_err(|_| invalid())?;

        Ok(Self {
            decimal,
            date,
            time,
        })
    }

    /// Format an integer with locale grouping
    pub fn format_integer(&self, value: i64) -> String {
        self.decimal.format(&Decimal::from(value)).to_string()
    }

    /// Format a floating-point number with locale grouping and two decimal places
    pub fn format_decimal(&self, value: f64) -> String {
        // Scale to an integer so the value survives the Decimal conversion
        let scaled = (value * 100.0).round() as i64;
        let mut decimal = Decimal::from(scaled);
        decimal.multiply_pow10(-2);
        self.decimal.format(&decimal).to_string()
    }

    /// Format a date in the locale's full-length form
    pub fn format_date(&self, date: NaiveDate) -> String {
        let converted = match Date::try_new_iso(date.year(), date.month() as u8, date.day() as u8)
        {
            Ok(d) => d,
            Err(_) => return date.format("%Y-%m-%d").to_string(),
        };
        self.date.format(&converted).to_string()
    }

    /// Format a time of day in the locale's conventions
    pub fn format_time(&self, time: NaiveTime) -> String {
        let converted = match Time::try_new(
            time.hour() as u8,
            time.minute() as u8,
            time.second() as u8,
            0,
        ) {
            Ok(t) => t,
            Err(_) => return time.format("%H:%M:%S").to_string(),
        };
        self.time.format(&converted).to_string()
    }
}
