//! Integration tests for the localization core

use chrono::{NaiveDate, NaiveTime};
use locpage_i18n::CatalogLoader;
use std::fs;
use tempfile::TempDir;

/// Create a temporary directory with test locale files
fn create_test_locales() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    fs::write(
        temp_dir.path().join("en.json"),
        r#"{
    "greeting": "Hello",
    "greeting_plural": "Hellos",
    "attendee": "attendee",
    "attendee_plural": "attendees",
    "date_label": "Date"
}"#,
    )
    .unwrap();

    fs::write(
        temp_dir.path().join("fr.json"),
        r#"{
    "greeting": "Bonjour",
    "greeting_plural": "Bonjours",
    "attendee": "participant",
    "attendee_plural": "participants",
    "date_label": "Date de l'événement"
}"#,
    )
    .unwrap();

    temp_dir
}

#[test]
fn test_load_and_resolve() {
    let temp_dir = create_test_locales();
    let store = CatalogLoader::load(temp_dir.path(), "en").unwrap();

    assert_eq!(store.supported().len(), 2);
    assert_eq!(store.resolve("fr").as_str(), "fr");
    assert_eq!(store.resolve("xx").as_str(), "en");
    assert!(store.is_supported(store.resolve("anything").as_str()));
}

#[test]
fn test_plural_aware_lookup_end_to_end() {
    let temp_dir = create_test_locales();
    let store = CatalogLoader::load(temp_dir.path(), "en").unwrap();

    assert_eq!(store.lookup("en", "Hello", 1), "Hello");
    assert_eq!(store.lookup("en", "Hello", 5), "Hellos");

    let effective = store.resolve("fr").as_str().to_string();
    assert_eq!(store.lookup(&effective, "attendee", 1), "participant");
    assert_eq!(store.lookup(&effective, "attendee", 1234), "participants");
}

#[test]
fn test_unknown_string_renders_untranslated() {
    let temp_dir = create_test_locales();
    let store = CatalogLoader::load(temp_dir.path(), "en").unwrap();

    assert_eq!(store.lookup("fr", "Not in any catalog", 2), "Not in any catalog");
}

#[test]
fn test_localized_formatting_end_to_end() {
    let temp_dir = create_test_locales();
    let store = CatalogLoader::load(temp_dir.path(), "en").unwrap();

    let date = NaiveDate::from_ymd_opt(2021, 12, 4).unwrap();
    let time = NaiveTime::from_hms_opt(10, 30, 0).unwrap();

    let en_date = store.format_date(date, "en").unwrap();
    assert!(en_date.contains("Saturday") && en_date.contains("December"));

    let fr_date = store.format_date(date, "fr").unwrap();
    assert!(fr_date.contains("samedi") && fr_date.contains("décembre"));

    assert_eq!(store.format_integer(1234, "en").unwrap(), "1,234");
    assert!(store.format_time(time, "en").unwrap().contains("10:30"));
}

#[test]
fn test_formatting_unsupported_locale_is_contract_violation() {
    let temp_dir = create_test_locales();
    let store = CatalogLoader::load(temp_dir.path(), "en").unwrap();

    assert!(store.format_integer(1, "xx").is_err());
    assert!(store
        .format_date(NaiveDate::from_ymd_opt(2021, 12, 4).unwrap(), "xx")
        .is_err());
}
