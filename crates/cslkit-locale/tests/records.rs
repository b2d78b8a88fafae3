//! Tests for building locales from source records.

use cslkit_locale::{Locale, LocaleRecord, LocaleRegistry};

#[test]
fn test_locale_from_json_record() {
    let record: LocaleRecord = serde_json::from_str(
        r#"{
            "lang": "de-AT",
            "options": { "punctuation-in-quote": false },
            "terms": [
                { "name": "and", "value": "und" },
                { "name": "editor", "single": "Herausgeber", "multiple": "Herausgeber" }
            ],
            "dates": [
                { "name": "text", "format": "day. month year" }
            ],
            "metadata": {
                "translators": [
                    { "name": "A. Translator", "email": "translator@example.org" }
                ],
                "rights": "CC BY-SA 3.0",
                "updated": "2012-09-27T22:06:18+00:00"
            }
        }"#,
    )
    .unwrap();

    let registry = LocaleRegistry::new();
    let locale = Locale::from_record(record, &registry).unwrap();

    assert_eq!(locale.to_string(), "de-AT");
    assert!(!locale.options().punctuation_in_quote);
    assert_eq!(locale.term_text("and", false), Some("und"));
    assert_eq!(locale.term_text("editor", true), Some("Herausgeber"));
    assert_eq!(
        locale.date_format("text").map(|d| d.format.as_str()),
        Some("day. month year")
    );

    let metadata = locale.metadata().unwrap();
    assert_eq!(metadata.translators.len(), 1);
    assert_eq!(metadata.translators[0].name, "A. Translator");
    assert_eq!(
        metadata.translators[0].email.as_deref(),
        Some("translator@example.org")
    );
    assert_eq!(metadata.rights.as_deref(), Some("CC BY-SA 3.0"));
    assert_eq!(
        metadata.updated.as_deref(),
        Some("2012-09-27T22:06:18+00:00")
    );
}

#[test]
fn test_record_without_lang_uses_registry_default() {
    let record: LocaleRecord = serde_json::from_str(
        r#"{ "terms": [ { "name": "and", "value": "and" } ] }"#,
    )
    .unwrap();

    let registry = LocaleRegistry::new();
    let locale = Locale::from_record(record, &registry).unwrap();
    assert_eq!(locale.to_string(), "en-US");
    assert!(locale.is_default(&registry));
    assert!(locale.metadata().is_none());
}

#[test]
fn test_record_with_partial_tag_is_completed() {
    let record: LocaleRecord = serde_json::from_str(r#"{ "lang": "-GB" }"#).unwrap();

    let registry = LocaleRegistry::new();
    let locale = Locale::from_record(record, &registry).unwrap();
    assert_eq!(locale.to_string(), "en-GB");
}

#[test]
fn test_record_with_bad_tag_fails() {
    let record: LocaleRecord = serde_json::from_str(r#"{ "lang": "INVALID" }"#).unwrap();

    let registry = LocaleRegistry::new();
    assert!(Locale::from_record(record, &registry).is_err());
}
