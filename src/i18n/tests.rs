use std::rc::Rc;

use super::*;
use crate::config;
use crate::storage::memory::MemoryStore;
use crate::storage::PreferenceStore;

fn sample_table() -> Rc<TranslationTable> {
    let table = TranslationTable::from_json(&[
        (
            Language::En,
            r#"{
                "booking": {
                    "steps": { "model": { "title": "Choose your scooter" } },
                    "only_english": "Fallback text"
                },
                "greeting": "Hello"
            }"#,
        ),
        (
            Language::It,
            r#"{
                "booking": { "steps": { "model": { "title": "Scegli lo scooter" } } },
                "greeting": "Ciao"
            }"#,
        ),
    ])
    .expect("sample translations parse");
    Rc::new(table)
}

#[test]
fn test_resolves_leaf_in_active_language() {
    let en = Translator::new(sample_table(), Language::En);
    let it = Translator::new(sample_table(), Language::It);
    assert_eq!(en.t("booking.steps.model.title"), "Choose your scooter");
    assert_eq!(it.t("booking.steps.model.title"), "Scegli lo scooter");
    assert_eq!(it.t("greeting"), "Ciao");
}

#[test]
fn test_missing_key_uses_fallback_language() {
    let it = Translator::new(sample_table(), Language::It);
    assert_eq!(it.t("booking.only_english"), "Fallback text");
}

#[test]
fn test_language_absent_from_table_uses_fallback() {
    let de = Translator::new(sample_table(), Language::De);
    assert_eq!(de.t("greeting"), "Hello");
}

#[test]
fn test_missing_everywhere_returns_key() {
    let it = Translator::new(sample_table(), Language::It);
    assert_eq!(it.t("booking.nope.title"), "booking.nope.title");
    assert_eq!(it.t(""), "");
}

#[test]
fn test_path_through_leaf_is_missing() {
    let en = Translator::new(sample_table(), Language::En);
    assert_eq!(en.t("greeting.extra"), "greeting.extra");
}

#[test]
fn test_section_key_is_not_a_translation() {
    let en = Translator::new(sample_table(), Language::En);
    assert_eq!(en.t("booking.steps"), "booking.steps");
}

#[test]
fn test_set_language_switches_resolution() {
    let mut translator = Translator::new(sample_table(), Language::En);
    assert!(translator.set_language("it"));
    assert_eq!(translator.language(), Language::It);
    assert_eq!(translator.t("greeting"), "Ciao");
}

#[test]
fn test_set_language_ignores_unsupported_code() {
    let mut translator = Translator::new(sample_table(), Language::It);
    assert!(!translator.set_language("fr"));
    assert!(!translator.set_language("IT"));
    assert!(!translator.set_language(""));
    assert_eq!(translator.language(), Language::It);
    assert_eq!(translator.t("greeting"), "Ciao");
}

#[test]
fn test_set_same_language_reports_no_change() {
    let mut translator = Translator::new(sample_table(), Language::En);
    assert!(!translator.set_language("en"));
}

#[test]
fn test_invalid_json_reports_language() {
    let err = TranslationTable::from_json(&[(Language::De, "{ not json")]).unwrap_err();
    assert!(err.to_string().contains("de translations"));
}

#[test]
fn test_builtin_table_has_every_language() {
    let table = TranslationTable::builtin().expect("builtin translations parse");
    for language in Language::ALL {
        assert!(table.has_language(language), "missing {}", language);
    }
}

#[test]
fn test_builtin_english_covers_ui_keys() {
    let table = TranslationTable::builtin().expect("builtin translations parse");
    let keys = [
        "hero.title",
        "fleet.coming_soon",
        "models.primavera.name",
        "models.elettrica.name",
        "routes.coast",
        "booking.steps.model.title",
        "booking.steps.details.title",
        "booking.steps.personal.title",
        "booking.summary.extra_rider",
        "booking.actions.complete",
        "booking.success.another",
        "booking.error.submit",
        "booking.notify.thanks",
        "footer.rights",
    ];
    for key in keys {
        assert!(table.lookup(Language::En, key).is_some(), "missing en key {}", key);
    }
}

#[test]
fn test_builtin_german_gaps_fall_back_to_english() {
    let table = Rc::new(TranslationTable::builtin().expect("builtin translations parse"));
    let de = Translator::new(table, Language::De);
    assert_eq!(de.t("models.gts.name"), "Vespa GTS 300");
    assert_eq!(de.t("booking.actions.back"), "Zurück");
}

#[test]
fn test_from_locale_takes_two_letter_prefix() {
    assert_eq!(Language::from_locale("it-IT"), Some(Language::It));
    assert_eq!(Language::from_locale("DE"), Some(Language::De));
    assert_eq!(Language::from_locale("en"), Some(Language::En));
    assert_eq!(Language::from_locale("fr-FR"), None);
    assert_eq!(Language::from_locale("e"), None);
}

#[test]
fn test_init_prefers_stored_language() {
    let store = MemoryStore::with(config::LANGUAGE_STORAGE_KEY, "de");
    assert_eq!(init_language(&store, Some("it-IT")), Language::De);
}

#[test]
fn test_init_ignores_unsupported_stored_value() {
    let store = MemoryStore::with(config::LANGUAGE_STORAGE_KEY, "klingon");
    assert_eq!(init_language(&store, Some("it-IT")), Language::It);
    assert_eq!(store.get(config::LANGUAGE_STORAGE_KEY).as_deref(), Some("it"));
}

#[test]
fn test_init_falls_back_to_default_and_persists() {
    let store = MemoryStore::default();
    assert_eq!(init_language(&store, Some("pt-BR")), Language::En);
    assert_eq!(store.get(config::LANGUAGE_STORAGE_KEY).as_deref(), Some("en"));

    let store = MemoryStore::default();
    assert_eq!(init_language(&store, None), Language::En);
}

#[test]
fn test_apply_language_switches_and_persists() {
    let store = MemoryStore::with(config::LANGUAGE_STORAGE_KEY, "en");
    let translator = Translator::new(sample_table(), Language::En);

    let next = apply_language(&translator, &store, "it").expect("it is supported");
    assert_eq!(next.language(), Language::It);
    assert_eq!(next.t("greeting"), "Ciao");
    assert_eq!(store.get(config::LANGUAGE_STORAGE_KEY).as_deref(), Some("it"));
    assert_eq!(translator.language(), Language::En);
}

#[test]
fn test_apply_language_rejects_unsupported_code() {
    let store = MemoryStore::with(config::LANGUAGE_STORAGE_KEY, "de");
    let translator = Translator::new(sample_table(), Language::De);

    assert!(apply_language(&translator, &store, "fr").is_none());
    assert!(apply_language(&translator, &store, "").is_none());
    assert_eq!(translator.language(), Language::De);
    assert_eq!(store.get(config::LANGUAGE_STORAGE_KEY).as_deref(), Some("de"));
}

#[test]
fn test_apply_same_language_writes_nothing() {
    let store = MemoryStore::default();
    let translator = Translator::new(sample_table(), Language::En);
    assert!(apply_language(&translator, &store, "en").is_none());
    assert_eq!(store.get(config::LANGUAGE_STORAGE_KEY), None);
}

#[test]
fn test_translators_sharing_a_table_compare_by_language() {
    let table = sample_table();
    let en = Translator::new(Rc::clone(&table), Language::En);
    let mut switched = Translator::new(Rc::clone(&table), Language::It);
    assert_ne!(en, switched);
    assert!(switched.set_language("en"));
    assert_eq!(en, switched);
    assert_eq!(Translator::new(sample_table(), Language::En), en);
}
