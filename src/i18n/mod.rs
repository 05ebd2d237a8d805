//! Translations for the site.
//!
//! Strings live in per-language JSON trees under `locales/` and are looked
//! up with dotted keys such as `booking.steps.details.title`. A key missing
//! in the active language falls back to English, and a key missing there
//! too comes back unchanged so the gap is visible on the page.

mod language;
mod provider;
mod table;

#[cfg(test)]
mod tests;

use std::rc::Rc;

use log::{debug, info};

pub use language::{init_language, Language};
pub use provider::{use_i18n, I18nProvider};
pub use table::TranslationTable;

use crate::config;
use crate::storage::PreferenceStore;

/// Resolves keys against a shared table for one active language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translator {
    table: Rc<TranslationTable>,
    language: Language,
}

impl Translator {
    pub fn new(table: Rc<TranslationTable>, language: Language) -> Self {
        Self { table, language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn t(&self, key: &str) -> String {
        self.table
            .lookup(self.language, key)
            .or_else(|| self.table.lookup(config::FALLBACK_LANGUAGE, key))
            .unwrap_or(key)
            .to_string()
    }

    /// Switches language if `code` is supported; otherwise leaves it as is.
    /// Returns whether the language changed.
    pub fn set_language(&mut self, code: &str) -> bool {
        match Language::from_code(code) {
            Some(language) if language != self.language => {
                info!("Language changed: {} -> {}", self.language, language);
                self.language = language;
                true
            }
            Some(_) => false,
            None => {
                debug!("Ignoring unsupported language code {:?}", code);
                false
            }
        }
    }
}

/// The one place a language change is applied: validate, switch, persist.
/// Returns the new translator, or `None` when nothing changed.
pub fn apply_language<S: PreferenceStore>(
    translator: &Translator,
    store: &S,
    code: &str,
) -> Option<Translator> {
    let mut next = translator.clone();
    if !next.set_language(code) {
        return None;
    }
    store.set(config::LANGUAGE_STORAGE_KEY, next.language().code());
    Some(next)
}
