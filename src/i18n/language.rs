use std::fmt;

use log::{info, warn};

use crate::config;
use crate::storage::PreferenceStore;

/// Languages the site ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    En,
    It,
    De,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::It, Language::De];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::It => "it",
            Language::De => "de",
        }
    }

    /// Label shown in the language picker, always in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::It => "Italiano",
            Language::De => "Deutsch",
        }
    }

    /// Exact match against the supported codes. Anything else is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Maps a browser locale such as `it-IT` or `de` onto a supported language.
    pub fn from_locale(locale: &str) -> Option<Self> {
        let prefix: String = locale.chars().take(2).collect();
        Self::from_code(&prefix.to_ascii_lowercase())
    }
}

impl Default for Language {
    fn default() -> Self {
        config::FALLBACK_LANGUAGE
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Picks the session language: stored preference, then browser locale, then
/// the default. The choice is written back to the store right away.
pub fn init_language<S: PreferenceStore>(store: &S, locale: Option<&str>) -> Language {
    let stored = store
        .get(config::LANGUAGE_STORAGE_KEY)
        .and_then(|code| Language::from_code(&code));

    let language = match stored {
        Some(lang) => lang,
        None => {
            let detected = locale.and_then(Language::from_locale);
            if detected.is_none() {
                warn!("No supported locale detected ({:?}), using {}", locale, Language::default());
            }
            detected.unwrap_or_default()
        }
    };

    info!("Session language: {}", language);
    store.set(config::LANGUAGE_STORAGE_KEY, language.code());
    language
}
