use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use super::Language;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("failed to parse {language} translations: {source}")]
    Parse {
        language: Language,
        #[source]
        source: serde_json::Error,
    },
}

/// One node of a translation tree: either a display string or a nested section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Text(String),
    Section(BTreeMap<String, Entry>),
}

impl Entry {
    fn child(&self, segment: &str) -> Option<&Entry> {
        match self {
            Entry::Section(children) => children.get(segment),
            Entry::Text(_) => None,
        }
    }
}

/// Translation trees for every language, built once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    languages: BTreeMap<Language, Entry>,
}

impl TranslationTable {
    /// Parses the translations compiled into the binary.
    pub fn builtin() -> Result<Self, I18nError> {
        Self::from_json(&[
            (Language::En, include_str!("locales/en.json")),
            (Language::It, include_str!("locales/it.json")),
            (Language::De, include_str!("locales/de.json")),
        ])
    }

    pub fn from_json(sources: &[(Language, &str)]) -> Result<Self, I18nError> {
        let mut languages = BTreeMap::new();
        for &(language, json) in sources {
            let root: Entry = serde_json::from_str(json)
                .map_err(|source| I18nError::Parse { language, source })?;
            languages.insert(language, root);
        }
        Ok(Self { languages })
    }

    pub fn has_language(&self, language: Language) -> bool {
        self.languages.contains_key(&language)
    }

    /// Walks `key` segment by segment. Only a string leaf counts as a hit;
    /// a key that stops at a section is treated as missing.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        let root = self.languages.get(&language)?;
        match key.split('.').try_fold(root, |node, segment| node.child(segment))? {
            Entry::Text(text) => Some(text.as_str()),
            Entry::Section(_) => None,
        }
    }
}
