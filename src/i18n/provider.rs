use std::rc::Rc;

use log::{error, warn};
use yew::functional::hook;
use yew::prelude::*;

use super::{apply_language, init_language, Language, TranslationTable, Translator};
use crate::storage::{browser_locale, LocalStorage};

/// What components see: the active translator and the one way to change it.
#[derive(Clone, PartialEq)]
pub struct I18nContext {
    pub translator: Translator,
    pub set_language: Callback<String>,
}

impl I18nContext {
    pub fn t(&self, key: &str) -> String {
        self.translator.t(key)
    }

    pub fn language(&self) -> Language {
        self.translator.language()
    }

    /// Used when a component renders outside an `I18nProvider`.
    fn detached() -> Self {
        Self {
            translator: Translator::new(Rc::new(load_table()), Language::default()),
            set_language: Callback::from(|_: String| ()),
        }
    }
}

fn load_table() -> TranslationTable {
    let table = TranslationTable::builtin().unwrap_or_else(|e| {
        error!("Translations unavailable: {}", e);
        TranslationTable::default()
    });
    for language in Language::ALL {
        if !table.has_language(language) {
            warn!("No translations loaded for {}", language);
        }
    }
    table
}

#[derive(Properties, PartialEq)]
pub struct I18nProviderProps {
    pub children: Children,
}

#[function_component(I18nProvider)]
pub fn i18n_provider(props: &I18nProviderProps) -> Html {
    let table = use_memo(|_| load_table(), ());
    let translator = {
        let table = table.clone();
        use_state(move || {
            let language = init_language(&LocalStorage, browser_locale().as_deref());
            Translator::new(table, language)
        })
    };

    let set_language = {
        let translator = translator.clone();
        Callback::from(move |code: String| {
            if let Some(next) = apply_language(&translator, &LocalStorage, &code) {
                translator.set(next);
            }
        })
    };

    let context = I18nContext {
        translator: (*translator).clone(),
        set_language,
    };

    html! {
        <ContextProvider<I18nContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<I18nContext>>
    }
}

#[hook]
pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().unwrap_or_else(|| {
        warn!("use_i18n called outside I18nProvider, using default language");
        I18nContext::detached()
    })
}
