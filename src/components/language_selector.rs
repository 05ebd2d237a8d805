use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::i18n::{use_i18n, Language};

#[function_component(LanguageSelector)]
pub fn language_selector() -> Html {
    let i18n = use_i18n();
    let current = i18n.language();

    let onchange = {
        let set_language = i18n.set_language.clone();
        Callback::from(move |e: Event| {
            let code = e.target_unchecked_into::<HtmlSelectElement>().value();
            set_language.emit(code);
        })
    };

    html! {
        <label class="language-selector">
            <span class="visually-hidden">{i18n.t("nav.language")}</span>
            <select {onchange}>
                { for Language::ALL.into_iter().map(|lang| html! {
                    <option value={lang.code()} selected={lang == current}>
                        {lang.native_name()}
                    </option>
                }) }
            </select>
        </label>
    }
}
