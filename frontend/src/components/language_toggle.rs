use yew::prelude::*;

use crate::content::{store, LanguageAction, LanguageContext};

#[function_component(LanguageToggle)]
pub fn language_toggle() -> Html {
    let language = use_context::<LanguageContext>();
    let Some(language) = language else {
        log::error!("LanguageToggle rendered outside of the language provider");
        return html! {};
    };

    let onclick = {
        let language = language.clone();
        Callback::from(move |_: MouseEvent| {
            language.dispatch(LanguageAction::Toggle);
        })
    };

    let active = language.active();
    let target = active.toggled();
    html! {
        <button
            class="language-toggle"
            onclick={onclick}
            lang={target.code()}
            aria-label={store().text_or_empty(active, "nav.language_toggle").to_string()}
        >
            {store().text_or_empty(active, "nav.language_toggle")}
        </button>
    }
}
