use yew::prelude::*;

pub mod config;
pub mod content;
pub mod components {
    pub mod contact_form;
    pub mod countdown_timer;
    pub mod language_toggle;
    pub mod scheduler_embed;
}
pub mod pages {
    pub mod landing;
}
pub mod utils {
    pub mod countdown;
    pub mod document;
    pub mod embed;
    pub mod reveal;
}

use content::{store, LanguageContext, LanguageState};
use pages::landing::Landing;
use utils::document::apply_language;

#[function_component(App)]
pub fn app() -> Html {
    let language = use_reducer(LanguageState::default);

    // Keep <html lang dir> and the title in step with the toggle
    {
        let state = *language;
        use_effect_with_deps(
            move |state| {
                apply_language(*state, store());
                || ()
            },
            state,
        );
    }

    html! {
        <ContextProvider<LanguageContext> context={language}>
            <Landing />
        </ContextProvider<LanguageContext>>
    }
}

/// Entry point used by the wasm binary.
pub fn run() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }));

    match store().validate() {
        Ok(()) => log::debug!("Content trees validated for {:?}", store().languages()),
        Err(err) => log::error!("Content trees are inconsistent: {}", err),
    }

    yew::Renderer::<App>::new().render();
}
