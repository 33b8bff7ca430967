use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::content::{ContentStore, LanguageState};

/// Mirrors the active language onto `<html lang dir>` and the tab title.
pub fn apply_language(state: LanguageState, store: &ContentStore) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let language = state.active();
    if let Some(root) = document.document_element() {
        if let Err(err) = root.set_attribute("lang", language.code()) {
            log::warn!("Failed to set document language: {:?}", err);
        }
        if let Err(err) = root.set_attribute("dir", state.direction().as_str()) {
            log::warn!("Failed to set document direction: {:?}", err);
        }
    }
    document.set_title(store.text_or_empty(language, "meta.title"));
}

/// Smooth-scrolls the element with `id` to the middle of the viewport.
pub fn scroll_to_id(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("No element with id {} to scroll to", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
