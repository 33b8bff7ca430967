use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlScriptElement, Window};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedLoad {
    /// A new script tag was appended to the body.
    Injected,
    /// The script was already on the page; its embeds were re-initialised if
    /// the widget global exists.
    AlreadyPresent,
}

pub fn script_selector(src: &str) -> String {
    format!("script[src=\"{}\"]", src.replace('"', "\\\""))
}

/// Injects the widget script at most once per page and calls
/// `window[global].loadEmbeds()` when it has loaded.
pub fn load_embed_script(src: &str, global: &'static str) -> Result<EmbedLoad, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if is_script_present(&document, src)? {
        // Remounts still need their iframes wired up
        if let Err(err) = init_embeds(&window, global) {
            log::warn!("Failed to initialise {} embeds: {:?}", global, err);
        }
        return Ok(EmbedLoad::AlreadyPresent);
    }

    let script: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
    script.set_src(src);
    script.set_async(true);

    let onload = Closure::<dyn FnMut()>::new(move || {
        if let Some(window) = web_sys::window() {
            if let Err(err) = init_embeds(&window, global) {
                log::warn!("Failed to initialise {} embeds: {:?}", global, err);
            }
        }
    });
    script.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let src_for_error = src.to_string();
    let onerror = Closure::<dyn FnMut()>::new(move || {
        log::warn!("Embed script {} failed to load", src_for_error);
    });
    script.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&script)?;
    Ok(EmbedLoad::Injected)
}

pub fn is_script_present(document: &Document, src: &str) -> Result<bool, JsValue> {
    Ok(document.query_selector(&script_selector(src))?.is_some())
}

fn init_embeds(window: &Window, global: &str) -> Result<(), JsValue> {
    let widget = js_sys::Reflect::get(window, &JsValue::from_str(global))?;
    if widget.is_undefined() || widget.is_null() {
        return Ok(());
    }
    let load_embeds: js_sys::Function =
        js_sys::Reflect::get(&widget, &JsValue::from_str("loadEmbeds"))?.dyn_into()?;
    load_embeds.call0(&widget)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_matches_exact_src() {
        assert_eq!(
            script_selector("https://tally.so/widgets/embed.js"),
            "script[src=\"https://tally.so/widgets/embed.js\"]"
        );
    }

    #[test]
    fn selector_escapes_quotes() {
        assert_eq!(script_selector("a\"b"), "script[src=\"a\\\"b\"]");
    }
}
