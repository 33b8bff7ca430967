#![cfg(target_arch = "wasm32")]

use frontend::utils::embed::{load_embed_script, script_selector, EmbedLoad};
use frontend::utils::reveal::{RevealScheduler, REVEALED_CLASS};
use frontend::App;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn attached_div() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    div.set_class_name("scroll-animation");
    document.body().unwrap().append_child(&div).unwrap();
    div
}

fn positioned_div(style: &str) -> Element {
    let div = attached_div();
    div.set_attribute("style", style).unwrap();
    div
}

// Intersection reports and renders land on later frames
async fn settle(mut done: impl FnMut() -> bool) {
    for _ in 0..50 {
        if done() {
            return;
        }
        TimeoutFuture::new(20).await;
    }
}

#[wasm_bindgen_test]
fn registering_twice_tags_the_element_once() {
    let scheduler = RevealScheduler::mount();
    assert!(scheduler.is_observing());

    let div = attached_div();
    scheduler.register(&div);
    let first = div.get_attribute("data-reveal-id");
    scheduler.register(&div);

    assert!(first.is_some());
    assert_eq!(div.get_attribute("data-reveal-id"), first);
    // Intersection reports arrive asynchronously
    assert!(!scheduler.is_revealed(&div));
    div.remove();
}

#[wasm_bindgen_test]
fn missing_intersection_observer_reveals_immediately() {
    let window = web_sys::window().unwrap();
    let key = JsValue::from_str("IntersectionObserver");
    let original = js_sys::Reflect::get(&window, &key).unwrap();
    js_sys::Reflect::set(&window, &key, &JsValue::UNDEFINED).unwrap();

    let scheduler = RevealScheduler::mount();
    js_sys::Reflect::set(&window, &key, &original).unwrap();
    assert!(!scheduler.is_observing());

    let div = attached_div();
    scheduler.register(&div);
    assert!(div.class_list().contains(REVEALED_CLASS));
    assert!(scheduler.is_revealed(&div));
    div.remove();
}

#[wasm_bindgen_test]
fn reveal_all_and_disconnect_are_safe_to_repeat() {
    let scheduler = RevealScheduler::mount();
    let div = attached_div();
    scheduler.register(&div);

    scheduler.reveal_all();
    scheduler.reveal_all();
    assert!(div.class_list().contains(REVEALED_CLASS));

    scheduler.disconnect_all();
    scheduler.disconnect_all();
    assert!(scheduler.is_revealed(&div));

    // Already revealed elements are not picked up again
    scheduler.register(&div);
    assert!(scheduler.is_revealed(&div));
    assert!(div.class_list().contains(REVEALED_CLASS));
    div.remove();
}

#[wasm_bindgen_test]
async fn visible_targets_reveal_and_offscreen_ones_wait() {
    let scheduler = RevealScheduler::mount();
    assert!(scheduler.is_observing());

    let visible = positioned_div("position:fixed;top:0;left:0;width:200px;height:200px;");
    let below = positioned_div("position:absolute;top:100000px;left:0;width:200px;height:200px;");
    scheduler.register(&visible);
    scheduler.register(&below);

    settle(|| scheduler.is_revealed(&visible)).await;
    assert!(scheduler.is_revealed(&visible));
    assert!(visible.class_list().contains(REVEALED_CLASS));

    // Give the observer another round for the offscreen target
    TimeoutFuture::new(100).await;
    assert!(!scheduler.is_revealed(&below));
    assert!(!below.class_list().contains(REVEALED_CLASS));

    // A revealed target is done: stripping the class is not undone
    visible.class_list().remove_1(REVEALED_CLASS).unwrap();
    TimeoutFuture::new(100).await;
    assert!(!visible.class_list().contains(REVEALED_CLASS));
    assert!(scheduler.is_revealed(&visible));

    visible.remove();
    below.remove();
}

#[wasm_bindgen_test]
fn unregister_is_idempotent() {
    let scheduler = RevealScheduler::mount();
    let div = attached_div();
    scheduler.register(&div);
    scheduler.unregister(&div);
    scheduler.unregister(&div);
    scheduler.reveal_all();
    assert!(!div.class_list().contains(REVEALED_CLASS));
    div.remove();
}

#[wasm_bindgen_test]
fn embed_script_is_injected_once() {
    let src = "/__embed_test_widget.js";
    assert_eq!(load_embed_script(src, "EmbedTestWidget").unwrap(), EmbedLoad::Injected);
    assert_eq!(
        load_embed_script(src, "EmbedTestWidget").unwrap(),
        EmbedLoad::AlreadyPresent
    );

    let document = web_sys::window().unwrap().document().unwrap();
    let scripts = document.query_selector_all(&script_selector(src)).unwrap();
    assert_eq!(scripts.length(), 1);
}

#[wasm_bindgen_test]
async fn language_toggle_switches_document_language() {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = attached_div();
    let handle = yew::Renderer::<App>::with_root(root.clone()).render();

    let toggle = || root.query_selector("button.language-toggle").unwrap();
    settle(|| toggle().is_some()).await;
    let html = document.document_element().unwrap();
    settle(|| html.get_attribute("lang").as_deref() == Some("he")).await;
    assert_eq!(html.get_attribute("dir").as_deref(), Some("rtl"));

    toggle()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
    settle(|| html.get_attribute("lang").as_deref() == Some("en")).await;
    assert_eq!(html.get_attribute("lang").as_deref(), Some("en"));
    assert_eq!(html.get_attribute("dir").as_deref(), Some("ltr"));

    handle.destroy();
    root.remove();
}
