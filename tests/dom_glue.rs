//! Browser tests for the raw-DOM suggestion path and the toast.
//!
//! These run under `wasm-pack test --headless` against a real document; the
//! native test run only sees the unit tests in `src/`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use catalog_ui::{dom, notify, suggest};

wasm_bindgen_test_configure!(run_in_browser);

/// Let the browser run queued timers and in-flight fetches to completion.
async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

/// Rebuild the two elements the glue owns, dropping leftovers from any
/// previous test in the same document.
fn setup() -> (Document, Element, HtmlInputElement) {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();

    if let Some(old) = document.get_element_by_id(dom::SUGGESTIONS_BOX_ID) {
        old.remove();
    }
    if let Some(old) = document.get_element_by_id(dom::SEARCH_INPUT_ID) {
        old.remove();
    }

    let input = document.create_element("input").unwrap();
    input.set_id(dom::SEARCH_INPUT_ID);
    body.append_child(&input).unwrap();

    let list = document.create_element("ul").unwrap();
    list.set_id(dom::SUGGESTIONS_BOX_ID);
    body.append_child(&list).unwrap();

    let input = input.dyn_into::<HtmlInputElement>().unwrap();
    (document, list, input)
}

#[wasm_bindgen_test]
fn empty_query_clears_box_synchronously() {
    let (_document, list, _input) = setup();
    list.set_inner_html("<li>stale</li><li>items</li>");

    // No await: the clear must happen before this call returns, and an
    // empty query never issues a request.
    catalog_ui::fetch_suggestions("");

    assert_eq!(list.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn render_preserves_order_and_replaces_previous_items() {
    let (_document, list, _input) = setup();
    list.set_inner_html("<li>old</li>");

    let items = vec!["apple".to_string(), "apricot".to_string()];
    suggest::render_suggestions(&items).unwrap();

    assert_eq!(list.child_element_count(), 2);
    let children = list.children();
    assert_eq!(children.item(0).unwrap().text_content().unwrap(), "apple");
    assert_eq!(children.item(1).unwrap().text_content().unwrap(), "apricot");
}

#[wasm_bindgen_test]
fn clicking_item_fills_input_and_closes_box() {
    let (_document, list, input) = setup();

    let items = vec!["apple".to_string(), "apricot".to_string()];
    suggest::render_suggestions(&items).unwrap();

    let second: HtmlElement = list.children().item(1).unwrap().dyn_into().unwrap();
    second.click();

    assert_eq!(input.value(), "apricot");
    assert_eq!(list.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn toast_shows_exactly_one_acknowledgement() {
    let (document, _list, _input) = setup();

    notify::toast("Liked: shirt-42");

    let toasts = document.get_elements_by_class_name("catalog-toast");
    assert_eq!(toasts.length(), 1);
    let text = toasts.item(0).unwrap().text_content().unwrap();
    assert!(text.contains("Liked"));
    assert!(text.contains("shirt-42"));

    // Clean up so the count assertion holds if tests share the document
    toasts.item(0).unwrap().remove();
}

#[wasm_bindgen_test]
async fn failed_feedback_shows_no_toast_and_does_not_throw() {
    let (document, _list, _input) = setup();

    // The test harness serves no /like_product route, so the POST comes
    // back non-2xx. The submission must log and swallow that; the toast is
    // reserved for success.
    catalog_ui::like_product("shirt-42");
    sleep_ms(300).await;

    assert_eq!(
        document.get_elements_by_class_name("catalog-toast").length(),
        0
    );
}

#[wasm_bindgen_test]
fn toast_comes_down_when_timer_cannot_be_scheduled() {
    let (document, _list, _input) = setup();
    let window = web_sys::window().unwrap();

    // Break setTimeout so scheduling the auto-removal fails; the toast
    // node must not be left on screen forever.
    let original = js_sys::Reflect::get(&window, &"setTimeout".into()).unwrap();
    let broken = js_sys::Function::new_no_args("throw new Error(\"no timers\");");
    js_sys::Reflect::set(&window, &"setTimeout".into(), &broken).unwrap();

    notify::toast("Liked: shirt-42");

    js_sys::Reflect::set(&window, &"setTimeout".into(), &original).unwrap();
    assert_eq!(
        document.get_elements_by_class_name("catalog-toast").length(),
        0
    );
}

#[wasm_bindgen_test]
async fn widget_does_not_claim_template_element_ids() {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(old) = document.get_element_by_id(dom::SUGGESTIONS_BOX_ID) {
        old.remove();
    }
    if let Some(old) = document.get_element_by_id(dom::SEARCH_INPUT_ID) {
        old.remove();
    }

    let mount = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&mount).unwrap();
    yew::Renderer::<catalog_ui::ui::search::SearchWidget>::with_root(mount.clone()).render();
    sleep_ms(50).await;

    // The widget renders, but leaves the template's ids free for pages
    // that still use the raw-DOM path.
    assert!(document.query_selector(".search-widget").unwrap().is_some());
    assert!(document.get_element_by_id(dom::SEARCH_INPUT_ID).is_none());
    assert!(document.get_element_by_id(dom::SUGGESTIONS_BOX_ID).is_none());

    mount.remove();
}

// Two overlapping queries ("a" then "ap") may resolve in either order; the
// sequence guard in `suggest` drops whichever response is stale, so only the
// newest query's items can render. The guard itself is exercised by the unit
// tests in src/suggest.rs; driving two live requests here would need a mock
// server, which this crate deliberately does not carry.
