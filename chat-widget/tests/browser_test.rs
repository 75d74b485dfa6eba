//! Browser tests for the page-facing bootstrap code.
//!
//! Run with: wasm-pack test --headless --firefox chat-widget
#![cfg(target_arch = "wasm32")]

use chat_widget::bootstrap::{mount, read_global_endpoint, scroll_to_bottom, ROOT_ID};
use chat_widget::config::GLOBAL_ENDPOINT_KEY;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

fn set_global(value: &JsValue) {
    js_sys::Reflect::set(&window(), &JsValue::from_str(GLOBAL_ENDPOINT_KEY), value)
        .expect("failed to set global");
}

#[wasm_bindgen_test]
fn global_endpoint_string_is_read() {
    set_global(&JsValue::from_str("https://bot.example.com/api/chat"));
    assert_eq!(
        read_global_endpoint(&window()).as_deref(),
        Some("https://bot.example.com/api/chat")
    );
    set_global(&JsValue::UNDEFINED);
}

#[wasm_bindgen_test]
fn missing_or_non_string_global_is_ignored() {
    set_global(&JsValue::UNDEFINED);
    assert_eq!(read_global_endpoint(&window()), None);

    set_global(&JsValue::from_f64(42.0));
    assert_eq!(read_global_endpoint(&window()), None);

    set_global(&JsValue::UNDEFINED);
}

#[wasm_bindgen_test]
fn mount_is_a_no_op_when_root_exists() {
    let document = window().document().expect("no document on window");
    let body = document.body().expect("document has no body");

    let existing = document.create_element("div").unwrap();
    existing.set_id(ROOT_ID);
    body.append_child(&existing).unwrap();

    mount(None).expect("second mount should not fail");

    let roots = document
        .query_selector_all(&format!("#{ROOT_ID}"))
        .unwrap()
        .length();
    assert_eq!(roots, 1);

    body.remove_child(&existing).unwrap();
}

#[wasm_bindgen_test]
fn scroll_to_missing_element_is_harmless() {
    scroll_to_bottom("cw-does-not-exist");
}
