//! Shared helpers for the browser tests: a scripted `window.fetch` and a
//! short wait for Dioxus to flush its render queue.
#![allow(dead_code)]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;

// Records the outgoing request on `window.__cwRequest`, then answers with
// whatever `window.__cwCanned` describes.
const FETCH_SCRIPT: &str = r#"
    return request.text().then(function (body) {
        window.__cwRequest = {
            method: request.method,
            contentType: request.headers.get("Content-Type"),
            body: body,
        };
        var canned = window.__cwCanned;
        if (canned.hang) {
            return new Promise(function () {});
        }
        if (canned.reject) {
            return Promise.reject(new TypeError("Failed to fetch"));
        }
        return new Response(canned.body, { status: canned.status });
    });
"#;

pub fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

pub fn document() -> web_sys::Document {
    window().document().expect("no document on window")
}

fn set(target: &JsValue, key: &str, value: &JsValue) {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value).expect("Reflect::set failed");
}

fn get(target: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(target, &JsValue::from_str(key)).expect("Reflect::get failed")
}

/// Replaces `window.fetch` until dropped.
pub struct FetchStub {
    original: JsValue,
}

impl FetchStub {
    fn install(canned: js_sys::Object) -> Self {
        let window = window();
        let original = get(&window, "fetch");
        set(&window, "__cwCanned", &canned);
        set(&window, "__cwRequest", &JsValue::UNDEFINED);

        let stub = js_sys::Function::new_with_args("request", FETCH_SCRIPT);
        set(&window, "fetch", &stub);

        Self { original }
    }

    pub fn respond(status: u16, body: &str) -> Self {
        let canned = js_sys::Object::new();
        set(&canned, "status", &JsValue::from_f64(f64::from(status)));
        set(&canned, "body", &JsValue::from_str(body));
        Self::install(canned)
    }

    pub fn reject() -> Self {
        let canned = js_sys::Object::new();
        set(&canned, "reject", &JsValue::TRUE);
        Self::install(canned)
    }

    /// Never settles, so the widget stays in its awaiting-reply state.
    pub fn hang() -> Self {
        let canned = js_sys::Object::new();
        set(&canned, "hang", &JsValue::TRUE);
        Self::install(canned)
    }
}

impl Drop for FetchStub {
    fn drop(&mut self) {
        set(&window(), "fetch", &self.original);
    }
}

#[derive(Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// The last request seen by the stub, if any.
pub fn recorded_request() -> Option<RecordedRequest> {
    let recorded = get(&window(), "__cwRequest");
    if recorded.is_undefined() {
        return None;
    }
    Some(RecordedRequest {
        method: get(&recorded, "method").as_string().unwrap_or_default(),
        content_type: get(&recorded, "contentType").as_string(),
        body: get(&recorded, "body").as_string().unwrap_or_default(),
    })
}

pub async fn settle() {
    TimeoutFuture::new(100).await;
}
