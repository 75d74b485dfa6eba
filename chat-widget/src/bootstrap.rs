//! Page-side plumbing: deciding when to mount, creating the root container,
//! reading the page-global endpoint override.

use std::sync::Once;

use dioxus::LaunchBuilder;
use dioxus_logger::tracing::{error, info, warn, Level};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Window};

use crate::components::ChatWidget;
use crate::config::{WidgetConfig, GLOBAL_ENDPOINT_KEY};
use crate::error::WidgetError;

pub const ROOT_ID: &str = "cw-root";
const ROOT_STYLE: &str = "position: fixed; bottom: 20px; right: 20px; z-index: 999999;";

static LOGGING: Once = Once::new();

pub fn init_logging() {
    LOGGING.call_once(|| {
        wasm_logger::init(wasm_logger::Config::default());
        dioxus_logger::init(Level::INFO).ok();
    });
}

/// Mount the widget once the document is parsed, using the page-global
/// endpoint override if present.
pub fn bootstrap() {
    bootstrap_with(None);
}

/// Like [`bootstrap`], with an endpoint that takes precedence over the
/// page-global override.
pub fn bootstrap_with(endpoint: Option<String>) {
    init_logging();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        error!("Chat widget: no document available, not mounting");
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready = wasm_bindgen::closure::Closure::once_into_js(move || {
            mount_or_log(endpoint);
        });
        if let Err(e) =
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            error!("Chat widget: failed to wait for DOMContentLoaded: {:?}", e);
        }
    } else {
        mount_or_log(endpoint);
    }
}

fn mount_or_log(endpoint: Option<String>) {
    if let Err(e) = mount(endpoint) {
        error!("{}", e);
    }
}

/// Create the root container, append it to `<body>` and launch the Dioxus
/// app inside it. A second mount on the same page does nothing.
pub fn mount(endpoint: Option<String>) -> Result<(), WidgetError> {
    let window = web_sys::window().ok_or_else(|| WidgetError::Mount("no global `window`".into()))?;
    let document = window
        .document()
        .ok_or_else(|| WidgetError::Mount("no document on window".into()))?;

    if document.get_element_by_id(ROOT_ID).is_some() {
        warn!("Chat widget already mounted, ignoring second mount");
        return Ok(());
    }

    let root = create_root_container(&document)?;
    let config = WidgetConfig::resolve(endpoint, read_global_endpoint(&window));
    if config.uses_default_endpoint() {
        warn!(
            "Chat widget is using the placeholder endpoint; set window.{} to your chat API",
            GLOBAL_ENDPOINT_KEY
        );
    }
    info!("Mounting chat widget, endpoint: {}", config.endpoint);

    launch_into(root, config);
    Ok(())
}

/// Render [`ChatWidget`] inside `root` with `config` as root context.
pub fn launch_into(root: web_sys::Element, config: WidgetConfig) {
    LaunchBuilder::web()
        .with_cfg(dioxus_web::Config::new().rootelement(root))
        .with_context(config)
        .launch(ChatWidget);
}

fn create_root_container(document: &Document) -> Result<web_sys::Element, WidgetError> {
    let body = document
        .body()
        .ok_or_else(|| WidgetError::Mount("document has no body".into()))?;

    let root = document
        .create_element("div")
        .map_err(|e| WidgetError::mount("create root container", e))?;
    root.set_id(ROOT_ID);
    root.set_attribute("style", ROOT_STYLE)
        .map_err(|e| WidgetError::mount("style root container", e))?;
    body.append_child(&root)
        .map_err(|e| WidgetError::mount("append root container", e))?;

    Ok(root)
}

/// `window.CHAT_WIDGET_API`, if it is a string.
pub fn read_global_endpoint(window: &Window) -> Option<String> {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(GLOBAL_ENDPOINT_KEY)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }

    let endpoint = value.as_string();
    if endpoint.is_none() {
        warn!(
            "Ignoring window.{}: expected a string, got {:?}",
            GLOBAL_ENDPOINT_KEY, value
        );
    }
    endpoint
}

pub fn scroll_to_bottom(element_id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
    {
        element.set_scroll_top(element.scroll_height());
    }
}
