pub mod api;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod error;
pub mod state;

pub use api::*;
pub use bootstrap::{bootstrap, bootstrap_with, mount};
pub use components::*;
pub use config::WidgetConfig;
pub use error::WidgetError;
pub use state::*;

use wasm_bindgen::prelude::*;

/// JavaScript entry point for hosts that load the module themselves:
/// `mountChatWidget("https://example.com/api/chat")`.
#[wasm_bindgen(js_name = mountChatWidget)]
pub fn mount_chat_widget(endpoint: Option<String>) {
    bootstrap_with(endpoint);
}
