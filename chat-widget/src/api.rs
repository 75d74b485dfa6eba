use dioxus_logger::tracing::warn;
use gloo_net::http::Request;
use shared_types::{ChatReply, ChatRequest};

use crate::error::WidgetError;

/// POST the user's text to the chat endpoint and decode its reply.
///
/// The body is decoded whatever the status code: endpoints answer validation
/// errors with a regular `{"reply": ...}` payload.
pub async fn fetch_reply(endpoint: &str, text: &str) -> Result<ChatReply, WidgetError> {
    let request = ChatRequest::new(text);

    let response = Request::post(endpoint)
        .json(&request)
        .map_err(|e| WidgetError::Request(format!("Failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| WidgetError::Request(e.to_string()))?;

    if !response.ok() {
        warn!("Chat endpoint returned HTTP {}", response.status());
    }

    response
        .json::<ChatReply>()
        .await
        .map_err(|e| WidgetError::Decode(e.to_string()))
}
