//! Shared types between the chat widget and its endpoint
//!
//! These types are used by both:
//! - the Dioxus widget (WASM)
//! - any Rust chat endpoint that wants to speak the same contract
//!
//! Serializable with serde for JSON over HTTP

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Wire Contract
// ============================================================================

/// Body of `POST <endpoint>`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../chat-widget/bindings/widget-api.ts")]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Endpoint response. `reply` may be absent; unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../chat-widget/bindings/widget-api.ts")]
pub struct ChatReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub reply: Option<String>,
}

/// Shown when the endpoint answers without a reply.
pub const NO_REPLY_TEXT: &str = "No reply.";

impl ChatReply {
    /// Reply text to display, falling back to [`NO_REPLY_TEXT`] when the
    /// field is missing or empty.
    pub fn text_or_fallback(&self) -> &str {
        match self.reply.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => NO_REPLY_TEXT,
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

/// A rendered message in the panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../chat-widget/bindings/widget-api.ts")]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../chat-widget/bindings/widget-api.ts")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}
