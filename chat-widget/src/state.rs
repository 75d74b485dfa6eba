use dioxus_logger::tracing::error;
use shared_types::{ChatMessage, ChatReply};

use crate::error::WidgetError;

/// Shown when the reply request fails for any reason.
pub const ERROR_REPLY_TEXT: &str = "Error talking to server. Please try again.";

/// Lifecycle of the chat panel. `Closed` means it has never been built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
    Hidden,
}

impl PanelState {
    pub fn is_constructed(self) -> bool {
        !matches!(self, PanelState::Closed)
    }

    pub fn is_visible(self) -> bool {
        matches!(self, PanelState::Open)
    }
}

/// What a launcher activation did to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherAction {
    Constructed,
    Shown,
    Hidden,
}

/// Outcome of a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Trimmed text to send; the user message is already appended.
    Dispatch(String),
    /// Empty or whitespace-only input.
    Empty,
    /// A reply is still pending.
    Busy,
}

/// Append-only message log plus the in-flight flag that drives the send
/// control.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    awaiting_reply: bool,
}

impl Conversation {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn send_enabled(&self) -> bool {
        !self.awaiting_reply
    }

    fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn submit(&mut self, input: &str) -> Submission {
        let text = input.trim();
        if text.is_empty() {
            return Submission::Empty;
        }
        if self.awaiting_reply {
            return Submission::Busy;
        }

        self.append(ChatMessage::user(text));
        self.awaiting_reply = true;
        Submission::Dispatch(text.to_string())
    }

    /// Settle the pending request. The send control is re-enabled whatever
    /// the outcome.
    pub fn resolve(&mut self, outcome: Result<ChatReply, WidgetError>) {
        let text = match outcome {
            Ok(reply) => reply.text_or_fallback().to_string(),
            Err(e) => {
                error!("Failed to fetch chat reply: {}", e);
                ERROR_REPLY_TEXT.to_string()
            }
        };
        self.append(ChatMessage::bot(text));
        self.awaiting_reply = false;
    }
}

/// Handle a launcher click. The first one builds the panel and seeds the
/// greeting; later ones only flip visibility.
pub fn activate_launcher(
    panel: &mut PanelState,
    conversation: &mut Conversation,
    greeting: &str,
) -> LauncherAction {
    match *panel {
        PanelState::Closed => {
            conversation.append(ChatMessage::bot(greeting));
            *panel = PanelState::Open;
            LauncherAction::Constructed
        }
        PanelState::Open => {
            *panel = PanelState::Hidden;
            LauncherAction::Hidden
        }
        PanelState::Hidden => {
            *panel = PanelState::Open;
            LauncherAction::Shown
        }
    }
}
