use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use shared_types::{ChatMessage, Sender};

use crate::api::fetch_reply;
use crate::bootstrap::scroll_to_bottom;
use crate::config::WidgetConfig;
use crate::state::{activate_launcher, Conversation, PanelState, Submission};

pub const BODY_ID: &str = "cw-chat-body";

const TITLE: &str = "Meeting Assistant";
const SUBTITLE: &str = "Book a call in seconds";
pub const GREETING: &str = "Hi! I can help you schedule a meeting with our team. \
     Tell me your preferred date/time and your email.";
const PLACEHOLDER: &str = "Ask me to book a call...";
const LAUNCHER_LABEL: &str = "C";

/// Root of the widget: stylesheet, launcher, and the lazily built panel.
#[component]
pub fn ChatWidget() -> Element {
    let mut panel = use_signal(PanelState::default);
    let mut conversation = use_signal(Conversation::default);

    let on_launch = move |_: MouseEvent| {
        let action = activate_launcher(&mut panel.write(), &mut conversation.write(), GREETING);
        debug!("Launcher activated: {:?}", action);
    };

    rsx! {
        style { {WIDGET_STYLES} }

        button {
            class: "cw-launcher-btn",
            r#type: "button",
            aria_label: "Open chat assistant",
            onclick: on_launch,
            "{LAUNCHER_LABEL}"
        }

        if panel().is_constructed() {
            ChatPanel { visible: panel().is_visible(), conversation }
        }
    }
}

#[component]
pub fn ChatPanel(visible: bool, conversation: Signal<Conversation>) -> Element {
    let mut conversation = conversation;
    let config = use_context::<WidgetConfig>();
    let mut input_text = use_signal(String::new);
    let mut input_ref = use_signal(|| None::<Rc<MountedData>>);

    // Keep the newest message in view.
    use_effect(move || {
        let _ = conversation.read().messages().len();
        scroll_to_bottom(BODY_ID);
    });

    let endpoint = config.endpoint.clone();
    let onsubmit = move |e: FormEvent| {
        e.prevent_default();

        let input = input_text.read().clone();
        let text = match conversation.write().submit(&input) {
            Submission::Dispatch(text) => text,
            Submission::Empty | Submission::Busy => return,
        };

        input_text.set(String::new());
        if let Some(input) = input_ref() {
            spawn(async move {
                if let Err(e) = input.set_focus(true).await {
                    debug!("Failed to refocus chat input: {:?}", e);
                }
            });
        }

        let endpoint = endpoint.clone();
        spawn(async move {
            let outcome = fetch_reply(&endpoint, &text).await;
            conversation.write().resolve(outcome);
        });
    };

    let send_disabled = !conversation.read().send_enabled();
    let messages = conversation.read().messages().to_vec();

    rsx! {
        div {
            class: "cw-chat-window",
            style: if visible { "display: flex;" } else { "display: none;" },

            div {
                class: "cw-chat-header",
                div { class: "cw-chat-avatar", "{LAUNCHER_LABEL}" }
                div {
                    div { class: "cw-chat-title", "{TITLE}" }
                    div { class: "cw-chat-subtitle", "{SUBTITLE}" }
                }
            }

            div {
                class: "cw-chat-body",
                id: BODY_ID,
                for message in messages {
                    MessageBubble { key: "{message.id}", message }
                }
            }

            form {
                class: "cw-chat-footer",
                onsubmit,
                input {
                    class: "cw-chat-input",
                    placeholder: "{PLACEHOLDER}",
                    value: "{input_text}",
                    oninput: move |e| input_text.set(e.value()),
                    onmounted: move |e| input_ref.set(Some(e.data())),
                }
                button {
                    class: "cw-chat-send",
                    r#type: "submit",
                    disabled: send_disabled,
                    "Send"
                }
            }
        }
    }
}

#[component]
pub fn MessageBubble(message: ChatMessage) -> Element {
    let sent_at = message.timestamp.format("%H:%M").to_string();

    rsx! {
        div {
            class: bubble_class(message.sender),
            title: "{sent_at}",
            "{message.text}"
        }
    }
}

fn bubble_class(sender: Sender) -> String {
    format!("cw-msg cw-msg-{}", sender.as_str())
}

// Every selector is prefixed with `cw-` so host page styles stay untouched.
const WIDGET_STYLES: &str = r#"
.cw-launcher-btn {
    width: 52px;
    height: 52px;
    border-radius: 999px;
    border: none;
    cursor: pointer;
    background: radial-gradient(circle at top left, #22d3ee, #6366f1);
    box-shadow: 0 12px 30px rgba(0, 0, 0, 0.45);
    display: flex;
    align-items: center;
    justify-content: center;
    color: #020617;
    font-weight: 700;
    font-size: 20px;
}

.cw-chat-window {
    position: fixed;
    bottom: 88px;
    right: 20px;
    width: 340px;
    max-height: 480px;
    background: #020617;
    border-radius: 18px;
    border: 1px solid rgba(148, 163, 184, 0.5);
    box-shadow: 0 24px 60px rgba(0, 0, 0, 0.65);
    flex-direction: column;
    overflow: hidden;
    font-family: system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
}

.cw-chat-header {
    padding: 10px 12px;
    display: flex;
    align-items: center;
    gap: 8px;
    background: radial-gradient(circle at top left, #1d4ed8, #020617);
    border-bottom: 1px solid rgba(51, 65, 85, 0.9);
    color: #e5e7eb;
}

.cw-chat-avatar {
    width: 30px;
    height: 30px;
    border-radius: 999px;
    background: linear-gradient(135deg, #22d3ee, #6366f1);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 16px;
    font-weight: 700;
    color: #020617;
}

.cw-chat-title {
    font-size: 13px;
    font-weight: 600;
}

.cw-chat-subtitle {
    font-size: 11px;
    color: #cbd5f5;
}

/* Message list */
.cw-chat-body {
    padding: 8px;
    flex: 1;
    display: flex;
    flex-direction: column;
    gap: 6px;
    overflow-y: auto;
    background: #020617;
}

.cw-msg {
    max-width: 80%;
    padding: 6px 8px;
    border-radius: 11px;
    font-size: 12px;
    line-height: 1.35;
    white-space: pre-wrap;
    word-break: break-word;
}

.cw-msg-bot {
    align-self: flex-start;
    background: #111827;
    border: 1px solid rgba(55, 65, 81, 0.9);
    color: #e5e7eb;
}

.cw-msg-user {
    align-self: flex-end;
    background: #2563eb;
    color: white;
    border-bottom-right-radius: 4px;
}

/* Input form */
.cw-chat-footer {
    border-top: 1px solid rgba(31, 41, 55, 0.95);
    padding: 6px;
    margin: 0;
    display: flex;
    gap: 4px;
    background: #020617;
}

.cw-chat-input {
    flex: 1;
    border-radius: 999px;
    border: 1px solid rgba(51, 65, 85, 0.9);
    padding: 6px 10px;
    font-size: 12px;
    background: #020617;
    color: #e5e7eb;
    outline: none;
}

.cw-chat-input::placeholder {
    color: #6b7280;
}

.cw-chat-send {
    border-radius: 999px;
    border: none;
    padding: 6px 12px;
    font-size: 12px;
    font-weight: 500;
    background: linear-gradient(135deg, #22d3ee, #6366f1);
    color: #020617;
    cursor: pointer;
}

.cw-chat-send:disabled {
    opacity: 0.5;
    cursor: default;
}
"#;
