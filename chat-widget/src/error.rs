use thiserror::Error;

/// Failures inside the widget. None of these reach the host page: reply
/// failures become a bot message, mount failures are logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to parse JSON: {0}")]
    Decode(String),

    #[error("Mount failed: {0}")]
    Mount(String),
}

impl WidgetError {
    pub(crate) fn mount(context: &str, err: impl std::fmt::Debug) -> Self {
        Self::Mount(format!("{context}: {err:?}"))
    }
}
