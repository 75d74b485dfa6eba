//! Widget configuration, resolved once at mount time.

/// Placeholder endpoint; integrators replace it through
/// `window.CHAT_WIDGET_API` or `mountChatWidget(endpoint)`.
pub const DEFAULT_ENDPOINT: &str = "https://your-domain.com/api/chat";

/// Name of the page-global that overrides [`DEFAULT_ENDPOINT`].
pub const GLOBAL_ENDPOINT_KEY: &str = "CHAT_WIDGET_API";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub endpoint: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Explicit endpoint wins over the page-global override, which wins over
    /// [`DEFAULT_ENDPOINT`]. Blank candidates are skipped.
    pub fn resolve(explicit: Option<String>, global_override: Option<String>) -> Self {
        let endpoint = [explicit, global_override]
            .into_iter()
            .flatten()
            .map(|candidate| candidate.trim().to_string())
            .find(|candidate| !candidate.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self { endpoint }
    }

    pub fn uses_default_endpoint(&self) -> bool {
        self.endpoint == DEFAULT_ENDPOINT
    }
}
