use async_trait::async_trait;
use switchboard_core::{ChatMessage, Result, SwitchboardError};

/// A request to the completion service.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Conversation, system instruction first.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature. The planner uses 0 to keep the JSON format stable.
    pub temperature: f64,
}

impl CompletionRequest {
    pub fn new(messages: Vec<ChatMessage>, temperature: f64) -> Self {
        Self {
            messages,
            temperature,
        }
    }

    /// Text of the last message, if any.
    pub fn last_content(&self) -> Option<&str> {
        self.messages.last().map(|m| m.content.as_str())
    }
}

/// Trait implemented by each completion provider (OpenAI, Anthropic, Gemini, mock).
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Human-readable name, e.g. "OpenAI".
    fn name(&self) -> &str;

    /// The model this provider sends requests to.
    fn model(&self) -> &str;

    /// Return one completed reply, or fail if the provider produced no usable text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

/// Reject blank completions with `EmptyCompletion`.
pub(crate) fn require_text(provider: &str, text: String) -> Result<String> {
    if text.trim().is_empty() {
        return Err(SwitchboardError::EmptyCompletion {
            provider: provider.to_string(),
        });
    }
    Ok(text)
}

/// Per-request timeout used until a provider is given its own.
pub(crate) const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

/// Map a non-2xx response to an `LlmProvider` error carrying status and body.
pub(crate) async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
    if !resp.status().is_success() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        return Err(SwitchboardError::LlmProvider(format!("HTTP {status}: {text}")));
    }
    Ok(resp)
}
