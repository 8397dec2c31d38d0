use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use switchboard_core::{Result, Role, SwitchboardError};
use tracing::debug;

use crate::provider::*;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic Messages API provider.
///
/// System messages are folded into the top-level `system` field; every other
/// turn is flattened into a single `role: content` user message.
pub struct AnthropicProvider {
    client: Client,
    timeout: Duration,
    api_key: String,
    model: String,
    base_url: String,
    max_tokens: u32,
}

impl AnthropicProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.anthropic.com/v1";

    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            timeout: DEFAULT_TIMEOUT,
            api_key: api_key.into(),
            model: model.into(),
            base_url: Self::DEFAULT_BASE_URL.into(),
            max_tokens: 512,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        let system: Vec<&str> = request
            .messages
            .iter()
            .filter(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
            .collect();
        let conversation: Vec<String> = request
            .messages
            .iter()
            .filter(|m| m.role != Role::System)
            .map(|m| m.as_transcript_line())
            .collect();

        let mut body = serde_json::json!({
            "model": &self.model,
            "max_tokens": self.max_tokens,
            "temperature": request.temperature,
            "messages": [{
                "role": "user",
                "content": conversation.join("\n"),
            }],
        });
        if !system.is_empty() {
            body["system"] = serde_json::json!(system.join("\n"));
        }
        body
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "Anthropic"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = self.build_request_body(request);
        debug!(model = %self.model, "sending Anthropic API request");

        let resp = self
            .client
            .post(format!("{}/messages", self.base_url))
            .timeout(self.timeout)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| SwitchboardError::LlmProvider(e.to_string()))?;
        let resp = check_status(resp).await?;

        let data: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| SwitchboardError::LlmProvider(e.to_string()))?;

        let content_text = data["content"]
            .as_array()
            .map(|blocks| {
                blocks
                    .iter()
                    .filter(|b| b["type"] == "text")
                    .filter_map(|b| b["text"].as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        require_text(self.name(), content_text.trim().to_string())
    }
}
