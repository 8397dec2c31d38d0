use async_trait::async_trait;
use std::time::Duration;
use switchboard_core::{Result, SwitchboardError};
use tracing::debug;

use crate::provider::*;

/// OpenAI-compatible chat completions provider (works with OpenAI, Azure, vLLM, etc.)
pub struct OpenAiProvider {
    client: reqwest::Client,
    timeout: Duration,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";

    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout: DEFAULT_TIMEOUT,
            api_key: api_key.into(),
            model: model.into(),
            base_url: Self::DEFAULT_BASE_URL.into(),
        }
    }

    /// Use a custom base URL (for Azure, Together, vLLM, etc.)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        let messages: Vec<serde_json::Value> = request
            .messages
            .iter()
            .map(|m| {
                serde_json::json!({
                    "role": m.role.as_str(),
                    "content": m.content,
                })
            })
            .collect();

        serde_json::json!({
            "model": &self.model,
            "temperature": request.temperature,
            "messages": messages,
        })
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "OpenAI"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = self.build_request_body(request);
        debug!(model = %self.model, messages = request.messages.len(), "sending OpenAI request");

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .timeout(self.timeout)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| SwitchboardError::LlmProvider(e.to_string()))?;
        let resp = check_status(resp).await?;

        let data: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| SwitchboardError::LlmProvider(e.to_string()))?;

        let content = data["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("")
            .to_string();

        require_text(self.name(), content)
    }
}
