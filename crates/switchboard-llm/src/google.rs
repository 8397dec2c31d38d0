use async_trait::async_trait;
use std::time::Duration;
use switchboard_core::{Result, SwitchboardError};
use tracing::debug;

use crate::provider::*;

/// Google Gemini `generateContent` provider. The conversation is sent as a
/// single prompt of `role: content` lines.
pub struct GeminiProvider {
    client: reqwest::Client,
    timeout: Duration,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";

    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout: DEFAULT_TIMEOUT,
            api_key: api_key.into(),
            model: model.into(),
            base_url: Self::DEFAULT_BASE_URL.into(),
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
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "Google"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let prompt = request
            .messages
            .iter()
            .map(|m| m.as_transcript_line())
            .collect::<Vec<_>>()
            .join("\n");
        let body = serde_json::json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": { "temperature": request.temperature },
        });
        debug!(model = %self.model, "sending Gemini request");

        let resp = self
            .client
            .post(format!("{}/models/{}:generateContent", self.base_url, self.model))
            .timeout(self.timeout)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| SwitchboardError::LlmProvider(e.to_string()))?;
        let resp = check_status(resp).await?;

        let data: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| SwitchboardError::LlmProvider(e.to_string()))?;

        let text = data["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|p| p["text"].as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        require_text(self.name(), text.trim().to_string())
    }
}
