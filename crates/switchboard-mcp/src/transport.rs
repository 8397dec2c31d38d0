use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use switchboard_core::{Result, SwitchboardError};
use tracing::debug;

/// Posts a JSON payload and returns the decoded JSON object.
#[async_trait]
pub trait JsonTransport: Send + Sync {
    async fn post_json(&self, url: &str, payload: &Value, timeout: Duration) -> Result<Value>;
}

/// `reqwest`-backed transport.
///
/// Network failures and non-2xx statuses are transport errors; a body that is
/// not a JSON object is a protocol error.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JsonTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, payload: &Value, timeout: Duration) -> Result<Value> {
        debug!(url, "posting MCP request");
        let resp = self
            .client
            .post(url)
            .timeout(timeout)
            .json(payload)
            .send()
            .await
            .map_err(|e| SwitchboardError::McpTransport(format!("{url}: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(SwitchboardError::McpTransport(format!(
                "{url} returned HTTP {status}: {text}"
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| SwitchboardError::McpTransport(format!("{url}: {e}")))?;
        let value: Value = serde_json::from_str(&body).map_err(|e| {
            SwitchboardError::McpProtocol(format!("{url} returned non-JSON body: {e}"))
        })?;
        if !value.is_object() {
            return Err(SwitchboardError::McpProtocol(format!(
                "{url} returned a JSON {} instead of an object",
                json_type_name(&value)
            )));
        }
        Ok(value)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
