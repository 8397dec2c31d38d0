use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use switchboard_core::{Params, Result, SwitchboardError};
use tracing::debug;

use crate::transport::{JsonTransport, ReqwestTransport};

/// Calls tools and fetches prompts on an MCP-style server.
#[async_trait]
pub trait McpClient: Send + Sync {
    async fn call_tool(&self, server: &str, tool_name: &str, arguments: Params) -> Result<String>;

    async fn get_prompt(&self, server: &str, prompt_name: &str, arguments: Params)
    -> Result<String>;
}

/// HTTP+JSON client: `POST {server}/tools/call` and `POST {server}/prompts/get`.
pub struct HttpMcpClient {
    transport: Arc<dyn JsonTransport>,
    timeout: Duration,
}

impl Default for HttpMcpClient {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestTransport::new()))
    }
}

impl HttpMcpClient {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(transport: Arc<dyn JsonTransport>) -> Self {
        Self {
            transport,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn post(&self, server: &str, path: &str, payload: Value, primary: &str) -> Result<String> {
        let url = endpoint(server, path)?;
        let response = self.transport.post_json(&url, &payload, self.timeout).await?;
        extract_text(&response, primary)
    }
}

#[async_trait]
impl McpClient for HttpMcpClient {
    async fn call_tool(&self, server: &str, tool_name: &str, arguments: Params) -> Result<String> {
        debug!(server, tool = tool_name, "calling MCP tool");
        let payload = json!({ "tool_name": tool_name, "arguments": arguments });
        self.post(server, "tools/call", payload, "result").await
    }

    async fn get_prompt(
        &self,
        server: &str,
        prompt_name: &str,
        arguments: Params,
    ) -> Result<String> {
        debug!(server, prompt = prompt_name, "fetching MCP prompt");
        let payload = json!({ "prompt_name": prompt_name, "arguments": arguments });
        self.post(server, "prompts/get", payload, "prompt").await
    }
}

/// Join a server address and an endpoint path. The address is trimmed and
/// trailing slashes are dropped; an empty address is a configuration error.
pub fn endpoint(server: &str, path: &str) -> Result<String> {
    let base = server.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(SwitchboardError::Config(
            "MCP server address must not be empty".into(),
        ));
    }
    Ok(format!("{base}/{path}"))
}

/// Pull the textual result out of a server response.
///
/// Order: a truthy `error` fails the call; then the primary field (`result` or
/// `prompt`) if it is a non-blank string; then the `text` of each `content` item
/// joined by newlines.
pub fn extract_text(response: &Value, primary: &str) -> Result<String> {
    if let Some(error) = response.get("error").filter(|e| is_truthy(e)) {
        let detail = match error {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(SwitchboardError::McpRemote(detail));
    }

    if let Some(text) = response
        .get(primary)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        return Ok(text.to_string());
    }

    if let Some(items) = response.get("content").and_then(Value::as_array) {
        let joined = items
            .iter()
            .filter_map(|item| item.as_object())
            .filter_map(|item| item.get("text").and_then(Value::as_str))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        if !joined.is_empty() {
            return Ok(joined);
        }
    }

    Err(SwitchboardError::McpProtocol(format!(
        "MCP response is missing textual content (expected '{primary}' or 'content')"
    )))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
