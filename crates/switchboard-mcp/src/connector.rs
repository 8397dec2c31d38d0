use std::sync::Arc;
use switchboard_core::{Params, Result, SwitchboardError};

use crate::client::McpClient;

/// Overlay `arguments` on `defaults`; caller keys win.
pub fn merge_arguments(defaults: &Params, arguments: Option<Params>) -> Params {
    let mut merged = defaults.clone();
    if let Some(arguments) = arguments {
        merged.extend(arguments);
    }
    merged
}

fn validate(server: &str, name: &str, what: &str) -> Result<()> {
    if server.trim().is_empty() {
        return Err(SwitchboardError::ConfigValidation {
            field: format!("{what} '{name}'.server"),
            reason: "server address must not be empty".into(),
        });
    }
    if name.trim().is_empty() {
        return Err(SwitchboardError::ConfigValidation {
            field: format!("{what}.name"),
            reason: "name must not be empty".into(),
        });
    }
    Ok(())
}

/// A bound reference to one named tool on one MCP server.
#[derive(Clone)]
pub struct McpToolConnector {
    client: Arc<dyn McpClient>,
    server: String,
    tool_name: String,
    default_arguments: Params,
}

impl McpToolConnector {
    /// Fails fast on an empty server address or tool name.
    pub fn new(
        client: Arc<dyn McpClient>,
        server: impl Into<String>,
        tool_name: impl Into<String>,
        default_arguments: Params,
    ) -> Result<Self> {
        let server = server.into();
        let tool_name = tool_name.into();
        validate(&server, &tool_name, "tool")?;
        Ok(Self {
            client,
            server,
            tool_name,
            default_arguments,
        })
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn default_arguments(&self) -> &Params {
        &self.default_arguments
    }

    pub async fn run(&self, arguments: Option<Params>) -> Result<String> {
        let merged = merge_arguments(&self.default_arguments, arguments);
        self.client
            .call_tool(&self.server, &self.tool_name, merged)
            .await
    }
}

impl std::fmt::Debug for McpToolConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpToolConnector")
            .field("server", &self.server)
            .field("tool_name", &self.tool_name)
            .field("default_arguments", &self.default_arguments)
            .finish()
    }
}

/// A bound reference to one named prompt template on one MCP server.
#[derive(Clone)]
pub struct McpPromptConnector {
    client: Arc<dyn McpClient>,
    server: String,
    prompt_name: String,
    default_arguments: Params,
}

impl McpPromptConnector {
    /// Fails fast on an empty server address or prompt name.
    pub fn new(
        client: Arc<dyn McpClient>,
        server: impl Into<String>,
        prompt_name: impl Into<String>,
        default_arguments: Params,
    ) -> Result<Self> {
        let server = server.into();
        let prompt_name = prompt_name.into();
        validate(&server, &prompt_name, "prompt")?;
        Ok(Self {
            client,
            server,
            prompt_name,
            default_arguments,
        })
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn prompt_name(&self) -> &str {
        &self.prompt_name
    }

    pub fn default_arguments(&self) -> &Params {
        &self.default_arguments
    }

    pub async fn resolve(&self, arguments: Option<Params>) -> Result<String> {
        let merged = merge_arguments(&self.default_arguments, arguments);
        self.client
            .get_prompt(&self.server, &self.prompt_name, merged)
            .await
    }
}

impl std::fmt::Debug for McpPromptConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpPromptConnector")
            .field("server", &self.server)
            .field("prompt_name", &self.prompt_name)
            .field("default_arguments", &self.default_arguments)
            .finish()
    }
}
