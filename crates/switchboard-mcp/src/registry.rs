use std::collections::HashMap;
use switchboard_core::{ConnectorKind, Params, Result, SwitchboardError};
use tracing::debug;

use crate::connector::{McpPromptConnector, McpToolConnector};

/// Alias-keyed directory of tool and prompt connectors.
///
/// Tools and prompts are separate namespaces: the same alias may name one of
/// each. Built once at startup, then shared read-only behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct ConnectorRegistry {
    tools: HashMap<String, McpToolConnector>,
    prompts: HashMap<String, McpPromptConnector>,
}

impl ConnectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool connector. Re-registering an alias replaces it.
    pub fn register_tool(&mut self, alias: impl Into<String>, connector: McpToolConnector) {
        let alias = alias.into();
        if self.tools.insert(alias.clone(), connector).is_some() {
            debug!(alias = %alias, "replaced MCP tool connector");
        }
    }

    /// Register a prompt connector. Re-registering an alias replaces it.
    pub fn register_prompt(&mut self, alias: impl Into<String>, connector: McpPromptConnector) {
        let alias = alias.into();
        if self.prompts.insert(alias.clone(), connector).is_some() {
            debug!(alias = %alias, "replaced MCP prompt connector");
        }
    }

    pub async fn call_tool(&self, alias: &str, arguments: Option<Params>) -> Result<String> {
        let connector = self
            .tools
            .get(alias)
            .ok_or_else(|| SwitchboardError::ConnectorNotFound {
                kind: ConnectorKind::Tool,
                alias: alias.to_string(),
            })?;
        connector.run(arguments).await
    }

    pub async fn get_prompt(&self, alias: &str, arguments: Option<Params>) -> Result<String> {
        let connector = self
            .prompts
            .get(alias)
            .ok_or_else(|| SwitchboardError::ConnectorNotFound {
                kind: ConnectorKind::Prompt,
                alias: alias.to_string(),
            })?;
        connector.resolve(arguments).await
    }

    pub fn tool(&self, alias: &str) -> Option<&McpToolConnector> {
        self.tools.get(alias)
    }

    pub fn prompt(&self, alias: &str) -> Option<&McpPromptConnector> {
        self.prompts.get(alias)
    }

    /// Registered tool aliases, sorted.
    pub fn tool_aliases(&self) -> Vec<&str> {
        let mut aliases: Vec<_> = self.tools.keys().map(String::as_str).collect();
        aliases.sort_unstable();
        aliases
    }

    /// Registered prompt aliases, sorted.
    pub fn prompt_aliases(&self) -> Vec<&str> {
        let mut aliases: Vec<_> = self.prompts.keys().map(String::as_str).collect();
        aliases.sort_unstable();
        aliases
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty() && self.prompts.is_empty()
    }
}
