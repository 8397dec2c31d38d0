use std::sync::Arc;
use std::time::Duration;
use switchboard_config::{LlmConfig, McpConfig, SwitchboardConfig};
use switchboard_core::Result;
use switchboard_llm::{ProviderKind, ProviderSettings, build_provider};
use switchboard_mcp::{
    ConnectorRegistry, HttpMcpClient, McpClient, McpPromptConnector, McpToolConnector,
};
use tracing::info;

use crate::agent::ChatAgent;

/// Map the `[llm]` section onto factory settings.
pub fn provider_settings(config: &LlmConfig) -> ProviderSettings {
    let mut settings = ProviderSettings::new(ProviderKind::from_name_or_default(&config.provider));
    settings.model = config.model.clone();
    settings.api_key = config.api_key.clone().filter(|k| !k.trim().is_empty());
    settings.base_url = config.base_url.clone();
    settings.timeout = Duration::from_secs(config.timeout_secs);
    settings.max_tokens = config.max_tokens;
    settings
}

/// Register every configured connector against `client`.
pub fn build_registry(config: &McpConfig, client: Arc<dyn McpClient>) -> Result<ConnectorRegistry> {
    let mut registry = ConnectorRegistry::new();
    for (alias, tool) in &config.tools {
        let connector = McpToolConnector::new(
            Arc::clone(&client),
            tool.server.clone(),
            tool.name.clone(),
            tool.default_arguments.clone(),
        )?;
        registry.register_tool(alias.clone(), connector);
    }
    for (alias, prompt) in &config.prompts {
        let connector = McpPromptConnector::new(
            Arc::clone(&client),
            prompt.server.clone(),
            prompt.name.clone(),
            prompt.default_arguments.clone(),
        )?;
        registry.register_prompt(alias.clone(), connector);
    }
    Ok(registry)
}

/// Build a ready-to-use agent from a validated configuration.
pub fn build_agent(config: &SwitchboardConfig) -> Result<ChatAgent> {
    let settings = provider_settings(&config.llm);
    let llm = build_provider(&settings)?;

    let client: Arc<dyn McpClient> = Arc::new(
        HttpMcpClient::default().with_timeout(Duration::from_secs(config.mcp.timeout_secs)),
    );
    let registry = build_registry(&config.mcp, client)?;
    info!(
        provider = llm.name(),
        model = llm.model(),
        tools = registry.tool_aliases().len(),
        prompts = registry.prompt_aliases().len(),
        "agent ready"
    );

    let registry = (!registry.is_empty()).then(|| Arc::new(registry));
    Ok(ChatAgent::from_provider(llm, registry))
}
