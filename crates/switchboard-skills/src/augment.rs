//! Registry augmentation and the completion call shared by the generating skills.
//!
//! A plan can name a prompt connector (`mcp_prompt`, with optional `prompt_args`)
//! whose text replaces the skill's system prompt, and a tool connector (`mcp_tool`,
//! with optional `tool_args`) whose output is appended to the task prompt. Both
//! receive the current `user_message` as an argument. Any connector failure falls
//! back to the skill's default behavior.

use switchboard_core::{Action, AgentResponse, ChatMessage, Params, Plan, Result, SwitchboardError};
use switchboard_llm::{CompletionRequest, LlmProvider};
use switchboard_mcp::ConnectorRegistry;
use tracing::{debug, warn};

/// Prefix placed before tool output in a task prompt.
pub const TOOL_CONTEXT_HEADER: &str = "\nExternal tool context:\n";

/// Arguments for a connector call: the plan's object param, with `user_message`
/// set to the current turn.
fn connector_arguments(plan: &Plan, key: &str, user_message: &str) -> Params {
    let mut arguments = plan.object_param(key);
    arguments.insert("user_message".into(), user_message.into());
    arguments
}

fn log_connector_failure(kind: &str, alias: &str, error: &SwitchboardError) {
    if matches!(error, SwitchboardError::ConnectorNotFound { .. }) {
        debug!(kind, alias, "connector alias not registered, using default");
    } else {
        warn!(kind, alias, error = %error, "connector call failed, using default");
    }
}

/// System prompt from the plan's `mcp_prompt` connector, or `default`.
pub async fn resolve_system_prompt(
    registry: Option<&ConnectorRegistry>,
    plan: &Plan,
    user_message: &str,
    default: &str,
) -> String {
    let (Some(registry), Some(alias)) = (registry, plan.str_param("mcp_prompt")) else {
        return default.to_string();
    };

    let arguments = connector_arguments(plan, "prompt_args", user_message);
    match registry.get_prompt(alias, Some(arguments)).await {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            debug!(alias, "prompt connector returned blank text, using default");
            default.to_string()
        }
        Err(e) => {
            log_connector_failure("prompt", alias, &e);
            default.to_string()
        }
    }
}

/// Tool output from the plan's `mcp_tool` connector, formatted as a prompt suffix.
/// Empty when there is no registry, no alias, no output, or the call fails.
pub async fn resolve_tool_context(
    registry: Option<&ConnectorRegistry>,
    plan: &Plan,
    user_message: &str,
) -> String {
    let (Some(registry), Some(alias)) = (registry, plan.str_param("mcp_tool")) else {
        return String::new();
    };

    let arguments = connector_arguments(plan, "tool_args", user_message);
    match registry.call_tool(alias, Some(arguments)).await {
        Ok(text) if !text.trim().is_empty() => format!("{TOOL_CONTEXT_HEADER}{}", text.trim()),
        Ok(_) => String::new(),
        Err(e) => {
            log_connector_failure("tool", alias, &e);
            String::new()
        }
    }
}

/// Send `[system, ...history, prompt]` and wrap the trimmed reply.
pub async fn generate(
    llm: &dyn LlmProvider,
    system_prompt: String,
    history: &[ChatMessage],
    prompt: String,
    temperature: f64,
    action: Action,
) -> Result<AgentResponse> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(system_prompt));
    messages.extend_from_slice(history);
    messages.push(ChatMessage::user(prompt));

    let request = CompletionRequest::new(messages, temperature);
    let content = llm.complete(&request).await?;
    let content = content.trim();
    if content.is_empty() {
        return Err(SwitchboardError::EmptyCompletion {
            provider: llm.name().to_string(),
        });
    }
    Ok(AgentResponse::new(content, action))
}
