use async_trait::async_trait;
use std::sync::Arc;
use switchboard_core::{Action, AgentResponse, ChatMessage, Plan, Result};
use switchboard_llm::LlmProvider;
use switchboard_mcp::ConnectorRegistry;
use tracing::debug;

use crate::augment;
use crate::params::render_param;
use crate::skill::Skill;

/// Writes one short joke about the plan's `topic` in the plan's `style`.
pub struct JokeSkill {
    llm: Arc<dyn LlmProvider>,
    registry: Option<Arc<ConnectorRegistry>>,
}

impl JokeSkill {
    pub const DEFAULT_SYSTEM_PROMPT: &'static str = "You are a concise comedian.";
    pub const TEMPERATURE: f64 = 0.8;

    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            llm,
            registry: None,
        }
    }

    pub fn with_registry(mut self, registry: Arc<ConnectorRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Task prompt sent as the final user turn.
    pub fn build_prompt(plan: &Plan, tool_context: &str) -> String {
        let topic = render_param(plan, "topic", "anything");
        let style = render_param(plan, "style", "clean");
        format!(
            "Write one short joke. Topic: {topic}. Style: {style}. Keep it safe for work.{tool_context}"
        )
    }
}

#[async_trait]
impl Skill for JokeSkill {
    fn action(&self) -> Action {
        Action::Joke
    }

    async fn run(
        &self,
        plan: &Plan,
        history: &[ChatMessage],
        user_message: &str,
    ) -> Result<AgentResponse> {
        let registry = self.registry.as_deref();
        let system_prompt = augment::resolve_system_prompt(
            registry,
            plan,
            user_message,
            Self::DEFAULT_SYSTEM_PROMPT,
        )
        .await;
        let tool_context = augment::resolve_tool_context(registry, plan, user_message).await;
        let prompt = Self::build_prompt(plan, &tool_context);
        debug!(augmented = !tool_context.is_empty(), "generating joke");

        augment::generate(
            self.llm.as_ref(),
            system_prompt,
            history,
            prompt,
            Self::TEMPERATURE,
            Action::Joke,
        )
        .await
    }
}
