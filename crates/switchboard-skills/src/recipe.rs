use async_trait::async_trait;
use std::sync::Arc;
use switchboard_core::{Action, AgentResponse, ChatMessage, Plan, Result};
use switchboard_llm::LlmProvider;
use switchboard_mcp::ConnectorRegistry;
use tracing::debug;

use crate::augment;
use crate::params::render_param;
use crate::skill::Skill;

/// Produces a practical recipe from the plan's `ingredients`, `servings`, and `diet`.
pub struct RecipeSkill {
    llm: Arc<dyn LlmProvider>,
    registry: Option<Arc<ConnectorRegistry>>,
}

impl RecipeSkill {
    pub const DEFAULT_SYSTEM_PROMPT: &'static str = "You are a precise cooking assistant.";
    pub const TEMPERATURE: f64 = 0.4;

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

    pub fn build_prompt(plan: &Plan, tool_context: &str) -> String {
        let ingredients = render_param(plan, "ingredients", "");
        let servings = render_param(plan, "servings", "2");
        let diet = render_param(plan, "diet", "none");
        format!(
            "Create a practical recipe with title, ingredients, and steps. \
             Ingredients preference: {ingredients}. Servings: {servings}. Diet: {diet}. \
             Keep it under 12 steps and include estimated total time.{tool_context}"
        )
    }
}

#[async_trait]
impl Skill for RecipeSkill {
    fn action(&self) -> Action {
        Action::Recipe
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
        debug!(augmented = !tool_context.is_empty(), "generating recipe");

        augment::generate(
            self.llm.as_ref(),
            system_prompt,
            history,
            prompt,
            Self::TEMPERATURE,
            Action::Recipe,
        )
        .await
    }
}
