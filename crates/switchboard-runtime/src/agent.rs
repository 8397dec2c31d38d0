use std::sync::Arc;
use switchboard_core::{AgentResponse, ChatMessage, Result};
use switchboard_llm::LlmProvider;
use switchboard_mcp::ConnectorRegistry;
use switchboard_skills::{ClarifySkill, JokeSkill, RecipeSkill};
use tracing::info;

use crate::dispatcher::Dispatcher;
use crate::planner::Planner;

/// Plans each turn and hands it to the selected skill.
pub struct ChatAgent {
    planner: Planner,
    dispatcher: Dispatcher,
}

impl ChatAgent {
    pub fn new(planner: Planner, dispatcher: Dispatcher) -> Self {
        Self {
            planner,
            dispatcher,
        }
    }

    /// Wire the standard skills to one provider. The same provider serves the
    /// planner and the skills; `registry` is only consulted by joke and recipe.
    pub fn from_provider(
        llm: Arc<dyn LlmProvider>,
        registry: Option<Arc<ConnectorRegistry>>,
    ) -> Self {
        let mut joke = JokeSkill::new(Arc::clone(&llm));
        let mut recipe = RecipeSkill::new(Arc::clone(&llm));
        if let Some(registry) = registry {
            joke = joke.with_registry(Arc::clone(&registry));
            recipe = recipe.with_registry(registry);
        }
        Self::new(
            Planner::new(llm),
            Dispatcher::new(ClarifySkill::new(), joke, recipe),
        )
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Produce the reply to `user_message`. `history` holds prior turns only.
    pub async fn respond(
        &self,
        history: &[ChatMessage],
        user_message: &str,
    ) -> Result<AgentResponse> {
        let plan = self.planner.plan(history, user_message).await?;
        info!(action = %plan.action, reason = %plan.reason, "routing turn");
        self.dispatcher.dispatch(&plan, history, user_message).await
    }
}
