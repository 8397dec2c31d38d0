use async_trait::async_trait;
use switchboard_core::{Action, AgentResponse, ChatMessage, Plan, Result};

/// A response-generating behavior selected by the planner.
#[async_trait]
pub trait Skill: Send + Sync {
    /// The action this skill answers for; every response it returns is tagged with it.
    fn action(&self) -> Action;

    async fn run(
        &self,
        plan: &Plan,
        history: &[ChatMessage],
        user_message: &str,
    ) -> Result<AgentResponse>;
}
