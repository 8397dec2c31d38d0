use async_trait::async_trait;
use switchboard_core::{Action, AgentResponse, ChatMessage, Plan, Result};

use crate::skill::Skill;

/// Asks the user a follow-up question. Never calls the completion service.
#[derive(Debug, Clone)]
pub struct ClarifySkill {
    default_question: String,
}

impl ClarifySkill {
    pub const DEFAULT_QUESTION: &'static str =
        "Could you clarify what you want: a joke or a food recipe?";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_question(mut self, question: impl Into<String>) -> Self {
        self.default_question = question.into();
        self
    }

    pub fn default_question(&self) -> &str {
        &self.default_question
    }

    /// The plan's question, verbatim, when it has a non-empty one; otherwise the default.
    pub fn question_for<'a>(&'a self, plan: &'a Plan) -> &'a str {
        plan.clarifying_question
            .as_deref()
            .filter(|q| !q.is_empty())
            .unwrap_or(&self.default_question)
    }
}

impl Default for ClarifySkill {
    fn default() -> Self {
        Self {
            default_question: Self::DEFAULT_QUESTION.into(),
        }
    }
}

#[async_trait]
impl Skill for ClarifySkill {
    fn action(&self) -> Action {
        Action::Clarify
    }

    async fn run(
        &self,
        plan: &Plan,
        _history: &[ChatMessage],
        _user_message: &str,
    ) -> Result<AgentResponse> {
        Ok(AgentResponse::new(self.question_for(plan), Action::Clarify))
    }
}
