use switchboard_core::{Action, AgentResponse, ChatMessage, Plan, Result};
use switchboard_skills::{ClarifySkill, JokeSkill, RecipeSkill, Skill};
use tracing::debug;

/// The skill a plan resolved to, borrowed from its [`Dispatcher`].
#[derive(Clone, Copy)]
pub enum SelectedSkill<'a> {
    Clarify(&'a ClarifySkill),
    Joke(&'a JokeSkill),
    Recipe(&'a RecipeSkill),
}

impl SelectedSkill<'_> {
    pub fn action(&self) -> Action {
        match self {
            SelectedSkill::Clarify(skill) => skill.action(),
            SelectedSkill::Joke(skill) => skill.action(),
            SelectedSkill::Recipe(skill) => skill.action(),
        }
    }

    pub async fn run(
        &self,
        plan: &Plan,
        history: &[ChatMessage],
        user_message: &str,
    ) -> Result<AgentResponse> {
        match self {
            SelectedSkill::Clarify(skill) => skill.run(plan, history, user_message).await,
            SelectedSkill::Joke(skill) => skill.run(plan, history, user_message).await,
            SelectedSkill::Recipe(skill) => skill.run(plan, history, user_message).await,
        }
    }
}

/// Owns one instance of each skill and maps plan actions onto them.
pub struct Dispatcher {
    clarify: ClarifySkill,
    joke: JokeSkill,
    recipe: RecipeSkill,
}

impl Dispatcher {
    pub fn new(clarify: ClarifySkill, joke: JokeSkill, recipe: RecipeSkill) -> Self {
        Self {
            clarify,
            joke,
            recipe,
        }
    }

    pub fn select(&self, action: Action) -> SelectedSkill<'_> {
        match action {
            Action::Joke => SelectedSkill::Joke(&self.joke),
            Action::Recipe => SelectedSkill::Recipe(&self.recipe),
            Action::Clarify => SelectedSkill::Clarify(&self.clarify),
        }
    }

    /// Run the skill selected by `plan.action`. No retries.
    pub async fn dispatch(
        &self,
        plan: &Plan,
        history: &[ChatMessage],
        user_message: &str,
    ) -> Result<AgentResponse> {
        let skill = self.select(plan.action);
        debug!(action = %skill.action(), "dispatching to skill");
        skill.run(plan, history, user_message).await
    }
}
