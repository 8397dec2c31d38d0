use serde::{Deserialize, Serialize};

use crate::plan::Action;

/// Final reply to a user turn, tagged with the skill that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub content: String,
    pub action: Action,
}

impl AgentResponse {
    pub fn new(content: impl Into<String>, action: Action) -> Self {
        Self {
            content: content.into(),
            action,
        }
    }
}
