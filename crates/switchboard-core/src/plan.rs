use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form parameters attached to a plan by the planner.
pub type Params = serde_json::Map<String, Value>;

/// The skill a plan routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Clarify,
    Joke,
    Recipe,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Clarify, Action::Joke, Action::Recipe];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Clarify => "clarify",
            Action::Joke => "joke",
            Action::Recipe => "recipe",
        }
    }

    /// Exact, case-sensitive match against the wire names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == name)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The planner's routing decision for one user turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub action: Action,
    pub reason: String,
    #[serde(default)]
    pub params: Params,
    #[serde(default)]
    pub clarifying_question: Option<String>,
}

impl Plan {
    pub fn new(action: Action, reason: impl Into<String>) -> Self {
        Self {
            action,
            reason: reason.into(),
            params: Params::new(),
            clarifying_question: None,
        }
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_clarifying_question(mut self, question: impl Into<String>) -> Self {
        self.clarifying_question = Some(question.into());
        self
    }

    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// A param as a trimmed, non-empty string.
    pub fn str_param(&self, key: &str) -> Option<&str> {
        self.param(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// A param that must be a JSON object; any other shape reads as empty.
    pub fn object_param(&self, key: &str) -> Params {
        match self.param(key) {
            Some(Value::Object(map)) => map.clone(),
            _ => Params::new(),
        }
    }
}
