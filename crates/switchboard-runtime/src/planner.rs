use regex::Regex;
use serde_json::{Map, Value};
use std::sync::{Arc, LazyLock};
use switchboard_core::{Action, ChatMessage, Params, Plan, Result};
use switchboard_llm::{CompletionRequest, LlmProvider};
use tracing::{debug, warn};

/// Instruction sent as the first message of every planning request.
pub const PLANNER_SYSTEM_PROMPT: &str = r#"You are a routing planner for a chatbot.
Pick exactly one action from: clarify, joke, recipe.
Return strict JSON with this shape:
{
  "action": "clarify|joke|recipe",
  "reason": "short reason",
  "params": {"any": "json object"},
  "clarifying_question": "string or null"
}
Rules:
- choose clarify if the user request is ambiguous.
- choose joke for joke/comedy requests.
- choose recipe for food/meal/cooking requests.
- do not include markdown or extra prose.
"#;

pub const FALLBACK_REASON: &str = "Planner output was not valid JSON";
pub const FALLBACK_QUESTION: &str = "Could you clarify whether you want a joke or a recipe?";
pub const DEFAULT_REASON: &str = "No reason provided";

/// Greedy: first `{` through last `}`, across newlines.
static JSON_OBJECT_SPAN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").ok());

/// Turns a user message into a [`Plan`] by asking the LLM to classify it.
pub struct Planner {
    llm: Arc<dyn LlmProvider>,
}

impl Planner {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self { llm }
    }

    /// Plan the next turn. Fails only when the completion service fails;
    /// unusable output becomes a clarify plan.
    pub async fn plan(&self, history: &[ChatMessage], user_message: &str) -> Result<Plan> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage::system(PLANNER_SYSTEM_PROMPT));
        messages.extend_from_slice(history);
        messages.push(ChatMessage::user(user_message));

        let raw = self.llm.complete(&CompletionRequest::new(messages, 0.0)).await?;
        let plan = parse_plan(&raw);
        debug!(action = %plan.action, reason = %plan.reason, "planned turn");
        Ok(plan)
    }
}

/// Build a plan from raw planner output, falling back to a clarify plan when no
/// JSON object can be recovered.
pub fn parse_plan(raw: &str) -> Plan {
    match extract_json_object(raw) {
        Some(object) => coerce_plan(object),
        None => {
            warn!(output_len = raw.len(), "planner output was not valid JSON, asking to clarify");
            Plan::new(Action::Clarify, FALLBACK_REASON).with_clarifying_question(FALLBACK_QUESTION)
        }
    }
}

/// Best-effort recovery of a JSON object from model output.
///
/// Tries the whole trimmed text first, then the widest `{ ... }` span. This
/// handles prose or code fences around a single object, but not output that
/// contains several separate objects, since the span would cover all of them.
fn extract_json_object(raw: &str) -> Option<Map<String, Value>> {
    let raw = raw.trim();
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return as_object(value);
    }

    let span = JSON_OBJECT_SPAN.as_ref()?.find(raw)?;
    serde_json::from_str::<Value>(span.as_str())
        .ok()
        .and_then(as_object)
}

fn as_object(value: Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

fn coerce_plan(mut object: Map<String, Value>) -> Plan {
    let action = object
        .get("action")
        .and_then(Value::as_str)
        .and_then(|name| Action::from_name(&name.trim().to_lowercase()))
        .unwrap_or(Action::Clarify);

    let reason = object
        .get("reason")
        .and_then(text_of)
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| DEFAULT_REASON.to_string());

    let params = match object.remove("params") {
        Some(Value::Object(map)) => map,
        _ => Params::new(),
    };

    let clarifying_question = object
        .get("clarifying_question")
        .and_then(text_of)
        .filter(|q| !q.is_empty());

    Plan {
        action,
        reason,
        params,
        clarifying_question,
    }
}

/// Trimmed text of a JSON value; `null` has none.
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.trim().to_string()),
        other => Some(other.to_string()),
    }
}
