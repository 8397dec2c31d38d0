use serde_json::Value;
use switchboard_core::Plan;

/// Render a plan param for interpolation into a task prompt.
///
/// Strings are trimmed, numbers and booleans are displayed as-is, and a list of
/// scalars is joined with `", "`. Anything else is JSON-encoded. A missing, null,
/// or blank value renders as `default`.
pub fn render_param(plan: &Plan, key: &str, default: &str) -> String {
    let rendered = match plan.param(key) {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) if items.iter().all(is_scalar) => Some(
            items
                .iter()
                .filter_map(scalar_text)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Some(value) => scalar_text(value).or_else(|| Some(value.to_string())),
    };
    rendered
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
