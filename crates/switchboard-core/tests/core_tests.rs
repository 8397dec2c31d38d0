#[cfg(test)]
mod tests {
    use serde_json::json;
    use switchboard_core::*;

    // ── Message tests ──────────────────────────────────────────

    #[test]
    fn test_message_constructors() {
        assert_eq!(ChatMessage::system("s").role, Role::System);
        assert_eq!(ChatMessage::user("u").role, Role::User);
        let msg = ChatMessage::assistant("hello");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, "hello");
    }

    #[test]
    fn test_transcript_line() {
        let msg = ChatMessage::user("what's for dinner?");
        assert_eq!(msg.as_transcript_line(), "user: what's for dinner?");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
        let restored: Role = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(restored, Role::System);
    }

    // ── Plan tests ─────────────────────────────────────────────

    #[test]
    fn test_action_from_name_is_exact() {
        assert_eq!(Action::from_name("joke"), Some(Action::Joke));
        assert_eq!(Action::from_name("recipe"), Some(Action::Recipe));
        assert_eq!(Action::from_name("Joke"), None);
        assert_eq!(Action::from_name("dance"), None);
    }

    #[test]
    fn test_plan_defaults() {
        let plan = Plan::new(Action::Clarify, "ambiguous");
        assert!(plan.params.is_empty());
        assert!(plan.clarifying_question.is_none());
    }

    #[test]
    fn test_plan_str_param_trims_and_skips_blank() {
        let plan = Plan::new(Action::Joke, "r")
            .with_param("topic", "  cats ")
            .with_param("style", "   ")
            .with_param("count", 3);
        assert_eq!(plan.str_param("topic"), Some("cats"));
        assert_eq!(plan.str_param("style"), None);
        assert_eq!(plan.str_param("count"), None);
        assert_eq!(plan.str_param("missing"), None);
    }

    #[test]
    fn test_plan_object_param_coerces_non_objects() {
        let plan = Plan::new(Action::Recipe, "r")
            .with_param("tool_args", json!({"region": "us"}))
            .with_param("prompt_args", json!([1, 2]));
        assert_eq!(plan.object_param("tool_args")["region"], "us");
        assert!(plan.object_param("prompt_args").is_empty());
        assert!(plan.object_param("absent").is_empty());
    }

    #[test]
    fn test_plan_deserialize_without_optional_fields() {
        let plan: Plan = serde_json::from_str(r#"{"action":"joke","reason":"r"}"#).unwrap();
        assert_eq!(plan.action, Action::Joke);
        assert!(plan.params.is_empty());
        assert!(plan.clarifying_question.is_none());
    }

    // ── Error tests ────────────────────────────────────────────

    #[test]
    fn test_connector_not_found_display() {
        let err = SwitchboardError::ConnectorNotFound {
            kind: ConnectorKind::Prompt,
            alias: "comedy".into(),
        };
        assert_eq!(err.to_string(), "MCP prompt connector not found: comedy");
    }

    #[test]
    fn test_completion_error_display() {
        let err = SwitchboardError::EmptyCompletion { provider: "OpenAI".into() };
        assert_eq!(err.to_string(), "OpenAI response returned empty content");
        let err = SwitchboardError::LlmProvider("HTTP 500".into());
        assert_eq!(err.to_string(), "llm provider error: HTTP 500");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SwitchboardError = io.into();
        assert!(err.to_string().contains("gone"));
    }
}
