#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use std::sync::Arc;
    use switchboard_config::{ConnectorConfig, SwitchboardConfig};
    use switchboard_core::*;
    use switchboard_llm::{MockProvider, ProviderKind};
    use switchboard_mcp::{HttpMcpClient, McpClient};
    use switchboard_runtime::*;

    fn agent_with(llm: &Arc<MockProvider>) -> ChatAgent {
        ChatAgent::from_provider(llm.clone(), None)
    }

    // ── Planner ────────────────────────────────────────────────

    #[tokio::test]
    async fn test_plan_parses_valid_json() {
        let llm = Arc::new(MockProvider::new("mock").with_response(
            r#"{"action":"joke","reason":"user asked for one","params":{"topic":"cats","style":"dry"},"clarifying_question":null}"#,
        ));
        let planner = Planner::new(llm.clone());
        let history = vec![ChatMessage::user("hi"), ChatMessage::assistant("hello")];

        let plan = planner.plan(&history, "Tell me a joke about cats").await.unwrap();

        assert_eq!(plan.action, Action::Joke);
        assert_eq!(plan.reason, "user asked for one");
        assert_eq!(Value::Object(plan.params.clone()), json!({"topic": "cats", "style": "dry"}));
        assert!(plan.clarifying_question.is_none());

        let request = llm.last_request().unwrap();
        assert_eq!(request.temperature, 0.0);
        assert_eq!(request.messages.len(), 4);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[1], ChatMessage::user("hi"));
        assert_eq!(request.messages[2], ChatMessage::assistant("hello"));
        assert_eq!(request.messages[3], ChatMessage::user("Tell me a joke about cats"));
    }

    #[test]
    fn test_plan_extracts_json_from_wrapped_text() {
        let raw = "Here is my routing decision:\n\
                   {\"action\":\"recipe\",\"reason\":\"food request\",\"params\":{\"ingredients\":\"eggs\"},\"clarifying_question\":\"\"}\n\
                   Thanks";
        let plan = parse_plan(raw);
        assert_eq!(plan.action, Action::Recipe);
        assert_eq!(Value::Object(plan.params.clone()), json!({"ingredients": "eggs"}));
        assert!(plan.clarifying_question.is_none());
    }

    #[test]
    fn test_plan_invalid_json_falls_back_to_clarify() {
        let plan = parse_plan("not json");
        assert_eq!(plan.action, Action::Clarify);
        assert_eq!(plan.reason, "Planner output was not valid JSON");
        assert!(plan.params.is_empty());
        assert!(
            plan.clarifying_question
                .as_deref()
                .unwrap_or_default()
                .contains("joke or a recipe")
        );
    }

    #[test]
    fn test_plan_invalid_action_and_params_are_sanitized() {
        let plan = parse_plan(
            r#"{"action":"unknown","reason":"","params":[1,2,3],"clarifying_question":"   "}"#,
        );
        assert_eq!(plan.action, Action::Clarify);
        assert_eq!(plan.reason, "No reason provided");
        assert!(plan.params.is_empty());
        assert!(plan.clarifying_question.is_none());
    }

    #[test]
    fn test_plan_action_is_normalized() {
        let plan = parse_plan(r#"{"action":"  RECIPE ","reason":"  dinner  "}"#);
        assert_eq!(plan.action, Action::Recipe);
        assert_eq!(plan.reason, "dinner");
        assert!(plan.params.is_empty());
    }

    #[test]
    fn test_plan_missing_or_non_string_fields() {
        let plan = parse_plan(r#"{"action": 3, "reason": null, "clarifying_question": 42}"#);
        assert_eq!(plan.action, Action::Clarify);
        assert_eq!(plan.reason, "No reason provided");
        assert_eq!(plan.clarifying_question.as_deref(), Some("42"));

        let plan = parse_plan("{}");
        assert_eq!(plan.action, Action::Clarify);
        assert_eq!(plan.reason, "No reason provided");
    }

    #[test]
    fn test_plan_top_level_array_falls_back() {
        // Valid JSON that is not an object is not searched for an inner object.
        let plan = parse_plan(r#"[{"action":"joke"}]"#);
        assert_eq!(plan.action, Action::Clarify);
        assert_eq!(plan.reason, "Planner output was not valid JSON");
    }

    #[tokio::test]
    async fn test_planner_propagates_completion_failure() {
        let llm = Arc::new(MockProvider::new("mock").with_error("HTTP 500: boom"));
        let err = Planner::new(llm).plan(&[], "hi").await.unwrap_err();
        assert!(matches!(err, SwitchboardError::LlmProvider(_)));
    }

    // ── Dispatcher / ChatAgent ─────────────────────────────────

    #[tokio::test]
    async fn test_agent_routes_joke_end_to_end() {
        let llm = Arc::new(
            MockProvider::new("mock")
                .with_response(r#"{"action":"joke","reason":"r","params":{"topic":"cats","style":"dry"},"clarifying_question":null}"#)
                .with_response("Why did the cat sit on the computer?"),
        );
        let agent = agent_with(&llm);

        let response = agent.respond(&[], "joke about cats").await.unwrap();

        assert_eq!(response.action, Action::Joke);
        assert_eq!(response.content, "Why did the cat sit on the computer?");
        let requests = llm.recorded_requests();
        let requests = requests.lock();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].temperature, 0.8);
        assert!(requests[1].last_content().unwrap().contains("Topic: cats. Style: dry."));
    }

    #[tokio::test]
    async fn test_agent_routes_recipe() {
        let llm = Arc::new(
            MockProvider::new("mock")
                .with_response(r#"{"action":"recipe","reason":"food","params":{"ingredients":"eggs"}}"#)
                .with_response("Omelette"),
        );
        let response = agent_with(&llm).respond(&[], "eggs?").await.unwrap();
        assert_eq!(response, AgentResponse::new("Omelette", Action::Recipe));
        assert_eq!(llm.last_request().unwrap().temperature, 0.4);
    }

    #[tokio::test]
    async fn test_agent_invalid_plan_clarifies_without_second_call() {
        let llm = Arc::new(MockProvider::new("mock").with_response("not json"));
        let response = agent_with(&llm).respond(&[], "Do something").await.unwrap();

        assert_eq!(response.action, Action::Clarify);
        assert_eq!(response.content, "Could you clarify whether you want a joke or a recipe?");
        assert_eq!(llm.request_count(), 1);
    }

    #[tokio::test]
    async fn test_agent_clarify_without_question_uses_default() {
        let llm = Arc::new(
            MockProvider::new("mock").with_response(r#"{"action":"clarify","reason":"vague"}"#),
        );
        let response = agent_with(&llm).respond(&[], "hmm").await.unwrap();
        assert_eq!(response.content, "Could you clarify what you want: a joke or a food recipe?");
        assert_eq!(llm.request_count(), 1);
    }

    #[tokio::test]
    async fn test_agent_propagates_skill_completion_failure() {
        let llm = Arc::new(
            MockProvider::new("mock")
                .with_response(r#"{"action":"joke","reason":"r"}"#)
                .with_error("quota exceeded"),
        );
        let err = agent_with(&llm).respond(&[], "joke").await.unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_dispatcher_selection_is_total() {
        let llm = Arc::new(MockProvider::new("mock"));
        let agent = agent_with(&llm);
        for action in Action::ALL {
            assert_eq!(agent.dispatcher().select(action).action(), action);
        }
    }

    // ── Conversation ───────────────────────────────────────────

    #[tokio::test]
    async fn test_conversation_records_successful_turns() {
        let llm = Arc::new(
            MockProvider::new("mock")
                .with_response(r#"{"action":"joke","reason":"r"}"#)
                .with_response("Joke one")
                .with_response(r#"{"action":"joke","reason":"again"}"#)
                .with_error("down"),
        );
        let agent = agent_with(&llm);
        let mut conversation = Conversation::new();

        conversation.send(&agent, "tell a joke").await.unwrap();
        assert_eq!(
            conversation.history(),
            &[ChatMessage::user("tell a joke"), ChatMessage::assistant("Joke one")]
        );

        assert!(conversation.send(&agent, "another").await.is_err());
        assert_eq!(conversation.len(), 2);

        // The second planning request carried the first exchange as history.
        let requests = llm.recorded_requests();
        let requests = requests.lock();
        let planning = &requests[2];
        assert_eq!(planning.messages[1], ChatMessage::user("tell a joke"));
        assert_eq!(planning.messages[2], ChatMessage::assistant("Joke one"));

        conversation.clear();
        assert!(conversation.is_empty());
    }

    // ── Builder ────────────────────────────────────────────────

    #[test]
    fn test_provider_settings_from_config() {
        let mut config = SwitchboardConfig::default();
        config.llm.provider = "anthropic".into();
        config.llm.api_key = Some("  ".into());
        config.llm.timeout_secs = 5;

        let settings = provider_settings(&config.llm);
        assert_eq!(settings.kind, ProviderKind::Anthropic);
        assert!(settings.api_key.is_none());
        assert_eq!(settings.timeout.as_secs(), 5);
        assert_eq!(settings.resolved_model(), ProviderKind::Anthropic.default_model());

        config.llm.provider = "unknown".into();
        assert_eq!(provider_settings(&config.llm).kind, ProviderKind::OpenAi);
    }

    #[test]
    fn test_build_registry_from_config() {
        let mut config = SwitchboardConfig::default();
        config.mcp.tools.insert(
            "facts".into(),
            ConnectorConfig {
                server: "http://localhost:9001".into(),
                name: "fact_lookup".into(),
                default_arguments: json!({"region": "eu"}).as_object().cloned().unwrap(),
            },
        );
        config.mcp.prompts.insert(
            "chef".into(),
            ConnectorConfig {
                server: "http://localhost:9002".into(),
                name: "chef_persona".into(),
                ..Default::default()
            },
        );

        let client: Arc<dyn McpClient> = Arc::new(HttpMcpClient::default());
        let registry = build_registry(&config.mcp, client).unwrap();
        assert_eq!(registry.tool_aliases(), vec!["facts"]);
        assert_eq!(registry.prompt_aliases(), vec!["chef"]);
        let tool = registry.tool("facts").unwrap();
        assert_eq!(tool.tool_name(), "fact_lookup");
        assert_eq!(tool.default_arguments()["region"], "eu");
    }

    #[test]
    fn test_build_registry_rejects_empty_server() {
        let mut config = SwitchboardConfig::default();
        config.mcp.prompts.insert(
            "broken".into(),
            ConnectorConfig {
                name: "p".into(),
                ..Default::default()
            },
        );
        let client: Arc<dyn McpClient> = Arc::new(HttpMcpClient::default());
        assert!(build_registry(&config.mcp, client).is_err());
    }

    #[test]
    fn test_build_agent_requires_api_key() {
        let config = SwitchboardConfig::default();
        let err = build_agent(&config).err().unwrap();
        assert!(err.to_string().contains("OPENAI_API_KEY"));

        let mut config = SwitchboardConfig::default();
        config.llm.api_key = Some("sk-test".into());
        assert!(build_agent(&config).is_ok());
    }
}
