#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;
    use switchboard_config::ConfigLoader;
    use switchboard_config::schema::*;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    fn no_env() -> impl Fn(&str) -> Option<String> {
        |_| None
    }

    // ── Default tests ──────────────────────────────────────────

    #[test]
    fn test_llm_config_defaults() {
        let config = LlmConfig::default();
        assert_eq!(config.provider, "openai");
        assert!(config.model.is_none());
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.max_tokens, 512);
    }

    #[test]
    fn test_mcp_and_logging_defaults() {
        let config = SwitchboardConfig::default();
        assert_eq!(config.mcp.timeout_secs, 10);
        assert!(config.mcp.tools.is_empty());
        assert!(config.mcp.prompts.is_empty());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    // ── TOML parsing ───────────────────────────────────────────

    #[test]
    fn test_partial_toml_applies_defaults() {
        let toml_str = r#"
[llm]
provider = "anthropic"
"#;
        let config: SwitchboardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.llm.provider, "anthropic");
        assert_eq!(config.llm.timeout_secs, 60);
        assert_eq!(config.mcp.timeout_secs, 10);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_connector_tables_deserialize() {
        let toml_str = r#"
[mcp]
timeout_secs = 3

[mcp.tools.joke_facts]
server = "http://localhost:9001"
name = "fact_lookup"
default_arguments = { region = "eu", limit = 2 }

[mcp.prompts.comedian]
server = "http://localhost:9002"
name = "comedian_persona"
"#;
        let config: SwitchboardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.mcp.timeout_secs, 3);

        let tool = &config.mcp.tools["joke_facts"];
        assert_eq!(tool.server, "http://localhost:9001");
        assert_eq!(tool.name, "fact_lookup");
        assert_eq!(tool.default_arguments["region"], "eu");
        assert_eq!(tool.default_arguments["limit"], 2);

        let prompt = &config.mcp.prompts["comedian"];
        assert_eq!(prompt.name, "comedian_persona");
        assert!(prompt.default_arguments.is_empty());
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let mut config = SwitchboardConfig::default();
        config.llm.model = Some("gpt-4o".into());
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let restored: SwitchboardConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(restored.llm.model.as_deref(), Some("gpt-4o"));
        assert_eq!(restored.llm.provider, config.llm.provider);
    }

    #[test]
    fn test_redacted_masks_api_key() {
        let mut config = SwitchboardConfig::default();
        config.llm.api_key = Some("sk-secret".into());
        let shown = toml::to_string(&config.redacted()).unwrap();
        assert!(!shown.contains("sk-secret"));
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-secret"));
    }

    // ── Validation ─────────────────────────────────────────────

    #[test]
    fn test_validate_default_only_warns_about_api_key() {
        let warnings = SwitchboardConfig::default().validate().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "llm.api_key");
        assert_eq!(warnings[0].severity, WarningSeverity::Warning);
    }

    #[test]
    fn test_validate_unknown_provider_and_logging_are_warnings() {
        let mut config = SwitchboardConfig::default();
        config.llm.provider = "mistral".into();
        config.logging.level = "loud".into();
        config.logging.format = "xml".into();

        let warnings = config.validate().unwrap();
        let fields: Vec<&str> = warnings.iter().map(|w| w.field.as_str()).collect();
        assert!(fields.contains(&"llm.provider"));
        assert!(fields.contains(&"logging.level"));
        assert!(fields.contains(&"logging.format"));
    }

    #[test]
    fn test_validate_empty_connector_server_is_error() {
        let mut config = SwitchboardConfig::default();
        config.llm.api_key = Some("k".into());
        config.mcp.tools.insert(
            "facts".into(),
            ConnectorConfig {
                server: "  ".into(),
                name: "fact_lookup".into(),
                ..Default::default()
            },
        );
        let err = config.validate().unwrap_err();
        assert!(err.contains("mcp.tools.facts.server"));
    }

    #[test]
    fn test_validate_zero_timeouts_are_errors() {
        let mut config = SwitchboardConfig::default();
        config.llm.timeout_secs = 0;
        config.mcp.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.contains("llm.timeout_secs"));
        assert!(err.contains("mcp.timeout_secs"));
    }

    // ── Env overrides ──────────────────────────────────────────

    #[test]
    fn test_env_provider_model_and_key() {
        let env = env_from(&[
            ("LLM_PROVIDER", "Google"),
            ("GOOGLE_MODEL", "gemini-2.0-pro"),
            ("GOOGLE_API_KEY", "g-key"),
            ("OPENAI_MODEL", "ignored"),
        ]);
        let config = ConfigLoader::apply_env_overrides(SwitchboardConfig::default(), env);
        assert_eq!(config.llm.provider, "google");
        assert_eq!(config.llm.model.as_deref(), Some("gemini-2.0-pro"));
        assert_eq!(config.llm.api_key.as_deref(), Some("g-key"));
    }

    #[test]
    fn test_env_unknown_provider_falls_back_to_openai() {
        let mut config = SwitchboardConfig::default();
        config.llm.provider = "anthropic".into();
        let config =
            ConfigLoader::apply_env_overrides(config, env_from(&[("LLM_PROVIDER", "cohere")]));
        assert_eq!(config.llm.provider, "openai");
    }

    #[test]
    fn test_unknown_file_provider_reads_openai_env() {
        let mut config = SwitchboardConfig::default();
        config.llm.provider = "foo".into();
        assert_eq!(config.llm.env_prefix(), "OPENAI");

        let env = env_from(&[
            ("OPENAI_API_KEY", "sk-openai"),
            ("OPENAI_MODEL", "gpt-custom"),
            ("FOO_API_KEY", "wrong"),
        ]);
        let config = ConfigLoader::apply_env_overrides(config, env);
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-openai"));
        assert_eq!(config.llm.model.as_deref(), Some("gpt-custom"));
    }

    #[test]
    fn test_env_prefix_normalizes_known_provider() {
        let config = LlmConfig {
            provider: " Anthropic ".into(),
            ..Default::default()
        };
        assert_eq!(config.env_prefix(), "ANTHROPIC");
    }

    #[test]
    fn test_env_api_key_does_not_override_file_key() {
        let mut config = SwitchboardConfig::default();
        config.llm.api_key = Some("from-file".into());
        let config =
            ConfigLoader::apply_env_overrides(config, env_from(&[("OPENAI_API_KEY", "from-env")]));
        assert_eq!(config.llm.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_env_log_level_override() {
        let config = ConfigLoader::apply_env_overrides(
            SwitchboardConfig::default(),
            env_from(&[("SWITCHBOARD_LOG_LEVEL", "debug")]),
        );
        assert_eq!(config.logging.level, "debug");
    }

    // ── ConfigLoader tests ─────────────────────────────────────

    #[test]
    fn test_config_loader_with_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("switchboard.toml");
        let mut f = std::fs::File::create(&config_path).unwrap();
        writeln!(
            f,
            r#"
[llm]
provider = "anthropic"
model = "claude-3-5-haiku-latest"
api_key = "a-key"

[mcp.prompts.chef]
server = "http://localhost:9100"
name = "chef_persona"

[logging]
format = "json"
"#
        )
        .unwrap();

        let loader = ConfigLoader::load_with_env(Some(config_path.as_path()), no_env()).unwrap();
        let config = loader.get();
        assert_eq!(config.llm.provider, "anthropic");
        assert_eq!(config.llm.model.as_deref(), Some("claude-3-5-haiku-latest"));
        assert_eq!(config.mcp.prompts["chef"].server, "http://localhost:9100");
        assert_eq!(config.logging.format, "json");
        assert_eq!(loader.path(), config_path.as_path());
    }

    #[test]
    fn test_config_loader_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let loader = ConfigLoader::load_with_env(Some(missing.as_path()), no_env()).unwrap();
        assert_eq!(loader.get().llm.provider, "openai");
    }

    #[test]
    fn test_config_loader_env_path() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("custom.toml");
        std::fs::write(&config_path, "[mcp]\ntimeout_secs = 4\n").unwrap();

        let path = config_path.to_string_lossy().to_string();
        let loader =
            ConfigLoader::load_with_env(None, env_from(&[("SWITCHBOARD_CONFIG", path.as_str())]))
                .unwrap();
        assert_eq!(loader.get().mcp.timeout_secs, 4);
    }

    #[test]
    fn test_config_loader_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("switchboard.toml");
        std::fs::write(&config_path, "[llm\nprovider = ").unwrap();

        let err = ConfigLoader::load_with_env(Some(config_path.as_path()), no_env()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_config_loader_fails_on_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("switchboard.toml");
        std::fs::write(
            &config_path,
            "[mcp.tools.broken]\nserver = \"\"\nname = \"x\"\n",
        )
        .unwrap();

        let err = ConfigLoader::load_with_env(Some(config_path.as_path()), no_env()).unwrap_err();
        assert!(err.to_string().contains("Configuration errors"));
    }
}
