use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use switchboard_core::Params;

/// Provider names the LLM factory understands.
pub const KNOWN_PROVIDERS: [&str; 3] = ["openai", "anthropic", "google"];

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_LOG_FORMATS: [&str; 3] = ["pretty", "json", "compact"];

/// Root configuration: maps to `switchboard.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchboardConfig {
    pub llm: LlmConfig,
    pub mcp: McpConfig,
    pub logging: LoggingConfig,
}

// ── LLM ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Completion backend: "openai", "anthropic" or "google".
    pub provider: String,
    /// Model identifier. Unset means the provider's default model.
    pub model: Option<String>,
    /// API key. Falls back to `{PROVIDER}_API_KEY` when unset.
    pub api_key: Option<String>,
    /// Override for the provider's API base URL.
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Output token cap, for providers that require one.
    pub max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".into(),
            model: None,
            api_key: None,
            base_url: None,
            timeout_secs: 60,
            max_tokens: 512,
        }
    }
}

impl LlmConfig {
    /// Upper-case prefix used for `{PREFIX}_MODEL` and `{PREFIX}_API_KEY`.
    /// Unknown providers resolve to OpenAI, matching the provider factory.
    pub fn env_prefix(&self) -> String {
        let name = self.provider.trim().to_ascii_lowercase();
        if KNOWN_PROVIDERS.contains(&name.as_str()) {
            name.to_ascii_uppercase()
        } else {
            "OPENAI".into()
        }
    }
}

// ── MCP ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct McpConfig {
    /// Per-request timeout for MCP HTTP calls.
    pub timeout_secs: u64,
    /// Tool connectors keyed by alias.
    pub tools: BTreeMap<String, ConnectorConfig>,
    /// Prompt connectors keyed by alias.
    pub prompts: BTreeMap<String, ConnectorConfig>,
}

impl Default for McpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            tools: BTreeMap::new(),
            prompts: BTreeMap::new(),
        }
    }
}

/// One `[mcp.tools.<alias>]` or `[mcp.prompts.<alias>]` entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// Base URL of the MCP server.
    pub server: String,
    /// Tool or prompt name on that server.
    pub name: String,
    #[serde(default)]
    pub default_arguments: Params,
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Output format: "pretty", "json", "compact".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

// ── Validation ─────────────────────────────────────────────────

/// A single config validation issue.
#[derive(Debug)]
pub struct ConfigWarning {
    pub field: String,
    pub message: String,
    pub severity: WarningSeverity,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.severity {
            WarningSeverity::Error => "error",
            WarningSeverity::Warning => "warning",
            WarningSeverity::Info => "info",
        };
        write!(f, "{} {}: {}", label, self.field, self.message)?;
        if let Some(ref h) = self.hint {
            write!(f, " ({})", h)?;
        }
        Ok(())
    }
}

impl SwitchboardConfig {
    /// Copy with secrets masked, for display.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.llm.api_key.is_some() {
            copy.llm.api_key = Some("********".into());
        }
        copy
    }

    /// Validate the config and return a list of warnings/errors.
    /// Returns `Err` with all messages joined if any severity is Error.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, String> {
        let mut warnings = Vec::new();

        // ── Provider ───
        let provider = self.llm.provider.trim().to_ascii_lowercase();
        if !KNOWN_PROVIDERS.contains(&provider.as_str()) {
            warnings.push(ConfigWarning {
                field: "llm.provider".into(),
                message: format!("unknown provider '{}', openai will be used", self.llm.provider),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", KNOWN_PROVIDERS.join(", "))),
            });
        } else if self.llm.api_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
            warnings.push(ConfigWarning {
                field: "llm.api_key".into(),
                message: format!("no API key configured for {}", provider),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Set llm.api_key or {}_API_KEY", self.llm.env_prefix())),
            });
        }

        // ── Timeouts ───
        if self.llm.timeout_secs == 0 {
            warnings.push(ConfigWarning {
                field: "llm.timeout_secs".into(),
                message: "timeout is 0, every completion would fail".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. 60".into()),
            });
        }
        if self.mcp.timeout_secs == 0 {
            warnings.push(ConfigWarning {
                field: "mcp.timeout_secs".into(),
                message: "timeout is 0, every MCP call would fail".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. 10".into()),
            });
        }

        // ── Max tokens ───
        if self.llm.max_tokens == 0 {
            warnings.push(ConfigWarning {
                field: "llm.max_tokens".into(),
                message: "max_tokens is 0, providers that need it will produce nothing".into(),
                severity: WarningSeverity::Warning,
                hint: Some("Set to e.g. 512".into()),
            });
        }

        // ── Connectors ───
        for (kind, table) in [("tools", &self.mcp.tools), ("prompts", &self.mcp.prompts)] {
            for (alias, connector) in table {
                if connector.server.trim().is_empty() {
                    warnings.push(ConfigWarning {
                        field: format!("mcp.{}.{}.server", kind, alias),
                        message: "server address is empty".into(),
                        severity: WarningSeverity::Error,
                        hint: Some("Set to the MCP server base URL, e.g. 'http://localhost:8080'".into()),
                    });
                }
                if connector.name.trim().is_empty() {
                    warnings.push(ConfigWarning {
                        field: format!("mcp.{}.{}.name", kind, alias),
                        message: "name is empty".into(),
                        severity: WarningSeverity::Error,
                        hint: None,
                    });
                }
            }
        }

        // ── Logging ───
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.level".into(),
                message: format!("unknown log level '{}'", self.logging.level),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", VALID_LOG_LEVELS.join(", "))),
            });
        }
        if !VALID_LOG_FORMATS.contains(&self.logging.format.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.format".into(),
                message: format!("unknown log format '{}'", self.logging.format),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", VALID_LOG_FORMATS.join(", "))),
            });
        }

        // Check for hard errors
        let errors: Vec<String> = warnings
            .iter()
            .filter(|w| w.severity == WarningSeverity::Error)
            .map(|w| format!("{}: {}", w.field, w.message))
            .collect();

        if !errors.is_empty() {
            return Err(format!("Configuration errors:\n  • {}", errors.join("\n  • ")));
        }

        Ok(warnings)
    }
}
