use thiserror::Error;

/// Which registry namespace a connector lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorKind {
    Tool,
    Prompt,
}

impl std::fmt::Display for ConnectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectorKind::Tool => write!(f, "tool"),
            ConnectorKind::Prompt => write!(f, "prompt"),
        }
    }
}

/// Unified error type for the switchboard workspace.
#[derive(Error, Debug)]
pub enum SwitchboardError {
    // ── Completion service errors ──────────────────────────────
    #[error("llm provider error: {0}")]
    LlmProvider(String),

    #[error("{provider} response returned empty content")]
    EmptyCompletion { provider: String },

    // ── Connector registry errors ──────────────────────────────
    #[error("MCP {kind} connector not found: {alias}")]
    ConnectorNotFound { kind: ConnectorKind, alias: String },

    #[error("MCP transport error: {0}")]
    McpTransport(String),

    #[error("MCP protocol error: {0}")]
    McpProtocol(String),

    #[error("MCP server returned error: {0}")]
    McpRemote(String),

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    #[error("config validation failed: {field}: {reason}")]
    ConfigValidation { field: String, reason: String },

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SwitchboardError>;
