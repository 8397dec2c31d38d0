//! # switchboard-config
//!
//! Configuration for the Switchboard router. Reads `switchboard.toml`, then applies
//! environment overrides, then validates.

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{
    ConfigWarning, ConnectorConfig, LlmConfig, LoggingConfig, McpConfig, SwitchboardConfig,
    WarningSeverity, KNOWN_PROVIDERS,
};
