use std::path::{Path, PathBuf};
use switchboard_core::{Result, SwitchboardError};
use tracing::{info, warn};

use crate::schema::{KNOWN_PROVIDERS, SwitchboardConfig};

/// Loads the Switchboard configuration from disk and the environment.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SwitchboardConfig,
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > SWITCHBOARD_CONFIG env > ~/.switchboard/switchboard.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        Self::resolve_path_with(explicit, |k| std::env::var(k).ok())
    }

    fn resolve_path_with(explicit: Option<&Path>, env: impl Fn(&str) -> Option<String>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Some(p) = env("SWITCHBOARD_CONFIG") {
            return PathBuf::from(p);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".switchboard")
            .join("switchboard.toml")
    }

    /// Load the config from disk, falling back to defaults, with process env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, |k| std::env::var(k).ok())
    }

    /// Same as [`load`](Self::load) but reads overrides through `env`.
    pub fn load_with_env(
        path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let config_path = Self::resolve_path_with(path, &env);
        let config = if config_path.exists() {
            info!(?config_path, "loading configuration");
            Self::parse_file(&config_path)?
        } else {
            warn!(?config_path, "config file not found, using defaults");
            SwitchboardConfig::default()
        };

        let config = Self::apply_env_overrides(config, &env);

        // Validate config: log warnings, fail on errors
        match config.validate() {
            Ok(warnings) => {
                for w in &warnings {
                    warn!("{}", w);
                }
            }
            Err(e) => {
                return Err(SwitchboardError::Config(e));
            }
        }

        Ok(Self {
            config,
            config_path,
        })
    }

    fn parse_file(path: &Path) -> Result<SwitchboardConfig> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str::<SwitchboardConfig>(&raw).map_err(|e| {
            SwitchboardError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// The loaded configuration.
    pub fn get(&self) -> &SwitchboardConfig {
        &self.config
    }

    pub fn into_config(self) -> SwitchboardConfig {
        self.config
    }

    /// Path the configuration was resolved from (it may not exist).
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Apply env var overrides (LLM_PROVIDER, {PROVIDER}_MODEL, {PROVIDER}_API_KEY,
    /// SWITCHBOARD_LOG_LEVEL).
    pub fn apply_env_overrides(
        mut config: SwitchboardConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> SwitchboardConfig {
        if let Some(v) = env("LLM_PROVIDER") {
            let name = v.trim().to_ascii_lowercase();
            if KNOWN_PROVIDERS.contains(&name.as_str()) {
                config.llm.provider = name;
            } else {
                warn!(provider = %v, "unknown LLM_PROVIDER, falling back to openai");
                config.llm.provider = "openai".into();
            }
        }

        let prefix = config.llm.env_prefix();
        if let Some(v) = env(&format!("{prefix}_MODEL")).filter(|v| !v.trim().is_empty()) {
            config.llm.model = Some(v.trim().to_string());
        }
        // API key: config file takes priority, env is the fallback.
        if config.llm.api_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
            if let Some(v) = env(&format!("{prefix}_API_KEY")) {
                config.llm.api_key = Some(v);
            }
        }

        if let Some(v) = env("SWITCHBOARD_LOG_LEVEL") {
            config.logging.level = v;
        }
        config
    }
}
