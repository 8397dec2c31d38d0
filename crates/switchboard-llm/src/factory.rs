use std::sync::Arc;
use std::time::Duration;
use switchboard_core::{Result, SwitchboardError};
use tracing::{info, warn};

use crate::anthropic::AnthropicProvider;
use crate::google::GeminiProvider;
use crate::openai::OpenAiProvider;
use crate::provider::LlmProvider;

/// Which completion backend to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Anthropic,
    Google,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [
        ProviderKind::OpenAi,
        ProviderKind::Anthropic,
        ProviderKind::Google,
    ];

    /// Config / env name, e.g. "openai".
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Google => "google",
        }
    }

    /// Case-insensitive parse; `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }

    /// Parse, falling back to OpenAI for unknown names.
    pub fn from_name_or_default(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            warn!(provider = name, "unknown LLM provider, falling back to openai");
            ProviderKind::OpenAi
        })
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "gpt-5-mini",
            ProviderKind::Anthropic => "claude-3-5-sonnet-latest",
            ProviderKind::Google => "gemini-2.5-flash",
        }
    }

    /// Prefix of the provider-specific env vars (`{PREFIX}_MODEL`, `{PREFIX}_API_KEY`).
    pub fn env_prefix(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI",
            ProviderKind::Anthropic => "ANTHROPIC",
            ProviderKind::Google => "GOOGLE",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to construct a provider.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub kind: ProviderKind,
    /// `None` selects the provider's default model.
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Duration,
    pub max_tokens: u32,
}

impl ProviderSettings {
    pub fn new(kind: ProviderKind) -> Self {
        Self {
            kind,
            model: None,
            api_key: None,
            base_url: None,
            timeout: Duration::from_secs(60),
            max_tokens: 512,
        }
    }

    pub fn resolved_model(&self) -> String {
        self.model
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(self.kind.default_model())
            .to_string()
    }
}

/// Construct the configured provider. A missing API key is a configuration error.
pub fn build_provider(settings: &ProviderSettings) -> Result<Arc<dyn LlmProvider>> {
    let api_key = settings
        .api_key
        .as_deref()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| {
            SwitchboardError::Config(format!(
                "no API key for provider '{}' (set llm.api_key or {}_API_KEY)",
                settings.kind,
                settings.kind.env_prefix()
            ))
        })?
        .to_string();
    let model = settings.resolved_model();
    info!(provider = %settings.kind, model = %model, "building completion provider");

    let provider: Arc<dyn LlmProvider> = match settings.kind {
        ProviderKind::OpenAi => {
            let mut p = OpenAiProvider::new(api_key, model).with_timeout(settings.timeout);
            if let Some(ref url) = settings.base_url {
                p = p.with_base_url(url.clone());
            }
            Arc::new(p)
        }
        ProviderKind::Anthropic => {
            let mut p = AnthropicProvider::new(api_key, model)
                .with_timeout(settings.timeout)
                .with_max_tokens(settings.max_tokens);
            if let Some(ref url) = settings.base_url {
                p = p.with_base_url(url.clone());
            }
            Arc::new(p)
        }
        ProviderKind::Google => {
            let mut p = GeminiProvider::new(api_key, model).with_timeout(settings.timeout);
            if let Some(ref url) = settings.base_url {
                p = p.with_base_url(url.clone());
            }
            Arc::new(p)
        }
    };
    Ok(provider)
}
