//! # switchboard-llm
//!
//! The completion service: an ordered list of role-tagged messages goes in, one
//! completed text reply comes out. Concrete adapters exist for OpenAI-compatible
//! APIs, Anthropic, and Google Gemini; `MockProvider` serves tests.

pub mod provider;
pub mod factory;
pub mod openai;
pub mod anthropic;
pub mod google;
pub mod mock;

pub use factory::{ProviderKind, ProviderSettings, build_provider};
pub use mock::MockProvider;
pub use provider::{CompletionRequest, LlmProvider};
