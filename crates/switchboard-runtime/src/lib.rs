//! # switchboard-runtime
//!
//! One chat turn, end to end:
//!
//! ```text
//!   history + message
//!          │
//!          ▼
//!     ┌─────────┐  temperature 0, JSON plan
//!     │ Planner │──────────────────────────► LLM
//!     └────┬────┘
//!          │ Plan
//!          ▼
//!    ┌────────────┐
//!    │ Dispatcher │  joke → JokeSkill, recipe → RecipeSkill, else ClarifySkill
//!    └─────┬──────┘
//!          ▼
//!       Skill ──► (optional) ConnectorRegistry ──► LLM
//!          │
//!          ▼
//!    AgentResponse
//! ```

pub mod agent;
pub mod builder;
pub mod conversation;
pub mod dispatcher;
pub mod planner;

pub use agent::ChatAgent;
pub use builder::{build_agent, build_registry, provider_settings};
pub use conversation::Conversation;
pub use dispatcher::{Dispatcher, SelectedSkill};
pub use planner::{Planner, parse_plan};
