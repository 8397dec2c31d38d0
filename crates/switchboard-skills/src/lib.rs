//! # switchboard-skills
//!
//! The response-generating behaviors a plan can route to.
//!
//! - [`ClarifySkill`] answers with a follow-up question and never calls the LLM.
//! - [`JokeSkill`] and [`RecipeSkill`] build a task prompt from the plan's params,
//!   optionally pull a system prompt and tool context from the
//!   [`ConnectorRegistry`](switchboard_mcp::ConnectorRegistry), then ask the
//!   completion service for the reply.
//!
//! Connector failures never surface from a skill; completion failures always do.

pub mod augment;
pub mod clarify;
pub mod joke;
pub mod params;
pub mod recipe;
pub mod skill;

pub use clarify::ClarifySkill;
pub use joke::JokeSkill;
pub use recipe::RecipeSkill;
pub use skill::Skill;
