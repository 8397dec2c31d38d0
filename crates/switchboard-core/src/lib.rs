//! # switchboard-core
//!
//! Shared vocabulary for the switchboard workspace: conversation messages, the
//! planner's routing decision, the final agent response, and the unified error type.

pub mod error;
pub mod message;
pub mod plan;
pub mod response;

pub use error::{ConnectorKind, Result, SwitchboardError};
pub use message::{ChatMessage, Role};
pub use plan::{Action, Params, Plan};
pub use response::AgentResponse;
