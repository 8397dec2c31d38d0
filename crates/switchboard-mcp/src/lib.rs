//! # switchboard-mcp
//!
//! Connectors to external MCP-style tool and prompt servers, and the alias
//! registry skills use to reach them.
//!
//! ## Layers
//!
//! - [`transport::JsonTransport`]: "POST JSON, get JSON" with a timeout
//! - [`client::McpClient`]: tool calls and prompt fetches against a server address
//! - [`connector`]: one named tool or prompt on one server, with default arguments
//! - [`registry::ConnectorRegistry`]: alias → connector, two independent namespaces

pub mod client;
pub mod connector;
pub mod registry;
pub mod transport;

pub use client::{HttpMcpClient, McpClient};
pub use connector::{McpPromptConnector, McpToolConnector, merge_arguments};
pub use registry::ConnectorRegistry;
pub use transport::{JsonTransport, ReqwestTransport};
