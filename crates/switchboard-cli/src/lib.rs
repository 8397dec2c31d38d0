//! # switchboard-cli
//!
//! Command-line interface for the Switchboard skill router.
//!
//! ## Commands
//!
//! - `switchboard chat`: Interactive chat in the terminal
//! - `switchboard ask`: Answer a single message
//! - `switchboard config`: Show the effective configuration
//! - `switchboard connectors`: List configured MCP tool and prompt aliases

pub mod commands;

pub use commands::Cli;
