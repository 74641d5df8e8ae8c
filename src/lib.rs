//! MCP servers exposing Toggl Track and Trello as agent tools.
//!
//! Each vendor is a stack of HTTP client, services and MCP tool registry,
//! wired together by the binaries in `src/bin/`.

pub mod config;
pub mod error;
pub mod http;
pub mod mcp;
pub mod serde_utils;
pub mod toggl;
pub mod trello;
