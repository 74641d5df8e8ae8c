pub mod envelope;
mod service;
pub mod toggl;
pub mod transport;
pub mod trello;

#[cfg(test)]
mod transport_test;

pub use envelope::{ToolError, ToolOutcome};
pub use service::create_mcp_service;
pub use toggl::TogglMcpServer;
pub use transport::{
    TransportError, TransportKind, init_tracing, reclaim, serve_http, serve_stdio,
};
pub use trello::TrelloMcpServer;
