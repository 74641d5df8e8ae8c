//! MCP Streamable HTTP service creation
//!
//! Builds the tower service that serves one MCP server per session and can be
//! nested into an Axum router.

use rmcp::ServerHandler;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

/// Create MCP Streamable HTTP service
///
/// Each session gets its own clone of `server`; clones share the vendor
/// client and services.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// # use app_vitals_mcp::mcp::{TrelloMcpServer, create_mcp_service};
/// # use app_vitals_mcp::trello::TrelloClient;
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TrelloClient::new("key", "token", "https://api.trello.com/1")?;
/// let server = TrelloMcpServer::new(Arc::new(client));
///
/// let app: Router = Router::new()
///     .nest_service("/mcp", create_mcp_service(server, CancellationToken::new()));
/// # Ok(())
/// # }
/// ```
pub fn create_mcp_service<S>(
    server: S,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<S, LocalSessionManager>
where
    S: ServerHandler + Clone,
{
    // rmcp expects io::Error from the factory
    let service_factory = move || -> Result<S, std::io::Error> { Ok(server.clone()) };

    let config = StreamableHttpServerConfig::default()
        .with_sse_keep_alive(None) // default (15s)
        .with_sse_retry(None)
        .with_stateful_mode(true)
        .with_cancellation_token(cancellation_token);

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
