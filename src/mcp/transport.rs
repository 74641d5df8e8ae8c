//! Stdio and streamable HTTP transports shared by both binaries.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use clap::ValueEnum;
use miette::Diagnostic;
use rmcp::{ServerHandler, ServiceExt};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use super::service::create_mcp_service;

const DEFAULT_FILTER: &str = "app_vitals_mcp=info,tower_http=info";
const RECLAIM_POLL: Duration = Duration::from_millis(25);

#[derive(Error, Diagnostic, Debug)]
pub enum TransportError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(app_vitals_mcp::transport::bind),
        help("Pick a free port with --port.")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server error: {0}")]
    #[diagnostic(code(app_vitals_mcp::transport::io))]
    Io(#[from] std::io::Error),

    #[error("MCP session failed: {0}")]
    #[diagnostic(code(app_vitals_mcp::transport::session))]
    Session(String),
}

/// Which transport the server speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TransportKind {
    #[default]
    Stdio,
    Http,
}

/// Initialize tracing with an env filter, logging to stderr.
///
/// Stdout belongs to the stdio transport.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Serve one MCP session over stdin/stdout until the peer disconnects.
pub async fn serve_stdio<S: ServerHandler>(server: S) -> Result<(), TransportError> {
    info!("serving MCP over stdio");
    let service = server
        .serve(rmcp::transport::io::stdio())
        .await
        .map_err(|e| TransportError::Session(e.to_string()))?;
    let reason = service
        .waiting()
        .await
        .map_err(|e| TransportError::Session(e.to_string()))?;
    info!(?reason, "stdio session ended");
    Ok(())
}

/// Serve streamable HTTP at `/mcp` until Ctrl-C.
pub async fn serve_http<S>(server: S, host: IpAddr, port: u16) -> Result<(), TransportError>
where
    S: ServerHandler + Clone,
{
    let ct = CancellationToken::new();
    let app = Router::new()
        .nest_service("/mcp", create_mcp_service(server, ct.child_token()))
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(host, port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| TransportError::Bind { addr, source })?;
    info!("MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "failed to listen for Ctrl-C");
            }
            info!("shutting down");
            ct.cancel();
        })
        .await?;
    Ok(())
}

/// Take back sole ownership of `shared` once every other holder is gone.
///
/// Cancelled HTTP sessions wind down on their own tasks after `serve_http`
/// returns, so this polls until `grace` runs out. `None` if a holder is still
/// alive by then.
pub async fn reclaim<T>(mut shared: Arc<T>, grace: Duration) -> Option<T> {
    let deadline = tokio::time::Instant::now() + grace;
    loop {
        match Arc::try_unwrap(shared) {
            Ok(inner) => return Some(inner),
            Err(still_shared) => {
                if tokio::time::Instant::now() >= deadline {
                    return None;
                }
                shared = still_shared;
                tokio::time::sleep(RECLAIM_POLL).await;
            }
        }
    }
}
