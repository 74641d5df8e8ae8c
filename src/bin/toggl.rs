//! Toggl Track MCP server binary.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use app_vitals_mcp::config::TogglConfig;
use app_vitals_mcp::mcp::{self, TogglMcpServer, TransportKind};
use app_vitals_mcp::toggl::{TogglClient, WorkspaceResolver};
use clap::Parser;
use tracing::{info, warn};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[derive(Parser)]
#[command(name = "toggl-mcp")]
#[command(author, version, about = "Toggl Track MCP server", long_about = None)]
struct Cli {
    /// Transport to serve MCP over
    #[arg(long, value_enum, default_value_t = TransportKind::Stdio)]
    transport: TransportKind,

    /// Host address to bind to (http transport)
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on (http transport)
    #[arg(short, long, default_value = "3000")]
    port: u16,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    mcp::init_tracing();

    let config = TogglConfig::from_env()?;
    let resolver = WorkspaceResolver::from_config(config.workspace_id);
    let client = Arc::new(TogglClient::new(&config.api_token, &config.api_url)?);
    info!(api_url = %config.api_url, ?resolver, "starting toggl-mcp");

    let server = TogglMcpServer::new(Arc::clone(&client), resolver);
    match cli.transport {
        TransportKind::Stdio => mcp::serve_stdio(server).await?,
        TransportKind::Http => mcp::serve_http(server, cli.host, cli.port).await?,
    }

    match mcp::reclaim(client, SHUTDOWN_GRACE).await {
        Some(client) => client.close(),
        None => warn!("Toggl client still shared at shutdown; dropping without close"),
    }
    Ok(())
}
