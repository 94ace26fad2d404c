//! HighLevel MCP Server
//!
//! A Model Context Protocol server that exposes the HighLevel API to
//! agentic IDEs like Claude Desktop, Windsurf, and Cursor.
//!
//! # Usage
//!
//! ```bash
//! GHL_PRIVATE_TOKEN=pit-... ghl-mcp [--all-tools]
//! ```
//!
//! # Environment Variables
//!
//! - `GHL_PRIVATE_TOKEN`: Private Integration token (required)
//! - `GHL_BASE_URL`, `GHL_API_VERSION`, `GHL_TIMEOUT_SECS`, `GHL_ALL_TOOLS`:
//!   same as the matching flags
//! - `RUST_LOG`: Control log verbosity (default: `ghl_mcp=info,ghl_catalog=info`)
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdout
//! - Logs go to stderr (to avoid interfering with the protocol)

use clap::Parser;
use ghl_mcp::config::{DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use ghl_mcp::{GhlMcpServer, ServerConfig};

/// MCP server for the HighLevel API
#[derive(Parser)]
#[command(name = "ghl-mcp")]
#[command(about = "MCP server for the HighLevel API")]
#[command(version)]
struct Args {
    /// HighLevel Private Integration token
    #[arg(long, env = "GHL_PRIVATE_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// API base URL
    #[arg(long, env = "GHL_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Value of the `Version` header sent with every request
    #[arg(long, env = "GHL_API_VERSION", default_value = DEFAULT_API_VERSION)]
    api_version: String,

    /// HTTP request timeout in seconds
    #[arg(long, env = "GHL_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Enable every category at startup (for clients without tools/list_changed)
    #[arg(long, env = "GHL_ALL_TOOLS")]
    all_tools: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr (stdout is reserved for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ghl_mcp=info".parse()?)
                .add_directive("ghl_catalog=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = ServerConfig::new(
        args.token,
        args.base_url,
        args.api_version,
        args.timeout_secs,
        args.all_tools,
    )?;

    tracing::info!(base_url = %config.base_url, discovery = ?config.discovery, "Starting ghl-mcp server");

    let mut server = GhlMcpServer::from_config(&config)?;
    server.run().await?;

    Ok(())
}
