//! MCP Server for the HighLevel API
//!
//! This crate exposes the HighLevel (GoHighLevel) REST API to MCP clients
//! through a progressive-disclosure tool catalog: a session starts with two
//! meta-tools and the client enables the categories it needs.
//!
//! # Architecture
//!
//! ```text
//! [ MCP Client (Claude/IDE) ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ GhlMcpServer ] --- notifications/tools/list_changed
//!        |
//!        v
//! [ ToolCatalog (ghl-catalog) ]
//!        |  contacts, calendars, conversations, opportunities,
//!        |  locations, users, workflows, invoices
//!        v
//! [ EndpointTool ] --> [ Backend ] --> https://services.leadconnectorhq.com
//! ```
//!
//! # Tools
//!
//! - `ghl_list_categories` lists every category with its tools and state
//! - `ghl_enable_category` enables or disables one category
//!
//! Category tools are hidden until their category is enabled, unless the
//! server runs with `--all-tools`.

pub mod backend;
pub mod config;
pub mod error;
pub mod protocol;
pub mod server;
pub mod tools;

pub use backend::{ApiRequest, Backend, BackendError, HttpBackend, HttpMethod};
pub use config::{DiscoveryMode, ServerConfig};
pub use error::{Error, Result};
pub use server::GhlMcpServer;
pub use tools::{CategoryInfo, Endpoint, EndpointRegistrar, EndpointTool, all_categories};

/// Name reported in `serverInfo`
pub const SERVER_NAME: &str = "ghl-mcp-server";
