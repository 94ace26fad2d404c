//! MCP Server implementation
//!
//! The server owns the [`ToolCatalog`] and speaks newline-delimited
//! JSON-RPC 2.0 over stdio. Catalog changes reach the client as a single
//! `notifications/tools/list_changed` line written after the response that
//! caused them.

use std::sync::Arc;

use ghl_catalog::{ListChanged, ToolCatalog, ToolRegistry};
use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

use crate::backend::{Backend, HttpBackend};
use crate::config::{DiscoveryMode, ServerConfig};
use crate::protocol::{
    InitializeParams, InitializeResult, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse,
    PROTOCOL_VERSION, ServerCapabilities, ServerInfo, ToolCallParams, ToolInfo, ToolsCapability,
    error_codes,
};
use crate::tools::all_categories;
use crate::{Error, Result, SERVER_NAME};

const INSTRUCTIONS: &str = "Tools are grouped into categories that start hidden. \
Call ghl_list_categories to see what is available, then ghl_enable_category \
to load the tools of a category. Disable categories you no longer need to \
keep the tool list small.";

/// MCP Server for the HighLevel API
///
/// # Example
///
/// ```ignore
/// use ghl_mcp::{GhlMcpServer, ServerConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ServerConfig::new(Some("pit-...".into()), /* ... */)?;
///     let mut server = GhlMcpServer::from_config(&config)?;
///     server.run().await?;
///     Ok(())
/// }
/// ```
pub struct GhlMcpServer {
    catalog: ToolCatalog,

    /// Pending list-changed signals from the catalog
    list_changed: mpsc::UnboundedReceiver<ListChanged>,

    /// Whether the client has sent `notifications/initialized`
    initialized: bool,
}

impl GhlMcpServer {
    /// Serve an already built catalog.
    ///
    /// Changes made to the catalog before this call are not announced.
    pub fn new(mut catalog: ToolCatalog) -> Self {
        let list_changed = catalog.subscribe();
        Self {
            catalog,
            list_changed,
            initialized: false,
        }
    }

    /// Build the full HighLevel catalog over `backend`.
    pub fn with_backend(backend: Arc<dyn Backend>, discovery: DiscoveryMode) -> Result<Self> {
        let mut catalog = ToolCatalog::new(ToolRegistry::new(), all_categories(backend))?;
        if discovery == DiscoveryMode::All {
            catalog.enable_all()?;
        }
        Ok(Self::new(catalog))
    }

    /// Build the full HighLevel catalog over an [`HttpBackend`].
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let backend = HttpBackend::new(config)?;
        Self::with_backend(Arc::new(backend), config.discovery)
    }

    /// Run the MCP server
    ///
    /// Reads one JSON-RPC message per line from stdin until EOF.
    pub async fn run(&mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        tracing::info!(
            tools = self.catalog.registry().len(),
            visible = self.catalog.visible_tools().count(),
            "MCP server ready, listening on stdio"
        );

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            tracing::debug!(request = %line, "Received message");

            let response = self.handle_message(&line).await?;
            if !response.is_empty() {
                stdout.write_all(response.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
            }
            if let Some(notification) = self.take_list_changed()? {
                stdout.write_all(notification.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
            }
            stdout.flush().await?;
        }

        tracing::info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle a single MCP message
    ///
    /// Returns the JSON-RPC response, or an empty string for notifications.
    pub async fn handle_message(&mut self, message: &str) -> Result<String> {
        let value: Value = match serde_json::from_str(message) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, "Unparseable message");
                let response = JsonRpcResponse::error(
                    Some(Value::Null),
                    error_codes::PARSE_ERROR,
                    format!("Parse error: {e}"),
                );
                return serde_json::to_string(&response).map_err(Error::from);
            }
        };

        let raw_id = value.get("id").cloned();
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(error = %e, "Malformed request");
                let response = JsonRpcResponse::error(
                    Some(raw_id.unwrap_or(Value::Null)),
                    error_codes::INVALID_REQUEST,
                    format!("Invalid request: {e}"),
                );
                return serde_json::to_string(&response).map_err(Error::from);
            }
        };

        if request.id.is_none() {
            self.handle_notification(&request.method);
            return Ok(String::new());
        }

        let id = request.id;
        if request.jsonrpc != "2.0" {
            let response = JsonRpcResponse::error(
                id,
                error_codes::INVALID_REQUEST,
                format!("Unsupported JSON-RPC version: {}", request.jsonrpc),
            );
            return serde_json::to_string(&response).map_err(Error::from);
        }

        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.params),
            "ping" => Ok(json!({})),
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tools_call(request.params).await,
            _ => {
                let response = JsonRpcResponse::error(
                    id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("Method not found: {}", request.method),
                );
                return serde_json::to_string(&response).map_err(Error::from);
            }
        };

        let response = match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => {
                tracing::debug!(method = %request.method, error = %e, "Request failed");
                JsonRpcResponse::error(id, e.error_code(), e.to_string())
            }
        };

        serde_json::to_string(&response).map_err(Error::from)
    }

    /// Drain pending catalog signals into at most one notification line.
    ///
    /// Signals raised before the client finished initializing are dropped.
    pub fn take_list_changed(&mut self) -> Result<Option<String>> {
        let mut pending = false;
        while self.list_changed.try_recv().is_ok() {
            pending = true;
        }

        if !pending || !self.initialized {
            return Ok(None);
        }

        let notification = serde_json::to_string(&JsonRpcNotification::tools_list_changed())?;
        Ok(Some(notification))
    }

    fn handle_notification(&mut self, method: &str) {
        match method {
            "initialized" | "notifications/initialized" => {
                self.initialized = true;
                tracing::debug!("Client initialized");
            }
            other => tracing::debug!(method = other, "Ignoring notification"),
        }
    }

    fn handle_initialize(&self, params: Value) -> Result<Value> {
        match serde_json::from_value::<InitializeParams>(params) {
            Ok(params) => tracing::info!(
                client = %params.client_info.name,
                client_version = %params.client_info.version,
                protocol_version = %params.protocol_version,
                "Client connected"
            ),
            Err(e) => tracing::debug!(error = %e, "initialize without client info"),
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability { list_changed: true },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        };

        Ok(serde_json::to_value(result)?)
    }

    fn handle_tools_list(&self) -> Result<Value> {
        let tools: Vec<ToolInfo> = self.catalog.visible_tools().map(ToolInfo::from).collect();
        Ok(json!({ "tools": tools }))
    }

    async fn handle_tools_call(&mut self, params: Value) -> Result<Value> {
        let params: ToolCallParams =
            serde_json::from_value(params).map_err(|e| Error::InvalidParams(e.to_string()))?;

        let result = self.catalog.call_tool(&params.name, params.arguments).await?;
        Ok(serde_json::to_value(result)?)
    }

    /// The served catalog
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Check if the client has completed initialization
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghl_test_utils::TestCatalog;

    fn server() -> GhlMcpServer {
        GhlMcpServer::new(TestCatalog::alpha_beta().into_inner())
    }

    async fn initialized_server() -> GhlMcpServer {
        let mut server = server();
        server
            .handle_message(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .await
            .unwrap();
        server
    }

    #[test]
    fn server_creation() {
        let server = server();
        assert!(!server.is_initialized());
        assert_eq!(server.catalog().category_count(), 2);
        assert_eq!(server.catalog().visible_tools().count(), 2);
    }

    #[tokio::test]
    async fn test_handle_initialize() {
        let mut server = server();
        let request = r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test","version":"1.0"}}}"#;

        let response = server.handle_message(request).await.unwrap();
        let parsed: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["result"]["serverInfo"]["name"], "ghl-mcp-server");
        assert_eq!(parsed["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(parsed["result"]["capabilities"]["tools"]["listChanged"], true);
        assert!(parsed["result"]["instructions"].as_str().unwrap().contains("ghl_list_categories"));
    }

    #[tokio::test]
    async fn test_handle_initialized_notification() {
        let mut server = server();
        let response = server
            .handle_message(r#"{"jsonrpc":"2.0","method":"initialized"}"#)
            .await
            .unwrap();
        assert!(response.is_empty());
        assert!(server.is_initialized());
    }

    #[tokio::test]
    async fn test_handle_ping() {
        let mut server = server();
        let response = server
            .handle_message(r#"{"jsonrpc":"2.0","id":"p","method":"ping"}"#)
            .await
            .unwrap();
        let parsed: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["id"], "p");
        assert_eq!(parsed["result"], json!({}));
    }

    #[tokio::test]
    async fn test_tools_list_shows_only_meta_tools_initially() {
        let mut server = server();
        let response = server
            .handle_message(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list","params":{}}"#)
            .await
            .unwrap();

        let parsed: Value = serde_json::from_str(&response).unwrap();
        let names: Vec<&str> = parsed["result"]["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["ghl_list_categories", "ghl_enable_category"]);
        assert!(parsed["result"]["tools"][0].get("inputSchema").is_some());
    }

    #[tokio::test]
    async fn test_handle_unknown_method() {
        let mut server = server();
        let response = server
            .handle_message(r#"{"jsonrpc":"2.0","id":4,"method":"unknown/method","params":{}}"#)
            .await
            .unwrap();
        assert!(response.contains("-32601"));
        assert!(response.contains("Method not found"));
    }

    #[tokio::test]
    async fn test_hidden_tool_call_is_invalid_params() {
        let mut server = server();
        let request = r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"alpha_tool_1","arguments":{}}}"#;

        let response = server.handle_message(request).await.unwrap();
        let parsed: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["error"]["code"], -32602);
        assert_eq!(parsed["error"]["message"], "Tool alpha_tool_1 disabled");
    }

    #[tokio::test]
    async fn test_tools_call_without_name_is_invalid_params() {
        let mut server = server();
        let response = server
            .handle_message(r#"{"jsonrpc":"2.0","id":6,"method":"tools/call","params":{}}"#)
            .await
            .unwrap();
        let parsed: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["error"]["code"], -32602);
    }

    #[tokio::test]
    async fn test_handle_invalid_json() {
        let mut server = server();
        let response = server.handle_message(r#"{"invalid json"#).await.unwrap();

        let parsed: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["error"]["code"], -32700);
        assert!(parsed["id"].is_null());
        assert!(parsed.as_object().unwrap().contains_key("id"));
    }

    #[tokio::test]
    async fn test_wrong_jsonrpc_version_is_invalid_request() {
        let mut server = server();
        let response = server
            .handle_message(r#"{"jsonrpc":"1.0","id":12,"method":"ping"}"#)
            .await
            .unwrap();
        let parsed: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["error"]["code"], -32600);
        assert_eq!(parsed["id"], 12);
    }

    #[tokio::test]
    async fn test_valid_json_with_bad_shape_keeps_id() {
        let mut server = server();
        let response = server
            .handle_message(r#"{"id":7,"method":"ping"}"#)
            .await
            .unwrap();
        let parsed: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["error"]["code"], -32600);
        assert_eq!(parsed["id"], 7);
    }

    #[tokio::test]
    async fn test_initialize_without_params_still_succeeds() {
        let mut server = server();
        let response = server
            .handle_message(r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#)
            .await
            .unwrap();
        let parsed: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["result"]["serverInfo"]["name"], "ghl-mcp-server");
    }

    #[tokio::test]
    async fn test_enable_category_queues_one_notification() {
        let mut server = initialized_server().await;
        let request = r#"{"jsonrpc":"2.0","id":7,"method":"tools/call","params":{"name":"ghl_enable_category","arguments":{"category":"alpha"}}}"#;

        server.handle_message(request).await.unwrap();

        let notification = server.take_list_changed().unwrap().unwrap();
        assert_eq!(
            notification,
            r#"{"jsonrpc":"2.0","method":"notifications/tools/list_changed"}"#
        );
        assert!(server.take_list_changed().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_no_notification_before_initialized() {
        let mut server = server();
        let request = r#"{"jsonrpc":"2.0","id":8,"method":"tools/call","params":{"name":"ghl_enable_category","arguments":{"category":"alpha"}}}"#;

        server.handle_message(request).await.unwrap();
        assert!(server.take_list_changed().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_categories_does_not_notify() {
        let mut server = initialized_server().await;
        let request = r#"{"jsonrpc":"2.0","id":9,"method":"tools/call","params":{"name":"ghl_list_categories"}}"#;

        let response = server.handle_message(request).await.unwrap();
        assert!(response.contains("alpha_tool_1"));
        assert!(server.take_list_changed().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_response_format() {
        let mut server = server();
        let response = server
            .handle_message(r#"{"jsonrpc":"2.0","id":10,"method":"initialize","params":{}}"#)
            .await
            .unwrap();

        let parsed: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["jsonrpc"], "2.0");
        assert_eq!(parsed["id"], 10);
        assert!(parsed.get("result").is_some());
        assert!(parsed.get("error").is_none());
    }
}
