//! Shared fixtures for the ghl-mcp integration suites.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ghl_mcp::{ApiRequest, Backend, BackendError, DiscoveryMode, GhlMcpServer};
use serde_json::{Value, json};

/// Canned answer for every request
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16, String),
}

/// Backend that records requests instead of sending them.
pub struct RecordingBackend {
    requests: Mutex<Vec<ApiRequest>>,
    reply: Mutex<Reply>,
}

impl RecordingBackend {
    pub fn new() -> Arc<Self> {
        Self::replying(Reply::Json(json!({ "ok": true })))
    }

    pub fn replying(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Mutex::new(reply),
        })
    }

    pub fn set_reply(&self, reply: Reply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for RecordingBackend {
    async fn request(&self, request: ApiRequest) -> Result<Value, BackendError> {
        self.requests.lock().unwrap().push(request);
        match self.reply.lock().unwrap().clone() {
            Reply::Json(value) => Ok(value),
            Reply::Status(status, body) => Err(BackendError::Http { status, body }),
        }
    }
}

/// Server over the full category set, backed by a [`RecordingBackend`].
pub fn server_with(discovery: DiscoveryMode) -> (GhlMcpServer, Arc<RecordingBackend>) {
    let backend = RecordingBackend::new();
    let server = GhlMcpServer::with_backend(backend.clone(), discovery).unwrap();
    (server, backend)
}

/// Progressive server that has completed the initialize handshake.
pub async fn initialized_server() -> (GhlMcpServer, Arc<RecordingBackend>) {
    let (mut server, backend) = server_with(DiscoveryMode::Progressive);
    call(
        &mut server,
        json!({"jsonrpc": "2.0", "id": 0, "method": "initialize", "params": {}}),
    )
    .await;
    let ack = server
        .handle_message(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
        .await
        .unwrap();
    assert!(ack.is_empty());
    (server, backend)
}

/// Send one request and parse the response.
pub async fn call(server: &mut GhlMcpServer, request: Value) -> Value {
    let response = server.handle_message(&request.to_string()).await.unwrap();
    serde_json::from_str(&response).unwrap()
}

/// `tools/call` helper returning the JSON-RPC response.
pub async fn call_tool(server: &mut GhlMcpServer, name: &str, arguments: Value) -> Value {
    call(
        server,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": { "name": name, "arguments": arguments }
        }),
    )
    .await
}

/// Names advertised by `tools/list`.
pub async fn listed_tools(server: &mut GhlMcpServer) -> Vec<String> {
    let response = call(
        server,
        json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list", "params": {}}),
    )
    .await;
    response["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect()
}

/// Text of the first content item of a `tools/call` result.
pub fn result_text(response: &Value) -> &str {
    response["result"]["content"][0]["text"].as_str().unwrap()
}
