//! MCP Protocol Compliance Integration Tests
//!
//! Tests that the server implements JSON-RPC 2.0 and the MCP tool surface,
//! including ID preservation, error codes, the category discovery flow and
//! `notifications/tools/list_changed`.

mod common;

use common::{call, call_tool, initialized_server, listed_tools, result_text, server_with};
use ghl_mcp::DiscoveryMode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

// ==========================================================================
// JSON-RPC 2.0 ID Preservation
// ==========================================================================

#[rstest]
#[case::numeric(json!(42))]
#[case::string(json!("req-abc-123"))]
#[tokio::test]
async fn test_id_preserved_in_response(#[case] id: Value) {
    let (mut server, _) = server_with(DiscoveryMode::Progressive);

    let response = call(
        &mut server,
        json!({"jsonrpc": "2.0", "id": id.clone(), "method": "ping"}),
    )
    .await;

    assert_eq!(response["id"], id, "ID must be echoed back exactly");
    assert_eq!(response["jsonrpc"], "2.0");
}

#[tokio::test]
async fn test_id_preserved_in_error_response() {
    let (mut server, _) = server_with(DiscoveryMode::Progressive);

    let response = call(
        &mut server,
        json!({"jsonrpc": "2.0", "id": "err-test", "method": "nonexistent/method"}),
    )
    .await;

    assert_eq!(response["id"], "err-test");
    assert_eq!(response["error"]["code"], -32601);
    assert!(response.get("result").is_none());
}

// ==========================================================================
// Error codes
// ==========================================================================

#[tokio::test]
async fn test_parse_error_has_null_id() {
    let (mut server, _) = server_with(DiscoveryMode::Progressive);

    let response = server.handle_message("not json at all").await.unwrap();
    let response: Value = serde_json::from_str(&response).unwrap();

    assert_eq!(response["error"]["code"], -32700);
    assert_eq!(response["id"], Value::Null);
}

#[rstest]
#[case::missing_version(r#"{"id":7,"method":"ping"}"#, json!(7))]
#[case::numeric_version(r#"{"jsonrpc":2,"id":8,"method":"ping"}"#, json!(8))]
#[case::missing_method(r#"{"jsonrpc":"2.0","id":9}"#, json!(9))]
#[case::old_version(r#"{"jsonrpc":"1.0","id":"v1","method":"ping"}"#, json!("v1"))]
#[case::not_an_object(r#"[1,2,3]"#, Value::Null)]
#[tokio::test]
async fn test_malformed_request_is_invalid_request(#[case] message: &str, #[case] id: Value) {
    let (mut server, _) = server_with(DiscoveryMode::Progressive);

    let response = server.handle_message(message).await.unwrap();
    let response: Value = serde_json::from_str(&response).unwrap();

    assert_eq!(response["error"]["code"], -32600);
    assert_eq!(response["id"], id, "ID must survive a malformed request");
}

#[rstest]
#[case::unknown_tool("contacts_teleport")]
#[case::hidden_tool("contacts_get")]
#[tokio::test]
async fn test_unavailable_tool_is_invalid_params(#[case] name: &str) {
    let (mut server, backend) = server_with(DiscoveryMode::Progressive);

    let response = call_tool(&mut server, name, json!({ "contactId": "c1" })).await;

    assert_eq!(response["error"]["code"], -32602);
    assert!(response["error"]["message"].as_str().unwrap().contains(name));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_unknown_notification_gets_no_response() {
    let (mut server, _) = server_with(DiscoveryMode::Progressive);
    let response = server
        .handle_message(r#"{"jsonrpc":"2.0","method":"notifications/cancelled","params":{}}"#)
        .await
        .unwrap();
    assert!(response.is_empty());
}

// ==========================================================================
// Discovery flow
// ==========================================================================

#[tokio::test]
async fn test_initial_surface_is_meta_tools_only() {
    let (mut server, _) = server_with(DiscoveryMode::Progressive);

    assert_eq!(
        listed_tools(&mut server).await,
        vec!["ghl_list_categories", "ghl_enable_category"]
    );
}

#[tokio::test]
async fn test_all_tools_mode_lists_everything() {
    let (mut server, _) = server_with(DiscoveryMode::All);

    let tools = listed_tools(&mut server).await;
    assert_eq!(tools.len(), server.catalog().registry().len());
    assert!(tools.contains(&"contacts_get".to_string()));
    assert!(tools.contains(&"invoices_recordPayment".to_string()));
    assert!(server.take_list_changed().unwrap().is_none());
}

#[tokio::test]
async fn test_list_categories_reports_every_category() {
    let (mut server, _) = server_with(DiscoveryMode::Progressive);

    let response = call_tool(&mut server, "ghl_list_categories", json!({})).await;
    let listing: Value = serde_json::from_str(result_text(&response)).unwrap();
    let names: Vec<&str> = listing
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["category"].as_str().unwrap())
        .collect();

    assert_eq!(
        names,
        vec![
            "contacts",
            "calendars",
            "conversations",
            "opportunities",
            "locations",
            "users",
            "workflows",
            "invoices"
        ]
    );
    assert_eq!(listing[0]["label"], "Contacts");
    assert_eq!(listing[0]["enabled"], false);
    assert_eq!(listing[6]["toolCount"], 1);
    assert_eq!(listing[6]["tools"], json!(["workflows_list"]));
}

#[tokio::test]
async fn test_enable_then_disable_category() {
    let (mut server, _) = initialized_server().await;

    let response = call_tool(
        &mut server,
        "ghl_enable_category",
        json!({ "category": "workflows" }),
    )
    .await;
    let body: Value = serde_json::from_str(result_text(&response)).unwrap();
    assert_eq!(
        body,
        json!({
            "status": "ok",
            "category": "workflows",
            "action": "enabled",
            "toolCount": 1,
            "tools": ["workflows_list"]
        })
    );
    assert_eq!(
        listed_tools(&mut server).await,
        vec!["workflows_list", "ghl_list_categories", "ghl_enable_category"]
    );

    call_tool(
        &mut server,
        "ghl_enable_category",
        json!({ "category": "workflows", "enabled": false }),
    )
    .await;
    assert_eq!(listed_tools(&mut server).await.len(), 2);
}

#[tokio::test]
async fn test_enable_unknown_category_is_error_result() {
    let (mut server, _) = initialized_server().await;

    let response = call_tool(
        &mut server,
        "ghl_enable_category",
        json!({ "category": "nonexistent" }),
    )
    .await;

    assert_eq!(response["result"]["isError"], true);
    assert_eq!(
        result_text(&response),
        "Unknown category: \"nonexistent\". Use ghl_list_categories to see available categories."
    );
    assert!(server.take_list_changed().unwrap().is_none());
}

// ==========================================================================
// list_changed notifications
// ==========================================================================

#[tokio::test]
async fn test_each_toggle_emits_one_notification() {
    let (mut server, _) = initialized_server().await;
    assert!(server.take_list_changed().unwrap().is_none());

    for (category, enabled) in [("contacts", true), ("users", true), ("contacts", false)] {
        call_tool(
            &mut server,
            "ghl_enable_category",
            json!({ "category": category, "enabled": enabled }),
        )
        .await;

        let notification: Value =
            serde_json::from_str(&server.take_list_changed().unwrap().unwrap()).unwrap();
        assert_eq!(notification["method"], "notifications/tools/list_changed");
        assert!(notification.get("id").is_none());
        assert!(server.take_list_changed().unwrap().is_none());
    }
}

#[tokio::test]
async fn test_reenabling_enabled_category_still_notifies() {
    let (mut server, _) = initialized_server().await;

    for _ in 0..2 {
        call_tool(
            &mut server,
            "ghl_enable_category",
            json!({ "category": "locations" }),
        )
        .await;
        assert!(server.take_list_changed().unwrap().is_some());
    }
}
