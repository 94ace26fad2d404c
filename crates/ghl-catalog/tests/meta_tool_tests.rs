//! Meta-tool invocation through `ToolCatalog::call_tool`

use ghl_catalog::meta::{CategoryListing, EnableCategoryResponse};
use ghl_catalog::{ENABLE_CATEGORY_TOOL, Error, LIST_CATEGORIES_TOOL};
use ghl_test_utils::TestCatalog;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

fn listing(result_text: &str) -> Vec<CategoryListing> {
    serde_json::from_str(result_text).expect("list output should be a JSON array")
}

#[tokio::test]
async fn test_list_categories_tool_output() {
    let mut catalog = TestCatalog::alpha_beta();

    let result = catalog.call_tool(LIST_CATEGORIES_TOOL, json!({})).await.unwrap();
    assert!(!result.is_error());

    let parsed: Value = serde_json::from_str(&result.text_content()).unwrap();
    assert_eq!(
        parsed[0],
        json!({
            "category": "alpha",
            "label": "Alpha",
            "description": "Alpha tools",
            "toolCount": 3,
            "enabled": false,
            "tools": ["alpha_tool_1", "alpha_tool_2", "alpha_tool_3"]
        })
    );
    assert_eq!(parsed[1]["category"], "beta");
}

#[tokio::test]
async fn test_list_categories_tool_is_pretty_printed() {
    let mut catalog = TestCatalog::alpha_beta();
    let result = catalog.call_tool(LIST_CATEGORIES_TOOL, Value::Null).await.unwrap();
    assert!(result.text_content().contains("\n  {"));
}

#[tokio::test]
async fn test_enable_category_tool_enables_category() {
    let mut catalog = TestCatalog::alpha_beta();

    let result = catalog
        .call_tool(ENABLE_CATEGORY_TOOL, json!({ "category": "alpha" }))
        .await
        .unwrap();
    assert!(!result.is_error());

    let response: EnableCategoryResponse = serde_json::from_str(&result.text_content()).unwrap();
    assert_eq!(
        response,
        EnableCategoryResponse {
            status: "ok".into(),
            category: "alpha".into(),
            action: "enabled".into(),
            tool_count: 3,
            tools: vec!["alpha_tool_1".into(), "alpha_tool_2".into(), "alpha_tool_3".into()],
        }
    );
    catalog.assert_tool_enabled("alpha_tool_3");
    catalog.assert_tool_hidden("beta_tool_1");
}

#[tokio::test]
async fn test_enable_category_tool_disables_category() {
    let mut catalog = TestCatalog::alpha_beta();
    catalog.set_category("beta", true).unwrap();

    let result = catalog
        .call_tool(ENABLE_CATEGORY_TOOL, json!({ "category": "beta", "enabled": false }))
        .await
        .unwrap();

    let parsed: Value = serde_json::from_str(&result.text_content()).unwrap();
    assert_eq!(parsed["action"], "disabled");
    assert_eq!(parsed["toolCount"], 2);
    catalog.assert_tool_hidden("beta_tool_1");
}

#[tokio::test]
async fn test_enable_category_tool_reports_unknown_category() {
    let mut catalog = TestCatalog::alpha_beta();

    let result = catalog
        .call_tool(ENABLE_CATEGORY_TOOL, json!({ "category": "nonexistent" }))
        .await
        .unwrap();

    assert!(result.is_error());
    assert_eq!(
        result.text_content(),
        "Unknown category: \"nonexistent\". Use ghl_list_categories to see available categories."
    );
}

#[rstest]
#[case::missing_category(json!({}))]
#[case::null_arguments(Value::Null)]
#[case::wrong_type(json!({ "category": 42 }))]
#[case::enabled_not_bool(json!({ "category": "alpha", "enabled": "yes" }))]
#[tokio::test]
async fn test_enable_category_tool_rejects_malformed_arguments(#[case] arguments: Value) {
    let mut catalog = TestCatalog::alpha_beta();

    let result = catalog.call_tool(ENABLE_CATEGORY_TOOL, arguments).await.unwrap();
    assert!(result.is_error());
    assert!(result.text_content().starts_with("invalid arguments for ghl_enable_category"));
    catalog.assert_tool_hidden("alpha_tool_1");
}

#[tokio::test]
async fn test_enable_then_list_reflects_state() {
    let mut catalog = TestCatalog::alpha_beta();

    catalog
        .call_tool(ENABLE_CATEGORY_TOOL, json!({ "category": "beta" }))
        .await
        .unwrap();
    let result = catalog.call_tool(LIST_CATEGORIES_TOOL, json!({})).await.unwrap();

    let list = listing(&result.text_content());
    assert!(!list[0].enabled);
    assert!(list[1].enabled);
}

#[tokio::test]
async fn test_enabled_category_tools_run_their_handlers() {
    let mut catalog = TestCatalog::alpha_beta();

    let err = catalog.call_tool("alpha_tool_2", json!({})).await.unwrap_err();
    assert!(matches!(err, Error::ToolDisabled(name) if name == "alpha_tool_2"));

    catalog
        .call_tool(ENABLE_CATEGORY_TOOL, json!({ "category": "alpha" }))
        .await
        .unwrap();
    let result = catalog.call_tool("alpha_tool_2", json!({})).await.unwrap();
    assert_eq!(result.text_content(), "alpha_tool_2 ok");
}

#[tokio::test]
async fn test_unknown_tool_is_not_found() {
    let mut catalog = TestCatalog::alpha_beta();
    let err = catalog.call_tool("gamma_tool_1", json!({})).await.unwrap_err();
    assert!(matches!(err, Error::ToolNotFound(_)));
}
