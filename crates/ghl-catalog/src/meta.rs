//! Always-visible meta-tools
//!
//! - `ghl_list_categories` - lists every category with its tools and state
//! - `ghl_enable_category` - enables or disables one category
//!
//! Both belong to no category and are never hidden. Failures inside them are
//! returned as error-flagged results so the calling agent can self-correct.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::catalog::ToolCatalog;
use crate::registry::ToolRegistry;
use crate::tool::{ToolAnnotations, ToolDescriptor, ToolResult};
use crate::{Error, Result};

/// Name of the category discovery tool.
pub const LIST_CATEGORIES_TOOL: &str = "ghl_list_categories";

/// Name of the category toggle tool.
pub const ENABLE_CATEGORY_TOOL: &str = "ghl_enable_category";

/// One entry of the `ghl_list_categories` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListing {
    pub category: String,
    pub label: String,
    pub description: String,
    pub tool_count: usize,
    pub enabled: bool,
    pub tools: Vec<String>,
}

/// Arguments accepted by `ghl_enable_category`.
#[derive(Debug, Clone, Deserialize)]
pub struct EnableCategoryArgs {
    pub category: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Acknowledgment returned by `ghl_enable_category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableCategoryResponse {
    pub status: String,
    pub category: String,
    pub action: String,
    pub tool_count: usize,
    pub tools: Vec<String>,
}

fn list_categories_descriptor() -> ToolDescriptor {
    ToolDescriptor::new(
        "Lists all available GHL API tool categories with descriptions and tool counts. \
         Use this to discover what tools are available before enabling a category.",
    )
    .with_title("List GHL API Categories")
    .with_annotations(ToolAnnotations::read_only().closed_world())
}

fn enable_category_descriptor() -> ToolDescriptor {
    ToolDescriptor::new(
        "Enables or disables a GHL API tool category. \
         Once enabled, the category tools become available for use. \
         Call ghl_list_categories first to see available categories.",
    )
    .with_title("Enable/Disable GHL Tool Category")
    .with_input_schema(json!({
        "type": "object",
        "properties": {
            "category": {
                "type": "string",
                "description": "Category name to enable/disable (e.g. \"contacts\", \"calendars\")"
            },
            "enabled": {
                "type": "boolean",
                "default": true,
                "description": "True to enable, false to disable. Defaults to true."
            }
        },
        "required": ["category"]
    }))
    .with_annotations(ToolAnnotations::write(true).closed_world())
}

/// Register both meta-tools directly against the registry.
pub(crate) fn register_meta_tools(registry: &mut ToolRegistry) -> Result<()> {
    registry.register_catalog_tool(LIST_CATEGORIES_TOOL, list_categories_descriptor())?;
    registry.register_catalog_tool(ENABLE_CATEGORY_TOOL, enable_category_descriptor())?;
    Ok(())
}

/// Answer a call to one of the meta-tools.
pub(crate) fn call_meta_tool(catalog: &mut ToolCatalog, name: &str, arguments: Value) -> ToolResult {
    let outcome = match name {
        LIST_CATEGORIES_TOOL => list_categories(catalog),
        ENABLE_CATEGORY_TOOL => enable_category(catalog, arguments),
        _ => Err(Error::ToolNotFound(name.to_string())),
    };

    outcome.unwrap_or_else(|e| ToolResult::error(e.to_string()))
}

fn list_categories(catalog: &ToolCatalog) -> Result<ToolResult> {
    let listing: Vec<CategoryListing> = catalog
        .list_categories()
        .into_iter()
        .map(|c| CategoryListing {
            category: c.name,
            label: c.label,
            description: c.description,
            tool_count: c.tool_count,
            enabled: c.enabled,
            tools: c.tools,
        })
        .collect();

    ToolResult::json(&listing)
}

fn enable_category(catalog: &mut ToolCatalog, arguments: Value) -> Result<ToolResult> {
    let arguments = if arguments.is_null() {
        json!({})
    } else {
        arguments
    };
    let args: EnableCategoryArgs =
        serde_json::from_value(arguments).map_err(|e| Error::InvalidArguments {
            tool: ENABLE_CATEGORY_TOOL.to_string(),
            message: e.to_string(),
        })?;

    let tools = catalog.set_category(&args.category, args.enabled)?;
    let action = if args.enabled { "enabled" } else { "disabled" };

    ToolResult::json(&EnableCategoryResponse {
        status: "ok".to_string(),
        category: args.category,
        action: action.to_string(),
        tool_count: tools.len(),
        tools,
    })
}
