//! Progressive-disclosure tool catalog
//!
//! Instead of exposing every endpoint tool at once, the catalog:
//!
//! 1. Runs each category's [`Registrar`] so that every tool is installed in
//!    the registry and has a handler.
//! 2. Hides those tools immediately.
//! 3. Registers two always-visible meta-tools, `ghl_list_categories` and
//!    `ghl_enable_category`.
//! 4. When a category is toggled, flips all of its tools at once and signals
//!    that the tool list changed.
//!
//! The catalog owns its [`ToolRegistry`]; visibility can only change through
//! [`ToolCatalog::set_category`] and [`ToolCatalog::enable_all`], which is
//! what keeps every category in a single, unmixed state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::mpsc;

use crate::meta;
use crate::registry::{ListChanged, RegisteredTool, ToolHandle, ToolRegistry, ToolRoute};
use crate::sink::{CapturingSink, Registrar};
use crate::tool::ToolResult;
use crate::{Error, Result};

/// Static description of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMetadata {
    /// Unique identifier, e.g. `contacts`
    pub name: String,
    /// Human-readable label, e.g. `Contacts`
    pub label: String,
    /// Short description shown to the calling agent
    pub description: String,
}

impl CategoryMetadata {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// A category together with the registrar that declares its tools.
pub struct CategoryEntry {
    pub metadata: CategoryMetadata,
    pub registrar: Box<dyn Registrar>,
}

impl CategoryEntry {
    pub fn new(metadata: CategoryMetadata, registrar: impl Registrar + 'static) -> Self {
        Self {
            metadata,
            registrar: Box::new(registrar),
        }
    }
}

/// Snapshot of one category as reported by [`ToolCatalog::list_categories`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub name: String,
    pub label: String,
    pub description: String,
    pub tool_count: usize,
    pub enabled: bool,
    pub tools: Vec<String>,
}

#[derive(Debug)]
struct CategoryState {
    metadata: CategoryMetadata,
    tool_handles: Vec<ToolHandle>,
    tool_names: Vec<String>,
    enabled: bool,
}

/// Groups registered tools by category and controls their visibility.
#[derive(Debug)]
pub struct ToolCatalog {
    registry: ToolRegistry,
    categories: Vec<CategoryState>,
    index: HashMap<String, usize>,
}

impl ToolCatalog {
    /// Build the catalog by running every registrar in `entries`, in order.
    ///
    /// Any registrar failure, duplicate category or unresolvable registration
    /// aborts construction; no partial catalog is returned.
    pub fn new(
        registry: ToolRegistry,
        entries: impl IntoIterator<Item = CategoryEntry>,
    ) -> Result<Self> {
        let mut catalog = Self {
            registry,
            categories: Vec::new(),
            index: HashMap::new(),
        };

        for entry in entries {
            catalog.add_category(entry)?;
        }

        meta::register_meta_tools(&mut catalog.registry)?;

        tracing::info!(
            categories = catalog.categories.len(),
            tools = catalog.registry.len(),
            "Tool catalog ready"
        );
        Ok(catalog)
    }

    fn add_category(&mut self, entry: CategoryEntry) -> Result<()> {
        let CategoryEntry {
            metadata,
            registrar,
        } = entry;

        if self.index.contains_key(&metadata.name) {
            return Err(Error::DuplicateCategory(metadata.name));
        }

        let mut sink = CapturingSink::new(&mut self.registry);
        registrar
            .register(&mut sink)
            .map_err(|source| Error::Registrar {
                category: metadata.name.clone(),
                source: Box::new(source),
            })?;
        let captured = sink.into_captured();

        let mut tool_handles = Vec::with_capacity(captured.len());
        let mut tool_names = Vec::with_capacity(captured.len());
        for tool in captured {
            if self.registry.name_of(tool.handle) != Some(tool.name.as_str()) {
                return Err(Error::UnresolvedHandle {
                    category: metadata.name,
                    name: tool.name,
                });
            }
            tool_handles.push(tool.handle);
            tool_names.push(tool.name);
        }

        self.registry.set_enabled_all(&tool_handles, false)?;

        tracing::debug!(
            category = %metadata.name,
            tools = tool_handles.len(),
            "Registered category"
        );

        self.index.insert(metadata.name.clone(), self.categories.len());
        self.categories.push(CategoryState {
            metadata,
            tool_handles,
            tool_names,
            enabled: false,
        });
        Ok(())
    }

    /// Snapshot of every category, in registration order.
    pub fn list_categories(&self) -> Vec<CategorySummary> {
        self.categories
            .iter()
            .map(|state| CategorySummary {
                name: state.metadata.name.clone(),
                label: state.metadata.label.clone(),
                description: state.metadata.description.clone(),
                tool_count: state.tool_handles.len(),
                enabled: state.enabled,
                tools: state.tool_names.clone(),
            })
            .collect()
    }

    /// Enable or disable every tool of a category.
    ///
    /// Returns the names of the affected tools.
    pub fn set_category(&mut self, name: &str, enabled: bool) -> Result<Vec<String>> {
        let idx = *self
            .index
            .get(name)
            .ok_or_else(|| Error::UnknownCategory(name.to_string()))?;
        let state = &mut self.categories[idx];

        self.registry.set_enabled_all(&state.tool_handles, enabled)?;
        state.enabled = enabled;

        tracing::info!(
            category = %name,
            enabled,
            tools = state.tool_handles.len(),
            "Category visibility changed"
        );

        let affected = state.tool_names.clone();
        self.registry.notify_list_changed();
        Ok(affected)
    }

    /// Enable every category at once, for clients that cannot follow
    /// `tools/list_changed`.
    pub fn enable_all(&mut self) -> Result<()> {
        let handles: Vec<ToolHandle> = self
            .categories
            .iter()
            .flat_map(|state| state.tool_handles.iter().copied())
            .collect();
        self.registry.set_enabled_all(&handles, true)?;

        for state in &mut self.categories {
            state.enabled = true;
        }
        tracing::info!(categories = self.categories.len(), "All categories enabled");
        self.registry.notify_list_changed();
        Ok(())
    }

    /// Whether a category is enabled, or `None` if it is unknown.
    pub fn is_category_enabled(&self, name: &str) -> Option<bool> {
        self.index.get(name).map(|&idx| self.categories[idx].enabled)
    }

    /// Number of categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Read-only view of the underlying registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Tools currently visible to the caller.
    pub fn visible_tools(&self) -> impl Iterator<Item = &RegisteredTool> {
        self.registry.enabled_tools()
    }

    /// Subscribe to list-changed signals from the underlying registry.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<ListChanged> {
        self.registry.subscribe()
    }

    /// Invoke a visible tool by name.
    ///
    /// Meta-tools are answered by the catalog itself; everything else runs
    /// the handler supplied at registration. Fails only if the tool is
    /// unknown or hidden; tool-level failures come back as error results.
    pub async fn call_tool(&mut self, name: &str, arguments: Value) -> Result<ToolResult> {
        let route = self.registry.resolve(name)?.route.clone();
        match route {
            ToolRoute::Catalog => Ok(meta::call_meta_tool(self, name, arguments)),
            ToolRoute::Handler(handler) => Ok(handler.call(arguments).await),
        }
    }
}
