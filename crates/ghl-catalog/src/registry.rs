//! Tool registry storage
//!
//! The registry is the table the protocol layer serves from: every tool ever
//! registered, in registration order, with its descriptor, its handler and
//! whether it is currently visible. Visibility changes are signalled to
//! subscribers only through [`ToolRegistry::notify_list_changed`], so a batch
//! of changes produces a single notification.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::tool::{ToolDescriptor, ToolHandler};
use crate::{Error, Result};

/// Opaque reference to a registered tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToolHandle(usize);

/// Signal that the set of visible tools changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListChanged;

/// How a call to a tool is executed.
#[derive(Clone)]
pub enum ToolRoute {
    /// Run the handler supplied at registration.
    Handler(Arc<dyn ToolHandler>),
    /// Handled by the catalog that owns the registry.
    Catalog,
}

impl fmt::Debug for ToolRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolRoute::Handler(_) => f.write_str("Handler"),
            ToolRoute::Catalog => f.write_str("Catalog"),
        }
    }
}

/// A tool as stored in the registry.
#[derive(Debug, Clone)]
pub struct RegisteredTool {
    pub name: String,
    pub descriptor: ToolDescriptor,
    pub route: ToolRoute,
    pub enabled: bool,
}

/// Table of registered tools.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    by_name: HashMap<String, ToolHandle>,
    listeners: Vec<mpsc::UnboundedSender<ListChanged>>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool backed by `handler`. New tools start enabled.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        descriptor: ToolDescriptor,
        handler: Arc<dyn ToolHandler>,
    ) -> Result<ToolHandle> {
        self.insert(name.into(), descriptor, ToolRoute::Handler(handler))
    }

    /// Register a tool whose calls the owning catalog answers itself.
    pub(crate) fn register_catalog_tool(
        &mut self,
        name: impl Into<String>,
        descriptor: ToolDescriptor,
    ) -> Result<ToolHandle> {
        self.insert(name.into(), descriptor, ToolRoute::Catalog)
    }

    fn insert(
        &mut self,
        name: String,
        descriptor: ToolDescriptor,
        route: ToolRoute,
    ) -> Result<ToolHandle> {
        if self.by_name.contains_key(&name) {
            return Err(Error::DuplicateTool(name));
        }

        let handle = ToolHandle(self.tools.len());
        tracing::trace!(tool = %name, "Registering tool");
        self.by_name.insert(name.clone(), handle);
        self.tools.push(RegisteredTool {
            name,
            descriptor,
            route,
            enabled: true,
        });
        Ok(handle)
    }

    /// Make a tool visible and callable.
    pub fn enable(&mut self, handle: ToolHandle) -> Result<()> {
        self.set_enabled(handle, true)
    }

    /// Hide a tool from listing and reject calls to it.
    pub fn disable(&mut self, handle: ToolHandle) -> Result<()> {
        self.set_enabled(handle, false)
    }

    /// Set the visibility of a single tool.
    pub fn set_enabled(&mut self, handle: ToolHandle, enabled: bool) -> Result<()> {
        let tool = self
            .tools
            .get_mut(handle.0)
            .ok_or(Error::StaleHandle(handle))?;
        tool.enabled = enabled;
        Ok(())
    }

    /// Set the visibility of every handle in `handles`.
    ///
    /// All handles are validated before any is changed, so on error the
    /// registry is left untouched.
    pub fn set_enabled_all(&mut self, handles: &[ToolHandle], enabled: bool) -> Result<()> {
        if let Some(stale) = handles.iter().find(|h| h.0 >= self.tools.len()) {
            return Err(Error::StaleHandle(*stale));
        }
        for handle in handles {
            self.tools[handle.0].enabled = enabled;
        }
        Ok(())
    }

    /// Whether the tool behind `handle` is visible, or `None` for a stale handle.
    pub fn is_enabled(&self, handle: ToolHandle) -> Option<bool> {
        self.tools.get(handle.0).map(|t| t.enabled)
    }

    /// Name a handle was registered under.
    pub fn name_of(&self, handle: ToolHandle) -> Option<&str> {
        self.tools.get(handle.0).map(|t| t.name.as_str())
    }

    /// Handle registered under `name`.
    pub fn handle_of(&self, name: &str) -> Option<ToolHandle> {
        self.by_name.get(name).copied()
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&RegisteredTool> {
        self.handle_of(name).map(|h| &self.tools[h.0])
    }

    /// Look up a tool for invocation; hidden tools are rejected.
    pub fn resolve(&self, name: &str) -> Result<&RegisteredTool> {
        let tool = self
            .get(name)
            .ok_or_else(|| Error::ToolNotFound(name.to_string()))?;
        if !tool.enabled {
            return Err(Error::ToolDisabled(name.to_string()));
        }
        Ok(tool)
    }

    /// Get the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Iterate over all tools in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredTool> {
        self.tools.iter()
    }

    /// Iterate over visible tools in registration order.
    pub fn enabled_tools(&self) -> impl Iterator<Item = &RegisteredTool> {
        self.tools.iter().filter(|t| t.enabled)
    }

    /// Subscribe to list-changed signals.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<ListChanged> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.listeners.push(tx);
        rx
    }

    /// Tell every subscriber that the visible tool set changed.
    ///
    /// Subscribers whose receiver was dropped are forgotten.
    pub fn notify_list_changed(&mut self) {
        self.listeners.retain(|tx| tx.send(ListChanged).is_ok());
        tracing::debug!(subscribers = self.listeners.len(), "Tool list changed");
    }
}
