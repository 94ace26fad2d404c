//! [`TestCatalog`] wrapper for catalog test scenarios.

use std::ops::{Deref, DerefMut};

use ghl_catalog::{CategoryEntry, ToolCatalog, ToolRegistry};

use crate::registrars::alpha_beta_entries;

/// A catalog built over a fresh registry, with helper methods for assertion.
///
/// # Example
///
/// ```rust
/// use ghl_test_utils::TestCatalog;
///
/// let mut catalog = TestCatalog::alpha_beta();
/// catalog.set_category("alpha", true).unwrap();
/// catalog.assert_tool_enabled("alpha_tool_1");
/// catalog.assert_tool_hidden("beta_tool_1");
/// ```
pub struct TestCatalog {
    catalog: ToolCatalog,
}

impl TestCatalog {
    /// Build a catalog from `entries`.
    ///
    /// # Panics
    /// Panics if catalog construction fails.
    pub fn new(entries: Vec<CategoryEntry>) -> Self {
        let catalog = ToolCatalog::new(ToolRegistry::new(), entries)
            .unwrap_or_else(|e| panic!("TestCatalog::new: catalog construction failed: {e}"));
        Self { catalog }
    }

    /// Catalog over [`alpha_beta_entries`].
    pub fn alpha_beta() -> Self {
        Self::new(alpha_beta_entries())
    }

    /// Unwrap into the underlying catalog.
    pub fn into_inner(self) -> ToolCatalog {
        self.catalog
    }

    /// Whether the named tool is visible.
    ///
    /// # Panics
    /// Panics if no tool with that name is registered.
    pub fn tool_enabled(&self, name: &str) -> bool {
        self.catalog
            .registry()
            .get(name)
            .unwrap_or_else(|| panic!("Tool is not registered: {name}"))
            .enabled
    }

    /// Assert that the named tool is visible.
    pub fn assert_tool_enabled(&self, name: &str) {
        assert!(self.tool_enabled(name), "Expected tool to be enabled: {name}");
    }

    /// Assert that the named tool is hidden.
    pub fn assert_tool_hidden(&self, name: &str) {
        assert!(!self.tool_enabled(name), "Expected tool to be hidden: {name}");
    }

    /// Names of all tools whose name starts with `prefix`.
    pub fn tools_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.catalog
            .registry()
            .iter()
            .filter(|t| t.name.starts_with(prefix))
            .map(|t| t.name.clone())
            .collect()
    }
}

impl Deref for TestCatalog {
    type Target = ToolCatalog;

    fn deref(&self) -> &ToolCatalog {
        &self.catalog
    }
}

impl DerefMut for TestCatalog {
    fn deref_mut(&mut self) -> &mut ToolCatalog {
        &mut self.catalog
    }
}
