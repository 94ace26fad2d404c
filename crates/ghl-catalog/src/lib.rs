//! Tool catalog for the GHL MCP server
//!
//! This crate owns the part of the server that decides which tools an agent
//! can see. Endpoint tools are grouped into categories and hidden at startup;
//! two meta-tools let the agent discover categories and switch them on:
//!
//! ```text
//! [ Category registrars ] --(CapturingSink)--> [ ToolRegistry ]
//!                                                    ^
//!                                                    | single writer
//!                                             [ ToolCatalog ]
//!                                                    |
//!                        ghl_list_categories / ghl_enable_category
//! ```
//!
//! # Example
//!
//! ```
//! use ghl_catalog::{CategoryEntry, CategoryMetadata, ToolCatalog, ToolRegistry, ToolSink};
//!
//! let entries = vec![CategoryEntry::new(
//!     CategoryMetadata::new("contacts", "Contacts", "Contact management"),
//!     |_sink: &mut dyn ToolSink| -> ghl_catalog::Result<()> { Ok(()) },
//! )];
//!
//! let mut catalog = ToolCatalog::new(ToolRegistry::new(), entries).unwrap();
//! assert_eq!(catalog.set_category("contacts", true).unwrap().len(), 0);
//! ```

pub mod catalog;
pub mod error;
pub mod meta;
pub mod registry;
pub mod sink;
pub mod tool;

pub use catalog::{CategoryEntry, CategoryMetadata, CategorySummary, ToolCatalog};
pub use error::{Error, Result};
pub use meta::{ENABLE_CATEGORY_TOOL, LIST_CATEGORIES_TOOL};
pub use registry::{ListChanged, RegisteredTool, ToolHandle, ToolRegistry, ToolRoute};
pub use sink::{CapturedTool, CapturingSink, Registrar, ToolSink};
pub use tool::{ToolAnnotations, ToolContent, ToolDescriptor, ToolHandler, ToolResult, handler_fn};
