//! Registration sinks and capability registrars
//!
//! A [`Registrar`] declares the tools of one category against a
//! [`ToolSink`]. The plain [`ToolRegistry`] is a sink; the catalog hands
//! registrars a [`CapturingSink`] instead, which forwards every registration
//! to the registry straight away and remembers what was registered.

use std::sync::Arc;

use crate::Result;
use crate::registry::{ToolHandle, ToolRegistry};
use crate::tool::{ToolDescriptor, ToolHandler};

/// Destination for tool registrations.
pub trait ToolSink {
    /// Register a tool and return its handle.
    fn register_tool(
        &mut self,
        name: &str,
        descriptor: ToolDescriptor,
        handler: Arc<dyn ToolHandler>,
    ) -> Result<ToolHandle>;
}

impl ToolSink for ToolRegistry {
    fn register_tool(
        &mut self,
        name: &str,
        descriptor: ToolDescriptor,
        handler: Arc<dyn ToolHandler>,
    ) -> Result<ToolHandle> {
        self.register(name, descriptor, handler)
    }
}

/// Declares the tools of one category.
pub trait Registrar {
    fn register(&self, sink: &mut dyn ToolSink) -> Result<()>;
}

impl<F> Registrar for F
where
    F: Fn(&mut dyn ToolSink) -> Result<()>,
{
    fn register(&self, sink: &mut dyn ToolSink) -> Result<()> {
        self(sink)
    }
}

/// A registration observed by a [`CapturingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedTool {
    pub name: String,
    pub handle: ToolHandle,
}

/// Sink that installs into a registry and records each registration.
///
/// The sink borrows the registry mutably for its whole lifetime, so capture
/// ends exactly when the sink is dropped or consumed.
pub struct CapturingSink<'a> {
    registry: &'a mut ToolRegistry,
    captured: Vec<CapturedTool>,
}

impl<'a> CapturingSink<'a> {
    pub fn new(registry: &'a mut ToolRegistry) -> Self {
        Self {
            registry,
            captured: Vec::new(),
        }
    }

    /// Registrations seen so far, in order.
    pub fn captured(&self) -> &[CapturedTool] {
        &self.captured
    }

    /// Finish capturing and return what was registered.
    pub fn into_captured(self) -> Vec<CapturedTool> {
        self.captured
    }
}

impl ToolSink for CapturingSink<'_> {
    fn register_tool(
        &mut self,
        name: &str,
        descriptor: ToolDescriptor,
        handler: Arc<dyn ToolHandler>,
    ) -> Result<ToolHandle> {
        let handle = self.registry.register(name, descriptor, handler)?;
        self.captured.push(CapturedTool {
            name: name.to_string(),
            handle,
        });
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::tool::{ToolResult, handler_fn};

    fn two_tools(sink: &mut dyn ToolSink) -> Result<()> {
        for name in ["first", "second"] {
            sink.register_tool(
                name,
                ToolDescriptor::new(name),
                handler_fn(|_| async { ToolResult::text("ok") }),
            )?;
        }
        Ok(())
    }

    #[test]
    fn capture_records_names_in_order() {
        let mut registry = ToolRegistry::new();
        let mut sink = CapturingSink::new(&mut registry);
        two_tools.register(&mut sink).unwrap();

        let captured = sink.into_captured();
        let names: Vec<&str> = captured.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(registry.name_of(captured[1].handle), Some("second"));
    }

    #[test]
    fn capture_installs_immediately() {
        let mut registry = ToolRegistry::new();
        let mut sink = CapturingSink::new(&mut registry);
        sink.register_tool(
            "first",
            ToolDescriptor::new("first"),
            handler_fn(|_| async { ToolResult::text("ok") }),
        )
        .unwrap();

        assert_eq!(sink.registry.len(), 1);
        assert_eq!(sink.captured().len(), 1);
    }

    #[test]
    fn failed_registration_is_not_captured() {
        let mut registry = ToolRegistry::new();
        two_tools(&mut registry).unwrap();

        let mut sink = CapturingSink::new(&mut registry);
        let err = two_tools.register(&mut sink).unwrap_err();
        assert!(matches!(err, Error::DuplicateTool(_)));
        assert!(sink.captured().is_empty());
    }

    #[test]
    fn registry_is_a_plain_sink() {
        let mut registry = ToolRegistry::new();
        two_tools(&mut registry).unwrap();
        assert_eq!(registry.len(), 2);
    }
}
