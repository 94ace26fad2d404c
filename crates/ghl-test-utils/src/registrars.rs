//! Registrar fixtures.
//!
//! Dummy tools answer every call with a text result of the form
//! `<tool name> ok`, which lets tests see which handler actually ran.

use ghl_catalog::{
    CategoryEntry, CategoryMetadata, Error, Registrar, Result, ToolAnnotations, ToolDescriptor,
    ToolResult, ToolSink, handler_fn,
};
use serde_json::json;

/// Registrar declaring `count` tools named `<prefix>_tool_<n>`, starting at 1.
pub fn dummy_registrar(prefix: &str, count: usize) -> impl Registrar + use<> {
    let prefix = prefix.to_string();
    move |sink: &mut dyn ToolSink| -> Result<()> {
        for i in 1..=count {
            let name = format!("{prefix}_tool_{i}");
            let reply = format!("{name} ok");
            sink.register_tool(
                &name,
                ToolDescriptor::new(format!("Dummy tool {i} in {prefix}"))
                    .with_title(format!("Dummy {i}"))
                    .with_input_schema(json!({
                        "type": "object",
                        "properties": { "id": { "type": "string" } }
                    }))
                    .with_annotations(ToolAnnotations::read_only()),
                handler_fn(move |_| {
                    let reply = reply.clone();
                    async move { ToolResult::text(reply) }
                }),
            )?;
        }
        Ok(())
    }
}

/// Registrar that declares `before` tools and then fails.
pub fn failing_registrar(prefix: &str, before: usize) -> impl Registrar + use<> {
    let inner = dummy_registrar(prefix, before);
    let prefix = prefix.to_string();
    move |sink: &mut dyn ToolSink| -> Result<()> {
        inner.register(sink)?;
        Err(Error::InvalidArguments {
            tool: format!("{prefix}_registrar"),
            message: "registrar failure".to_string(),
        })
    }
}

/// Category entry with title-cased label and `<Label> tools` description.
pub fn category(name: &str, registrar: impl Registrar + 'static) -> CategoryEntry {
    let mut label = name.to_string();
    if let Some(first) = label.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    let description = format!("{label} tools");
    CategoryEntry::new(CategoryMetadata::new(name, label, description), registrar)
}

/// The canonical two-category fixture: `alpha` with 3 tools, `beta` with 2.
pub fn alpha_beta_entries() -> Vec<CategoryEntry> {
    vec![
        category("alpha", dummy_registrar("alpha", 3)),
        category("beta", dummy_registrar("beta", 2)),
    ]
}
