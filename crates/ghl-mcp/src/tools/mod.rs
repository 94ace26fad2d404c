//! HighLevel API tools
//!
//! Each category is a static table of [`Endpoint`]s. One generic
//! [`EndpointRegistrar`] turns a table into catalog registrations, and one
//! generic [`EndpointTool`] turns a tool call into an [`ApiRequest`].

mod calendars;
mod contacts;
mod conversations;
mod invoices;
mod locations;
mod opportunities;
mod users;
mod workflows;

use std::sync::Arc;

use async_trait::async_trait;
use ghl_catalog::{
    CategoryEntry, CategoryMetadata, Registrar, ToolAnnotations, ToolDescriptor, ToolHandler,
    ToolResult, ToolSink,
};
use serde_json::{Map, Value, json};

use crate::backend::{ApiRequest, Backend, BackendError, HttpMethod};

/// Static metadata of one category
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

impl CategoryInfo {
    pub fn metadata(&self) -> CategoryMetadata {
        CategoryMetadata::new(self.name, self.label, self.description)
    }
}

/// JSON type of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Boolean,
    StringArray,
    Object,
    ObjectArray,
    /// Any JSON value
    Any,
}

impl ParamKind {
    fn schema(self) -> Value {
        match self {
            ParamKind::String => json!({ "type": "string" }),
            ParamKind::Number => json!({ "type": "number" }),
            ParamKind::Boolean => json!({ "type": "boolean" }),
            ParamKind::StringArray => json!({ "type": "array", "items": { "type": "string" } }),
            ParamKind::Object => json!({ "type": "object" }),
            ParamKind::ObjectArray => json!({ "type": "array", "items": { "type": "object" } }),
            ParamKind::Any => json!({}),
        }
    }
}

/// One input parameter of an endpoint.
///
/// A parameter whose name appears as `{name}` in the endpoint path is
/// substituted into the path. The rest go into the JSON body for
/// POST/PUT/PATCH, or when marked with [`Param::body`], and into the query
/// string otherwise.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub in_body: bool,
    pub description: &'static str,
}

impl Param {
    /// Required string parameter
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            required: true,
            in_body: false,
            description,
        }
    }

    pub const fn optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }

    pub const fn kind(self, kind: ParamKind) -> Self {
        Self { kind, ..self }
    }

    /// Send in the JSON body even for GET/DELETE
    pub const fn body(self) -> Self {
        Self {
            in_body: true,
            ..self
        }
    }
}

/// Shorthand for an optional parameter
const fn opt(name: &'static str, description: &'static str) -> Param {
    Param::new(name, description).optional()
}

/// What an endpoint does to remote state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Create,
    Update,
    Delete,
}

impl Access {
    fn annotations(self) -> ToolAnnotations {
        match self {
            Access::Read => ToolAnnotations::read_only(),
            Access::Create => ToolAnnotations::write(false),
            Access::Update => ToolAnnotations::write(true),
            Access::Delete => ToolAnnotations::destructive(),
        }
    }
}

/// One HighLevel API operation exposed as a tool
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub method: HttpMethod,
    /// Path template, e.g. `/contacts/{contactId}`
    pub path: &'static str,
    pub params: &'static [Param],
    pub access: Access,
}

impl Endpoint {
    pub fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(self.description)
            .with_title(self.title)
            .with_input_schema(input_schema(self.params))
            .with_annotations(self.access.annotations().with_title(self.title))
    }

    fn is_path_param(&self, name: &str) -> bool {
        self.path.contains(&format!("{{{name}}}"))
    }

    /// Resolve tool arguments into a request.
    ///
    /// Null values count as absent. Arguments not declared as params are
    /// dropped.
    pub fn build_request(&self, arguments: &Map<String, Value>) -> Result<ApiRequest, BackendError> {
        let mut request = ApiRequest::new(self.method, self.path);
        let mut body = Map::new();

        for param in self.params {
            let value = match arguments.get(param.name) {
                Some(Value::Null) | None if param.required => {
                    return Err(BackendError::MissingParameter(param.name.to_string()));
                }
                Some(Value::Null) | None => continue,
                Some(value) => value,
            };

            if self.is_path_param(param.name) {
                let raw = scalar_to_string(value);
                let segment = urlencoding::encode(&raw);
                request.path = request
                    .path
                    .replace(&format!("{{{}}}", param.name), &segment);
            } else if self.method.sends_body() || param.in_body {
                body.insert(param.name.to_string(), value.clone());
            } else {
                push_query(&mut request.query, param.name, value);
            }
        }

        if self.method.sends_body() || !body.is_empty() {
            request.body = Some(Value::Object(body));
        }
        Ok(request)
    }
}

/// JSON schema for a parameter list
pub fn input_schema(params: &[Param]) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for param in params {
        let mut schema = param.kind.schema();
        if let Value::Object(map) = &mut schema {
            map.insert("description".to_string(), json!(param.description));
        }
        properties.insert(param.name.to_string(), schema);
        if param.required {
            required.push(json!(param.name));
        }
    }

    let mut schema = json!({ "type": "object", "properties": properties });
    if !required.is_empty() {
        schema["required"] = Value::Array(required);
    }
    schema
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn push_query(query: &mut Vec<(String, String)>, name: &str, value: &Value) {
    match value {
        Value::Array(items) => {
            for item in items {
                query.push((name.to_string(), scalar_to_string(item)));
            }
        }
        other => query.push((name.to_string(), scalar_to_string(other))),
    }
}

/// Handler that executes one [`Endpoint`] against a [`Backend`]
pub struct EndpointTool {
    endpoint: &'static Endpoint,
    backend: Arc<dyn Backend>,
}

impl EndpointTool {
    pub fn new(endpoint: &'static Endpoint, backend: Arc<dyn Backend>) -> Self {
        Self { endpoint, backend }
    }

    fn failure(&self, message: impl std::fmt::Display) -> ToolResult {
        ToolResult::error(format!("Error calling {}: {}", self.endpoint.name, message))
    }
}

#[async_trait]
impl ToolHandler for EndpointTool {
    async fn call(&self, arguments: Value) -> ToolResult {
        let arguments = match arguments {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            _ => return self.failure("arguments must be a JSON object"),
        };

        let request = match self.endpoint.build_request(&arguments) {
            Ok(request) => request,
            Err(e) => return self.failure(e),
        };

        match self.backend.request(request).await {
            Ok(response) => ToolResult::json(&response)
                .unwrap_or_else(|e| self.failure(format!("failed to encode response: {e}"))),
            Err(e) => {
                tracing::warn!(tool = self.endpoint.name, error = %e, "API call failed");
                self.failure(e)
            }
        }
    }
}

/// Registers every endpoint of one category
pub struct EndpointRegistrar {
    endpoints: &'static [Endpoint],
    backend: Arc<dyn Backend>,
}

impl EndpointRegistrar {
    pub fn new(endpoints: &'static [Endpoint], backend: Arc<dyn Backend>) -> Self {
        Self { endpoints, backend }
    }
}

impl Registrar for EndpointRegistrar {
    fn register(&self, sink: &mut dyn ToolSink) -> ghl_catalog::Result<()> {
        for endpoint in self.endpoints {
            sink.register_tool(
                endpoint.name,
                endpoint.descriptor(),
                Arc::new(EndpointTool::new(endpoint, self.backend.clone())),
            )?;
        }
        Ok(())
    }
}

/// Category tables in catalog order
pub const CATEGORIES: &[(CategoryInfo, &[Endpoint])] = &[
    (contacts::CATEGORY, contacts::ENDPOINTS),
    (calendars::CATEGORY, calendars::ENDPOINTS),
    (conversations::CATEGORY, conversations::ENDPOINTS),
    (opportunities::CATEGORY, opportunities::ENDPOINTS),
    (locations::CATEGORY, locations::ENDPOINTS),
    (users::CATEGORY, users::ENDPOINTS),
    (workflows::CATEGORY, workflows::ENDPOINTS),
    (invoices::CATEGORY, invoices::ENDPOINTS),
];

/// Category entries for every shipped category, sharing one backend
pub fn all_categories(backend: Arc<dyn Backend>) -> Vec<CategoryEntry> {
    CATEGORIES
        .iter()
        .map(|(info, endpoints)| {
            CategoryEntry::new(
                info.metadata(),
                EndpointRegistrar::new(*endpoints, backend.clone()),
            )
        })
        .collect()
}
