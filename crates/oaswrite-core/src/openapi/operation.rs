//! Operation entity.

use super::{
    extensible_map::ExtensibleMap,
    extensions::{Extension, Extensions},
    external_docs::ExternalDocs,
    map::Map,
    reference::Ref,
    response::Responses,
    security::SecurityRequirement,
};

/// A callback: runtime expressions mapped to references to the path items
/// that service them. Like the responses container, a callback is itself
/// extensible.
pub type Callback = ExtensibleMap<Ref>;

/// Describes a single API operation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Operation {
    /// Tags for grouping operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// A short summary of what the operation does.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// A verbose explanation of the operation behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Additional external documentation.
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,

    /// Unique string identifying the operation within the document.
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    /// Whether the operation is deprecated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    /// The possible responses, keyed by status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<Responses>,

    /// Out-of-band callbacks related to the operation, keyed by callback
    /// name. Introduced with revision 3.0 of the description language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callbacks: Option<Map<String, Callback>>,

    /// Alternative security requirements for the operation. Only one entry
    /// needs to be satisfied to authorize a request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,

    /// Extension properties.
    #[serde(skip_serializing_if = "Option::is_none", flatten)]
    pub extensions: Option<Extensions>,
}

impl Operation {
    /// Creates a new empty operation.
    pub fn new() -> Self {
        Self {
            tags: None,
            summary: None,
            description: None,
            external_docs: None,
            operation_id: None,
            deprecated: None,
            responses: None,
            callbacks: None,
            security: None,
            extensions: None,
        }
    }

    /// Sets the tags.
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Sets the summary.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the external documentation.
    pub fn external_docs(mut self, external_docs: ExternalDocs) -> Self {
        self.external_docs = Some(external_docs);
        self
    }

    /// Sets the operation ID.
    pub fn operation_id(mut self, operation_id: impl Into<String>) -> Self {
        self.operation_id = Some(operation_id.into());
        self
    }

    /// Marks the operation as deprecated.
    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = Some(deprecated);
        self
    }

    /// Sets the responses.
    pub fn responses(mut self, responses: Responses) -> Self {
        self.responses = Some(responses);
        self
    }

    /// Sets the callbacks.
    pub fn callbacks(mut self, callbacks: Map<String, Callback>) -> Self {
        self.callbacks = Some(callbacks);
        self
    }

    /// Sets the security requirements.
    pub fn security(mut self, security: Vec<SecurityRequirement>) -> Self {
        self.security = Some(security);
        self
    }

    /// Adds a single extension, builder style.
    pub fn extension(mut self, key: impl Into<String>, value: impl Into<Extension>) -> Self {
        self.extensions
            .get_or_insert_with(Extensions::new)
            .insert(key.into(), value.into());
        self
    }
}

impl Default for Operation {
    fn default() -> Self {
        Self::new()
    }
}
