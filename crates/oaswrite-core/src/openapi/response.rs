//! Response entities.

use super::{
    extensible_map::ExtensibleMap,
    extensions::{Extension, Extensions},
    map::Map,
    reference::Ref,
};

/// The possible responses of an operation, keyed by status code.
///
/// The responses container is itself extensible: vendor extensions sit next
/// to the status-code entries in the output.
pub type Responses = ExtensibleMap<Response>;

/// Describes a single response from an operation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Response {
    /// A description of the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A map of media types to their content definitions. Introduced with
    /// revision 3.0 of the description language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Map<String, MediaType>>,

    /// Extension properties.
    #[serde(skip_serializing_if = "Option::is_none", flatten)]
    pub extensions: Option<Extensions>,
}

impl Response {
    /// Creates a new empty response.
    pub fn new() -> Self {
        Self {
            description: None,
            content: None,
            extensions: None,
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the content map.
    pub fn content(mut self, content: Map<String, MediaType>) -> Self {
        self.content = Some(content);
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

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

/// A media type definition within a response.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MediaType {
    /// A reference to the schema describing the payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Ref>,

    /// An example of the payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Extension>,

    /// Extension properties.
    #[serde(skip_serializing_if = "Option::is_none", flatten)]
    pub extensions: Option<Extensions>,
}

impl MediaType {
    /// Creates a new empty media type.
    pub fn new() -> Self {
        Self {
            schema: None,
            example: None,
            extensions: None,
        }
    }

    /// Sets the schema reference.
    pub fn schema(mut self, schema: Ref) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Sets the example value.
    pub fn example(mut self, example: impl Into<Extension>) -> Self {
        self.example = Some(example.into());
        self
    }
}

impl Default for MediaType {
    fn default() -> Self {
        Self::new()
    }
}
