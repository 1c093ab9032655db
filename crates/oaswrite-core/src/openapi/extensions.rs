//! Specification extension support.
//!
//! Extensions allow vendor-specific properties to be attached to any object
//! in the document. By convention every extension key starts with the
//! reserved `x-` prefix; enforcing the prefix is a validation concern and is
//! not checked here.

use serde_json::Number;

use super::map::Map;
use crate::{
    serializer::SpecVersion,
    writer::{StructuralWriter, WriteError},
};

/// A map of extension keys to their values.
///
/// Insertion order is preserved so repeated serialization of the same entity
/// replays extensions identically. Inserting an existing key replaces its
/// value (last write wins).
pub type Extensions = Map<String, Extension>;

/// A self-serializing extension value.
///
/// The serialization core never inspects an extension's internals; it only
/// asks the value to write itself for the target revision. Values are plain
/// JSON shapes, convertible losslessly to and from [`serde_json::Value`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Extension {
    /// The JSON `null` value.
    Null,
    /// A boolean value.
    Bool(bool),
    /// A numeric value.
    Number(Number),
    /// A string value.
    String(String),
    /// An array of extension values.
    Array(Vec<Extension>),
    /// An object of extension values, in insertion order.
    Object(Map<String, Extension>),
}

impl Extension {
    /// Writes this value to the sink as structural events.
    ///
    /// The revision is accepted for parity with element serialization; plain
    /// JSON values render identically at every revision.
    pub fn write<W: StructuralWriter>(
        &self,
        version: SpecVersion,
        writer: &mut W,
    ) -> Result<(), WriteError> {
        match self {
            Extension::Null => writer.null(),
            Extension::Bool(value) => writer.bool(*value),
            Extension::Number(value) => writer.number(value),
            Extension::String(value) => writer.string(value),
            Extension::Array(items) => {
                writer.begin_array()?;
                for item in items {
                    item.write(version, writer)?;
                }
                writer.end_array()
            }
            Extension::Object(fields) => {
                writer.begin_object()?;
                for (name, value) in fields {
                    writer.property(name)?;
                    value.write(version, writer)?;
                }
                writer.end_object()
            }
        }
    }
}

impl From<serde_json::Value> for Extension {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Extension::Null,
            serde_json::Value::Bool(b) => Extension::Bool(b),
            serde_json::Value::Number(n) => Extension::Number(n),
            serde_json::Value::String(s) => Extension::String(s),
            serde_json::Value::Array(items) => {
                Extension::Array(items.into_iter().map(Extension::from).collect())
            }
            serde_json::Value::Object(fields) => Extension::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Extension::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Extension> for serde_json::Value {
    fn from(value: Extension) -> Self {
        match value {
            Extension::Null => serde_json::Value::Null,
            Extension::Bool(b) => serde_json::Value::Bool(b),
            Extension::Number(n) => serde_json::Value::Number(n),
            Extension::String(s) => serde_json::Value::String(s),
            Extension::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Extension::Object(fields) => serde_json::Value::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Extension {
    fn from(value: &str) -> Self {
        Extension::String(value.to_string())
    }
}

impl From<bool> for Extension {
    fn from(value: bool) -> Self {
        Extension::Bool(value)
    }
}

impl From<i64> for Extension {
    fn from(value: i64) -> Self {
        Extension::Number(Number::from(value))
    }
}
