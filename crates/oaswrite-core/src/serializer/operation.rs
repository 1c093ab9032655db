//! Element serializers for operations and their sub-entities.

use super::{
    ElementSerializer, SecurityRequirementSerializer, SpecVersion, allows,
    extensible_map::serialize_extensible_map, response::RefSerializer,
    response::ResponseSerializer, write_extensions,
};
use crate::{
    openapi::{Callback, ExternalDocs, Operation},
    writer::{StructuralWriter, WriteError},
};

/// Serializes an [`ExternalDocs`] reference.
pub struct ExternalDocsSerializer;

impl ElementSerializer<ExternalDocs> for ExternalDocsSerializer {
    fn serialize<W: StructuralWriter>(
        &self,
        element: &ExternalDocs,
        version: SpecVersion,
        writer: &mut W,
    ) -> Result<(), WriteError> {
        writer.begin_object()?;
        writer.property("url")?;
        writer.string(&element.url)?;
        if let Some(description) = &element.description {
            writer.property("description")?;
            writer.string(description)?;
        }
        write_extensions(element.extensions.as_ref(), version, writer)?;
        writer.end_object()
    }
}

/// Serializes a [`Callback`]: an extensible map of runtime expressions to
/// path-item references.
pub struct CallbackSerializer;

impl ElementSerializer<Callback> for CallbackSerializer {
    fn serialize<W: StructuralWriter>(
        &self,
        element: &Callback,
        version: SpecVersion,
        writer: &mut W,
    ) -> Result<(), WriteError> {
        serialize_extensible_map(Some(element), &RefSerializer, version, writer)
    }
}

/// Serializes an [`Operation`].
pub struct OperationSerializer;

impl ElementSerializer<Operation> for OperationSerializer {
    fn serialize<W: StructuralWriter>(
        &self,
        element: &Operation,
        version: SpecVersion,
        writer: &mut W,
    ) -> Result<(), WriteError> {
        writer.begin_object()?;

        if let Some(tags) = &element.tags {
            writer.property("tags")?;
            writer.begin_array()?;
            for tag in tags {
                writer.string(tag)?;
            }
            writer.end_array()?;
        }
        if let Some(summary) = &element.summary {
            writer.property("summary")?;
            writer.string(summary)?;
        }
        if let Some(description) = &element.description {
            writer.property("description")?;
            writer.string(description)?;
        }
        if let Some(external_docs) = &element.external_docs {
            writer.property("externalDocs")?;
            ExternalDocsSerializer.serialize(external_docs, version, writer)?;
        }
        if let Some(operation_id) = &element.operation_id {
            writer.property("operationId")?;
            writer.string(operation_id)?;
        }
        if let Some(deprecated) = element.deprecated {
            writer.property("deprecated")?;
            writer.bool(deprecated)?;
        }

        // An absent responses map writes nothing; the property name is only
        // emitted when the map is present.
        if let Some(responses) = &element.responses {
            writer.property("responses")?;
            serialize_extensible_map(Some(responses), &ResponseSerializer, version, writer)?;
        }

        // Callbacks arrived with revision 3.0.
        if let Some(callbacks) = &element.callbacks
            && allows("callbacks", version)
        {
            writer.property("callbacks")?;
            writer.begin_object()?;
            for (name, callback) in callbacks {
                writer.property(name)?;
                CallbackSerializer.serialize(callback, version, writer)?;
            }
            writer.end_object()?;
        }

        if let Some(security) = &element.security {
            writer.property("security")?;
            writer.begin_array()?;
            for requirement in security {
                SecurityRequirementSerializer.serialize(requirement, version, writer)?;
            }
            writer.end_array()?;
        }

        write_extensions(element.extensions.as_ref(), version, writer)?;
        writer.end_object()
    }
}
