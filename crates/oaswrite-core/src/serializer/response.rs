//! Element serializers for responses, media types, and references.

use super::{ElementSerializer, SpecVersion, allows, write_extensions};
use crate::{
    openapi::{MediaType, Ref, Response},
    writer::{StructuralWriter, WriteError},
};

/// Serializes a [`Ref`] as a reference object.
pub struct RefSerializer;

impl ElementSerializer<Ref> for RefSerializer {
    fn serialize<W: StructuralWriter>(
        &self,
        element: &Ref,
        _version: SpecVersion,
        writer: &mut W,
    ) -> Result<(), WriteError> {
        if element.ref_path.is_empty() {
            return Err(WriteError::Malformed(
                "reference has an empty path".to_string(),
            ));
        }
        writer.begin_object()?;
        writer.property("$ref")?;
        writer.string(&element.ref_path)?;
        writer.end_object()
    }
}

/// Serializes a [`MediaType`].
pub struct MediaTypeSerializer;

impl ElementSerializer<MediaType> for MediaTypeSerializer {
    fn serialize<W: StructuralWriter>(
        &self,
        element: &MediaType,
        version: SpecVersion,
        writer: &mut W,
    ) -> Result<(), WriteError> {
        writer.begin_object()?;
        if let Some(schema) = &element.schema {
            writer.property("schema")?;
            RefSerializer.serialize(schema, version, writer)?;
        }
        if let Some(example) = &element.example {
            writer.property("example")?;
            example.write(version, writer)?;
        }
        write_extensions(element.extensions.as_ref(), version, writer)?;
        writer.end_object()
    }
}

/// Serializes a [`Response`].
pub struct ResponseSerializer;

impl ElementSerializer<Response> for ResponseSerializer {
    fn serialize<W: StructuralWriter>(
        &self,
        element: &Response,
        version: SpecVersion,
        writer: &mut W,
    ) -> Result<(), WriteError> {
        writer.begin_object()?;
        if let Some(description) = &element.description {
            writer.property("description")?;
            writer.string(description)?;
        }
        // The content map arrived with revision 3.0.
        if let Some(content) = &element.content
            && allows("content", version)
        {
            writer.property("content")?;
            writer.begin_object()?;
            for (media_type, definition) in content {
                writer.property(media_type)?;
                MediaTypeSerializer.serialize(definition, version, writer)?;
            }
            writer.end_object()?;
        }
        write_extensions(element.extensions.as_ref(), version, writer)?;
        writer.end_object()
    }
}
