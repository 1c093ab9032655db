//! Version-aware serialization of model entities into structural events.
//!
//! A serialization pass is a synchronous tree traversal: the caller picks an
//! entity, a target [`SpecVersion`], and a sink, and the per-entity
//! serializers walk the entity writing events, recursing into
//! [`serialize_extensible_map`] for map-typed fields. One sink per pass; the
//! model is borrowed read-only and must stay frozen for the pass's duration.

pub mod extensible_map;
pub mod operation;
pub mod response;
pub mod security;
pub mod version;

pub use self::{
    extensible_map::serialize_extensible_map,
    operation::{CallbackSerializer, ExternalDocsSerializer, OperationSerializer},
    response::{MediaTypeSerializer, RefSerializer, ResponseSerializer},
    security::SecurityRequirementSerializer,
    version::{SpecVersion, allows},
};
use crate::{
    openapi::Extensions,
    writer::{StructuralWriter, WriteError},
};

/// Converts one entity instance into structural events for a target
/// revision.
///
/// Dispatch is static: one serializer value per entity type, chosen by the
/// caller. Implementations write only the fields their entity defines,
/// consult [`allows`] for revision-dependent fields, and finish with the
/// entity's own extensions.
pub trait ElementSerializer<E> {
    /// Writes `element` to the sink for the given revision.
    fn serialize<W: StructuralWriter>(
        &self,
        element: &E,
        version: SpecVersion,
        writer: &mut W,
    ) -> Result<(), WriteError>;
}

/// Writes an entity's extensions inside the currently open object, in
/// insertion order, each key filtered through the version gate.
pub fn write_extensions<W: StructuralWriter>(
    extensions: Option<&Extensions>,
    version: SpecVersion,
    writer: &mut W,
) -> Result<(), WriteError> {
    let Some(extensions) = extensions else {
        return Ok(());
    };

    for (key, value) in extensions {
        if !allows(key, version) {
            continue;
        }
        writer.property(key)?;
        value.write(version, writer)?;
    }
    Ok(())
}
