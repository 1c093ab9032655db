//! The generic extensible-map serializer.

use super::{ElementSerializer, SpecVersion, write_extensions};
use crate::{
    openapi::ExtensibleMap,
    writer::{StructuralWriter, WriteError},
};

/// Serializes a named entity map as a single structural object.
///
/// - `None` writes nothing at all: an omitted field is distinct from a field
///   holding an empty map, and downstream consumers treat the two
///   differently. The caller writes the field's property name only when it
///   also passes `Some` here.
/// - `Some` of an empty map writes exactly one empty object.
/// - Otherwise one property per entry is written in the map's own order,
///   each value produced by the element serializer, followed by the map's
///   own extensions filtered through the version gate in insertion order.
///
/// A failing element propagates immediately; events already written stay in
/// the sink.
pub fn serialize_extensible_map<T, S, W>(
    map: Option<&ExtensibleMap<T>>,
    element_serializer: &S,
    version: SpecVersion,
    writer: &mut W,
) -> Result<(), WriteError>
where
    S: ElementSerializer<T>,
    W: StructuralWriter,
{
    let Some(map) = map else {
        return Ok(());
    };

    writer.begin_object()?;
    for (key, element) in map {
        writer.property(key)?;
        element_serializer.serialize(element, version, writer)?;
    }
    write_extensions(map.extensions(), version, writer)?;
    writer.end_object()
}
