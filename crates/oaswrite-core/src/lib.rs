//! # oaswrite-core
//!
//! Core model types and version-aware serialization for oaswrite.
//!
//! This crate models API-description documents (operations, responses,
//! security requirements) and serializes them into structural events across
//! multiple revisions of the description language. The serialization core is
//! a generic mechanism for writing extensible, version-aware maps of
//! polymorphic elements; security-scheme keys compare by their resolved
//! component identity.

pub mod openapi;
pub mod serializer;
pub mod writer;

// Re-export main types at the crate root for convenience
pub use openapi::{
    Callback, ComparedMap, Extension, ExtensibleMap, Extensions, ExternalDocs, KeyComparer, Map,
    MediaType, Operation, Ref, ReferenceIdentity, Response, Responses, SecurityRequirement,
    SecurityScheme, SecuritySchemeType,
};
pub use serializer::{
    CallbackSerializer, ElementSerializer, ExternalDocsSerializer, MediaTypeSerializer,
    OperationSerializer, RefSerializer, ResponseSerializer, SecurityRequirementSerializer,
    SpecVersion, allows, serialize_extensible_map, write_extensions,
};
pub use writer::{EventWriter, JsonWriter, StructuralWriter, WriteError, WriteEvent};
