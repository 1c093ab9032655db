//! # oaswrite
//!
//! Version-aware OpenAPI document model and writer.
//!
//! This crate provides the main API for modeling and serializing
//! API-description documents, re-exporting all types from the
//! `oaswrite-core` crate.

// Re-export the model, serializer, and writer modules for access to internal types
pub use oaswrite_core::{openapi, serializer, writer};
// Re-export all main types at the crate root for convenience
pub use oaswrite_core::{
    Callback, CallbackSerializer, ComparedMap, ElementSerializer, EventWriter, Extension,
    ExtensibleMap, Extensions, ExternalDocs, ExternalDocsSerializer, JsonWriter, KeyComparer, Map,
    MediaType, MediaTypeSerializer, Operation, OperationSerializer, Ref, RefSerializer,
    ReferenceIdentity, Response, ResponseSerializer, Responses, SecurityRequirement,
    SecurityRequirementSerializer, SecurityScheme, SecuritySchemeType, SpecVersion,
    StructuralWriter, WriteError, WriteEvent, allows, serialize_extensible_map, write_extensions,
};
