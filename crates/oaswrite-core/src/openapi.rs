//! OpenAPI model types.
//!
//! Plain-data entities making up the in-memory document model. The model is
//! frozen for the duration of a serialization pass; the serializer only ever
//! borrows it read-only.

pub mod extensible_map;
pub mod extensions;
pub mod external_docs;
pub mod map;
pub mod operation;
pub mod reference;
pub mod response;
pub mod security;

pub use self::{
    extensible_map::ExtensibleMap,
    extensions::{Extension, Extensions},
    external_docs::ExternalDocs,
    map::Map,
    operation::{Callback, Operation},
    reference::Ref,
    response::{MediaType, Response, Responses},
    security::{
        ComparedMap, KeyComparer, ReferenceIdentity, SecurityRequirement, SecurityScheme,
        SecuritySchemeType,
    },
};
