//! Map type used throughout the OpenAPI model.
//!
//! Property order is significant in an emitted document: downstream consumers
//! diff and snapshot generated specifications, so every map must replay its
//! keys in insertion order. `IndexMap` provides that; a sorted map would
//! silently reorder `"default"` before `"200"` and similar.

pub use indexmap::IndexMap as Map;
