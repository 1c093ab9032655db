//! Security schemes and reference-identity keyed requirements.
//!
//! A security requirement maps scheme handles to scope lists. Two handle
//! instances count as the same key whenever they resolve to the same named
//! component, regardless of which in-memory instance holds them and
//! regardless of their structural content. Two handles that have not been
//! resolved are never the same key, even if structurally identical: equality
//! here means "provably the same named component", nothing weaker.

use std::hash::{DefaultHasher, Hash, Hasher};

use serde::ser::SerializeMap;

use super::{extensions::Extensions, map::Map, reference::Ref};

/// The type of a security scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SecuritySchemeType {
    /// An API key passed in a header, query parameter, or cookie.
    #[serde(rename = "apiKey")]
    ApiKey,
    /// An HTTP authentication scheme (e.g., basic, bearer).
    #[serde(rename = "http")]
    Http,
    /// An OAuth 2.0 flow.
    #[serde(rename = "oauth2")]
    OAuth2,
    /// OpenID Connect discovery.
    #[serde(rename = "openIdConnect")]
    OpenIdConnect,
}

/// A security scheme definition or handle.
///
/// When the scheme stands in for a named component, `reference` holds the
/// resolved component reference; an inline scheme has no reference. The
/// reference is an in-memory resolution product and is never serialized as a
/// field of the scheme itself.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SecurityScheme {
    /// The type of the scheme.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scheme_type: Option<SecuritySchemeType>,

    /// A description of the scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The name of the header, query parameter, or cookie (apiKey type).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The HTTP authentication scheme name (http type).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    /// The resolved component reference, when this handle points at a named
    /// scheme under the document's components.
    #[serde(skip)]
    pub reference: Option<Ref>,

    /// Extension properties.
    #[serde(skip_serializing_if = "Option::is_none", flatten)]
    pub extensions: Option<Extensions>,
}

impl SecurityScheme {
    /// Creates a new empty inline scheme.
    pub fn new() -> Self {
        Self {
            scheme_type: None,
            description: None,
            name: None,
            scheme: None,
            reference: None,
            extensions: None,
        }
    }

    /// Creates a handle resolved to the named security scheme component.
    pub fn reference(name: impl AsRef<str>) -> Self {
        Self {
            reference: Some(Ref::security_scheme(name)),
            ..Self::new()
        }
    }

    /// Sets the scheme type.
    pub fn scheme_type(mut self, scheme_type: SecuritySchemeType) -> Self {
        self.scheme_type = Some(scheme_type);
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the parameter name for apiKey schemes.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the HTTP authentication scheme name.
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// The resolved component identifier, if this handle has been resolved.
    pub fn reference_id(&self) -> Option<&str> {
        self.reference.as_ref().map(Ref::name)
    }
}

impl Default for SecurityScheme {
    fn default() -> Self {
        Self::new()
    }
}

/// A key-comparison strategy installed into a [`ComparedMap`] at
/// construction time and used uniformly for every insertion and lookup.
pub trait KeyComparer<K> {
    /// Whether two keys are the same key.
    fn eq(&self, a: &K, b: &K) -> bool;

    /// A hash consistent with [`eq`](Self::eq): equal keys hash equally.
    fn hash_of(&self, key: &K) -> u64;
}

/// Compares scheme handles by their resolved component identifier only.
///
/// Two handles are equal iff both are resolved and their identifiers match
/// as strings. Unresolved handles hash to a fixed sentinel and are never
/// equal to each other; the resulting hash collisions are disambiguated by
/// the equality check and are acceptable because unresolved handles are rare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReferenceIdentity;

impl KeyComparer<SecurityScheme> for ReferenceIdentity {
    fn eq(&self, a: &SecurityScheme, b: &SecurityScheme) -> bool {
        match (a.reference_id(), b.reference_id()) {
            (Some(a_id), Some(b_id)) => a_id == b_id,
            _ => false,
        }
    }

    fn hash_of(&self, key: &SecurityScheme) -> u64 {
        match key.reference_id() {
            Some(id) => {
                let mut hasher = DefaultHasher::new();
                id.hash(&mut hasher);
                hasher.finish()
            }
            None => 0,
        }
    }
}

/// An insertion-ordered keyed container whose key comparison is an injected
/// [`KeyComparer`] value rather than the key type's own `Eq`/`Hash`.
///
/// The comparer is part of the construction contract: it is fixed when the
/// map is created and applied to every operation, never overridden per call.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparedMap<K, V, C> {
    comparer: C,
    entries: Vec<(K, V)>,
}

impl<K, V, C: KeyComparer<K>> ComparedMap<K, V, C> {
    /// Creates an empty map using the given comparer for all key operations.
    pub fn with_comparer(comparer: C) -> Self {
        Self {
            comparer,
            entries: Vec::new(),
        }
    }

    /// Inserts an entry. If an equal key is already present its value is
    /// replaced in place (last write wins, original position kept) and the
    /// previous value is returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.comparer.hash_of(&key);
        for (existing, slot) in &mut self.entries {
            // Hash is a prefilter; equality decides.
            if self.comparer.hash_of(existing) == hash && self.comparer.eq(existing, &key) {
                return Some(std::mem::replace(slot, value));
            }
        }
        self.entries.push((key, value));
        None
    }

    /// Returns the value for a key equal to `key`, if present.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find(|(existing, _)| self.comparer.eq(existing, key))
            .map(|(_, value)| value)
    }

    /// Whether a key equal to `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V, C: KeyComparer<K> + Default> Default for ComparedMap<K, V, C> {
    fn default() -> Self {
        Self::with_comparer(C::default())
    }
}

/// A security requirement: scheme handles mapped to the scope names required
/// for execution.
///
/// Keyed by resolved component identity via [`ReferenceIdentity`]. Scope
/// lists are owned by the caller and are never deduplicated or reordered.
pub type SecurityRequirement = ComparedMap<SecurityScheme, Vec<String>, ReferenceIdentity>;

impl SecurityRequirement {
    /// Creates an empty requirement with reference-identity key semantics.
    pub fn new() -> Self {
        Self::with_comparer(ReferenceIdentity)
    }

    /// Adds a scheme with its required scopes, builder style.
    pub fn require(mut self, scheme: SecurityScheme, scopes: Vec<String>) -> Self {
        self.insert(scheme, scopes);
        self
    }
}

impl serde::Serialize for SecurityRequirement {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(None)?;
        for (scheme, scopes) in self.iter() {
            // Unresolved handles have no name to write under.
            if let Some(id) = scheme.reference_id() {
                state.serialize_entry(id, scopes)?;
            }
        }
        state.end()
    }
}

impl<'de> serde::Deserialize<'de> for SecurityRequirement {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::<String, Vec<String>>::deserialize(deserializer)?;
        let mut requirement = SecurityRequirement::new();
        for (name, scopes) in raw {
            requirement.insert(SecurityScheme::reference(name), scopes);
        }
        Ok(requirement)
    }
}
