//! Named entity maps that carry their own specification extensions.

use serde::{de::DeserializeOwned, ser::SerializeMap};

use super::{
    extensions::{Extension, Extensions},
    map::Map,
};

/// An insertion-ordered map of named sub-entities that is itself extensible.
///
/// The entries and the map's own extensions live in separate namespaces: a
/// `"200"` response entry and an `"x-rate-limit"` extension never collide,
/// and the extensions are emitted after all entries when the map is written.
///
/// An absent map (`Option::None` in the containing entity) and an empty map
/// are distinct states with distinct output; see
/// [`serialize_extensible_map`](crate::serializer::serialize_extensible_map).
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensibleMap<T> {
    entries: Map<String, T>,
    extensions: Option<Extensions>,
}

impl<T> ExtensibleMap<T> {
    /// Creates a new empty map.
    pub fn new() -> Self {
        Self {
            entries: Map::new(),
            extensions: None,
        }
    }

    /// Inserts an entry, replacing the value of an existing key.
    ///
    /// A replaced key keeps its original position, so output order stays
    /// stable under overwrites. Returns the previous value if the key was
    /// already present.
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        self.entries.insert(key.into(), value)
    }

    /// Returns the entry for the given key, if present.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    /// The number of entries, not counting extensions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries. A map with only extensions is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, T> {
        self.entries.iter()
    }

    /// The map's own extensions, if any.
    pub fn extensions(&self) -> Option<&Extensions> {
        self.extensions.as_ref()
    }

    /// Adds an entry, builder style.
    pub fn entry(mut self, key: impl Into<String>, value: T) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a single extension, builder style. Last write wins for a
    /// duplicate key.
    pub fn extension(mut self, key: impl Into<String>, value: impl Into<Extension>) -> Self {
        self.extensions
            .get_or_insert_with(Extensions::new)
            .insert(key.into(), value.into());
        self
    }

    /// Inserts an extension on the map itself.
    pub fn insert_extension(&mut self, key: impl Into<String>, value: Extension) {
        self.extensions
            .get_or_insert_with(Extensions::new)
            .insert(key.into(), value);
    }
}

impl<T> Default for ExtensibleMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(String, T)> for ExtensibleMap<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            extensions: None,
        }
    }
}

impl<'a, T> IntoIterator for &'a ExtensibleMap<T> {
    type Item = (&'a String, &'a T);
    type IntoIter = indexmap::map::Iter<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: serde::Serialize> serde::Serialize for ExtensibleMap<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extension_len = self.extensions.as_ref().map_or(0, Extensions::len);
        let mut state = serializer.serialize_map(Some(self.entries.len() + extension_len))?;
        for (key, value) in &self.entries {
            state.serialize_entry(key, value)?;
        }
        if let Some(extensions) = &self.extensions {
            for (key, value) in extensions {
                state.serialize_entry(key, value)?;
            }
        }
        state.end()
    }
}

impl<'de, T: DeserializeOwned> serde::Deserialize<'de> for ExtensibleMap<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut map = ExtensibleMap::new();
        for (key, value) in raw {
            if key.starts_with("x-") {
                map.insert_extension(key, Extension::from(value));
            } else {
                let element = serde_json::from_value(value).map_err(serde::de::Error::custom)?;
                map.insert(key, element);
            }
        }
        Ok(map)
    }
}
