//! Case-insensitive, insertion-ordered maps.
//!
//! Every name-keyed collection in the module model (parameters, capabilities,
//! roles, scripts, functions) folds keys before storing them, so `"Get-Item"`
//! and `"GET-ITEM"` address the same slot. Collisions resolve by silent
//! overwrite in place; the external writer depends on that behavior, so it is
//! a contract here rather than an accident.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Insertion-ordered map whose keys compare case-insensitively.
///
/// A later insert under a differently-cased existing name replaces the stored
/// value but keeps the original insertion slot, so iteration order stays
/// stable across overwrites. Values carry their own display name; the folded
/// key exists only for lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CaseMap<V> {
    entries: IndexMap<String, V>,
}

// Deserialization must fold keys the same way `insert` does; deriving
// transparent would store input keys verbatim and let two casings of one
// name coexist.
impl<'de, V> Deserialize<'de> for CaseMap<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = IndexMap::<String, V>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

impl<V> Default for CaseMap<V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<V> CaseMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under a case-folded key, replacing any existing entry in place.
    ///
    /// Returns the displaced value when the name (under folding) was already
    /// present.
    pub fn insert(&mut self, name: &str, value: V) -> Option<V> {
        self.entries.insert(fold(name), value)
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.get(&fold(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut V> {
        self.entries.get_mut(&fold(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&fold(name))
    }

    /// Remove an entry, preserving the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<V> {
        self.entries.shift_remove(&fold(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.values_mut()
    }

    /// (folded key, value) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> FromIterator<(String, V)> for CaseMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(&name, value);
        }
        map
    }
}

// Unicode lowercase rather than ASCII: role and principal names routinely
// carry non-ASCII characters.
fn fold(name: &str) -> String {
    name.to_lowercase()
}
