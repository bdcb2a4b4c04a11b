//! Abstract type name to target type name table.

use indexmap::IndexMap;

/// Mapping from abstract schema type names to target type names.
///
/// Keys are unique and iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMapping {
    entries: IndexMap<String, String>,
}

impl TypeMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.entries.insert(from.into(), to.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Resolve an abstract name.
    ///
    /// Names without an entry pass through unchanged: they are assumed to be
    /// valid target syntax already (e.g. model names).
    pub fn resolve_primitive(&self, name: &str) -> String {
        self.get(name).unwrap_or(name).to_string()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TypeMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
