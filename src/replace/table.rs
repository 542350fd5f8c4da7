use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping from search key to replacement text.
///
/// Iteration order is the order in which the sequential engine applies its
/// rules. Re-inserting a key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplacementTable {
    entries: IndexMap<String, String>,
}

impl ReplacementTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or update a rule, returning the previous replacement for `key`.
    pub fn insert(&mut self, key: impl Into<String>, replacement: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), replacement.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rules in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ReplacementTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for ReplacementTable {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, replacement) in iter {
            self.insert(key, replacement);
        }
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
