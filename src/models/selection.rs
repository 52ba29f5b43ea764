//! Bulk selection of listing rows.

use std::collections::HashSet;

/// Row identifiers currently checked for bulk delete.
///
/// Lives for a single page view and is never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    keys: HashSet<String>,
}

impl SelectionSet {
    /// Check or uncheck `key`.
    pub fn set(&mut self, key: &str, checked: bool) {
        if checked {
            self.keys.insert(key.to_string());
        } else {
            self.keys.remove(key);
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Selected keys in the order they appear in `rows`.
    pub fn ordered<'a>(&self, rows: &'a [String]) -> Vec<&'a str> {
        rows.iter()
            .filter(|row| self.contains(row))
            .map(String::as_str)
            .collect()
    }
}
