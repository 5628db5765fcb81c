//! Ordered metadata map.
//!
//! This module provides [`Metadata`], a wrapper around [`IndexMap`] that keeps
//! keys in insertion order. Graphs, nodes and edges all carry one; unknown keys
//! are preserved as-is, and the compact `metadata:` block is written in the same
//! order the keys were inserted.
//!
//! ## Examples
//!
//! ```rust
//! use autoon::{Metadata, Value};
//!
//! let mut map = Metadata::new();
//! map.insert("description".to_string(), Value::from("Login flow"));
//! map.insert("version".to_string(), Value::from("1.0.0"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("version").and_then(|v| v.as_str()), Some("1.0.0"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered map of string keys to metadata values.
///
/// # Examples
///
/// ```rust
/// use autoon::{Metadata, Value};
///
/// let mut map = Metadata::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(IndexMap<String, Value>);

impl Metadata {
    /// Creates an empty `Metadata` map.
    #[must_use]
    pub fn new() -> Self {
        Metadata(IndexMap::new())
    }

    /// Creates an empty `Metadata` map with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Metadata(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value for the key.
    ///
    /// An existing key keeps its position.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for Metadata {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Metadata {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Metadata(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, Value)> for Metadata {
    fn extend<T: IntoIterator<Item = (String, Value)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
