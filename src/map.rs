//! Ordered map type for mapping values.
//!
//! This module provides [`LispMap`], a wrapper around [`IndexMap`] whose keys are
//! `Option<String>`. A `None` key is the *null key*: its entry renders as a bare
//! value with no `:keyword` in front of it. Every other key renders as `:key`.
//!
//! Iteration follows insertion order, but the encoder never relies on it. Plists are
//! always rendered from [`LispMap::sorted_entries`], which orders the null key first
//! and text keys lexicographically, so two maps with the same entries always encode
//! to the same text.
//!
//! ## Examples
//!
//! ```rust
//! use serde_lispify::{LispMap, Value};
//!
//! let mut map = LispMap::new();
//! map.insert("name", "Alice");
//! map.insert("age", 30);
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::Value;
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};

/// Key of the reserved date entry a [`LispMap::date`] mapping carries.
pub const DATE_KEY: &str = "yyyymmdd";

/// An insertion-ordered map from optional string keys to values.
///
/// # Examples
///
/// ```rust
/// use serde_lispify::{LispMap, Value};
///
/// let mut map = LispMap::new();
/// map.insert("second", 2);
/// map.insert("first", 1);
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec![Some("second".to_string()), Some("first".to_string())]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LispMap(IndexMap<Option<String>, Value>);

impl LispMap {
    /// Creates an empty `LispMap`.
    #[must_use]
    pub fn new() -> Self {
        LispMap(IndexMap::new())
    }

    /// Creates an empty `LispMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        LispMap(IndexMap::with_capacity(capacity))
    }

    /// Creates a date mapping `{"yyyymmdd": "YYYYMMDD"}` for `date`.
    ///
    /// More keys (a human-readable form, say) can be inserted afterwards; the date
    /// rule still claims the mapping because the reserved key is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use serde_lispify::{encode, LispMap};
    ///
    /// let mut date = LispMap::date(NaiveDate::from_ymd_opt(1949, 10, 1).unwrap());
    /// date.insert("html", "Oct 1, 1949");
    /// assert_eq!(
    ///     encode(date).unwrap().to_text(),
    ///     "(:html \"Oct 1, 1949\" :yyyymmdd 19491001)"
    /// );
    /// ```
    #[must_use]
    pub fn date(date: NaiveDate) -> Self {
        let mut map = LispMap::with_capacity(1);
        map.insert(DATE_KEY, date.format("%Y%m%d").to_string());
        map
    }

    /// Inserts a value under a text key.
    ///
    /// If the map already contained this key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lispify::LispMap;
    ///
    /// let mut map = LispMap::new();
    /// assert!(map.insert("key", 42).is_none());
    /// assert!(map.insert("key", 43).is_some());
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(Some(key.into()), value.into())
    }

    /// Inserts a value under the null key. It renders without a `:keyword`.
    pub fn insert_bare(&mut self, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(None, value.into())
    }

    /// Inserts a value under an optional key.
    pub fn insert_entry(&mut self, key: Option<String>, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value stored under a text key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(&Some(key.to_string()))
    }

    /// Returns a reference to the value stored under the null key.
    #[must_use]
    pub fn get_bare(&self) -> Option<&Value> {
        self.0.get(&None)
    }

    /// Returns `true` if the map holds an entry under the text key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(&Some(key.to_string()))
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Option<String>, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Option<String>, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Option<String>, Value> {
        self.0.iter()
    }

    /// Returns the entries sorted by key: the null key first, then text keys in
    /// lexicographic order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lispify::LispMap;
    ///
    /// let mut map = LispMap::new();
    /// map.insert("b", 2);
    /// map.insert("a", 1);
    /// map.insert_bare(0);
    ///
    /// let keys: Vec<_> = map.sorted_entries().into_iter().map(|(k, _)| k.clone()).collect();
    /// assert_eq!(keys, vec![None, Some("a".to_string()), Some("b".to_string())]);
    /// ```
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(&Option<String>, &Value)> {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));
        entries
    }
}

impl From<HashMap<String, Value>> for LispMap {
    fn from(map: HashMap<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl From<BTreeMap<String, Value>> for LispMap {
    fn from(map: BTreeMap<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl IntoIterator for LispMap {
    type Item = (Option<String>, Value);
    type IntoIter = indexmap::map::IntoIter<Option<String>, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Value)> for LispMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        LispMap(iter.into_iter().map(|(k, v)| (Some(k), v)).collect())
    }
}

impl FromIterator<(Option<String>, Value)> for LispMap {
    fn from_iter<T: IntoIterator<Item = (Option<String>, Value)>>(iter: T) -> Self {
        LispMap(IndexMap::from_iter(iter))
    }
}
