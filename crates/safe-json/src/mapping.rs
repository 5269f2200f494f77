//! Null-safe JSON object.

use std::fmt;
use std::ops::Index;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::key::{AsSafeKey, SafeKey};
use crate::safe_none::SAFE_NONE;
use crate::value::SafeValue;

/// An insertion-ordered object whose lookups never fail.
///
/// A missing key reads as [`SAFE_NONE`], and deleting a missing key does
/// nothing. Everything else behaves like an ordinary ordered map.
///
/// # Example
///
/// ```
/// use safe_json::{SafeMapping, SafeValue};
///
/// let mut map = SafeMapping::new();
/// map.insert("name", "r1");
///
/// assert_eq!(map.get("name"), "r1");
/// assert!(map.get("missing").is_safe_none());
/// assert!(map["missing"]["deeper"].is_safe_none());
///
/// map.delete("missing");
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct SafeMapping {
    entries: IndexMap<String, SafeValue>,
}

impl SafeMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// The stored value, or [`SAFE_NONE`] when `key` is absent.
    pub fn get(&self, key: &str) -> &SafeValue {
        self.entries.get(key).unwrap_or(&SAFE_NONE)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut SafeValue> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts or replaces an entry. A new key goes to the end; a replaced
    /// key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SafeValue>) -> Option<SafeValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes `key` if present, preserving the order of the remaining
    /// entries. A missing key is a no-op.
    pub fn delete(&mut self, key: &str) -> Option<SafeValue> {
        self.entries.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &SafeValue)> + ExactSizeIterator {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = (&str, &mut SafeValue)> + ExactSizeIterator {
        self.entries.iter_mut().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &SafeValue> + ExactSizeIterator {
        self.entries.values()
    }

    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut SafeValue> + ExactSizeIterator {
        self.entries.values_mut()
    }

    pub fn as_map(&self) -> &IndexMap<String, SafeValue> {
        &self.entries
    }

    pub fn into_inner(self) -> IndexMap<String, SafeValue> {
        self.entries
    }
}

/// Integer keys are never members, so they read as the sentinel.
impl<K: AsSafeKey> Index<K> for SafeMapping {
    type Output = SafeValue;

    fn index(&self, key: K) -> &SafeValue {
        match key.as_safe_key() {
            SafeKey::Key(name) => self.get(name),
            SafeKey::Index(_) => &SAFE_NONE,
        }
    }
}

impl fmt::Debug for SafeMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for SafeMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl PartialEq<Map<String, Value>> for SafeMapping {
    fn eq(&self, other: &Map<String, Value>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        for (key, value) in self.iter() {
            match other.get(key) {
                Some(other_value) => {
                    if value != other_value {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }
}

impl PartialEq<SafeMapping> for Map<String, Value> {
    fn eq(&self, other: &SafeMapping) -> bool {
        other == self
    }
}

impl From<IndexMap<String, SafeValue>> for SafeMapping {
    fn from(entries: IndexMap<String, SafeValue>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<SafeValue>> FromIterator<(K, V)> for SafeMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect(),
        }
    }
}

impl<K: Into<String>, V: Into<SafeValue>> Extend<(K, V)> for SafeMapping {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(key, value)| (key.into(), value.into())));
    }
}

impl IntoIterator for SafeMapping {
    type Item = (String, SafeValue);
    type IntoIter = indexmap::map::IntoIter<String, SafeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a SafeMapping {
    type Item = (&'a String, &'a SafeValue);
    type IntoIter = indexmap::map::Iter<'a, String, SafeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> SafeMapping {
        [("b", 1), ("a", 2), ("c", 3)].into_iter().collect()
    }

    #[test]
    fn test_get_present_and_missing() {
        let map = sample();
        assert_eq!(*map.get("a"), 2);
        assert!(map.get("zzz").is_safe_none());
        assert!(std::ptr::eq(map.get("zzz"), &SAFE_NONE));
    }

    #[test]
    fn test_chained_missing_lookup() {
        let map = sample();
        assert!(map["zzz"]["deeper"][0].is_safe_none());
        assert!(map[0].is_safe_none());
    }

    #[test]
    fn test_delete() {
        let mut map = sample();
        assert_eq!(map.delete("a"), Some(SafeValue::from(2)));
        assert!(map.get("a").is_safe_none());
        assert_eq!(map.delete("a"), None);
        assert_eq!(map.delete("never"), None);
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut map = sample();
        assert_eq!(map.insert("a", 20), Some(SafeValue::from(2)));
        map.insert("d", "new");
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c", "d"]);
        assert_eq!(map["a"], 20);
    }

    #[test]
    fn test_ordinary_reads() {
        let map = sample();
        assert_eq!(map.len(), 3);
        assert!(!map.is_empty());
        assert!(map.contains_key("b"));
        assert!(!map.contains_key("zzz"));
        assert_eq!(map.values().filter_map(SafeValue::as_i64).sum::<i64>(), 6);
        assert_eq!((&map).into_iter().count(), 3);
        assert!(SafeMapping::new().is_empty());
    }

    #[test]
    fn test_equality_with_plain_map() {
        let map = sample();
        let plain = json!({"a": 2, "b": 1, "c": 3});
        let Value::Object(plain) = plain else {
            unreachable!()
        };
        assert_eq!(map, plain);
        assert_eq!(plain, map);

        let mut other = plain.clone();
        other.insert("d".to_string(), json!(4));
        assert_ne!(map, other);
    }

    #[test]
    fn test_debug_and_display() {
        let map = sample();
        assert_eq!(format!("{map:?}"), r#"{"b": Number(1), "a": Number(2), "c": Number(3)}"#);
        assert_eq!(map.to_string(), r#"{"b":1,"a":2,"c":3}"#);
    }
}
