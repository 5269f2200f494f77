//! Null-safe JSON array.

use std::fmt;
use std::ops::{Bound, Index, RangeBounds};

use serde_json::Value;

use crate::error::SafeJsonError;
use crate::key::{AsSafeKey, SafeKey};
use crate::safe_none::SAFE_NONE;
use crate::value::SafeValue;
use crate::Result;

/// An ordered list whose out-of-range integer lookups never fail.
///
/// Positions may be negative, counting back from the end. Any integer
/// position outside the list reads as [`SAFE_NONE`] and deletes as a no-op.
/// Only integer positions are safe: a string key is a type error, exactly as
/// it would be on an ordinary list.
///
/// # Example
///
/// ```
/// use safe_json::{SafeKey, SafeSequence};
///
/// let seq: SafeSequence = vec!["a", "b"].into_iter().collect();
///
/// assert_eq!(seq.get(0), "a");
/// assert_eq!(seq.get(-1), "b");
/// assert!(seq.get(2).is_safe_none());
/// assert!(seq.get_key(SafeKey::Key("name")).is_err());
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct SafeSequence {
    items: Vec<SafeValue>,
}

impl SafeSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Maps a possibly negative position onto the underlying vector.
    fn position(&self, index: i64) -> Option<usize> {
        let len = self.items.len();
        let pos = if index < 0 {
            let back = usize::try_from(index.unsigned_abs()).ok()?;
            len.checked_sub(back)?
        } else {
            usize::try_from(index).ok()?
        };
        (pos < len).then_some(pos)
    }

    /// The element at `index`, or [`SAFE_NONE`] when out of range.
    pub fn get(&self, index: i64) -> &SafeValue {
        self.position(index).map_or(&SAFE_NONE, |pos| &self.items[pos])
    }

    pub fn get_mut(&mut self, index: i64) -> Option<&mut SafeValue> {
        let pos = self.position(index)?;
        self.items.get_mut(pos)
    }

    /// [`get`](Self::get) for a key of unknown kind.
    ///
    /// # Errors
    ///
    /// [`SafeJsonError::InvalidIndexType`] for a string key.
    pub fn get_key<K: AsSafeKey>(&self, key: K) -> Result<&SafeValue> {
        match key.as_safe_key() {
            SafeKey::Index(index) => Ok(self.get(index)),
            key @ SafeKey::Key(_) => Err(SafeJsonError::invalid_index("array", key)),
        }
    }

    /// Removes and returns the element at `index`. Out of range is a no-op.
    pub fn delete(&mut self, index: i64) -> Option<SafeValue> {
        let pos = self.position(index)?;
        Some(self.items.remove(pos))
    }

    /// [`delete`](Self::delete) for a key of unknown kind.
    ///
    /// # Errors
    ///
    /// [`SafeJsonError::InvalidIndexType`] for a string key; the sequence is
    /// left untouched.
    pub fn delete_key<K: AsSafeKey>(&mut self, key: K) -> Result<Option<SafeValue>> {
        match key.as_safe_key() {
            SafeKey::Index(index) => Ok(self.delete(index)),
            key @ SafeKey::Key(_) => Err(SafeJsonError::invalid_index("array", key)),
        }
    }

    /// Ordinary slicing. Bounds past the end are clamped, and an inverted
    /// range is empty.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> &[SafeValue] {
        let len = self.items.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => len,
        }
        .min(len);
        if start >= end {
            return &[];
        }
        &self.items[start..end]
    }

    pub fn push(&mut self, value: impl Into<SafeValue>) {
        self.items.push(value.into());
    }

    /// Inserts before `index`, clamped to the current length.
    pub fn insert(&mut self, index: usize, value: impl Into<SafeValue>) {
        let index = index.min(self.items.len());
        self.items.insert(index, value.into());
    }

    pub fn pop(&mut self) -> Option<SafeValue> {
        self.items.pop()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains<T: ?Sized>(&self, value: &T) -> bool
    where
        SafeValue: PartialEq<T>,
    {
        self.items.iter().any(|item| item == value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SafeValue> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, SafeValue> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[SafeValue] {
        &self.items
    }

    pub fn into_inner(self) -> Vec<SafeValue> {
        self.items
    }
}

/// Infallible lookup. Same semantics as [`SafeSequence::get_key`].
///
/// # Panics
///
/// On a string key.
impl<K: AsSafeKey> Index<K> for SafeSequence {
    type Output = SafeValue;

    fn index(&self, key: K) -> &SafeValue {
        match self.get_key(key) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl fmt::Debug for SafeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl fmt::Display for SafeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl PartialEq<[Value]> for SafeSequence {
    fn eq(&self, other: &[Value]) -> bool {
        self.items.len() == other.len() && self.items.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl PartialEq<Vec<Value>> for SafeSequence {
    fn eq(&self, other: &Vec<Value>) -> bool {
        self == other.as_slice()
    }
}

impl PartialEq<SafeSequence> for Vec<Value> {
    fn eq(&self, other: &SafeSequence) -> bool {
        other == self
    }
}

impl From<Vec<SafeValue>> for SafeSequence {
    fn from(items: Vec<SafeValue>) -> Self {
        Self { items }
    }
}

impl<T: Into<SafeValue>> FromIterator<T> for SafeSequence {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: Into<SafeValue>> Extend<T> for SafeSequence {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for SafeSequence {
    type Item = SafeValue;
    type IntoIter = std::vec::IntoIter<SafeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a SafeSequence {
    type Item = &'a SafeValue;
    type IntoIter = std::slice::Iter<'a, SafeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
