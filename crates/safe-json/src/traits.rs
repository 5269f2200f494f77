//! Read-only container interfaces.
//!
//! [`SafeNone`] answers both as an empty mapping and as an empty sequence,
//! so generic code can accept either a real container or the sentinel
//! left behind by a failed lookup.

use std::iter;

use crate::mapping::SafeMapping;
use crate::safe_none::{SafeNone, SAFE_NONE};
use crate::sequence::SafeSequence;
use crate::value::SafeValue;

/// Mapping reads that never fail.
pub trait ReadMapping {
    /// The value under `key`, or the sentinel.
    fn get(&self, key: &str) -> &SafeValue;
    fn contains_key(&self, key: &str) -> bool;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn keys(&self) -> impl Iterator<Item = &str>;
    fn values(&self) -> impl Iterator<Item = &SafeValue>;
    fn items(&self) -> impl Iterator<Item = (&str, &SafeValue)>;
}

/// Sequence reads that never fail on an integer position.
pub trait ReadSequence {
    /// The element at `index` (negative counts from the end), or the
    /// sentinel.
    fn get(&self, index: i64) -> &SafeValue;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn iter(&self) -> impl Iterator<Item = &SafeValue>;

    /// Number of elements equal to `value`.
    fn count(&self, value: &SafeValue) -> usize {
        self.iter().filter(|item| *item == value).count()
    }

    fn contains(&self, value: &SafeValue) -> bool {
        self.iter().any(|item| item == value)
    }
}

impl ReadMapping for SafeMapping {
    fn get(&self, key: &str) -> &SafeValue {
        SafeMapping::get(self, key)
    }

    fn contains_key(&self, key: &str) -> bool {
        SafeMapping::contains_key(self, key)
    }

    fn len(&self) -> usize {
        SafeMapping::len(self)
    }

    fn keys(&self) -> impl Iterator<Item = &str> {
        SafeMapping::keys(self)
    }

    fn values(&self) -> impl Iterator<Item = &SafeValue> {
        SafeMapping::values(self)
    }

    fn items(&self) -> impl Iterator<Item = (&str, &SafeValue)> {
        SafeMapping::iter(self)
    }
}

impl ReadSequence for SafeSequence {
    fn get(&self, index: i64) -> &SafeValue {
        SafeSequence::get(self, index)
    }

    fn len(&self) -> usize {
        SafeSequence::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = &SafeValue> {
        SafeSequence::iter(self)
    }
}

impl ReadMapping for SafeNone {
    fn get(&self, _key: &str) -> &SafeValue {
        &SAFE_NONE
    }

    fn contains_key(&self, _key: &str) -> bool {
        false
    }

    fn len(&self) -> usize {
        0
    }

    fn keys(&self) -> impl Iterator<Item = &str> {
        iter::empty()
    }

    fn values(&self) -> impl Iterator<Item = &SafeValue> {
        iter::empty()
    }

    fn items(&self) -> impl Iterator<Item = (&str, &SafeValue)> {
        iter::empty()
    }
}

impl ReadSequence for SafeNone {
    fn get(&self, _index: i64) -> &SafeValue {
        &SAFE_NONE
    }

    fn len(&self) -> usize {
        0
    }

    fn iter(&self) -> impl Iterator<Item = &SafeValue> {
        iter::empty()
    }
}
