//! The `SafeNone` sentinel.
//!
//! Every failed lookup in this crate resolves to the single shared
//! [`SAFE_NONE`] value. The sentinel can itself be indexed with anything,
//! which yields the sentinel again, so arbitrarily long lookup chains
//! through missing data never fail.
//!
//! Equality is loose: `SafeNone` equals numeric zero, JSON `null`,
//! `Option::None`, `()` and itself. It still is not `null` under identity
//! checks ([`SafeValue::is_null`] is false for it).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::ops::{Add, Mul, RangeBounds};

use crate::error::SafeJsonError;
use crate::key::AsSafeKey;
use crate::mapping::SafeMapping;
use crate::value::SafeValue;
use crate::Result;

/// The shared sentinel returned for every missing key and out-of-range index.
pub static SAFE_NONE: SafeValue = SafeValue::SafeNone(SafeNone);

/// The sentinel type. Stateless and immutable.
///
/// Reads answer as an empty container would; writes fail with
/// [`SafeJsonError::MutationOnSentinel`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SafeNone;

impl SafeNone {
    /// Any lookup on the sentinel yields the sentinel.
    pub fn get<K: AsSafeKey>(&self, _key: K) -> &'static SafeValue {
        &SAFE_NONE
    }

    /// Same as [`get`](Self::get); the default is ignored.
    pub fn get_or<K: AsSafeKey, D>(&self, _key: K, _default: D) -> &'static SafeValue {
        &SAFE_NONE
    }

    pub fn slice<R: RangeBounds<usize>>(&self, _range: R) -> &'static SafeValue {
        &SAFE_NONE
    }

    /// Deleting from the sentinel is a no-op.
    pub fn delete<K: AsSafeKey>(&self, _key: K) {}

    pub fn delete_slice<R: RangeBounds<usize>>(&self, _range: R) {}

    pub fn len(&self) -> usize {
        0
    }

    pub fn is_empty(&self) -> bool {
        true
    }

    /// The sentinel is falsy.
    pub fn is_truthy(&self) -> bool {
        false
    }

    pub fn iter(&self) -> iter::Empty<&'static SafeValue> {
        iter::empty()
    }

    /// The sentinel never contains anything.
    pub fn contains<T: ?Sized>(&self, _value: &T) -> bool {
        false
    }

    pub fn contains_key<K: AsSafeKey>(&self, _key: K) -> bool {
        false
    }

    pub fn has_key<K: AsSafeKey>(&self, _key: K) -> bool {
        false
    }

    // ---------------------------------------------------------------- Mapping reads

    pub fn keys(&self) -> iter::Empty<&'static str> {
        iter::empty()
    }

    pub fn values(&self) -> iter::Empty<&'static SafeValue> {
        iter::empty()
    }

    pub fn items(&self) -> iter::Empty<(&'static str, &'static SafeValue)> {
        iter::empty()
    }

    pub fn key_list(&self) -> Vec<&'static str> {
        Vec::new()
    }

    pub fn value_list(&self) -> Vec<&'static SafeValue> {
        Vec::new()
    }

    pub fn item_list(&self) -> Vec<(&'static str, &'static SafeValue)> {
        Vec::new()
    }

    pub fn copy(&self) -> &'static SafeValue {
        &SAFE_NONE
    }

    /// Removing a keyed entry yields the sentinel.
    pub fn pop<K: AsSafeKey>(&self, _key: K) -> &'static SafeValue {
        &SAFE_NONE
    }

    pub fn pop_item(&self) -> &'static SafeValue {
        &SAFE_NONE
    }

    /// Removing "the last element" has no fallback: there is none.
    ///
    /// # Errors
    ///
    /// Always returns [`SafeJsonError::LookupNotFound`].
    pub fn pop_last(&self) -> Result<&'static SafeValue> {
        Err(SafeJsonError::lookup("pop_last"))
    }

    pub fn clear(&self) {}

    // ---------------------------------------------------------------- Mapping writes

    /// # Errors
    ///
    /// Always returns [`SafeJsonError::MutationOnSentinel`].
    pub fn set_item<K: AsSafeKey, V>(&self, _key: K, _value: V) -> Result<()> {
        Err(SafeJsonError::mutation("set_item"))
    }

    /// # Errors
    ///
    /// Always returns [`SafeJsonError::MutationOnSentinel`].
    pub fn update<I: IntoIterator>(&self, _entries: I) -> Result<()> {
        Err(SafeJsonError::mutation("update"))
    }

    /// # Errors
    ///
    /// Always returns [`SafeJsonError::MutationOnSentinel`].
    pub fn set_default<K: AsSafeKey, V>(&self, _key: K, _default: V) -> Result<&'static SafeValue> {
        Err(SafeJsonError::mutation("set_default"))
    }

    /// # Errors
    ///
    /// Always returns [`SafeJsonError::MutationOnSentinel`].
    #[allow(clippy::wrong_self_convention)]
    pub fn from_keys<I: IntoIterator>(&self, _keys: I) -> Result<SafeMapping> {
        Err(SafeJsonError::mutation("from_keys"))
    }

    // ---------------------------------------------------------------- Sequence reads

    /// Concatenation with the sentinel yields the other operand unchanged.
    pub fn concat<T>(&self, other: T) -> T {
        other
    }

    pub fn repeat(&self, _times: usize) -> &'static SafeValue {
        &SAFE_NONE
    }

    /// The sentinel is its own reverse.
    pub fn reversed(&self) -> &'static SafeValue {
        &SAFE_NONE
    }

    pub fn count<T: ?Sized>(&self, _value: &T) -> usize {
        0
    }

    pub fn reverse(&self) {}

    /// Already sorted.
    pub fn sort(&self) {}

    /// # Errors
    ///
    /// Always returns [`SafeJsonError::LookupNotFound`]: the sentinel holds
    /// no values, so no position exists.
    pub fn index<T: ?Sized>(&self, _value: &T) -> Result<usize> {
        Err(SafeJsonError::lookup("index"))
    }

    // ---------------------------------------------------------------- Sequence writes

    /// # Errors
    ///
    /// Always returns [`SafeJsonError::MutationOnSentinel`].
    pub fn try_add_assign<T>(&self, _other: T) -> Result<()> {
        Err(SafeJsonError::mutation("add_assign"))
    }

    /// # Errors
    ///
    /// Always returns [`SafeJsonError::MutationOnSentinel`].
    pub fn try_mul_assign(&self, _times: usize) -> Result<()> {
        Err(SafeJsonError::mutation("mul_assign"))
    }

    /// # Errors
    ///
    /// Always returns [`SafeJsonError::MutationOnSentinel`].
    pub fn set_slice<R: RangeBounds<usize>, I: IntoIterator>(&self, _range: R, _values: I) -> Result<()> {
        Err(SafeJsonError::mutation("set_slice"))
    }

    /// # Errors
    ///
    /// Always returns [`SafeJsonError::MutationOnSentinel`].
    pub fn append<V>(&self, _value: V) -> Result<()> {
        Err(SafeJsonError::mutation("append"))
    }

    /// # Errors
    ///
    /// Always returns [`SafeJsonError::MutationOnSentinel`].
    pub fn extend<I: IntoIterator>(&self, _values: I) -> Result<()> {
        Err(SafeJsonError::mutation("extend"))
    }

    /// # Errors
    ///
    /// Always returns [`SafeJsonError::MutationOnSentinel`].
    pub fn insert<V>(&self, _index: i64, _value: V) -> Result<()> {
        Err(SafeJsonError::mutation("insert"))
    }

    /// # Errors
    ///
    /// Always returns [`SafeJsonError::MutationOnSentinel`].
    pub fn remove<T: ?Sized>(&self, _value: &T) -> Result<()> {
        Err(SafeJsonError::mutation("remove"))
    }
}

impl fmt::Display for SafeNone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SafeNone")
    }
}

impl Hash for SafeNone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(0);
    }
}

impl<K: AsSafeKey> std::ops::Index<K> for SafeNone {
    type Output = SafeValue;

    fn index(&self, _key: K) -> &SafeValue {
        &SAFE_NONE
    }
}

impl<'a> IntoIterator for &'a SafeNone {
    type Item = &'static SafeValue;
    type IntoIter = iter::Empty<&'static SafeValue>;

    fn into_iter(self) -> Self::IntoIter {
        iter::empty()
    }
}

impl IntoIterator for SafeNone {
    type Item = &'static SafeValue;
    type IntoIter = iter::Empty<&'static SafeValue>;

    fn into_iter(self) -> Self::IntoIter {
        iter::empty()
    }
}

impl<T> Add<T> for SafeNone {
    type Output = T;

    fn add(self, rhs: T) -> T {
        rhs
    }
}

macro_rules! repeat_ops {
    ($($ty:ty)*) => {
        $(
            impl Mul<$ty> for SafeNone {
                type Output = SafeNone;

                fn mul(self, _rhs: $ty) -> SafeNone {
                    SafeNone
                }
            }

            impl Mul<SafeNone> for $ty {
                type Output = SafeNone;

                fn mul(self, _rhs: SafeNone) -> SafeNone {
                    SafeNone
                }
            }
        )*
    };
}

repeat_ops!(i32 i64 u32 u64 usize);
