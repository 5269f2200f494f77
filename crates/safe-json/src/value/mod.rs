//! The transcoded value tree.

mod partial_eq;
mod ser;

use std::fmt;
use std::ops::{Index, RangeBounds};
use std::str::FromStr;

use serde_json::{Number, Value};

use crate::error::SafeJsonError;
use crate::key::{AsSafeKey, SafeKey};
use crate::mapping::SafeMapping;
use crate::safe_none::{SafeNone, SAFE_NONE};
use crate::sequence::SafeSequence;
use crate::Result;

/// A JSON value whose containers are null-safe.
///
/// Mirrors [`serde_json::Value`] with two differences: objects and arrays
/// are [`SafeMapping`] and [`SafeSequence`], and the extra
/// [`SafeValue::SafeNone`] variant is what failed lookups resolve to.
/// Parsed trees never store `SafeNone`; it only appears as a lookup result.
///
/// `SafeValue` is `PartialEq` but not `Eq`: the sentinel equals both `null`
/// and `0`, which are not equal to each other.
#[derive(Clone, Default)]
pub enum SafeValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(SafeSequence),
    Object(SafeMapping),
    /// The lookup-failure sentinel. See [`SAFE_NONE`].
    SafeNone(SafeNone),
}

impl SafeValue {
    /// Looks up a key or index one level down.
    ///
    /// - Objects return the member, or the sentinel for a missing name.
    ///   Integer keys are never object members and also give the sentinel.
    /// - Arrays return the element, or the sentinel for an out-of-range
    ///   integer index.
    /// - `null` and the sentinel return the sentinel for any key.
    ///
    /// # Errors
    ///
    /// [`SafeJsonError::InvalidIndexType`] for a string key on an array, or
    /// any key on a boolean, number, or string.
    ///
    /// # Example
    ///
    /// ```
    /// use safe_json::{from_str, SafeValue};
    ///
    /// let doc = from_str(r#"{"items": [10, 20]}"#).unwrap();
    /// assert_eq!(doc.get("items")?.get(1)?, &20);
    /// assert!(doc.get("items")?.get(5)?.is_safe_none());
    /// assert!(doc.get("missing")?.get("deeper")?.is_safe_none());
    /// assert!(doc.get("items")?.get("name").is_err());
    /// # Ok::<(), safe_json::SafeJsonError>(())
    /// ```
    pub fn get<K: AsSafeKey>(&self, key: K) -> Result<&SafeValue> {
        let key = key.as_safe_key();
        match self {
            SafeValue::Object(map) => Ok(match key {
                SafeKey::Key(name) => map.get(name),
                SafeKey::Index(_) => &SAFE_NONE,
            }),
            SafeValue::Array(seq) => seq.get_key(key),
            SafeValue::Null | SafeValue::SafeNone(_) => Ok(&SAFE_NONE),
            scalar => Err(SafeJsonError::invalid_index(scalar.kind(), key)),
        }
    }

    /// Mutable counterpart of [`get`](Self::get). Returns `Ok(None)` where
    /// `get` would return the sentinel.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn get_mut<K: AsSafeKey>(&mut self, key: K) -> Result<Option<&mut SafeValue>> {
        let key = key.as_safe_key();
        match self {
            SafeValue::Object(map) => Ok(match key {
                SafeKey::Key(name) => map.get_mut(name),
                SafeKey::Index(_) => None,
            }),
            SafeValue::Array(seq) => match key {
                SafeKey::Index(index) => Ok(seq.get_mut(index)),
                SafeKey::Key(_) => Err(SafeJsonError::invalid_index("array", key)),
            },
            SafeValue::Null | SafeValue::SafeNone(_) => Ok(None),
            scalar => Err(SafeJsonError::invalid_index(scalar.kind(), key)),
        }
    }

    /// Removes a key or index one level down. Missing keys and out-of-range
    /// indices are a no-op, as is any delete on `null` or the sentinel.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn delete<K: AsSafeKey>(&mut self, key: K) -> Result<Option<SafeValue>> {
        let key = key.as_safe_key();
        match self {
            SafeValue::Object(map) => Ok(match key {
                SafeKey::Key(name) => map.delete(name),
                SafeKey::Index(_) => None,
            }),
            SafeValue::Array(seq) => seq.delete_key(key),
            SafeValue::Null | SafeValue::SafeNone(_) => Ok(None),
            scalar => Err(SafeJsonError::invalid_index(scalar.kind(), key)),
        }
    }

    /// Copies out a range of an array. The sentinel (and `null`) slice to the
    /// sentinel.
    ///
    /// # Errors
    ///
    /// [`SafeJsonError::InvalidIndexType`] when `self` is an object or a
    /// non-null scalar.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Result<SafeValue> {
        match self {
            SafeValue::Array(seq) => Ok(SafeValue::Array(seq.slice(range).iter().cloned().collect())),
            SafeValue::Null | SafeValue::SafeNone(_) => Ok(SafeValue::SafeNone(SafeNone)),
            other => Err(SafeJsonError::invalid_index(other.kind(), "a range")),
        }
    }

    /// Name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            SafeValue::Null => "null",
            SafeValue::Bool(_) => "boolean",
            SafeValue::Number(_) => "number",
            SafeValue::String(_) => "string",
            SafeValue::Array(_) => "array",
            SafeValue::Object(_) => "object",
            SafeValue::SafeNone(_) => "SafeNone",
        }
    }

    /// True only for JSON `null`. The sentinel is *equal* to `null` but is
    /// not `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, SafeValue::Null)
    }

    pub fn is_safe_none(&self) -> bool {
        matches!(self, SafeValue::SafeNone(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, SafeValue::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, SafeValue::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, SafeValue::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, SafeValue::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, SafeValue::Object(_))
    }

    pub fn as_safe_none(&self) -> Option<&SafeNone> {
        match self {
            SafeValue::SafeNone(none) => Some(none),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SafeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            SafeValue::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_number().and_then(Number::as_u64)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().and_then(Number::as_f64)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SafeValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&SafeSequence> {
        match self {
            SafeValue::Array(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut SafeSequence> {
        match self {
            SafeValue::Array(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&SafeMapping> {
        match self {
            SafeValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut SafeMapping> {
        match self {
            SafeValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Truthiness: `null`, the sentinel, `false`, zero, and empty strings or
    /// containers are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            SafeValue::Null | SafeValue::SafeNone(_) => false,
            SafeValue::Bool(b) => *b,
            SafeValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            SafeValue::String(s) => !s.is_empty(),
            SafeValue::Array(seq) => !seq.is_empty(),
            SafeValue::Object(map) => !map.is_empty(),
        }
    }

    /// Number of elements or members. Zero for scalars and the sentinel.
    pub fn len(&self) -> usize {
        match self {
            SafeValue::Array(seq) => seq.len(),
            SafeValue::Object(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates array elements. Anything else, the sentinel included,
    /// yields nothing.
    pub fn elements(&self) -> std::slice::Iter<'_, SafeValue> {
        match self {
            SafeValue::Array(seq) => seq.iter(),
            _ => <&[SafeValue]>::default().iter(),
        }
    }

    /// Iterates object members in order. Anything else yields nothing.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &SafeValue)> {
        self.as_object().into_iter().flat_map(SafeMapping::iter)
    }

    /// Converts back to a plain [`serde_json::Value`]. The sentinel becomes
    /// the string `"SafeNone"`, matching its serialized form.
    pub fn to_value(&self) -> Value {
        match self {
            SafeValue::Null => Value::Null,
            SafeValue::SafeNone(none) => Value::String(none.to_string()),
            SafeValue::Bool(b) => Value::Bool(*b),
            SafeValue::Number(n) => Value::Number(n.clone()),
            SafeValue::String(s) => Value::String(s.clone()),
            SafeValue::Array(seq) => Value::Array(seq.iter().map(SafeValue::to_value).collect()),
            SafeValue::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (key.to_string(), value.to_value()))
                    .collect(),
            ),
        }
    }
}

/// Infallible lookup. Same semantics as [`SafeValue::get`].
///
/// # Panics
///
/// Where [`SafeValue::get`] would return [`SafeJsonError::InvalidIndexType`],
/// as indexing a slice out of bounds panics in std.
impl<K: AsSafeKey> Index<K> for SafeValue {
    type Output = SafeValue;

    fn index(&self, key: K) -> &SafeValue {
        match self.get(key) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl fmt::Debug for SafeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SafeValue::Null => f.write_str("Null"),
            SafeValue::Bool(b) => write!(f, "Bool({b})"),
            SafeValue::Number(n) => write!(f, "Number({n})"),
            SafeValue::String(s) => write!(f, "String({s:?})"),
            SafeValue::Array(seq) => fmt::Debug::fmt(seq, f),
            SafeValue::Object(map) => fmt::Debug::fmt(map, f),
            SafeValue::SafeNone(none) => fmt::Debug::fmt(none, f),
        }
    }
}

/// Compact JSON text, except the sentinel which renders as `SafeNone`.
impl fmt::Display for SafeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SafeValue::SafeNone(none) => fmt::Display::fmt(none, f),
            other => {
                let text = serde_json::to_string(other).map_err(|_| fmt::Error)?;
                f.write_str(&text)
            }
        }
    }
}

impl FromStr for SafeValue {
    type Err = SafeJsonError;

    fn from_str(s: &str) -> Result<Self> {
        crate::from_str(s)
    }
}

impl From<Value> for SafeValue {
    fn from(value: Value) -> Self {
        crate::transcode(value)
    }
}

impl From<SafeValue> for Value {
    fn from(value: SafeValue) -> Self {
        value.to_value()
    }
}

impl From<SafeNone> for SafeValue {
    fn from(none: SafeNone) -> Self {
        SafeValue::SafeNone(none)
    }
}

impl From<SafeMapping> for SafeValue {
    fn from(map: SafeMapping) -> Self {
        SafeValue::Object(map)
    }
}

impl From<SafeSequence> for SafeValue {
    fn from(seq: SafeSequence) -> Self {
        SafeValue::Array(seq)
    }
}

impl From<()> for SafeValue {
    fn from((): ()) -> Self {
        SafeValue::Null
    }
}

impl From<bool> for SafeValue {
    fn from(b: bool) -> Self {
        SafeValue::Bool(b)
    }
}

impl From<&str> for SafeValue {
    fn from(s: &str) -> Self {
        SafeValue::String(s.to_string())
    }
}

impl From<String> for SafeValue {
    fn from(s: String) -> Self {
        SafeValue::String(s)
    }
}

impl From<Number> for SafeValue {
    fn from(n: Number) -> Self {
        SafeValue::Number(n)
    }
}

macro_rules! from_integer {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for SafeValue {
                fn from(n: $ty) -> Self {
                    SafeValue::Number(Number::from(n))
                }
            }
        )*
    };
}

from_integer!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize);

/// Non-finite floats have no JSON form and become `null`.
impl From<f64> for SafeValue {
    fn from(f: f64) -> Self {
        Number::from_f64(f).map_or(SafeValue::Null, SafeValue::Number)
    }
}

impl From<f32> for SafeValue {
    fn from(f: f32) -> Self {
        SafeValue::from(f64::from(f))
    }
}

impl<T: Into<SafeValue>> From<Vec<T>> for SafeValue {
    fn from(values: Vec<T>) -> Self {
        SafeValue::Array(values.into_iter().collect())
    }
}

impl<T: Into<SafeValue>> From<Option<T>> for SafeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SafeValue::Null, Into::into)
    }
}
