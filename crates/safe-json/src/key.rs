//! Lookup keys accepted by safe containers.

use std::fmt;

/// A single lookup step: an object key or an integer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SafeKey<'a> {
    /// Object member name.
    Key(&'a str),
    /// Sequence position. Negative values count from the end.
    Index(i64),
}

impl fmt::Display for SafeKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SafeKey::Key(key) => write!(f, "key {key:?}"),
            SafeKey::Index(index) => write!(f, "index {index}"),
        }
    }
}

/// Types usable as a lookup step on [`SafeValue`](crate::SafeValue) and the
/// safe containers.
///
/// Implemented for string types and the primitive integers.
pub trait AsSafeKey {
    fn as_safe_key(&self) -> SafeKey<'_>;
}

impl AsSafeKey for str {
    fn as_safe_key(&self) -> SafeKey<'_> {
        SafeKey::Key(self)
    }
}

impl AsSafeKey for String {
    fn as_safe_key(&self) -> SafeKey<'_> {
        SafeKey::Key(self.as_str())
    }
}

impl AsSafeKey for SafeKey<'_> {
    fn as_safe_key(&self) -> SafeKey<'_> {
        *self
    }
}

impl<T: AsSafeKey + ?Sized> AsSafeKey for &T {
    fn as_safe_key(&self) -> SafeKey<'_> {
        (**self).as_safe_key()
    }
}

macro_rules! signed_key {
    ($($ty:ty)*) => {
        $(
            impl AsSafeKey for $ty {
                fn as_safe_key(&self) -> SafeKey<'_> {
                    SafeKey::Index(i64::from(*self))
                }
            }
        )*
    };
}

// Positions past i64::MAX are out of range for any sequence anyway.
macro_rules! wide_key {
    ($($ty:ty)*) => {
        $(
            impl AsSafeKey for $ty {
                fn as_safe_key(&self) -> SafeKey<'_> {
                    SafeKey::Index(i64::try_from(*self).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

signed_key!(i8 i16 i32 i64 u8 u16 u32);
wide_key!(isize usize u64);
