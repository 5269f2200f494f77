use std::cmp::Ordering;

use serde_json::{Number, Value};

use crate::safe_none::SafeNone;
use crate::value::SafeValue;

fn is_zero(n: &Number) -> bool {
    n.as_f64() == Some(0.0)
}

// ---------------------------------------------------------------- SafeNone

impl PartialEq<SafeValue> for SafeNone {
    fn eq(&self, other: &SafeValue) -> bool {
        match other {
            SafeValue::SafeNone(_) | SafeValue::Null => true,
            SafeValue::Number(n) => is_zero(n),
            _ => false,
        }
    }
}

impl PartialEq<Value> for SafeNone {
    fn eq(&self, other: &Value) -> bool {
        match other {
            Value::Null => true,
            Value::Number(n) => is_zero(n),
            _ => false,
        }
    }
}

impl PartialEq<()> for SafeNone {
    fn eq(&self, _other: &()) -> bool {
        true
    }
}

impl<T> PartialEq<Option<T>> for SafeNone
where
    SafeNone: PartialEq<T>,
{
    fn eq(&self, other: &Option<T>) -> bool {
        match other {
            None => true,
            Some(value) => self == value,
        }
    }
}

macro_rules! never_equal {
    ($($ty:ty)*) => {
        $(
            impl PartialEq<$ty> for SafeNone {
                fn eq(&self, _other: &$ty) -> bool {
                    false
                }
            }
        )*
    };
}

never_equal!(str &str String bool crate::SafeMapping crate::SafeSequence);

/// Sorts below everything it is not equal to.
impl<T: ?Sized> PartialOrd<T> for SafeNone
where
    SafeNone: PartialEq<T>,
{
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            Some(Ordering::Less)
        }
    }
}

impl PartialEq<SafeNone> for Value {
    fn eq(&self, other: &SafeNone) -> bool {
        other == self
    }
}

impl PartialEq<SafeNone> for SafeValue {
    fn eq(&self, other: &SafeNone) -> bool {
        other == self
    }
}

// ---------------------------------------------------------------- SafeValue

impl PartialEq for SafeValue {
    fn eq(&self, other: &SafeValue) -> bool {
        match (self, other) {
            (SafeValue::SafeNone(none), other) | (other, SafeValue::SafeNone(none)) => none == other,
            (SafeValue::Null, SafeValue::Null) => true,
            (SafeValue::Bool(a), SafeValue::Bool(b)) => a == b,
            (SafeValue::Number(a), SafeValue::Number(b)) => a == b,
            (SafeValue::String(a), SafeValue::String(b)) => a == b,
            (SafeValue::Array(a), SafeValue::Array(b)) => a == b,
            (SafeValue::Object(a), SafeValue::Object(b)) => a == b,
            _ => false,
        }
    }
}

/// Structural equality: the safe wrappers are transparent.
impl PartialEq<Value> for SafeValue {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (SafeValue::SafeNone(none), other) => none == other,
            (SafeValue::Null, Value::Null) => true,
            (SafeValue::Bool(a), Value::Bool(b)) => a == b,
            (SafeValue::Number(a), Value::Number(b)) => a == b,
            (SafeValue::String(a), Value::String(b)) => a == b,
            (SafeValue::Array(a), Value::Array(b)) => a == b,
            (SafeValue::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq<SafeValue> for Value {
    fn eq(&self, other: &SafeValue) -> bool {
        other == self
    }
}

/// `()` stands in for "no value": equal to `null` and the sentinel.
impl PartialEq<()> for SafeValue {
    fn eq(&self, _other: &()) -> bool {
        matches!(self, SafeValue::Null | SafeValue::SafeNone(_))
    }
}

impl PartialEq<str> for SafeValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for SafeValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<String> for SafeValue {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}

impl PartialEq<SafeValue> for str {
    fn eq(&self, other: &SafeValue) -> bool {
        other == self
    }
}

impl PartialEq<SafeValue> for &str {
    fn eq(&self, other: &SafeValue) -> bool {
        other == self
    }
}

impl PartialEq<SafeValue> for String {
    fn eq(&self, other: &SafeValue) -> bool {
        other == self
    }
}

impl PartialEq<bool> for SafeValue {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<SafeValue> for bool {
    fn eq(&self, other: &SafeValue) -> bool {
        other == self
    }
}

/// Ordering across kinds is undefined except where the sentinel is involved.
impl PartialOrd for SafeValue {
    fn partial_cmp(&self, other: &SafeValue) -> Option<Ordering> {
        match (self, other) {
            (SafeValue::SafeNone(none), other) => none.partial_cmp(other),
            (this, SafeValue::SafeNone(none)) => none.partial_cmp(this).map(Ordering::reverse),
            (SafeValue::Null, SafeValue::Null) => Some(Ordering::Equal),
            (SafeValue::Bool(a), SafeValue::Bool(b)) => a.partial_cmp(b),
            (SafeValue::Number(a), SafeValue::Number(b)) => {
                if a == b {
                    return Some(Ordering::Equal);
                }
                // 1 and 1.0 are distinct numbers; leave them unordered.
                match a.as_f64()?.partial_cmp(&b.as_f64()?)? {
                    Ordering::Equal => None,
                    ordering => Some(ordering),
                }
            }
            (SafeValue::String(a), SafeValue::String(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------- Numbers

macro_rules! number_cmp {
    ($conv:ident, $base:ty, $zero:expr; $($ty:ty)*) => {
        $(
            impl PartialEq<$ty> for SafeNone {
                fn eq(&self, other: &$ty) -> bool {
                    *other == $zero
                }
            }

            impl PartialEq<SafeNone> for $ty {
                fn eq(&self, other: &SafeNone) -> bool {
                    other == self
                }
            }

            impl PartialOrd<SafeNone> for $ty {
                fn partial_cmp(&self, other: &SafeNone) -> Option<Ordering> {
                    other.partial_cmp(self).map(Ordering::reverse)
                }
            }

            impl PartialEq<$ty> for SafeValue {
                fn eq(&self, other: &$ty) -> bool {
                    match self {
                        SafeValue::SafeNone(none) => none == other,
                        _ => self.$conv() == Some(<$base>::from(*other)),
                    }
                }
            }

            impl PartialEq<SafeValue> for $ty {
                fn eq(&self, other: &SafeValue) -> bool {
                    other == self
                }
            }

            impl PartialOrd<$ty> for SafeValue {
                fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                    if let SafeValue::SafeNone(none) = self {
                        return none.partial_cmp(other);
                    }
                    if self == other {
                        return Some(Ordering::Equal);
                    }
                    // Equal only after a lossy f64 conversion: unordered.
                    match self.as_f64()?.partial_cmp(&(*other as f64))? {
                        Ordering::Equal => None,
                        ordering => Some(ordering),
                    }
                }
            }
        )*
    };
}

number_cmp!(as_i64, i64, 0; i8 i16 i32 i64);
number_cmp!(as_u64, u64, 0; u8 u16 u32 u64);
number_cmp!(as_f64, f64, 0.0; f32 f64);

// usize and isize have no lossless `From` into u64/i64.
impl PartialEq<usize> for SafeNone {
    fn eq(&self, other: &usize) -> bool {
        *other == 0
    }
}

impl PartialEq<usize> for SafeValue {
    fn eq(&self, other: &usize) -> bool {
        match self {
            SafeValue::SafeNone(none) => none == other,
            _ => self.as_u64().is_some_and(|n| u64::try_from(*other) == Ok(n)),
        }
    }
}

impl PartialEq<isize> for SafeNone {
    fn eq(&self, other: &isize) -> bool {
        *other == 0
    }
}

impl PartialEq<isize> for SafeValue {
    fn eq(&self, other: &isize) -> bool {
        match self {
            SafeValue::SafeNone(none) => none == other,
            _ => self.as_i64().is_some_and(|n| i64::try_from(*other) == Ok(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::safe_none::SAFE_NONE;
    use serde_json::json;

    #[test]
    fn test_sentinel_equality() {
        assert!(SafeNone == 0);
        assert!(SafeNone == 0u64);
        assert!(SafeNone == 0.0);
        assert!(SafeNone == -0.0f32);
        assert!(SafeNone == Value::Null);
        assert!(SafeNone == json!(0));
        assert!(SafeNone == SafeNone);
        assert!(SafeNone == ());
        assert!(SafeNone == None::<i64>);
        assert!(SafeNone == Some(0));

        assert!(SafeNone != 1);
        assert!(SafeNone != "x");
        assert!(SafeNone != false);
        assert!(SafeNone != json!([]));
        assert!(SafeNone != json!({}));
        assert!(SafeNone != Some(1));
    }

    #[test]
    fn test_sentinel_equality_reflected() {
        assert!(0 == SafeNone);
        assert!(0.0 == SafeNone);
        assert!(Value::Null == SafeNone);
        assert!(5 != SafeNone);
    }

    #[test]
    fn test_sentinel_ordering() {
        assert!(SafeNone < 5);
        assert!(SafeNone < -5);
        assert!(SafeNone < "a");
        assert!(SafeNone <= 5);
        assert!(SafeNone <= 0);
        assert!(!(SafeNone > 5));
        assert!(!(SafeNone > -5));
        assert!(!(SafeNone >= 1));
        assert!(SafeNone >= 0);
        assert!(SafeNone >= Value::Null);
        assert!(!(SafeNone < SafeNone));
        assert!(SafeNone >= SafeNone);
    }

    #[test]
    fn test_sentinel_ordering_reflected() {
        assert!(5 > SafeNone);
        assert!(0 >= SafeNone);
        assert!(!(1 <= SafeNone));
    }

    #[test]
    fn test_safe_value_sentinel_rules() {
        assert_eq!(SAFE_NONE, 0);
        assert_eq!(SAFE_NONE, 0.0);
        assert_eq!(SAFE_NONE, SafeValue::Null);
        assert_eq!(SAFE_NONE, SafeValue::from(0));
        assert_eq!(SAFE_NONE, ());
        assert_ne!(SAFE_NONE, 1);
        assert_ne!(SAFE_NONE, "x");
        assert!(SAFE_NONE < 5);
        assert!(SAFE_NONE >= 0);
        assert!(!(SAFE_NONE >= 1));
        assert!(SAFE_NONE < SafeValue::from("a"));
        assert!(SafeValue::from("a") > SAFE_NONE);
    }

    #[test]
    fn test_safe_value_scalars() {
        assert_eq!(SafeValue::from(3), 3);
        assert_eq!(SafeValue::from(3), 3u8);
        assert_eq!(SafeValue::from(3), 3usize);
        assert_eq!(SafeValue::from(2.5), 2.5);
        assert_eq!(SafeValue::from("a"), "a");
        assert_eq!(SafeValue::from("a"), String::from("a"));
        assert_eq!(SafeValue::from(true), true);
        assert_ne!(SafeValue::from(-1), 1u64);
        assert_ne!(SafeValue::Null, 0);
        assert!("a" == SafeValue::from("a"));
    }

    #[test]
    fn test_safe_value_ordering() {
        assert!(SafeValue::from(1) < SafeValue::from(2.5));
        assert!(SafeValue::from("a") < SafeValue::from("b"));
        assert!(SafeValue::from(2) > 1);
        assert_eq!(SafeValue::from(1).partial_cmp(&SafeValue::from(1.0)), None);
        assert_eq!(SafeValue::from(1).partial_cmp(&SafeValue::from("1")), None);
    }

    #[test]
    fn test_scalar_ordering_agrees_with_equality() {
        let float_one = SafeValue::from(1.0);
        assert_ne!(float_one, 1);
        assert_eq!(float_one.partial_cmp(&1), None);
        assert!(!(float_one <= 1));
        assert!(!(float_one >= 1));
        assert!(float_one < 2);
        assert!(float_one > 0u8);

        let int_one = SafeValue::from(1);
        assert_eq!(int_one, 1);
        assert_eq!(int_one.partial_cmp(&1), Some(Ordering::Equal));
        assert_eq!(SafeValue::from(2.5).partial_cmp(&2.5), Some(Ordering::Equal));

        // Distinct integers that collapse to one f64.
        let big = SafeValue::from(i64::MAX);
        assert_ne!(big, i64::MAX - 1);
        assert_eq!(big.partial_cmp(&(i64::MAX - 1)), None);
        assert_eq!(big.partial_cmp(&i64::MAX), Some(Ordering::Equal));
    }

    #[test]
    fn test_structural_equality_with_plain_json() {
        let plain = json!({"a": [1, {"b": null}], "c": "d"});
        let safe = SafeValue::from(plain.clone());
        assert_eq!(safe, plain);
        assert_eq!(plain, safe);
        assert_ne!(safe, json!({"a": [1, {"b": null}], "c": "e"}));
        assert_ne!(safe, json!({"a": [1, {"b": null}]}));
    }
}
