use serde::{Serialize, Serializer};

use crate::mapping::SafeMapping;
use crate::safe_none::SafeNone;
use crate::sequence::SafeSequence;
use crate::value::SafeValue;

/// The sentinel writes out as its text form, the string `"SafeNone"`, so
/// serialized output still shows where a lookup came up empty.
impl Serialize for SafeNone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("SafeNone")
    }
}

impl Serialize for SafeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SafeValue::Null => serializer.serialize_unit(),
            SafeValue::SafeNone(none) => none.serialize(serializer),
            SafeValue::Bool(b) => serializer.serialize_bool(*b),
            SafeValue::Number(n) => n.serialize(serializer),
            SafeValue::String(s) => serializer.serialize_str(s),
            SafeValue::Array(seq) => seq.serialize(serializer),
            SafeValue::Object(map) => map.serialize(serializer),
        }
    }
}

impl Serialize for SafeSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl Serialize for SafeMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
