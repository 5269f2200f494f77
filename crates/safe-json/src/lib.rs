//! Null-safe access to parsed JSON.
//!
//! Parsing a document with this crate gives a tree in which looking up a
//! missing key or an out-of-range index never fails. Such lookups return the
//! shared [`SAFE_NONE`] sentinel, which can itself be indexed with anything
//! and yields itself again. Deep lookup chains through partial data need no
//! presence checks:
//!
//! ```
//! let doc = safe_json::from_str(r#"{"results": [{"name": "r1"}]}"#)?;
//!
//! assert_eq!(doc["results"][0]["name"], "r1");
//! assert!(doc["results"][0]["child_items"][0]["name"].is_safe_none());
//! assert!(doc["results"][5]["name"].is_safe_none());
//!
//! // The sentinel compares equal to null and to zero.
//! assert_eq!(doc["missing"], serde_json::Value::Null);
//! assert_eq!(doc["missing"], 0);
//! # Ok::<(), safe_json::SafeJsonError>(())
//! ```
//!
//! The sentinel is still distinguishable when it matters:
//! [`SafeValue::is_safe_none`] and [`SafeValue::is_null`] are identity-style
//! checks that never confuse the two.
//!
//! Containers are [`SafeMapping`] and [`SafeSequence`]. Indexing a sequence
//! with a string key remains a type error
//! ([`SafeJsonError::InvalidIndexType`]), and writing into the sentinel
//! fails with [`SafeJsonError::MutationOnSentinel`].

pub mod error;
pub mod key;
pub mod mapping;
pub mod safe_none;
pub mod sequence;
pub mod traits;
pub mod transcode;
pub mod value;

pub use error::SafeJsonError;
pub use key::{AsSafeKey, SafeKey};
pub use mapping::SafeMapping;
pub use safe_none::{SafeNone, SAFE_NONE};
pub use sequence::SafeSequence;
pub use traits::{ReadMapping, ReadSequence};
pub use transcode::{from_reader, from_slice, from_str, transcode, ParserOptions, SafeJsonParser};
pub use value::SafeValue;

pub type Result<T, E = SafeJsonError> = std::result::Result<T, E>;
