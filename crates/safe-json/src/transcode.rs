//! Parsing and transcoding into the null-safe tree.
//!
//! Parsing is delegated to `serde_json`; this module only walks the parsed
//! [`Value`] and rewraps every object and array. Scalars pass through as-is.

use std::io;

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::SafeJsonError;
use crate::mapping::SafeMapping;
use crate::sequence::SafeSequence;
use crate::value::SafeValue;
use crate::Result;

/// Options for [`SafeJsonParser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserOptions {
    /// Maximum container nesting accepted by the transcoder. `None` (the
    /// default) leaves the limit to `serde_json`, which stops at 128 levels
    /// when parsing text.
    pub max_depth: Option<usize>,
}

impl ParserOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Parses JSON into a [`SafeValue`] tree.
///
/// The free functions [`from_str`], [`from_slice`] and [`from_reader`] use a
/// parser with default options.
///
/// # Example
///
/// ```
/// use safe_json::{ParserOptions, SafeJsonError, SafeJsonParser};
///
/// let parser = SafeJsonParser::with_options(ParserOptions::default().with_max_depth(2));
///
/// let doc = parser.parse_str(r#"{"a": [1, 2]}"#).unwrap();
/// assert_eq!(doc["a"][1], 2);
///
/// let err = parser.parse_str(r#"{"a": [[1]]}"#).unwrap_err();
/// assert!(matches!(err, SafeJsonError::DepthLimitExceeded { limit: 2 }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SafeJsonParser {
    options: ParserOptions,
}

impl SafeJsonParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses JSON text.
    ///
    /// # Errors
    ///
    /// [`SafeJsonError::Parse`] for malformed input and
    /// [`SafeJsonError::DepthLimitExceeded`] when the document nests deeper
    /// than [`ParserOptions::max_depth`].
    pub fn parse_str(&self, text: &str) -> Result<SafeValue> {
        debug!(input_len = text.len(), "parsing JSON text");
        let value: Value = serde_json::from_str(text)?;
        self.transcode(value)
    }

    /// Parses JSON from a byte buffer.
    ///
    /// # Errors
    ///
    /// Same as [`parse_str`](Self::parse_str).
    pub fn parse_slice(&self, bytes: &[u8]) -> Result<SafeValue> {
        debug!(input_len = bytes.len(), "parsing JSON bytes");
        let value: Value = serde_json::from_slice(bytes)?;
        self.transcode(value)
    }

    /// Parses JSON from a reader. The reader is consumed until the end of
    /// the document; trailing non-whitespace is an error.
    ///
    /// # Errors
    ///
    /// Same as [`parse_str`](Self::parse_str). I/O failures surface as
    /// [`SafeJsonError::Parse`], as `serde_json` reports them.
    pub fn parse_reader<R: io::Read>(&self, reader: R) -> Result<SafeValue> {
        debug!("parsing JSON from reader");
        let value: Value = serde_json::from_reader(reader)?;
        self.transcode(value)
    }

    /// Wraps an already parsed value, enforcing the configured depth limit.
    ///
    /// # Errors
    ///
    /// [`SafeJsonError::DepthLimitExceeded`].
    pub fn transcode(&self, value: Value) -> Result<SafeValue> {
        if let Some(limit) = self.options.max_depth {
            if exceeds_depth(&value, limit) {
                return Err(SafeJsonError::DepthLimitExceeded { limit });
            }
        }
        Ok(transcode(value))
    }
}

/// True when `value` has more than `limit` levels of nested containers.
fn exceeds_depth(value: &Value, limit: usize) -> bool {
    let mut children: Box<dyn Iterator<Item = &Value> + '_> = match value {
        Value::Array(items) => Box::new(items.iter()),
        Value::Object(map) => Box::new(map.values()),
        _ => return false,
    };
    match limit.checked_sub(1) {
        None => true,
        Some(remaining) => children.any(|child| exceeds_depth(child, remaining)),
    }
}

/// Recursively wraps every object in a [`SafeMapping`] and every array in a
/// [`SafeSequence`]. Key order is preserved.
///
/// The result is structurally equal to the input:
///
/// ```
/// use serde_json::json;
///
/// let plain = json!({"b": [1, {"c": null}], "a": "x"});
/// let safe = safe_json::transcode(plain.clone());
///
/// assert_eq!(safe, plain);
/// assert!(safe["b"][1]["c"]["d"].is_safe_none());
/// ```
pub fn transcode(value: Value) -> SafeValue {
    match value {
        Value::Null => SafeValue::Null,
        Value::Bool(b) => SafeValue::Bool(b),
        Value::Number(n) => SafeValue::Number(n),
        Value::String(s) => SafeValue::String(s),
        Value::Array(items) => {
            trace!(kind = "array", len = items.len(), "wrapping container");
            SafeValue::Array(items.into_iter().map(transcode).collect::<SafeSequence>())
        }
        Value::Object(map) => {
            trace!(kind = "object", len = map.len(), "wrapping container");
            SafeValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, transcode(value)))
                    .collect::<SafeMapping>(),
            )
        }
    }
}

/// Parses JSON text into a null-safe tree.
///
/// # Errors
///
/// [`SafeJsonError::Parse`] for malformed input, unchanged from `serde_json`.
pub fn from_str(text: &str) -> Result<SafeValue> {
    SafeJsonParser::new().parse_str(text)
}

/// Parses a JSON byte buffer into a null-safe tree.
///
/// # Errors
///
/// [`SafeJsonError::Parse`] for malformed input.
pub fn from_slice(bytes: &[u8]) -> Result<SafeValue> {
    SafeJsonParser::new().parse_slice(bytes)
}

/// Parses JSON from a reader into a null-safe tree.
///
/// # Errors
///
/// [`SafeJsonError::Parse`] for malformed input or a failing reader.
pub fn from_reader<R: io::Read>(reader: R) -> Result<SafeValue> {
    SafeJsonParser::new().parse_reader(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars_pass_through() {
        assert!(transcode(json!(null)).is_null());
        assert_eq!(transcode(json!(true)), true);
        assert_eq!(transcode(json!(-4)), -4);
        assert_eq!(transcode(json!(1.5)), 1.5);
        assert_eq!(transcode(json!("s")), "s");
    }

    #[test]
    fn test_containers_are_wrapped_at_every_level() {
        let safe = transcode(json!({"a": [{"b": []}], "c": {}}));
        assert!(safe.is_object());
        assert!(safe["a"].is_array());
        assert!(safe["a"][0].is_object());
        assert!(safe["a"][0]["b"].is_array());
        assert!(safe["c"].is_object());
    }

    #[test]
    fn test_order_is_preserved() {
        let safe = from_str(r#"{"z": 1, "y": 2, "x": 3}"#).unwrap();
        let keys: Vec<_> = safe.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "y", "x"]);
    }

    #[test]
    fn test_parse_inputs_agree() {
        let text = r#"{"a": [1, "two", null]}"#;
        let from_text = from_str(text).unwrap();
        assert_eq!(from_slice(text.as_bytes()).unwrap(), from_text);
        assert_eq!(from_reader(text.as_bytes()).unwrap(), from_text);
        assert_eq!(text.parse::<SafeValue>().unwrap(), from_text);
    }

    #[test]
    fn test_parse_error_passes_through() {
        let err = from_str("{\"a\": ").unwrap_err();
        let expected = serde_json::from_str::<Value>("{\"a\": ").unwrap_err();
        assert!(matches!(err, SafeJsonError::Parse(_)));
        assert_eq!(err.to_string(), expected.to_string());
    }

    #[test]
    fn test_depth_limit() {
        let parser = SafeJsonParser::with_options(ParserOptions::default().with_max_depth(1));
        assert!(parser.parse_str("[1, 2]").is_ok());
        assert!(parser.parse_str("{}").is_ok());
        assert!(parser.parse_str("7").is_ok());
        assert!(matches!(
            parser.parse_str("[[1]]"),
            Err(SafeJsonError::DepthLimitExceeded { limit: 1 })
        ));
        // Empty nested containers still count as a level.
        assert!(parser.parse_str(r#"{"a": {}}"#).is_err());

        let flat = SafeJsonParser::with_options(ParserOptions::default().with_max_depth(0));
        assert!(flat.parse_str("\"scalar\"").is_ok());
        assert!(flat.parse_str("[]").is_err());
    }

    #[test]
    fn test_default_options() {
        let parser = SafeJsonParser::new();
        assert_eq!(parser.options().max_depth, None);
        assert!(parser.transcode(json!([[[[[[1]]]]]])).is_ok());
    }
}
