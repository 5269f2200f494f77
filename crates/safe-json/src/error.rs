use thiserror::Error;

/// Errors produced by safe-json.
///
/// Reading through missing or out-of-range data never produces one of
/// these; they only surface for malformed input, writes to the sentinel,
/// and keys of the wrong kind.
#[derive(Debug, Error)]
pub enum SafeJsonError {
    /// Malformed JSON input, passed through from `serde_json` unchanged.
    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    /// Any attempt to store into, grow, or shrink [`SafeNone`](crate::SafeNone).
    #[error("cannot mutate SafeNone: `{operation}` is not supported")]
    MutationOnSentinel { operation: &'static str },

    /// An operation on [`SafeNone`](crate::SafeNone) that must return a
    /// position or an existing element.
    #[error("value not found: `{operation}` on SafeNone")]
    LookupNotFound { operation: &'static str },

    /// A container (or scalar) was indexed with a key of the wrong kind.
    #[error("cannot index {container} with {key}")]
    InvalidIndexType { container: &'static str, key: String },

    /// The input nests deeper than [`ParserOptions::max_depth`](crate::ParserOptions).
    #[error("nesting depth exceeds the configured limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}

impl SafeJsonError {
    pub(crate) fn mutation(operation: &'static str) -> Self {
        SafeJsonError::MutationOnSentinel { operation }
    }

    pub(crate) fn lookup(operation: &'static str) -> Self {
        SafeJsonError::LookupNotFound { operation }
    }

    pub(crate) fn invalid_index(container: &'static str, key: impl ToString) -> Self {
        SafeJsonError::InvalidIndexType {
            container,
            key: key.to_string(),
        }
    }
}
