//! Error taxonomy for encode/decode operations.
//!
//! Every error here is fatal to the enclosing encode or decode call: the
//! codec never produces partial results and never retries. These are data
//! and schema errors, not transient failures.

use thiserror::Error;

/// All tagwire errors.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Encoding could not produce a wire value for an instance.
    ///
    /// Raised when a type's field introspection fails. The message names
    /// the offending class so the caller can find the bad value.
    #[error("cannot encode instance of {class}: {reason}")]
    NotEncodable {
        /// Class whose introspection failed
        class: String,
        /// Why introspection failed
        reason: String,
    },

    /// Decoding met a class marker whose class cannot be resolved.
    ///
    /// Resolver-internal errors are wrapped into this variant rather than
    /// propagated raw. Terminal for the decode call, never retried.
    #[error("cannot resolve class {module}.{name}: {reason}")]
    MissingClass {
        /// Module path from the marker key
        module: String,
        /// Class name from the marker key
        name: String,
        /// Underlying resolver failure
        reason: String,
    },

    /// A literal mapping key collides with the class-marker namespace.
    ///
    /// Keys of the form `<...>` are reserved for class markers on both the
    /// encode and decode side, so marker syntax can never be mistaken for
    /// user data.
    #[error("key {key:?} collides with the reserved class-marker namespace")]
    ReservedKey {
        /// The offending key
        key: String,
    },

    /// Two mapping keys stringified to the same wire key.
    #[error("mapping keys collide on wire key {key:?}")]
    DuplicateKey {
        /// The colliding stringified key
        key: String,
    },

    /// Traversal nesting exceeded the configured depth limit.
    ///
    /// This is how cyclic or degenerately deep structures surface instead
    /// of exhausting the call stack.
    #[error("nesting exceeds the depth limit of {limit} (possible cycle)")]
    DepthLimitExceeded {
        /// The limit that was exceeded
        limit: usize,
    },

    /// A resolved class rejected the decoded field mapping.
    #[error("class {class} rejected its decoded fields: {reason}")]
    InvalidFields {
        /// Class that rejected the fields
        class: String,
        /// Why the fields were rejected
        reason: String,
    },

    /// The text backend failed to render a wire value.
    #[error("render error: {0}")]
    Render(String),

    /// The text backend failed to parse input text.
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error from the file entry points.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tagwire operations.
pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    /// Check if this is a missing-class error.
    pub fn is_missing_class(&self) -> bool {
        matches!(self, CodecError::MissingClass { .. })
    }

    /// Check if this is a not-encodable error.
    pub fn is_not_encodable(&self) -> bool {
        matches!(self, CodecError::NotEncodable { .. })
    }
}
