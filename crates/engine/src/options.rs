//! Traversal limits.

/// Default nesting depth limit for encode and decode.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Tunable limits for one encode or decode call.
///
/// The depth limit bounds the recursive traversal so cyclic or degenerate
/// input fails with
/// [`CodecError::DepthLimitExceeded`](tagwire_core::CodecError) instead of
/// exhausting the call stack.
#[derive(Debug, Clone, Copy)]
pub struct EngineOptions {
    /// Maximum nesting depth before traversal fails
    pub max_depth: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EngineOptions {
    /// Options with a custom depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}
