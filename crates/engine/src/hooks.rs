//! Per-codec scalar hooks.
//!
//! Format adapters do not override any traversal logic; they customize the
//! two scalar seams the formats genuinely differ on: how absent values hit
//! the wire, and whether strings are re-parsed into richer scalars on the
//! way back.

use tagwire_core::{Native, WireValue};

/// Overridable scalar conversions for a codec.
pub trait ScalarHooks {
    /// Wire representation of `Native::Null`.
    fn none_value(&self) -> WireValue {
        WireValue::Null
    }

    /// Attempt to parse a decoded string back into a richer scalar.
    ///
    /// The default is the identity: the string stays a string. Formats
    /// with richer native scalar conventions (YAML timestamps) override
    /// this; a hook must return the string unchanged when no parse
    /// applies, never fail.
    fn try_parse(&self, text: &str) -> Native {
        Native::Str(text.to_owned())
    }
}

/// Hooks with all defaults, for callers driving the engine directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

impl ScalarHooks for DefaultHooks {}
