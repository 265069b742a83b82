//! Recursive encode traversal: `Native` → `WireValue`.

use crate::hooks::ScalarHooks;
use crate::options::EngineOptions;
use std::collections::BTreeMap;
use tagwire_core::{tag, CodecError, Native, Result, WireValue};
use tracing::trace;

/// Encode a native value into the restricted wire shape.
///
/// Pure function of the input plus the hooks: no side effects, no shared
/// state. Fails with [`CodecError::DepthLimitExceeded`] when nesting passes
/// `options.max_depth`, and with [`CodecError::ReservedKey`] when a literal
/// mapping key would land in the class-marker namespace.
pub fn encode<H>(value: &Native, options: &EngineOptions, hooks: &H) -> Result<WireValue>
where
    H: ScalarHooks + ?Sized,
{
    encode_at(value, 0, options, hooks)
}

fn encode_at<H>(value: &Native, depth: usize, options: &EngineOptions, hooks: &H) -> Result<WireValue>
where
    H: ScalarHooks + ?Sized,
{
    if depth > options.max_depth {
        return Err(CodecError::DepthLimitExceeded {
            limit: options.max_depth,
        });
    }

    // Dispatch priority: mappings, sequences, bool/int/float, null, rich
    // scalars, then instances. Bool precedes the numeric cases so it can
    // never leave as an integer.
    match value {
        Native::Map(entries) => {
            let mut out = BTreeMap::new();
            for (key, item) in entries {
                let key = key.to_wire_key();
                if tag::is_reserved(&key) {
                    return Err(CodecError::ReservedKey { key });
                }
                let encoded = encode_at(item, depth + 1, options, hooks)?;
                if out.insert(key.clone(), encoded).is_some() {
                    return Err(CodecError::DuplicateKey { key });
                }
            }
            Ok(WireValue::Mapping(out))
        }
        Native::List(items) => {
            let encoded: Result<Vec<WireValue>> = items
                .iter()
                .map(|item| encode_at(item, depth + 1, options, hooks))
                .collect();
            Ok(WireValue::Sequence(encoded?))
        }
        Native::Bool(b) => Ok(WireValue::Bool(*b)),
        Native::Int(i) => Ok(WireValue::Int(*i)),
        Native::Float(f) => Ok(WireValue::Float(*f)),
        Native::Null => Ok(hooks.none_value()),
        Native::Str(s) => Ok(WireValue::String(s.clone())),
        Native::Timestamp(ts) => Ok(WireValue::String(ts.to_rfc3339())),
        Native::Instance(instance) => {
            let key = tag::format_tag(&instance.class);
            // The marker key must re-parse under the tag grammar, or decode
            // would reject the wire this call produces.
            if tag::parse_tag(&key).is_none() {
                return Err(CodecError::NotEncodable {
                    class: instance.class.to_string(),
                    reason: "class identity is not a valid marker tag".to_owned(),
                });
            }
            trace!(class = %instance.class, "encoding class marker");
            let mut fields = BTreeMap::new();
            for (name, item) in &instance.fields {
                if tag::is_reserved(name) {
                    return Err(CodecError::ReservedKey { key: name.clone() });
                }
                fields.insert(name.clone(), encode_at(item, depth + 1, options, hooks)?);
            }
            let mut marker = BTreeMap::new();
            marker.insert(key, WireValue::Mapping(fields));
            Ok(WireValue::Mapping(marker))
        }
    }
}
