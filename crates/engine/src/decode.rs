//! Recursive decode traversal: `WireValue` → `Native`.

use crate::hooks::ScalarHooks;
use crate::options::EngineOptions;
use crate::resolver::ClassResolver;
use std::collections::BTreeMap;
use tagwire_core::{tag, ClassId, CodecError, FieldMap, MapKey, Native, Result, WireValue};
use tracing::{trace, warn};

/// Decode a wire value back into a native value.
///
/// A mapping is treated as a class marker only when it has exactly one
/// entry, that entry's key parses as a class tag, and the payload is a
/// mapping; the marker's class is resolved through `resolver` and the
/// instance constructed from the recursively decoded field mapping.
/// Resolution failures surface as [`CodecError::MissingClass`] and are
/// never silently swallowed. Reserved angle-bracket keys anywhere else
/// fail with [`CodecError::ReservedKey`].
pub fn decode<R, H>(
    wire: &WireValue,
    resolver: &R,
    options: &EngineOptions,
    hooks: &H,
) -> Result<Native>
where
    R: ClassResolver + ?Sized,
    H: ScalarHooks + ?Sized,
{
    decode_at(wire, 0, resolver, options, hooks)
}

fn decode_at<R, H>(
    wire: &WireValue,
    depth: usize,
    resolver: &R,
    options: &EngineOptions,
    hooks: &H,
) -> Result<Native>
where
    R: ClassResolver + ?Sized,
    H: ScalarHooks + ?Sized,
{
    if depth > options.max_depth {
        return Err(CodecError::DepthLimitExceeded {
            limit: options.max_depth,
        });
    }

    match wire {
        WireValue::Mapping(entries) => {
            if entries.len() == 1 {
                if let Some((key, WireValue::Mapping(payload))) = entries.iter().next() {
                    if let Some(class_id) = tag::parse_tag(key) {
                        return decode_marker(&class_id, payload, depth, resolver, options, hooks);
                    }
                }
            }
            let mut out = BTreeMap::new();
            for (key, item) in entries {
                if tag::is_reserved(key) {
                    warn!(key = %key, "reserved key outside a class marker");
                    return Err(CodecError::ReservedKey { key: key.clone() });
                }
                out.insert(
                    MapKey::Str(key.clone()),
                    decode_at(item, depth + 1, resolver, options, hooks)?,
                );
            }
            Ok(Native::Map(out))
        }
        WireValue::Sequence(items) => {
            let decoded: Result<Vec<Native>> = items
                .iter()
                .map(|item| decode_at(item, depth + 1, resolver, options, hooks))
                .collect();
            Ok(Native::List(decoded?))
        }
        WireValue::Bool(b) => Ok(Native::Bool(*b)),
        WireValue::Int(i) => Ok(Native::Int(*i)),
        WireValue::Float(f) => Ok(Native::Float(*f)),
        WireValue::String(s) => Ok(hooks.try_parse(s)),
        WireValue::Null => Ok(Native::Null),
    }
}

fn decode_marker<R, H>(
    class_id: &ClassId,
    field_wire: &BTreeMap<String, WireValue>,
    depth: usize,
    resolver: &R,
    options: &EngineOptions,
    hooks: &H,
) -> Result<Native>
where
    R: ClassResolver + ?Sized,
    H: ScalarHooks + ?Sized,
{
    let class = resolver
        .resolve(&class_id.module, &class_id.name)
        .map_err(|reason| CodecError::MissingClass {
            module: class_id.module.clone(),
            name: class_id.name.clone(),
            reason: reason.to_string(),
        })?;
    trace!(class = %class_id, "decoding class marker");

    let mut fields = FieldMap::new();
    for (name, item) in field_wire {
        if tag::is_reserved(name) {
            return Err(CodecError::ReservedKey { key: name.clone() });
        }
        fields.insert(
            name.clone(),
            decode_at(item, depth + 1, resolver, options, hooks)?,
        );
    }

    Ok(Native::Instance(class.construct(fields)?))
}
