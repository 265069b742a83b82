//! The restricted wire value shape.
//!
//! `WireValue` is the boundary between the codec engine and the text
//! backends: everything the engine encodes lands in this shape, and
//! everything a backend parses is delivered in this shape.
//!
//! ## The Seven Types
//!
//! 1. `Null` - absence of value
//! 2. `Bool` - boolean true or false
//! 3. `Int` - 64-bit signed integer
//! 4. `Float` - 64-bit IEEE-754 floating point
//! 5. `String` - UTF-8 encoded string
//! 6. `Sequence` - ordered sequence of wire values
//! 7. `Mapping` - string-keyed map of wire values
//!
//! Mapping keys are always strings; a `BTreeMap` keeps rendered key order
//! deterministic. Serde support is hand-written against the self-describing
//! data model so that both serde_json and serde_yaml transcode a
//! `WireValue` directly, without enum tagging.

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Restricted value shape produced and consumed by all codecs.
///
/// ## Equality Rules
///
/// - Different types are never equal (no type coercion): `Int(1)` !=
///   `Float(1.0)`, `Bool(true)` != `Int(1)`.
/// - Float uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`.
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    /// Absence of value
    Null,

    /// Boolean true or false
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit IEEE-754 floating point
    Float(f64),

    /// UTF-8 encoded string
    String(String),

    /// Ordered sequence of wire values
    Sequence(Vec<WireValue>),

    /// String-keyed map of wire values
    Mapping(BTreeMap<String, WireValue>),
}

impl WireValue {
    /// Returns the type name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            WireValue::Null => "Null",
            WireValue::Bool(_) => "Bool",
            WireValue::Int(_) => "Int",
            WireValue::Float(_) => "Float",
            WireValue::String(_) => "String",
            WireValue::Sequence(_) => "Sequence",
            WireValue::Mapping(_) => "Mapping",
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, WireValue::Null)
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            WireValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            WireValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            WireValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            WireValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as sequence slice
    pub fn as_sequence(&self) -> Option<&[WireValue]> {
        match self {
            WireValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get as mapping reference
    pub fn as_mapping(&self) -> Option<&BTreeMap<String, WireValue>> {
        match self {
            WireValue::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Convenience constructor: a mapping from string keys.
    pub fn mapping_of(entries: Vec<(&str, WireValue)>) -> WireValue {
        WireValue::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v))
                .collect(),
        )
    }
}

impl From<bool> for WireValue {
    fn from(b: bool) -> Self {
        WireValue::Bool(b)
    }
}

impl From<i64> for WireValue {
    fn from(i: i64) -> Self {
        WireValue::Int(i)
    }
}

impl From<f64> for WireValue {
    fn from(f: f64) -> Self {
        WireValue::Float(f)
    }
}

impl From<&str> for WireValue {
    fn from(s: &str) -> Self {
        WireValue::String(s.to_owned())
    }
}

impl From<String> for WireValue {
    fn from(s: String) -> Self {
        WireValue::String(s)
    }
}

impl From<Vec<WireValue>> for WireValue {
    fn from(items: Vec<WireValue>) -> Self {
        WireValue::Sequence(items)
    }
}

impl From<BTreeMap<String, WireValue>> for WireValue {
    fn from(entries: BTreeMap<String, WireValue>) -> Self {
        WireValue::Mapping(entries)
    }
}

impl Serialize for WireValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            WireValue::Null => serializer.serialize_unit(),
            WireValue::Bool(b) => serializer.serialize_bool(*b),
            WireValue::Int(i) => serializer.serialize_i64(*i),
            WireValue::Float(f) => serializer.serialize_f64(*f),
            WireValue::String(s) => serializer.serialize_str(s),
            WireValue::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            WireValue::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for WireValue {
    fn deserialize<D>(deserializer: D) -> Result<WireValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct WireVisitor;

        impl<'de> Visitor<'de> for WireVisitor {
            type Value = WireValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a wire value (null, bool, number, string, sequence, or string-keyed mapping)")
            }

            fn visit_bool<E>(self, b: bool) -> Result<WireValue, E> {
                Ok(WireValue::Bool(b))
            }

            fn visit_i64<E>(self, i: i64) -> Result<WireValue, E> {
                Ok(WireValue::Int(i))
            }

            fn visit_u64<E>(self, u: u64) -> Result<WireValue, E>
            where
                E: de::Error,
            {
                i64::try_from(u)
                    .map(WireValue::Int)
                    .map_err(|_| E::custom(format!("integer {} out of i64 range", u)))
            }

            fn visit_f64<E>(self, f: f64) -> Result<WireValue, E> {
                Ok(WireValue::Float(f))
            }

            fn visit_str<E>(self, s: &str) -> Result<WireValue, E> {
                Ok(WireValue::String(s.to_owned()))
            }

            fn visit_string<E>(self, s: String) -> Result<WireValue, E> {
                Ok(WireValue::String(s))
            }

            fn visit_unit<E>(self) -> Result<WireValue, E> {
                Ok(WireValue::Null)
            }

            fn visit_none<E>(self) -> Result<WireValue, E> {
                Ok(WireValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<WireValue, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<WireValue, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(WireValue::Sequence(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<WireValue, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = BTreeMap::new();
                while let Some((key, value)) = map.next_entry::<String, WireValue>()? {
                    entries.insert(key, value);
                }
                Ok(WireValue::Mapping(entries))
            }
        }

        deserializer.deserialize_any(WireVisitor)
    }
}
