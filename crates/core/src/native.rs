//! The in-memory side of the codec: dynamic native values and the
//! introspection capability for custom types.
//!
//! `Native` is the object-graph shape the engine traverses. Unlike
//! [`WireValue`](crate::WireValue), it carries rich scalars (timestamps),
//! non-string mapping keys, and class instances with their identity.

use crate::error::{CodecError, Result};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;

/// Boxed error for fallible capability methods.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Field mapping of a class instance.
pub type FieldMap = BTreeMap<String, Native>;

/// In-memory value shape the engine encodes from and decodes to.
#[derive(Debug, Clone, PartialEq)]
pub enum Native {
    /// Absence of value
    Null,

    /// Boolean true or false
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit IEEE-754 floating point
    Float(f64),

    /// UTF-8 encoded string
    Str(String),

    /// UTC timestamp, a rich scalar carried as RFC 3339 text on the wire
    Timestamp(DateTime<Utc>),

    /// Ordered sequence of native values
    List(Vec<Native>),

    /// Mapping with scalar keys; keys are stringified on encode
    Map(BTreeMap<MapKey, Native>),

    /// Instance of a custom class
    Instance(Instance),
}

impl Native {
    /// Returns the type name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            Native::Null => "Null",
            Native::Bool(_) => "Bool",
            Native::Int(_) => "Int",
            Native::Float(_) => "Float",
            Native::Str(_) => "Str",
            Native::Timestamp(_) => "Timestamp",
            Native::List(_) => "List",
            Native::Map(_) => "Map",
            Native::Instance(_) => "Instance",
        }
    }

    /// Try to get as an instance reference
    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Native::Instance(instance) => Some(instance),
            _ => None,
        }
    }
}

impl From<bool> for Native {
    fn from(b: bool) -> Self {
        Native::Bool(b)
    }
}

impl From<i64> for Native {
    fn from(i: i64) -> Self {
        Native::Int(i)
    }
}

impl From<f64> for Native {
    fn from(f: f64) -> Self {
        Native::Float(f)
    }
}

impl From<&str> for Native {
    fn from(s: &str) -> Self {
        Native::Str(s.to_owned())
    }
}

impl From<String> for Native {
    fn from(s: String) -> Self {
        Native::Str(s)
    }
}

impl From<DateTime<Utc>> for Native {
    fn from(ts: DateTime<Utc>) -> Self {
        Native::Timestamp(ts)
    }
}

impl From<Vec<Native>> for Native {
    fn from(items: Vec<Native>) -> Self {
        Native::List(items)
    }
}

impl From<Instance> for Native {
    fn from(instance: Instance) -> Self {
        Native::Instance(instance)
    }
}

/// Scalar key types a native mapping may carry.
///
/// These are the hashable key shapes the encoder knows how to stringify.
/// Decode always produces `Str` keys; a mapping that went to the wire with
/// `Int` or `Bool` keys comes back string-keyed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum MapKey {
    /// Boolean key, stringified as "true"/"false"
    Bool(bool),
    /// Integer key, stringified in decimal
    Int(i64),
    /// String key, passed through unchanged
    Str(String),
}

impl MapKey {
    /// Stringify this key for the wire mapping (`encode_key`).
    pub fn to_wire_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapKey::Bool(b) => write!(f, "{}", b),
            MapKey::Int(i) => write!(f, "{}", i),
            MapKey::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for MapKey {
    fn from(s: &str) -> Self {
        MapKey::Str(s.to_owned())
    }
}

impl From<String> for MapKey {
    fn from(s: String) -> Self {
        MapKey::Str(s)
    }
}

impl From<i64> for MapKey {
    fn from(i: i64) -> Self {
        MapKey::Int(i)
    }
}

/// Identity of a custom class: its module path and class name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId {
    /// Dot-separated module path, e.g. "geo" or "app.models"
    pub module: String,
    /// Class name, e.g. "Point"
    pub name: String,
}

impl ClassId {
    /// Create a class identity from module path and class name.
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.name)
    }
}

/// A custom-class value: class identity plus its field mapping.
///
/// This is what decode reconstructs for a class marker, and what the
/// encoder turns into a single-entry marker mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// Identity of the class this value belongs to
    pub class: ClassId,
    /// Named field values
    pub fields: FieldMap,
}

impl Instance {
    /// Create an instance from a class identity and field mapping.
    pub fn new(class: ClassId, fields: FieldMap) -> Self {
        Self { class, fields }
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Native> {
        self.fields.get(name)
    }
}

/// Explicit introspection capability a type must implement to be encoded.
///
/// The codec never reflects over arbitrary internal state; a custom type
/// opts in by naming its class and producing its field mapping. A failing
/// `fields` implementation surfaces as
/// [`CodecError::NotEncodable`] naming the class.
pub trait Reflect {
    /// The class identity persisted in the marker key.
    fn class_id(&self) -> ClassId;

    /// Produce the field mapping for this value.
    ///
    /// Field values that are themselves custom types should be converted
    /// with [`Reflect::to_native`] so nested failures propagate.
    fn fields(&self) -> std::result::Result<FieldMap, BoxError>;

    /// Convert this value into a [`Native::Instance`].
    fn to_native(&self) -> Result<Native> {
        let class = self.class_id();
        match self.fields() {
            Ok(fields) => Ok(Native::Instance(Instance::new(class, fields))),
            Err(reason) => Err(CodecError::NotEncodable {
                class: class.to_string(),
                reason: reason.to_string(),
            }),
        }
    }
}

impl Native {
    /// Convenience constructor: a string-keyed map.
    pub fn map_of(entries: Vec<(&str, Native)>) -> Native {
        Native::Map(
            entries
                .into_iter()
                .map(|(k, v)| (MapKey::from(k), v))
                .collect(),
        )
    }
}
