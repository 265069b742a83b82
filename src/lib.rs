//! # Tagwire
//!
//! Polymorphic value codec: a recursive encoder/decoder that converts
//! in-memory object graphs to and from a restricted wire shape suitable
//! for JSON or YAML, while preserving enough type information to
//! reconstruct custom class instances on decode.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use tagwire::prelude::*;
//!
//! // Register the classes decode may meet.
//! let mut registry = TypeRegistry::new();
//! registry.register_plain(ClassId::new("geo", "Point"));
//!
//! let codec = JsonCodec::new(Arc::new(registry));
//!
//! // A custom instance encodes as a single-entry marker mapping.
//! let point = Instance::new(
//!     ClassId::new("geo", "Point"),
//!     [
//!         ("x".to_string(), Native::Int(1)),
//!         ("y".to_string(), Native::Int(2)),
//!     ]
//!     .into_iter()
//!     .collect(),
//! );
//! let text = codec.to_str(&Native::Instance(point)).unwrap();
//! assert!(text.contains("<geo.Point>"));
//!
//! // And decodes back to an equivalent instance.
//! let back = codec.from_str(&text).unwrap();
//! assert!(back.as_instance().is_some());
//! ```
//!
//! ## Wire Format
//!
//! The wire shape is restricted to null, bool, int, float, string,
//! sequence, and string-keyed mapping. Custom instances persist as
//! `{"<module.ClassName>": { ...fields... }}`; the angle-bracket key
//! namespace is reserved for these markers and rejected in literal data,
//! so the marker syntax is unambiguous. This marker syntax is part of any
//! file format tagwire produces.
//!
//! ## Crates
//!
//! - `tagwire-core` - value models, marker grammar, errors
//! - `tagwire-engine` - the recursive traversal and class resolution
//! - `tagwire-formats` - the JSON and YAML adapters

#![warn(missing_docs)]

pub mod prelude;

pub use tagwire_core::{
    tag, BoxError, ClassId, CodecError, FieldMap, Instance, MapKey, Native, Reflect, Result,
    WireValue,
};
pub use tagwire_engine::{
    decode, encode, ClassResolver, DefaultHooks, EngineOptions, NativeClass, ScalarHooks,
    TypeRegistry, DEFAULT_MAX_DEPTH,
};
pub use tagwire_formats::{Codec, CodecType, JsonCodec, YamlCodec};
