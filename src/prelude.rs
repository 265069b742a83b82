//! Convenient imports for tagwire.
//!
//! Re-exports the types most programs need:
//!
//! ```
//! use tagwire::prelude::*;
//!
//! let registry = TypeRegistry::new();
//! ```

// Value models
pub use tagwire_core::{ClassId, FieldMap, Instance, MapKey, Native, Reflect, WireValue};

// Error handling
pub use tagwire_core::{CodecError, Result};

// Engine and resolution
pub use tagwire_engine::{ClassResolver, EngineOptions, NativeClass, TypeRegistry};

// Format adapters
pub use tagwire_formats::{Codec, CodecType, JsonCodec, YamlCodec};
