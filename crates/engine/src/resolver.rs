//! Class resolution: the injected capability that maps a marker's
//! (module, class name) pair to a constructible class.
//!
//! The engine never performs dynamic module loading; callers populate a
//! [`TypeRegistry`] at startup (or supply their own [`ClassResolver`]) and
//! every decode call resolves marker keys through it. Resolution failures
//! surface as [`CodecError::MissingClass`](tagwire_core::CodecError) and
//! terminate the decode of that subtree.

use std::collections::HashMap;
use std::sync::Arc;
use tagwire_core::{BoxError, ClassId, CodecError, FieldMap, Instance};
use thiserror::Error;
use tracing::debug;

/// A constructible class produced by resolver lookup.
///
/// Used transiently during one decode call; construction validates the
/// recursively decoded field mapping and may reject it with
/// [`CodecError::InvalidFields`].
pub trait NativeClass: Send + Sync {
    /// Identity this class round-trips under.
    fn class_id(&self) -> &ClassId;

    /// Build an instance from a decoded field mapping.
    fn construct(&self, fields: FieldMap) -> Result<Instance, CodecError>;
}

impl std::fmt::Debug for dyn NativeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NativeClass({})", self.class_id())
    }
}

/// Capability mapping (module, class name) to a constructible class.
///
/// Implementations must be internally synchronized; decode calls may run
/// concurrently on separate threads.
pub trait ClassResolver: Send + Sync {
    /// Resolve a class by module path and class name.
    ///
    /// Internal errors returned here are wrapped into `MissingClass` by the
    /// decoder, never propagated raw.
    fn resolve(&self, module: &str, name: &str) -> Result<Arc<dyn NativeClass>, BoxError>;
}

#[derive(Debug, Error)]
#[error("class {0} is not registered")]
struct Unregistered(String);

/// Name-to-class registry populated at startup.
#[derive(Default)]
pub struct TypeRegistry {
    classes: HashMap<String, Arc<dyn NativeClass>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class; replaces any previous entry with the same identity.
    pub fn register(&mut self, class: Arc<dyn NativeClass>) {
        let key = class.class_id().to_string();
        debug!(class = %key, "registering class");
        self.classes.insert(key, class);
    }

    /// Register a closure-backed class.
    pub fn register_fn<F>(&mut self, class_id: ClassId, construct: F)
    where
        F: Fn(FieldMap) -> Result<Instance, CodecError> + Send + Sync + 'static,
    {
        self.register(Arc::new(FnClass {
            class_id,
            construct: Box::new(construct),
        }));
    }

    /// Register a class that accepts any field mapping verbatim.
    pub fn register_plain(&mut self, class_id: ClassId) {
        let id = class_id.clone();
        self.register_fn(class_id, move |fields| Ok(Instance::new(id.clone(), fields)));
    }

    /// Check whether a class identity is registered.
    pub fn contains(&self, class_id: &ClassId) -> bool {
        self.classes.contains_key(&class_id.to_string())
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ClassResolver for TypeRegistry {
    fn resolve(&self, module: &str, name: &str) -> Result<Arc<dyn NativeClass>, BoxError> {
        let key = format!("{}.{}", module, name);
        match self.classes.get(&key) {
            Some(class) => {
                debug!(class = %key, "resolved class");
                Ok(Arc::clone(class))
            }
            None => Err(Box::new(Unregistered(key))),
        }
    }
}

struct FnClass {
    class_id: ClassId,
    #[allow(clippy::type_complexity)]
    construct: Box<dyn Fn(FieldMap) -> Result<Instance, CodecError> + Send + Sync>,
}

impl NativeClass for FnClass {
    fn class_id(&self) -> &ClassId {
        &self.class_id
    }

    fn construct(&self, fields: FieldMap) -> Result<Instance, CodecError> {
        (self.construct)(fields)
    }
}
