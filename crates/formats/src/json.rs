//! JSON format adapter, backed by serde_json.

use crate::codec::{Codec, CodecType};
use std::sync::Arc;
use tagwire_core::{CodecError, Result, WireValue};
use tagwire_engine::{ClassResolver, EngineOptions, ScalarHooks};

/// JSON codec.
///
/// Uses JSON's lean native scalar set: rich scalars leave as strings on
/// encode and come back as strings on decode (the default `try_parse`).
pub struct JsonCodec {
    resolver: Arc<dyn ClassResolver>,
    options: EngineOptions,
}

impl JsonCodec {
    /// Create a JSON codec over the given resolver.
    pub fn new(resolver: Arc<dyn ClassResolver>) -> Self {
        Self {
            resolver,
            options: EngineOptions::default(),
        }
    }

    /// Create a JSON codec with custom traversal limits.
    pub fn with_options(resolver: Arc<dyn ClassResolver>, options: EngineOptions) -> Self {
        Self { resolver, options }
    }
}

impl ScalarHooks for JsonCodec {}

impl Codec for JsonCodec {
    fn codec_type(&self) -> CodecType {
        CodecType::Json
    }

    fn resolver(&self) -> &dyn ClassResolver {
        &*self.resolver
    }

    fn options(&self) -> EngineOptions {
        self.options
    }

    fn render(&self, wire: &WireValue) -> Result<String> {
        serde_json::to_string_pretty(wire).map_err(|e| CodecError::Render(e.to_string()))
    }

    fn parse(&self, text: &str) -> Result<WireValue> {
        serde_json::from_str(text).map_err(|e| CodecError::Parse(e.to_string()))
    }
}
