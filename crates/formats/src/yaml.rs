//! YAML format adapter, backed by serde_yaml.

use crate::codec::{Codec, CodecType};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tagwire_core::{CodecError, Native, Result, WireValue};
use tagwire_engine::{ClassResolver, EngineOptions, ScalarHooks};

/// YAML codec.
///
/// YAML has a richer native scalar convention than JSON, so this codec
/// overrides `try_parse` to restore RFC 3339 strings to
/// [`Native::Timestamp`] on decode.
pub struct YamlCodec {
    resolver: Arc<dyn ClassResolver>,
    options: EngineOptions,
}

impl YamlCodec {
    /// Create a YAML codec over the given resolver.
    pub fn new(resolver: Arc<dyn ClassResolver>) -> Self {
        Self {
            resolver,
            options: EngineOptions::default(),
        }
    }

    /// Create a YAML codec with custom traversal limits.
    pub fn with_options(resolver: Arc<dyn ClassResolver>, options: EngineOptions) -> Self {
        Self { resolver, options }
    }
}

impl ScalarHooks for YamlCodec {
    fn try_parse(&self, text: &str) -> Native {
        match DateTime::parse_from_rfc3339(text) {
            Ok(ts) => Native::Timestamp(ts.with_timezone(&Utc)),
            Err(_) => Native::Str(text.to_owned()),
        }
    }
}

impl Codec for YamlCodec {
    fn codec_type(&self) -> CodecType {
        CodecType::Yaml
    }

    fn resolver(&self) -> &dyn ClassResolver {
        &*self.resolver
    }

    fn options(&self) -> EngineOptions {
        self.options
    }

    fn render(&self, wire: &WireValue) -> Result<String> {
        serde_yaml::to_string(wire).map_err(|e| CodecError::Render(e.to_string()))
    }

    fn parse(&self, text: &str) -> Result<WireValue> {
        serde_yaml::from_str(text).map_err(|e| CodecError::Parse(e.to_string()))
    }
}
