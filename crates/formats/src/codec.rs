//! The codec contract shared by all format adapters.
//!
//! `Codec` is a trait with default methods carrying the whole pipeline:
//! adapters supply format metadata and the text backend (`render`/`parse`)
//! and may override the scalar hooks; they contain no traversal logic of
//! their own.

use std::fmt;
use std::fs;
use std::path::Path;
use tagwire_core::{Native, Result, WireValue};
use tagwire_engine::{ClassResolver, EngineOptions, ScalarHooks};

/// Identifies a supported text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecType {
    /// JSON text format
    Json,
    /// YAML text format
    Yaml,
}

impl CodecType {
    /// Canonical file extension for this format, including the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            CodecType::Json => ".json",
            CodecType::Yaml => ".yaml",
        }
    }

    /// Format identifier as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CodecType::Json => "json",
            CodecType::Yaml => "yaml",
        }
    }
}

impl fmt::Display for CodecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stateless format adapter binding the engine to a text syntax.
///
/// Each call is a one-shot pure transformation; codecs hold no mutable
/// state and may be shared across threads.
pub trait Codec: ScalarHooks + Send + Sync {
    /// The format this codec implements.
    fn codec_type(&self) -> CodecType;

    /// File extension for files this codec produces, including the dot.
    fn extension(&self) -> &'static str {
        self.codec_type().extension()
    }

    /// The class resolver used by decode.
    fn resolver(&self) -> &dyn ClassResolver;

    /// Traversal limits for this codec.
    fn options(&self) -> EngineOptions {
        EngineOptions::default()
    }

    /// Render a wire value to text (the external text backend).
    fn render(&self, wire: &WireValue) -> Result<String>;

    /// Parse text into a wire value (the external text backend).
    fn parse(&self, text: &str) -> Result<WireValue>;

    /// Encode a native value into the wire shape.
    fn encode(&self, value: &Native) -> Result<WireValue> {
        tagwire_engine::encode(value, &self.options(), self)
    }

    /// Decode a wire value back into a native value.
    fn decode(&self, wire: &WireValue) -> Result<Native> {
        tagwire_engine::decode(wire, self.resolver(), &self.options(), self)
    }

    /// Encode a native value all the way to text.
    fn to_str(&self, value: &Native) -> Result<String> {
        self.render(&self.encode(value)?)
    }

    /// Parse text all the way back to a native value.
    fn from_str(&self, text: &str) -> Result<Native> {
        self.decode(&self.parse(text)?)
    }

    /// Write a native value to a file.
    fn to_file(&self, value: &Native, path: &Path) -> Result<()> {
        let text = self.to_str(value)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Read a native value from a file.
    fn from_file(&self, path: &Path) -> Result<Native> {
        let text = fs::read_to_string(path)?;
        self.from_str(&text)
    }
}
