//! Format adapters binding the tagwire engine to concrete text syntaxes.
//!
//! Both adapters delegate traversal to `tagwire-engine` and final text
//! transcoding to an external backend (serde_json, serde_yaml). They
//! differ only in that transcoding step and in their scalar hook
//! overrides; see [`Codec`] for the shared pipeline.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod codec;
mod json;
mod yaml;

pub use codec::{Codec, CodecType};
pub use json::JsonCodec;
pub use yaml::YamlCodec;
