//! The tagwire codec engine.
//!
//! This crate holds the algorithmic heart of tagwire: the recursive
//! encode/decode traversal between [`Native`](tagwire_core::Native) and
//! [`WireValue`](tagwire_core::WireValue), class-tag round-tripping, and
//! the class-resolution capability.
//!
//! The traversal is fully synchronous, stateless, and re-entrant: encode
//! and decode calls may run concurrently on separate threads with no
//! coordination. Nesting is bounded by a configurable depth limit rather
//! than the call stack.
//!
//! Format adapters customize behavior only through [`ScalarHooks`]; all
//! traversal logic lives here.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod decode;
mod encode;
mod hooks;
mod options;
mod resolver;

pub use decode::decode;
pub use encode::encode;
pub use hooks::{DefaultHooks, ScalarHooks};
pub use options::{EngineOptions, DEFAULT_MAX_DEPTH};
pub use resolver::{ClassResolver, NativeClass, TypeRegistry};
