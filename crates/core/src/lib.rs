//! Core types for tagwire.
//!
//! This crate defines the two value models the codec moves between, the
//! class-marker grammar that lets custom instances survive the trip, and
//! the error taxonomy shared by every crate in the workspace.
//!
//! - [`WireValue`] - the restricted shape rendered to JSON or YAML text
//! - [`Native`] - the in-memory object-graph shape, including
//!   [`Instance`] values for custom classes
//! - [`tag`] - the `<module.ClassName>` marker key grammar
//! - [`CodecError`] - all failure modes, fatal per call
//!
//! ## Marker Wire Syntax
//!
//! A custom instance encodes as a single-entry mapping keyed by its class
//! tag:
//!
//! ```text
//! {"<geo.Point>": {"x": 1, "y": 2}}
//! ```
//!
//! The entire angle-bracket key namespace is reserved for markers; literal
//! mapping keys of that shape are rejected on both encode and decode.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod native;
pub mod tag;
mod value;

pub use error::{CodecError, Result};
pub use native::{BoxError, ClassId, FieldMap, Instance, MapKey, Native, Reflect};
pub use value::WireValue;
