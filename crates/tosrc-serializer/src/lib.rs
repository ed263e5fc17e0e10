//! # tosrc-serializer
//!
//! Turns a [`Value`] into JavaScript source text that evaluates back to an
//! equivalent value.
//!
//! Nesting is bounded by a depth budget: every descent into an array or an
//! object costs one unit, and containers met with no budget left are written
//! as `undefined`. The default budget is 1, so the members of the top-level
//! container are written but nested containers are not.
//!
//! ## Quick Start
//!
//! ```rust
//! use tosrc_serializer::{to_source, to_source_with_depth};
//! use tosrc_value::{ObjectRef, Value};
//!
//! let inner = ObjectRef::from_entries([("b", Value::from(1))]);
//! let outer = ObjectRef::from_entries([("a", Value::Object(inner))]);
//! let value = Value::Object(outer);
//!
//! assert_eq!(to_source(&value), r#"{"a": undefined}"#);
//! assert_eq!(to_source_with_depth(&value, 2), r#"{"a": {"b": 1}}"#);
//! ```
//!
//! ## Circular references
//!
//! A container reached again while it is being written is replaced by
//! `undefined` and reported to the [`DiagnosticSink`]. The rest of the
//! output is unaffected.
//!
//! ```rust
//! use std::sync::Arc;
//! use tosrc_serializer::{MemorySink, Serializer};
//! use tosrc_value::{ObjectRef, Value};
//!
//! let x = ObjectRef::new();
//! x.insert("self", Value::Object(x.clone()));
//!
//! let sink = Arc::new(MemorySink::new());
//! let serializer = Serializer::new().with_sink(sink.clone());
//!
//! assert_eq!(serializer.render_with_depth(&Value::Object(x), 3), r#"{"self": undefined}"#);
//! assert_eq!(sink.len(), 1);
//! ```
//!
//! ## Architecture
//!
//! - [`serializer`]: [`Serializer`] and the per-call traversal
//! - [`literal`]: literal formatting for numbers, strings, dates and functions
//! - [`writer`]: [`SourceWriter`] output buffer
//! - [`config`]: [`SerializerConfig`] and its policies
//! - [`sink`]: diagnostics ([`DiagnosticSink`], [`TracingSink`], [`MemorySink`])
//! - [`error`]: error types

pub mod config;
pub mod error;
pub mod literal;
pub mod serializer;
pub mod sink;
pub mod writer;

pub use config::{CycleDetection, ExhaustedContainer, NegativeDepthPolicy, SerializerConfig};
pub use error::{ConfigError, SerializeError};
pub use serializer::{CircularReference, Rendered, Serializer, ToSource, to_source, to_source_with_depth};
pub use sink::{Diagnostic, DiagnosticSink, MemorySink, NullSink, TracingSink};
pub use writer::SourceWriter;

pub use tosrc_value::Value;
