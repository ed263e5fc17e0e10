//! # tosrc
//!
//! Serialize runtime values into JavaScript source text that evaluates back
//! to an equivalent value.
//!
//! ## Feature Flags
//!
//! - `minimal` - Value model only
//! - `full` (default) - Value model and serializer
//! - `serializer` - The serializer ([`serializer`])
//!
//! ## Quick Example
//!
//! ```rust
//! use tosrc::prelude::*;
//!
//! let value = Value::from(vec![Value::from(1), Value::from(2), Value::from("3")]);
//! assert_eq!(value.to_source(), r#"[1, 2, "3"]"#);
//!
//! let nested = Value::from(vec![Value::from(vec![1])]);
//! assert_eq!(nested.to_source(), "[undefined]");
//! assert_eq!(nested.to_source_with_depth(2), "[[1]]");
//! ```
//!
//! ## Crates
//!
//! - `tosrc-value`: the value model ([`Value`], [`ArrayRef`], [`ObjectRef`] and friends)
//! - `tosrc-serializer`: [`Serializer`], its configuration and diagnostics

#[cfg(feature = "serializer")]
pub mod serializer;
pub mod value;

pub use tosrc_value::{
	ArrayRef, Callable, ContainerId, Instant, Kind, ObjectRef, Pattern, PatternFlags, Value,
	ValueError,
};

#[cfg(feature = "serializer")]
pub use tosrc_serializer::{
	CircularReference, ConfigError, CycleDetection, DiagnosticSink, ExhaustedContainer,
	MemorySink, NegativeDepthPolicy, NullSink, Rendered, SerializeError, Serializer,
	SerializerConfig, ToSource, TracingSink, to_source, to_source_with_depth,
};

/// Prelude module for convenient imports
///
/// ```rust
/// use tosrc::prelude::*;
///
/// let object = ObjectRef::from_entries([("a", Value::from(true))]);
/// assert_eq!(Value::Object(object).to_source(), r#"{"a": true}"#);
/// ```
pub mod prelude {
	pub use crate::{ArrayRef, Callable, Instant, ObjectRef, Pattern, Value};

	#[cfg(feature = "serializer")]
	pub use crate::{Serializer, SerializerConfig, ToSource, to_source, to_source_with_depth};
}
